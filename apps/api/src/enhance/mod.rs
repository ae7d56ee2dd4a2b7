// AI enhancement: typed requests, prompt construction, and best-effort
// normalization of model output. All gateway calls go through `TextGenerator`.

pub mod handlers;
pub mod json_extract;
pub mod normalize;
pub mod prompts;
pub mod request;
pub mod service;
