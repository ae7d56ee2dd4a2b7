// Heuristics engine: progress scoring and content warnings.
// Pure functions over `ResumeContent`; no I/O.

pub mod handlers;
pub mod progress;
pub mod warnings;
