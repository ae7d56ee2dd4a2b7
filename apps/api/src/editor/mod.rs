// Editor controller: explicit content updates, the per-request editing
// session, and the in-flight guard for AI actions.

pub mod guard;
pub mod handlers;
pub mod session;
pub mod update;
