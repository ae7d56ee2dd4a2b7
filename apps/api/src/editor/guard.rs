//! In-flight AI action tracking. A second request for the same
//! (resume, action) pair is rejected while the first is still running.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::warn;
use uuid::Uuid;

use crate::enhance::request::EnhanceKind;
use crate::errors::AppError;

type ActionKey = (Uuid, EnhanceKind);

#[derive(Clone, Default)]
pub struct ActionGuard {
    in_flight: Arc<Mutex<HashSet<ActionKey>>>,
}

/// Held for the duration of one action; releases its key on drop.
pub struct ActionPermit {
    key: ActionKey,
    in_flight: Arc<Mutex<HashSet<ActionKey>>>,
}

impl ActionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, resume_id: Uuid, kind: EnhanceKind) -> Result<ActionPermit, AppError> {
        let key = (resume_id, kind);
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert(key) {
            warn!("Rejected duplicate {} for resume {}", kind.as_str(), resume_id);
            return Err(AppError::Conflict(format!(
                "{} is already running for this resume",
                kind.as_str()
            )));
        }
        Ok(ActionPermit {
            key,
            in_flight: Arc::clone(&self.in_flight),
        })
    }
}

impl Drop for ActionPermit {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_action_conflicts_until_released() {
        let guard = ActionGuard::new();
        let id = Uuid::new_v4();
        let permit = guard.begin(id, EnhanceKind::GenerateSummary).unwrap();
        assert!(matches!(
            guard.begin(id, EnhanceKind::GenerateSummary),
            Err(AppError::Conflict(_))
        ));
        drop(permit);
        assert!(guard.begin(id, EnhanceKind::GenerateSummary).is_ok());
    }

    #[test]
    fn test_different_actions_and_resumes_are_independent() {
        let guard = ActionGuard::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let _summary = guard.begin(a, EnhanceKind::GenerateSummary).unwrap();
        assert!(guard.begin(a, EnhanceKind::SuggestSkills).is_ok());
        assert!(guard.begin(b, EnhanceKind::GenerateSummary).is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let guard = ActionGuard::new();
        let id = Uuid::new_v4();
        let _permit = guard.clone().begin(id, EnhanceKind::AnalyzeResume).unwrap();
        assert!(matches!(
            guard.begin(id, EnhanceKind::AnalyzeResume),
            Err(AppError::Conflict(_))
        ));
    }
}
