//! Saved session management: load, save (atomic), clear.

use super::catalog::Equipment;
use super::error::{LiftError, Result};
use super::types::{EquipmentSet, Plan, SavedSession, TrainingContext};
use std::path::{Path, PathBuf};

/// Derive the session file path within the state directory.
pub fn session_file_path(state_dir: &Path) -> PathBuf {
    state_dir.join("session.json")
}

/// Load the saved session. Returns None if nothing was saved.
pub fn load_session(state_dir: &Path) -> Result<Option<SavedSession>> {
    let path = session_file_path(state_dir);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read(&path).map_err(|e| LiftError::io(&path, e))?;
    let session: SavedSession = serde_json::from_slice(&content)?;
    Ok(Some(session))
}

/// Save a session atomically (write to temp, then rename).
pub fn save_session(state_dir: &Path, session: &SavedSession) -> Result<PathBuf> {
    std::fs::create_dir_all(state_dir).map_err(|e| LiftError::io(state_dir, e))?;
    let path = session_file_path(state_dir);
    let json = serde_json::to_vec_pretty(session)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(|e| LiftError::io(&tmp_path, e))?;
    std::fs::rename(&tmp_path, &path).map_err(|e| LiftError::io(&path, e))?;

    tracing::debug!(path = %path.display(), workouts = session.workouts.len(), "saved session");
    Ok(path)
}

/// Remove the saved session, if any.
pub fn clear_session(state_dir: &Path) -> Result<()> {
    let path = session_file_path(state_dir);
    match std::fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LiftError::io(&path, e)),
    }
}

/// Snapshot a plan and the inputs that produced it, stamped now.
pub fn new_session(plan: &Plan, context: TrainingContext, equipment: &EquipmentSet) -> SavedSession {
    SavedSession {
        saved_at: chrono::Utc::now(),
        goal: plan.goal,
        context,
        equipments: equipment.iter().copied().collect::<Vec<Equipment>>(),
        workouts: plan.workouts.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates;
    use crate::core::types::Goal;

    fn make_session() -> SavedSession {
        let gym: EquipmentSet = [Equipment::Dumbbells, Equipment::BenchIncline]
            .into_iter()
            .collect();
        let plan = templates::generate(Goal::Hypertrophy, TrainingContext::Home, &gym);
        new_session(&plan, TrainingContext::Home, &gym)
    }

    #[test]
    fn test_session_file_path() {
        let p = session_file_path(Path::new("/state"));
        assert_eq!(p, PathBuf::from("/state/session.json"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let session = make_session();
        save_session(dir.path(), &session).unwrap();

        let loaded = load_session(dir.path()).unwrap().unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.plan().workouts.len(), 4);
        assert_eq!(loaded.equipments, vec![Equipment::Dumbbells, Equipment::BenchIncline]);
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_session(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(session_file_path(dir.path()), "{not json").unwrap();
        assert!(matches!(load_session(dir.path()), Err(LiftError::Json(_))));
    }

    #[test]
    fn test_atomic_write_cleans_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_session(dir.path(), &make_session()).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("session.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        save_session(&nested, &make_session()).unwrap();
        assert!(session_file_path(&nested).exists());
    }

    #[test]
    fn test_clear_session() {
        let dir = tempfile::tempdir().unwrap();
        save_session(dir.path(), &make_session()).unwrap();
        clear_session(dir.path()).unwrap();
        assert!(load_session(dir.path()).unwrap().is_none());
        clear_session(dir.path()).unwrap();
    }

    #[test]
    fn test_session_json_keys() {
        let json = serde_json::to_string(&make_session()).unwrap();
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains("\"context\":\"home\""));
        assert!(json.contains("\"goal\":\"hypertrophy\""));
    }
}
