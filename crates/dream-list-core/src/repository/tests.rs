//! Repository Integration Tests
//!
//! Tests for StorageService and StorageSlot with in-memory backends.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::{keys, StorageMode};
    use crate::domain::{Dream, StorageError};
    use crate::repository::{KeyValueStore, MemoryStore, StorageService};

    fn setup_backends() -> (Arc<MemoryStore>, Arc<MemoryStore>) {
        (Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    fn service(local: &Arc<MemoryStore>, session: &Arc<MemoryStore>, mode: StorageMode) -> StorageService {
        StorageService::new(local.clone(), session.clone(), mode)
    }

    #[test]
    fn test_save_and_load_dreams() {
        let storage = StorageService::in_memory(StorageMode::Session);
        let dreams = vec![Dream::new(1, "Learn Rust".to_string(), "teknikdrömmar".to_string())];

        storage.dreams().save(&dreams).expect("Failed to save");
        assert_eq!(storage.dreams().load(), Some(dreams));
    }

    #[test]
    fn test_absent_key_loads_none() {
        let storage = StorageService::in_memory(StorageMode::Session);
        assert_eq!(storage.username().load(), None);
        assert_eq!(storage.themes().load(), None);
    }

    #[test]
    fn test_values_stored_as_json() {
        let (local, session) = setup_backends();
        let storage = service(&local, &session, StorageMode::Session);

        storage.username().save(&"anna".to_string()).unwrap();
        assert_eq!(session.get_item(keys::USERNAME).unwrap(), Some("\"anna\"".to_string()));
    }

    #[test]
    fn test_corrupted_entry_is_removed() {
        let (local, session) = setup_backends();
        let storage = service(&local, &session, StorageMode::Session);
        session.set_item(keys::DREAM_LIST, "{not json").unwrap();

        assert_eq!(storage.dreams().load(), None);
        assert_eq!(session.get_item(keys::DREAM_LIST).unwrap(), None);
    }

    #[test]
    fn test_mode_selects_backend() {
        let (local, session) = setup_backends();

        service(&local, &session, StorageMode::Local)
            .username()
            .save(&"remembered".to_string())
            .unwrap();
        service(&local, &session, StorageMode::Session)
            .username()
            .save(&"temporary".to_string())
            .unwrap();

        assert_eq!(local.get_item(keys::USERNAME).unwrap(), Some("\"remembered\"".to_string()));
        assert_eq!(session.get_item(keys::USERNAME).unwrap(), Some("\"temporary\"".to_string()));
    }

    #[test]
    fn test_mode_preference_round_trip() {
        let (local, session) = setup_backends();
        assert_eq!(
            StorageService::from_preference(local.clone(), session.clone()).mode(),
            StorageMode::Session
        );

        service(&local, &session, StorageMode::Session)
            .with_mode(StorageMode::Local)
            .save_mode_preference()
            .unwrap();

        assert_eq!(
            StorageService::from_preference(local.clone(), session.clone()).mode(),
            StorageMode::Local
        );
        assert_eq!(session.get_item(keys::USE_LOCAL_STORAGE).unwrap(), None);
    }

    #[test]
    fn test_quota_exceeded_keeps_previous_value() {
        let local = Arc::new(MemoryStore::new());
        let session = Arc::new(MemoryStore::with_quota(64));
        let storage = StorageService::new(local, session, StorageMode::Session);

        let small = vec!["dröm".to_string()];
        storage.themes().save(&small).unwrap();

        let large: Vec<String> = (0..20).map(|i| format!("tema nummer {}", i)).collect();
        assert!(storage.themes().save(&large).is_err());
        assert_eq!(storage.themes().load(), Some(small));
    }

    #[test]
    fn test_failed_save_returns_backend_error_to_caller() {
        let storage = StorageService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::with_quota(8)),
            StorageMode::Session,
        );

        let err = storage.username().save(&"a long user name".to_string()).unwrap_err();
        match err {
            StorageError::QuotaExceeded { key } => assert_eq!(key, keys::USERNAME),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_clear_all_wipes_both_backends() {
        let (local, session) = setup_backends();
        let storage = service(&local, &session, StorageMode::Local);
        storage.save_mode_preference().unwrap();
        storage.username().save(&"anna".to_string()).unwrap();
        session.set_item("other", "1").unwrap();

        storage.clear_all().unwrap();
        assert!(local.is_empty());
        assert!(session.is_empty());
    }
}
