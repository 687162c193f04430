//! Service Integration Tests
//!
//! Auth, dream and theme flows against in-memory storage.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::{keys, StorageMode, ValidationConfig};
    use crate::domain::Field;
    use crate::messages;
    use crate::repository::{KeyValueStore, MemoryStore, StorageService};
    use crate::service::seed::{self, DEFAULT_THEMES, FALLBACK_THEME, SAMPLE_DREAMS};
    use crate::service::{AuthService, DreamService, ThemeService};

    struct Services {
        auth: AuthService,
        dreams: DreamService,
        themes: ThemeService,
    }

    fn setup_services(storage: StorageService) -> Services {
        let config = ValidationConfig::default();
        Services {
            auth: AuthService::new(storage.clone(), config),
            dreams: DreamService::new(storage.clone(), config),
            themes: ThemeService::new(storage, config),
        }
    }

    fn setup_with_defaults() -> Services {
        let services = setup_services(StorageService::in_memory(StorageMode::Session));
        services.themes.save_default_themes().expect("Failed to save themes");
        services
    }

    // ========================
    // Dreams
    // ========================

    #[test]
    fn test_first_dream_gets_id_one_and_unknown_theme_fails() {
        let s = setup_with_defaults();

        let dream = s.dreams.create_dream("Learn Rust", "teknikdrömmar", false).unwrap();
        assert_eq!(dream.id, 1);
        assert_eq!(dream.theme, "teknikdrömmar");

        let errors = s.dreams.create_dream("Learn Go", "doesnotexist", false).unwrap_err();
        assert_eq!(errors.error(Field::Theme), Some(messages::THEME_NOT_FOUND));
        assert_eq!(s.dreams.load_dreams().len(), 1);
    }

    #[test]
    fn test_duplicate_dream_name_rejected() {
        let s = setup_with_defaults();
        s.dreams.create_dream("Learn Rust", "teknikdrömmar", false).unwrap();

        let errors = s.dreams.create_dream("learn RUST", "resdrömmar", false).unwrap_err();
        assert_eq!(errors.error(Field::Dream), Some(messages::DREAM_EXISTS));
        assert!(s.dreams.dream_exists("LEARN rust"));
    }

    #[test]
    fn test_ids_stay_unique_and_above_existing_after_deletes() {
        let s = setup_with_defaults();
        for name in ["a1", "a2", "a3", "a4"] {
            s.dreams.create_dream(name, "husdrömmar", false).unwrap();
        }
        s.dreams.delete_dream(2).unwrap();
        s.dreams.delete_dream(1).unwrap();

        let next = s.dreams.create_dream("a5", "husdrömmar", false).unwrap();
        assert_eq!(next.id, 5);

        let ids: Vec<u64> = s.dreams.load_dreams().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_list_untouched() {
        let s = setup_with_defaults();
        s.dreams.create_dream("Learn Rust", "teknikdrömmar", false).unwrap();
        let before = s.dreams.load_dreams();

        let err = s.dreams.delete_dream(42).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(s.dreams.load_dreams(), before);
    }

    #[test]
    fn test_toggle_checked() {
        let s = setup_with_defaults();
        let dream = s.dreams.create_dream("Learn Rust", "teknikdrömmar", false).unwrap();

        let updated = s.dreams.update_dream_checked(dream.id, true).unwrap();
        assert!(updated.is_checked);
        assert!(s.dreams.load_dreams()[0].is_checked);

        assert!(s.dreams.update_dream_checked(99, true).unwrap_err().is_not_found());
    }

    #[test]
    fn test_dream_save_failure_is_reported_generically() {
        let storage = StorageService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::with_quota(200)),
            StorageMode::Session,
        );
        let s = setup_services(storage);
        s.themes.create_theme("lång").unwrap();

        let long_name = "x".repeat(50);
        let mut failure = None;
        for i in 0..10 {
            let name = format!("{}{}", i, &long_name[1..]);
            if let Err(errors) = s.dreams.create_dream(&name, "lång", false) {
                failure = Some(errors);
                break;
            }
        }

        let errors = failure.expect("quota should eventually be exceeded");
        assert_eq!(errors.error(Field::General), Some(messages::DREAM_SAVE_FAILED));
    }

    fn setup_with_stored_dreams(raw: &str) -> (Services, Arc<MemoryStore>) {
        let session = Arc::new(MemoryStore::new());
        let storage = StorageService::new(
            Arc::new(MemoryStore::new()),
            session.clone(),
            StorageMode::Session,
        );
        let s = setup_services(storage);
        s.themes.save_default_themes().expect("Failed to save themes");
        session.set_item(keys::DREAM_LIST, raw).unwrap();
        (s, session)
    }

    #[test]
    fn test_large_stored_ids_load_and_continue() {
        let raw = r#"[{"id":1712345678901,"name":"Japan","theme":"resdrömmar","isChecked":false}]"#;
        let (s, session) = setup_with_stored_dreams(raw);

        assert_eq!(s.dreams.load_dreams().len(), 1);
        assert!(session.get_item(keys::DREAM_LIST).unwrap().is_some());

        let dream = s.dreams.create_dream("Island", "resdrömmar", false).unwrap();
        assert_eq!(dream.id, 1_712_345_678_902);
    }

    #[test]
    fn test_exhausted_ids_report_save_failure() {
        let raw = format!(
            r#"[{{"id":{},"name":"Japan","theme":"resdrömmar","isChecked":false}}]"#,
            u64::MAX
        );
        let (s, session) = setup_with_stored_dreams(&raw);

        let errors = s.dreams.create_dream("Island", "resdrömmar", false).unwrap_err();
        assert_eq!(errors.error(Field::General), Some(messages::DREAM_SAVE_FAILED));
        assert_eq!(session.get_item(keys::DREAM_LIST).unwrap(), Some(raw));
    }

    // ========================
    // Themes
    // ========================

    #[test]
    fn test_default_themes_saved() {
        let s = setup_with_defaults();
        assert_eq!(s.themes.load_themes(), DEFAULT_THEMES.to_vec());
    }

    #[test]
    fn test_fallback_theme_when_defaults_do_not_fit() {
        let storage = StorageService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::with_quota(30)),
            StorageMode::Session,
        );
        let s = setup_services(storage);

        s.themes.save_default_themes().unwrap();
        assert_eq!(s.themes.load_themes(), vec![FALLBACK_THEME.to_string()]);
    }

    #[test]
    fn test_duplicate_theme_rejected() {
        let s = setup_with_defaults();
        let errors = s.themes.create_theme("TeknikDrömmar").unwrap_err();
        assert_eq!(errors.error(Field::Theme), Some(messages::THEME_EXISTS));

        assert_eq!(s.themes.create_theme("Filmdrömmar"), Ok("Filmdrömmar".to_string()));
        assert!(s.themes.theme_exists("filmdrömmar"));
    }

    #[test]
    fn test_delete_theme_keeps_referencing_dreams() {
        let s = setup_with_defaults();
        s.dreams.create_dream("Surfa", "sportdrömmar", false).unwrap();

        s.themes.delete_theme("sportdrömmar").unwrap();
        assert!(!s.themes.theme_exists("sportdrömmar"));
        assert_eq!(s.dreams.load_dreams()[0].theme, "sportdrömmar");
        assert_eq!(s.themes.dreams_with_theme("sportdrömmar"), 1);

        assert!(s.themes.delete_theme("sportdrömmar").unwrap_err().is_not_found());
    }

    // ========================
    // Auth
    // ========================

    #[test]
    fn test_create_new_user_saves_username() {
        let s = setup_services(StorageService::in_memory(StorageMode::Session));
        assert!(!s.auth.is_logged_in());

        assert_eq!(s.auth.create_new_user("anna", "hemlig1"), Ok("anna".to_string()));
        assert_eq!(s.auth.load_username(), Some("anna".to_string()));
    }

    #[test]
    fn test_invalid_password_rolls_back_username() {
        let s = setup_services(StorageService::in_memory(StorageMode::Session));

        let errors = s.auth.create_new_user("anna", "kort").unwrap_err();
        assert!(errors.has_error(Field::Password));
        assert!(!errors.has_error(Field::Username));
        assert!(!s.auth.is_logged_in());
    }

    #[test]
    fn test_invalid_username_and_password_merge() {
        let s = setup_services(StorageService::in_memory(StorageMode::Session));

        let errors = s.auth.create_new_user("anna b", "").unwrap_err();
        assert_eq!(errors.error(Field::Username), Some(messages::CONTAINS_SPACES));
        assert_eq!(errors.suggestion(Field::Username), Some("anna_b"));
        assert_eq!(errors.error(Field::Password), Some("Input cannot be empty"));
    }

    #[test]
    fn test_update_username() {
        let s = setup_services(StorageService::in_memory(StorageMode::Session));
        s.auth.create_new_user("anna", "hemlig1").unwrap();

        assert_eq!(s.auth.update_username("bertil"), Ok("bertil".to_string()));
        assert_eq!(s.auth.load_username(), Some("bertil".to_string()));

        assert!(s.auth.update_username("").is_err());
        assert_eq!(s.auth.load_username(), Some("bertil".to_string()));
    }

    #[test]
    fn test_log_out_clears_everything() {
        let local = Arc::new(MemoryStore::new());
        let session = Arc::new(MemoryStore::new());
        let storage = StorageService::new(local.clone(), session.clone(), StorageMode::Local);
        storage.save_mode_preference().unwrap();
        let s = setup_services(storage);
        s.auth.create_new_user("anna", "hemlig1").unwrap();

        s.auth.log_out().unwrap();
        assert!(!s.auth.is_logged_in());
        assert_eq!(local.get_item(keys::USE_LOCAL_STORAGE).unwrap(), None);
    }

    // ========================
    // Seed
    // ========================

    #[test]
    fn test_reset_user_data_replaces_dreams_with_samples() {
        let s = setup_with_defaults();
        s.dreams.create_dream("Gammal dröm", "husdrömmar", false).unwrap();

        seed::reset_user_data(&s.themes, &s.dreams);

        let dreams = s.dreams.load_dreams();
        assert_eq!(dreams.len(), SAMPLE_DREAMS.len());
        assert_eq!(dreams[0].id, 1);
        assert!(dreams[0].is_checked);
        assert_eq!(s.themes.load_themes().len(), DEFAULT_THEMES.len());
    }
}
