#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use shiftbook::libs::config::{Config, DashboardConfig, StorageConfig, CONFIG_FILE_NAME, DEFAULT_RECENT_SHIFTS};
    use shiftbook::libs::data_storage::DataStorage;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests below repoint HOME, which is process-wide.
    static ENV_LOCK: Mutex<()> = parking_lot::const_mutex(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.storage.is_none());
        assert_eq!(config.dashboard.unwrap_or_default().recent_shifts, DEFAULT_RECENT_SHIFTS);
        assert_eq!(StorageConfig::default().db_file, "shiftbook.db");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                db_file: "team.db".to_string(),
            }),
            dashboard: Some(DashboardConfig { recent_shifts: 10 }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());
        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_sections_are_omitted(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: None,
            dashboard: Some(DashboardConfig { recent_shifts: 3 }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let raw = fs::read_to_string(path).unwrap();
        assert!(!raw.contains("storage"));
        assert!(raw.contains("recent_shifts"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, "{ not json").unwrap();

        assert!(Config::read().is_err());
    }
}
