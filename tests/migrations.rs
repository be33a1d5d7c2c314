#[cfg(test)]
mod tests {
    use shiftbook::db::db::Db;
    use shiftbook::db::migrations::MigrationManager;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_fresh_database_is_fully_migrated() {
        let db = Db::in_memory().unwrap();
        let manager = MigrationManager::new();

        assert!(manager.latest_version() >= 1);
        assert_eq!(manager.current_version(&db.conn).unwrap(), manager.latest_version());
        assert!(!manager.needs_migration(&db.conn).unwrap());
    }

    #[test]
    fn test_records_table_exists() {
        let db = Db::in_memory().unwrap();
        let count: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'records'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_does_not_reapply_migrations(ctx: &mut MigrationTestContext) {
        let path = ctx.temp_dir.path().join("migrations.db");
        {
            let db = Db::open(&path).unwrap();
            db.conn
                .execute("INSERT INTO records (key, value) VALUES ('k', 'v')", [])
                .unwrap();
        }

        let mut db = Db::open(&path).unwrap();
        let manager = MigrationManager::new();
        assert!(!manager.needs_migration(&db.conn).unwrap());
        manager.run_migrations(&mut db.conn).unwrap();

        let applied: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, i64::from(manager.latest_version()));

        assert_eq!(manager.current_version(&db.conn).unwrap(), manager.latest_version());
        let value: String = db
            .conn
            .query_row("SELECT value FROM records WHERE key = 'k'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(value, "v");
    }
}
