#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use shiftbook::db::memory::MemoryStore;
    use shiftbook::db::records::SqliteStore;
    use shiftbook::db::store::{RecordStore, EMPLOYEES_KEY, SHIFTS_KEY};
    use shiftbook::libs::employee::{Employee, EmployeeStatus};
    use shiftbook::libs::error::TrackerError;
    use shiftbook::libs::shift::Shift;
    use shiftbook::libs::time::parse_clock_time;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            StoreTestContext { temp_dir }
        }
    }

    impl StoreTestContext {
        fn sqlite(&self) -> SqliteStore {
            SqliteStore::open(self.temp_dir.path().join("records.db")).unwrap()
        }
    }

    fn employee(id: &str, first_name: &str) -> Employee {
        Employee {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            role: "Cashier".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            phone: None,
            status: EmployeeStatus::Active,
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 8, 30, 0).unwrap(),
        }
    }

    fn shift(id: &str, employee_id: &str, break_hours: f64) -> Shift {
        Shift {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            start_time: parse_clock_time("09:00").unwrap(),
            end_time: parse_clock_time("17:30").unwrap(),
            break_hours,
            notes: Some("Opening".to_string()),
        }
    }

    fn assert_round_trip<S: RecordStore>(store: &mut S) {
        let employees = vec![employee("1", "Jane"), employee("2", "John")];
        let shifts = vec![shift("10", "1", 0.5), shift("11", "2", 0.0)];

        store.save_employees(&employees).unwrap();
        store.save_shifts(&shifts).unwrap();

        assert_eq!(store.load_employees().unwrap(), employees);
        assert_eq!(store.load_shifts().unwrap(), shifts);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_round_trip(&mut store);
        assert_eq!(store.len(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_sqlite_store_round_trip(ctx: &mut StoreTestContext) {
        let mut store = ctx.sqlite();
        assert_round_trip(&mut store);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_sqlite_store_persists_across_reopen(ctx: &mut StoreTestContext) {
        {
            let mut store = ctx.sqlite();
            store.save_employees(&[employee("1", "Jane")]).unwrap();
        }

        let reopened = ctx.sqlite();
        let employees = reopened.load_employees().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].first_name, "Jane");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_fresh_store_loads_empty_collections(ctx: &mut StoreTestContext) {
        let store = ctx.sqlite();
        assert!(store.load_employees().unwrap().is_empty());
        assert!(store.load_shifts().unwrap().is_empty());

        let memory = MemoryStore::new();
        assert!(memory.load_employees().unwrap().is_empty());
        assert!(memory.load_shifts().unwrap().is_empty());
    }

    #[test]
    fn test_empty_value_loads_as_empty_collection() {
        let mut store = MemoryStore::new();
        store.set(EMPLOYEES_KEY, "").unwrap();
        store.set(SHIFTS_KEY, "   ").unwrap();

        assert!(store.load_employees().unwrap().is_empty());
        assert!(store.load_shifts().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_replaces_whole_collection(ctx: &mut StoreTestContext) {
        let mut store = ctx.sqlite();
        store.save_employees(&[employee("1", "Jane"), employee("2", "John")]).unwrap();
        store.save_employees(&[employee("3", "Mary")]).unwrap();

        let employees = store.load_employees().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, "3");
    }

    #[test]
    fn test_saving_what_was_loaded_is_idempotent() {
        let mut store = MemoryStore::new();
        store.save_shifts(&[shift("1", "E", 1.0), shift("2", "E", 0.0)]).unwrap();
        let raw_before = store.get(SHIFTS_KEY).unwrap();

        let loaded = store.load_shifts().unwrap();
        store.save_shifts(&loaded).unwrap();

        assert_eq!(store.get(SHIFTS_KEY).unwrap(), raw_before);
        assert_eq!(store.load_shifts().unwrap(), loaded);
    }

    #[test]
    fn test_collections_are_independent() {
        let mut store = MemoryStore::new();
        store.save_employees(&[employee("1", "Jane")]).unwrap();

        assert!(store.load_shifts().unwrap().is_empty());
        assert!(store.get(SHIFTS_KEY).unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_value_is_reported(ctx: &mut StoreTestContext) {
        let mut store = ctx.sqlite();
        store.set(SHIFTS_KEY, "{not json").unwrap();

        match store.load_shifts() {
            Err(TrackerError::Corrupt { key, .. }) => assert_eq!(key, SHIFTS_KEY),
            other => panic!("expected Corrupt, got {:?}", other),
        }
        assert!(store.load_employees().unwrap().is_empty());
    }

    #[test]
    fn test_wrong_shape_is_reported_as_corrupt() {
        let mut store = MemoryStore::new();
        store.set(EMPLOYEES_KEY, r#"{"id":"1"}"#).unwrap();

        assert!(matches!(store.load_employees(), Err(TrackerError::Corrupt { .. })));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_all_empties_both_collections(ctx: &mut StoreTestContext) {
        let mut store = ctx.sqlite();
        store.save_employees(&[employee("1", "Jane")]).unwrap();
        store.save_shifts(&[shift("1", "1", 0.0)]).unwrap();

        store.clear_all().unwrap();

        assert!(store.load_employees().unwrap().is_empty());
        assert!(store.load_shifts().unwrap().is_empty());

        let mut memory = MemoryStore::new();
        memory.save_employees(&[employee("1", "Jane")]).unwrap();
        memory.clear_all().unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_serialized_layout_uses_camel_case_and_clock_times() {
        let mut store = MemoryStore::new();
        store.save_shifts(&[shift("1", "E", 0.5)]).unwrap();

        let raw = store.get(SHIFTS_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &json[0];

        assert_eq!(first["employeeId"], "E");
        assert_eq!(first["date"], "2025-01-06");
        assert_eq!(first["startTime"], "09:00");
        assert_eq!(first["endTime"], "17:30");
        assert_eq!(first["breakHours"], 0.5);
        assert_eq!(first["notes"], "Opening");
    }

    #[test]
    fn test_legacy_records_with_missing_optional_fields_load() {
        let mut store = MemoryStore::new();
        store
            .set(
                EMPLOYEES_KEY,
                r#"[{"id":"1","firstName":"Jane","lastName":"Doe","role":"Cook","createdAt":"2024-05-01T10:00:00.000Z"}]"#,
            )
            .unwrap();
        store
            .set(
                SHIFTS_KEY,
                r#"[{"id":"2","employeeId":"1","date":"2024-05-02T00:00:00.000Z","startTime":"22:00","endTime":"06:00"}]"#,
            )
            .unwrap();

        let employees = store.load_employees().unwrap();
        assert_eq!(employees[0].email, "");
        assert_eq!(employees[0].phone, None);
        assert_eq!(employees[0].status, EmployeeStatus::Active);

        let shifts = store.load_shifts().unwrap();
        assert_eq!(shifts[0].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(shifts[0].break_hours, 0.0);
        assert_eq!(shifts[0].notes, None);
        assert_eq!(shifts[0].gross_hours(), 8.0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_break_hours_keep_full_precision(ctx: &mut StoreTestContext) {
        let mut store = ctx.sqlite();
        store.save_shifts(&[shift("1", "E", 1.0 / 3.0)]).unwrap();

        assert_eq!(store.load_shifts().unwrap()[0].break_hours, 1.0 / 3.0);
    }
}
