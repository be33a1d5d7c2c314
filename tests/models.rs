#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use shiftbook::libs::employee::{Employee, EmployeeFilter, EmployeePatch, EmployeeStatus, NewEmployee};
    use shiftbook::libs::id::next_id;
    use shiftbook::libs::shift::{NewShift, ShiftPatch};
    use shiftbook::libs::time::parse_clock_time;

    fn jane() -> Employee {
        NewEmployee::new("Jane", "Doe", "Cashier", "jane@example.com")
            .into_employee("1".to_string(), Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_full_name() {
        assert_eq!(jane().full_name(), "Jane Doe");
    }

    #[test]
    fn test_empty_patch_keeps_employee() {
        let employee = jane();
        assert!(EmployeePatch::default().is_empty());
        assert_eq!(employee.apply(&EmployeePatch::default()), employee);
    }

    #[test]
    fn test_patch_overrides_only_given_fields() {
        let mut employee = jane();
        employee.phone = Some("555-0100".to_string());

        let patch = EmployeePatch {
            last_name: Some("Roe".to_string()),
            email: Some("jane.roe@example.com".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        let updated = employee.apply(&patch);
        assert_eq!(updated.full_name(), "Jane Roe");
        assert_eq!(updated.email, "jane.roe@example.com");
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));
        assert_eq!(updated.role, employee.role);
        assert_eq!(updated.created_at, employee.created_at);
    }

    #[test]
    fn test_status_patch() {
        let updated = jane().apply(&EmployeePatch::status(EmployeeStatus::Inactive));
        assert_eq!(updated.status, EmployeeStatus::Inactive);
        assert_eq!(updated.first_name, "Jane");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(jane()).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["firstName"], "Jane");
        assert!(json.get("phone").is_none());
        assert_eq!(EmployeeStatus::Inactive.to_string(), "inactive");
    }

    #[test]
    fn test_filter_by_status_and_search() {
        let active = jane();
        let inactive = active.apply(&EmployeePatch::status(EmployeeStatus::Inactive));

        assert!(EmployeeFilter::default().matches(&active));
        assert!(EmployeeFilter::default().matches(&inactive));

        let only_active = EmployeeFilter {
            status: Some(EmployeeStatus::Active),
            search: None,
        };
        assert!(only_active.matches(&active));
        assert!(!only_active.matches(&inactive));

        let search = EmployeeFilter {
            status: None,
            search: Some("E D".to_string()),
        };
        assert!(search.matches(&active));

        let miss = EmployeeFilter {
            status: None,
            search: Some("smith".to_string()),
        };
        assert!(!miss.matches(&active));
    }

    #[test]
    fn test_filter_on_missing_owner() {
        assert!(EmployeeFilter::default().matches_owner(None));
        let empty_search = EmployeeFilter {
            status: None,
            search: Some(String::new()),
        };
        assert!(empty_search.matches_owner(None));

        let active = EmployeeFilter {
            status: Some(EmployeeStatus::Active),
            search: None,
        };
        assert!(!active.matches_owner(None));
        assert!(active.matches_owner(Some(&jane())));
    }

    #[test]
    fn test_shift_patch_apply() {
        let shift = NewShift::new(
            "1",
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            parse_clock_time("09:00").unwrap(),
            parse_clock_time("17:00").unwrap(),
        )
        .with_break(1.0)
        .into_shift("s1".to_string());
        assert_eq!(shift.gross_hours(), 8.0);
        assert_eq!(shift.working_hours(), 7.0);

        assert!(ShiftPatch::default().is_empty());
        assert_eq!(shift.apply(&ShiftPatch::default()), shift);

        let moved = shift.apply(&ShiftPatch {
            employee_id: Some("2".to_string()),
            start_time: Some(parse_clock_time("22:00").unwrap()),
            end_time: Some(parse_clock_time("06:00").unwrap()),
            ..Default::default()
        });
        assert_eq!(moved.id, "s1");
        assert_eq!(moved.employee_id, "2");
        assert_eq!(moved.date, shift.date);
        assert_eq!(moved.break_hours, 1.0);
        assert_eq!(moved.working_hours(), 7.0);

        let with_notes = shift.apply(&ShiftPatch {
            notes: Some(Some("Inventory".to_string())),
            ..Default::default()
        });
        assert_eq!(with_notes.notes.as_deref(), Some("Inventory"));
        let cleared = with_notes.apply(&ShiftPatch {
            notes: Some(None),
            ..Default::default()
        });
        assert_eq!(cleared.notes, None);
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let first = next_id(std::iter::empty());
        assert!(first.parse::<i64>().is_ok());

        let taken: Vec<String> = (0..3)
            .map(|offset| (first.parse::<i64>().unwrap() + offset).to_string())
            .collect();
        let next = next_id(taken.iter().map(String::as_str));
        assert!(!taken.contains(&next));
        assert!(next.parse::<i64>().unwrap() >= first.parse::<i64>().unwrap());
    }
}
