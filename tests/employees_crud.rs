#[cfg(test)]
mod tests {
    use roster::db::employees::Employees;
    use roster::libs::employee::{DepartmentFilter, Employee, EmployeeFilter};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EmployeesTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for EmployeesTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("roster.db");
            EmployeesTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    fn seed(employees: &mut Employees) -> Vec<i64> {
        [
            Employee::new("Aya", "Engineer", "5000", "IT", "0101"),
            Employee::new("Bo", "Accountant", "4200", "Finance", "0102"),
            Employee::new("Maya", "Tester", "3900", "IT", "0103"),
            Employee::new("Carl", "Intern", "", "", ""),
        ]
        .iter()
        .map(|employee| employees.insert(employee).unwrap())
        .collect()
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_insert_and_get(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();

        let id = employees.insert(&Employee::new("Aya", "Engineer", "5000", "IT", "0101")).unwrap();
        let stored = employees.get(id).unwrap().unwrap();

        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.name, "Aya");
        assert_eq!(stored.position, "Engineer");
        assert_eq!(stored.salary, "5000");
        assert_eq!(stored.department, "IT");
        assert_eq!(stored.phone, "0101");
        assert_eq!(employees.count().unwrap(), 1);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_ids_are_unique_and_increasing(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();
        let ids = seed(&mut employees);

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_update_touches_only_one_record(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();
        let ids = seed(&mut employees);

        let changed = employees
            .update(ids[1], &Employee::new("Bo", "Controller", "4800", "Finance", "0199"))
            .unwrap();
        assert_eq!(changed, 1);

        let updated = employees.get(ids[1]).unwrap().unwrap();
        assert_eq!(updated.position, "Controller");
        assert_eq!(updated.salary, "4800");
        assert_eq!(updated.phone, "0199");

        let untouched = employees.get(ids[0]).unwrap().unwrap();
        assert_eq!(untouched.position, "Engineer");
        assert_eq!(untouched.phone, "0101");
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_update_and_delete_missing_id_are_noops(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();
        seed(&mut employees);

        assert_eq!(employees.update(999, &Employee::new("Ghost", "", "", "", "")).unwrap(), 0);
        assert_eq!(employees.delete(999).unwrap(), 0);
        assert_eq!(employees.count().unwrap(), 4);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_delete(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();
        let ids = seed(&mut employees);

        assert_eq!(employees.delete(ids[0]).unwrap(), 1);
        assert!(employees.get(ids[0]).unwrap().is_none());
        assert_eq!(employees.count().unwrap(), 3);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_department_filter(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();
        seed(&mut employees);

        let it = employees
            .list(&EmployeeFilter::new("", DepartmentFilter::Only("IT".to_string())))
            .unwrap();
        let names: Vec<&str> = it.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Aya", "Maya"]);

        let all = employees.list(&EmployeeFilter::new("", DepartmentFilter::All)).unwrap();
        assert_eq!(all.len(), 4);

        let unknown = employees
            .list(&EmployeeFilter::new("", DepartmentFilter::Only("Legal".to_string())))
            .unwrap();
        assert!(unknown.is_empty());
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_name_search_is_case_insensitive_substring(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();
        seed(&mut employees);

        let found = employees.list(&EmployeeFilter::new("aya", DepartmentFilter::All)).unwrap();
        let names: Vec<&str> = found.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Aya", "Maya"]);

        let combined = employees
            .list(&EmployeeFilter::new("AYA", DepartmentFilter::Only("IT".to_string())))
            .unwrap();
        assert_eq!(combined.len(), 2);

        let blank = employees.list(&EmployeeFilter::new("   ", DepartmentFilter::All)).unwrap();
        assert_eq!(blank.len(), 4);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_search_wildcards_are_literal(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();
        seed(&mut employees);
        employees.insert(&Employee::new("Team_100%", "", "", "", "")).unwrap();

        let percent = employees.list(&EmployeeFilter::new("%", DepartmentFilter::All)).unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].name, "Team_100%");

        let underscore = employees.list(&EmployeeFilter::new("_", DepartmentFilter::All)).unwrap();
        assert_eq!(underscore.len(), 1);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_distinct_departments(ctx: &mut EmployeesTestContext) {
        let mut employees = Employees::open(&ctx.db_path).unwrap();
        seed(&mut employees);

        assert_eq!(employees.distinct_departments().unwrap(), vec!["IT".to_string(), "Finance".to_string()]);
    }

    #[test_context(EmployeesTestContext)]
    #[test]
    fn test_data_survives_reopen(ctx: &mut EmployeesTestContext) {
        {
            let mut employees = Employees::open(&ctx.db_path).unwrap();
            seed(&mut employees);
        }

        let employees = Employees::open(&ctx.db_path).unwrap();
        assert_eq!(employees.count().unwrap(), 4);
    }
}
