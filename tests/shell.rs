#[cfg(test)]
mod tests {
    use roster::db::employees::Employees;
    use roster::libs::employee::{DepartmentFilter, EmployeeForm, FormError};
    use roster::libs::messages::Message;
    use roster::libs::shell::{FormState, Outcome, Shell, ShellError, ViewState};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ShellTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        shell: Shell,
        state: ViewState,
    }

    impl TestContext for ShellTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("roster.db");
            ShellTestContext {
                shell: Shell::new(&db_path),
                state: ViewState::default(),
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn form(name: &str, position: &str, salary: &str, department: &str, phone: &str) -> EmployeeForm {
        EmployeeForm {
            name: name.to_string(),
            position: position.to_string(),
            salary: salary.to_string(),
            department: department.to_string(),
            phone: phone.to_string(),
        }
    }

    fn add(ctx: &mut ShellTestContext, form: EmployeeForm) -> i64 {
        ctx.shell.open_add(&mut ctx.state);
        match ctx.shell.submit(&mut ctx.state, form).unwrap() {
            Outcome::Created(employee) => employee.id.unwrap(),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    fn count(ctx: &ShellTestContext) -> usize {
        Employees::open(&ctx.db_path).unwrap().count().unwrap()
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_add_then_list(ctx: &mut ShellTestContext) {
        let id = add(ctx, form("Aya", "Engineer", "5000", "IT", "0101"));

        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(snapshot.employees.len(), 1);
        let aya = &snapshot.employees[0];
        assert_eq!(aya.id, Some(id));
        assert_eq!(aya.cells(), ["1", "Aya", "Engineer", "5000", "IT", "0101"].map(String::from));
        assert_eq!(snapshot.status.to_string(), Message::EmployeesStatus(1).to_string());
        assert_eq!(snapshot.department_choices, vec![Message::AllDepartments.to_string(), "IT".to_string()]);
        assert_eq!(snapshot.chart.count("IT"), Some(1));
        assert_eq!(ctx.state.selected, Some(id));
        assert!(!ctx.state.form.is_open());
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_fields_are_trimmed(ctx: &mut ShellTestContext) {
        let id = add(ctx, form("  Aya ", " Engineer", "5000 ", " IT ", "0101"));

        let stored = Employees::open(&ctx.db_path).unwrap().get(id).unwrap().unwrap();
        assert_eq!(stored.name, "Aya");
        assert_eq!(stored.department, "IT");
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_blank_name_is_rejected_and_form_stays_open(ctx: &mut ShellTestContext) {
        ctx.shell.open_add(&mut ctx.state);
        let result = ctx.shell.submit(&mut ctx.state, form("   ", "Engineer", "5000", "IT", ""));

        assert!(matches!(result, Err(ShellError::Validation(FormError::NameRequired))));
        assert_eq!(count(ctx), 0);
        match &ctx.state.form {
            FormState::Adding(values) => assert_eq!(values.position, "Engineer"),
            other => panic!("form should stay open, got {:?}", other),
        }
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_edit_updates_selected_record(ctx: &mut ShellTestContext) {
        let aya = add(ctx, form("Aya", "Engineer", "5000", "IT", "0101"));
        let bo = add(ctx, form("Bo", "Accountant", "4200", "Finance", "0102"));

        ctx.shell.select(&mut ctx.state, Some(aya));
        let current = ctx.shell.open_edit(&mut ctx.state).unwrap();
        assert_eq!(current.name, "Aya");
        assert_eq!(ctx.state.form.values().unwrap().salary, "5000");

        let outcome = ctx.shell.submit(&mut ctx.state, form("Aya", "Lead", "6000", "IT", "0101")).unwrap();
        assert!(matches!(outcome, Outcome::Updated { changed: 1, .. }));

        let store = Employees::open(&ctx.db_path).unwrap();
        assert_eq!(store.get(aya).unwrap().unwrap().position, "Lead");
        assert_eq!(store.get(bo).unwrap().unwrap().position, "Accountant");
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_edit_and_delete_need_selection(ctx: &mut ShellTestContext) {
        add(ctx, form("Aya", "", "", "", ""));
        ctx.shell.select(&mut ctx.state, None);

        assert!(matches!(ctx.shell.open_edit(&mut ctx.state), Err(ShellError::NoSelection)));
        assert!(matches!(
            ctx.shell.delete_selected(&mut ctx.state, |_| true),
            Err(ShellError::NoSelection)
        ));
        assert_eq!(count(ctx), 1);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_delete_requires_confirmation(ctx: &mut ShellTestContext) {
        let id = add(ctx, form("Aya", "", "", "", ""));
        ctx.shell.select(&mut ctx.state, Some(id));

        let outcome = ctx.shell.delete_selected(&mut ctx.state, |_| false).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(count(ctx), 1);

        let outcome = ctx.shell.delete_selected(&mut ctx.state, |employee| employee.name == "Aya").unwrap();
        assert!(matches!(outcome, Outcome::Deleted(_)));
        assert_eq!(count(ctx), 0);
        assert_eq!(ctx.state.selected, None);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_filters_and_stale_selection(ctx: &mut ShellTestContext) {
        let aya = add(ctx, form("Aya", "Engineer", "5000", "IT", "0101"));
        add(ctx, form("Bo", "Accountant", "4200", "Finance", "0102"));
        add(ctx, form("Maya", "Tester", "3900", "IT", "0103"));
        ctx.shell.select(&mut ctx.state, Some(aya));

        ctx.shell.filter_department(&mut ctx.state, "Finance");
        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(snapshot.employees.len(), 1);
        assert_eq!(ctx.state.selected, None);
        assert_eq!(snapshot.chart.bars(), &[("Finance".to_string(), 1)]);

        ctx.shell.filter_department(&mut ctx.state, &Message::AllDepartments.to_string());
        assert_eq!(ctx.state.department, DepartmentFilter::All);
        ctx.shell.search(&mut ctx.state, "AYA");
        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();
        let names: Vec<&str> = snapshot.employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Aya", "Maya"]);
        assert_eq!(snapshot.chart.count("IT"), Some(2));
        assert_eq!(snapshot.chart.count("Finance"), None);

        ctx.state.clear_filters();
        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(snapshot.employees.len(), 3);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_chart_placeholder_on_empty_store(ctx: &mut ShellTestContext) {
        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();

        assert!(snapshot.employees.is_empty());
        assert!(snapshot.chart.is_empty());
        assert!(ctx.shell.chart_surface().is_placeholder());
        assert_eq!(snapshot.department_choices, vec![Message::AllDepartments.to_string()]);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_submit_without_open_form(ctx: &mut ShellTestContext) {
        let result = ctx.shell.submit(&mut ctx.state, form("Aya", "", "", "", ""));
        assert!(matches!(result, Err(ShellError::NoFormOpen)));
        assert_eq!(count(ctx), 0);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_cancel_closes_form(ctx: &mut ShellTestContext) {
        ctx.shell.open_add(&mut ctx.state);
        assert!(ctx.state.form.is_open());

        ctx.shell.cancel(&mut ctx.state);
        assert_eq!(ctx.state.form, FormState::Closed);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_department_filter_falls_back_when_department_disappears(ctx: &mut ShellTestContext) {
        let bo = add(ctx, form("Bo", "Accountant", "4200", "Finance", "0102"));
        add(ctx, form("Aya", "Engineer", "5000", "IT", "0101"));

        ctx.shell.filter_department(&mut ctx.state, "Finance");
        ctx.shell.select(&mut ctx.state, Some(bo));
        let outcome = ctx.shell.delete_selected(&mut ctx.state, |_| true).unwrap();
        assert!(matches!(outcome, Outcome::Deleted(_)));

        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(ctx.state.department, DepartmentFilter::All);
        assert_eq!(snapshot.department_choices, vec![Message::AllDepartments.to_string(), "IT".to_string()]);
        assert_eq!(snapshot.employees.len(), 1);
        assert_eq!(snapshot.employees[0].name, "Aya");
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_department_filter_falls_back_after_edit_moves_last_member(ctx: &mut ShellTestContext) {
        let bo = add(ctx, form("Bo", "Accountant", "4200", "Finance", "0102"));

        ctx.shell.filter_department(&mut ctx.state, "Finance");
        ctx.shell.select(&mut ctx.state, Some(bo));
        ctx.shell.open_edit(&mut ctx.state).unwrap();
        ctx.shell.submit(&mut ctx.state, form("Bo", "Accountant", "4200", "Audit", "0102")).unwrap();

        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(ctx.state.department, DepartmentFilter::All);
        assert_eq!(snapshot.employees.len(), 1);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_one_shot_query_keeps_unknown_department(ctx: &mut ShellTestContext) {
        add(ctx, form("Aya", "Engineer", "5000", "IT", "0101"));

        ctx.shell.filter_department(&mut ctx.state, "Legal");
        let snapshot = ctx.shell.query(&mut ctx.state).unwrap();
        assert_eq!(ctx.state.department, DepartmentFilter::Only("Legal".to_string()));
        assert!(snapshot.employees.is_empty());
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_department_named_like_all_label_is_selectable(ctx: &mut ShellTestContext) {
        add(ctx, form("Aya", "Engineer", "5000", "all", "0101"));
        add(ctx, form("Bo", "Accountant", "4200", "IT", "0102"));
        add(ctx, form("Cy", "Clerk", "3000", &Message::AllDepartments.to_string(), "0103"));

        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(snapshot.department_choices.len(), 4);

        ctx.shell.set_department(&mut ctx.state, snapshot.department_at(1));
        let filtered = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(ctx.state.department, DepartmentFilter::Only("all".to_string()));
        assert_eq!(filtered.employees.len(), 1);
        assert_eq!(filtered.employees[0].name, "Aya");
        assert_eq!(filtered.department_index(&ctx.state.department), 1);

        ctx.shell.set_department(&mut ctx.state, filtered.department_at(3));
        let filtered = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(filtered.employees.len(), 1);
        assert_eq!(filtered.employees[0].name, "Cy");
        assert_eq!(filtered.department_index(&ctx.state.department), 3);

        ctx.shell.set_department(&mut ctx.state, filtered.department_at(0));
        let all = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(ctx.state.department, DepartmentFilter::All);
        assert_eq!(all.employees.len(), 3);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_store_failure_is_reported_not_fatal(ctx: &mut ShellTestContext) {
        add(ctx, form("Aya", "Engineer", "5000", "IT", "0101"));
        ctx.shell.search(&mut ctx.state, "aya");

        let unreadable = ctx.db_path.parent().unwrap().to_path_buf();
        let mut broken = Shell::new(&unreadable);
        let state_before = ctx.state.clone();
        assert!(broken.refresh(&mut ctx.state).is_err());
        assert_eq!(ctx.state, state_before);

        let snapshot = ctx.shell.refresh(&mut ctx.state).unwrap();
        assert_eq!(snapshot.employees.len(), 1);
    }
}
