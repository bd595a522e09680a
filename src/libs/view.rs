use super::employee::{Employee, COLUMNS};
use prettytable::{format, Cell, Row, Table};

pub struct View {}

impl View {
    /// The list view. The selected row is marked with `>`.
    pub fn employees(employees: &[Employee], selected: Option<i64>) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut header = vec![Cell::new("")];
        header.extend(COLUMNS.iter().map(|caption| Cell::new(caption).style_spec("b")));
        table.set_titles(Row::new(header));

        for employee in employees {
            let marker = if selected.is_some() && employee.id == selected { ">" } else { "" };
            let mut cells = vec![Cell::new(marker)];
            cells.extend(employee.cells().iter().map(|value| Cell::new(value)));
            table.add_row(Row::new(cells));
        }

        table
    }

    pub fn departments(departments: &[String]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        for department in departments {
            table.add_row(Row::new(vec![Cell::new(department)]));
        }
        table
    }
}
