use super::AppContext;
use crate::db::employees::Employees;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd(ctx: &AppContext) -> Result<()> {
    let departments = Employees::open(&ctx.db_path)?.distinct_departments()?;
    if departments.is_empty() {
        msg_info!(Message::NoDepartmentsFound);
        return Ok(());
    }

    msg_print!(Message::DepartmentsHeader, true);
    View::departments(&departments).printstd();
    Ok(())
}
