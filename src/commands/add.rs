use super::shell::{report_outcome, warn_on_user_error};
use super::AppContext;
use crate::libs::employee::EmployeeForm;
use crate::libs::shell::{Shell, ViewState};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Full name (required)
    name: String,

    #[arg(short, long, default_value = "")]
    position: String,

    /// Salary, stored as entered
    #[arg(long, default_value = "")]
    salary: String,

    #[arg(short, long, default_value = "")]
    department: String,

    #[arg(long, default_value = "")]
    phone: String,
}

pub fn cmd(args: AddArgs, ctx: &AppContext) -> Result<()> {
    let shell = Shell::new(&ctx.db_path);
    let mut state = ViewState::default();
    shell.open_add(&mut state);

    let form = EmployeeForm {
        name: args.name,
        position: args.position,
        salary: args.salary,
        department: args.department,
        phone: args.phone,
    };
    if let Some(outcome) = warn_on_user_error(shell.submit(&mut state, form))? {
        report_outcome(outcome);
    }
    Ok(())
}
