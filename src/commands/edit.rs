use super::shell::{report_outcome, warn_on_user_error};
use super::AppContext;
use crate::libs::shell::{Shell, ViewState};
use anyhow::Result;
use clap::Args;

/// Fields left out keep their stored value.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Employee ID
    id: i64,

    #[arg(long)]
    name: Option<String>,

    #[arg(short, long)]
    position: Option<String>,

    #[arg(long)]
    salary: Option<String>,

    #[arg(short, long)]
    department: Option<String>,

    #[arg(long)]
    phone: Option<String>,
}

pub fn cmd(args: EditArgs, ctx: &AppContext) -> Result<()> {
    let shell = Shell::new(&ctx.db_path);
    let mut state = ViewState::default();
    shell.select(&mut state, Some(args.id));

    if warn_on_user_error(shell.open_edit(&mut state))?.is_none() {
        return Ok(());
    }
    let Some(mut form) = state.form.values().cloned() else {
        return Ok(());
    };

    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(position) = args.position {
        form.position = position;
    }
    if let Some(salary) = args.salary {
        form.salary = salary;
    }
    if let Some(department) = args.department {
        form.department = department;
    }
    if let Some(phone) = args.phone {
        form.phone = phone;
    }

    if let Some(outcome) = warn_on_user_error(shell.submit(&mut state, form))? {
        report_outcome(outcome);
    }
    Ok(())
}
