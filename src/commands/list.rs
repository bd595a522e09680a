use super::shell::render_list;
use super::AppContext;
use crate::libs::shell::{Shell, ViewState};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only employees whose name contains this text
    #[arg(short, long)]
    search: Option<String>,

    /// Show only employees of this department ("All" for every department)
    #[arg(short, long)]
    department: Option<String>,
}

pub fn cmd(args: ListArgs, ctx: &AppContext) -> Result<()> {
    let mut shell = Shell::new(&ctx.db_path);
    let mut state = ViewState::default();
    if let Some(search) = args.search {
        shell.search(&mut state, &search);
    }
    if let Some(department) = args.department {
        shell.filter_department(&mut state, &department);
    }

    let snapshot = shell.query(&mut state)?;
    render_list(&snapshot, &state);
    Ok(())
}
