use super::AppContext;
use crate::libs::shell::{Shell, ViewState};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Count only employees whose name contains this text
    #[arg(short, long)]
    search: Option<String>,

    /// Count only this department
    #[arg(short, long)]
    department: Option<String>,
}

pub fn cmd(args: ChartArgs, ctx: &AppContext) -> Result<()> {
    let mut shell = Shell::new(&ctx.db_path);
    let mut state = ViewState::default();
    if let Some(search) = args.search {
        shell.search(&mut state, &search);
    }
    if let Some(department) = args.department {
        shell.filter_department(&mut state, &department);
    }

    shell.query(&mut state)?;
    msg_print!(shell.chart_surface(), true);
    Ok(())
}
