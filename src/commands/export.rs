use super::AppContext;
use crate::libs::messages::Message;
use crate::libs::shell::Shell;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (defaults to a timestamped name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, ctx: &AppContext) -> Result<()> {
    let shell = Shell::new(&ctx.db_path);
    let (path, rows) = shell
        .export_csv(args.output)
        .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;

    msg_success!(Message::ExportCompleted(path.display().to_string(), rows));
    Ok(())
}
