use super::AppContext;
use crate::libs::messages::Message;
use crate::libs::print::PrintDispatcher;
use crate::libs::shell::Shell;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output PDF file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only write the PDF, do not send it to the printer
    #[arg(long)]
    no_print: bool,
}

pub fn cmd(args: ReportArgs, ctx: &AppContext) -> Result<()> {
    let shell = Shell::new(&ctx.db_path);
    let (path, pages) = shell.generate_report(args.output, &ctx.config.report_title())?;
    msg_success!(Message::ReportCreated(path.display().to_string(), pages));

    if !args.no_print {
        msg_info!(Message::ReportSendingToPrinter);
        PrintDispatcher::for_host(ctx.config.printer.as_ref()).dispatch(&path);
    }
    Ok(())
}
