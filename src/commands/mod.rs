pub mod add;
pub mod chart;
pub mod delete;
pub mod departments;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod shell;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive employee manager (default)")]
    Shell,
    #[command(about = "List employees, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Add an employee")]
    Add(add::AddArgs),
    #[command(about = "Edit an employee", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete an employee", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "List departments in use")]
    Departments,
    #[command(about = "Show employees per department")]
    Chart(chart::ChartArgs),
    #[command(about = "Export all employees to CSV")]
    Export(export::ExportArgs),
    #[command(about = "Create the PDF employee list and print it")]
    Report(report::ReportArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Settings resolved once at process start.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub db_path: PathBuf,
}

impl AppContext {
    pub fn load(db: Option<PathBuf>) -> Result<Self> {
        let config = Config::read()?;
        let db_path = match db {
            Some(path) => path,
            None => config.database_path()?,
        };
        msg_debug!(Message::DatabaseOpened(db_path.display().to_string()));

        Ok(AppContext { config, db_path })
    }
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let command = cli.command.unwrap_or(Commands::Shell);
        if let Commands::Init = command {
            return init::cmd();
        }

        let ctx = AppContext::load(cli.db)?;
        match command {
            Commands::Shell => shell::cmd(&ctx),
            Commands::List(args) => list::cmd(args, &ctx),
            Commands::Add(args) => add::cmd(args, &ctx),
            Commands::Edit(args) => edit::cmd(args, &ctx),
            Commands::Delete(args) => delete::cmd(args, &ctx),
            Commands::Departments => departments::cmd(&ctx),
            Commands::Chart(args) => chart::cmd(args, &ctx),
            Commands::Export(args) => export::cmd(args, &ctx),
            Commands::Report(args) => report::cmd(args, &ctx),
            Commands::Init => init::cmd(),
        }
    }
}
