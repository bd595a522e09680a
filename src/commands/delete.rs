use super::shell::{report_outcome, warn_on_user_error};
use super::AppContext;
use crate::libs::messages::Message;
use crate::libs::shell::{Shell, ViewState};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Employee ID
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs, ctx: &AppContext) -> Result<()> {
    let shell = Shell::new(&ctx.db_path);
    let mut state = ViewState::default();
    shell.select(&mut state, Some(args.id));

    let mut prompt_error = None;
    let outcome = shell.delete_selected(&mut state, |employee| {
        if args.yes {
            return true;
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEmployee(employee.name.clone()).to_string())
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                prompt_error = Some(e);
                false
            })
    });
    if let Some(e) = prompt_error {
        return Err(e.into());
    }

    if let Some(outcome) = warn_on_user_error(outcome)? {
        report_outcome(outcome);
    }
    Ok(())
}
