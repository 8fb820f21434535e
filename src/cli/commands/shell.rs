use crate::cli::shell::{HELP, ShellCommand, parse_line};
use crate::config::Config;
use crate::core::app::StudioApp;
use crate::errors::{AppError, AppResult};
use crate::models::{AppointmentDraft, ClientDraft, EstimateDraft};
use crate::ui::messages::{error, header, info};
use crate::ui::render;
use std::io::{self, BufRead, Write};

use super::appointments::print_appointments;

const PROMPT: &str = "inkmaster> ";

/// Handle the `shell` subcommand: read commands from stdin until `quit` or
/// end of input.
pub fn handle(cfg: &Config, app: &mut StudioApp) -> AppResult<()> {
    let stdin = io::stdin();
    run_session(cfg, app, stdin.lock())
}

pub fn run_session<R: BufRead>(cfg: &Config, app: &mut StudioApp, input: R) -> AppResult<()> {
    info(format!(
        "{} session started. Type 'help' for commands.",
        cfg.studio_name
    ));

    let mut lines = input.lines();
    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(cmd) => {
                if let Err(e) = execute(cfg, app, cmd) {
                    error(e);
                }
            }
            Err(e) => error(e),
        }
    }

    info("Session closed. Nothing is saved.");
    Ok(())
}

fn execute(cfg: &Config, app: &mut StudioApp, cmd: ShellCommand) -> AppResult<()> {
    match cmd {
        ShellCommand::Empty | ShellCommand::Quit => {}
        ShellCommand::Set { form, field, value } => app.edit(&form, &field, &value)?,
        ShellCommand::Clear(form) => {
            app.clear(&form)?;
            info(format!("Form '{form}' cleared."));
        }
        ShellCommand::Draft(form) => print_drafts(cfg, app, form.as_deref())?,
        ShellCommand::Add(form) => match form.as_str() {
            AppointmentDraft::FORM => {
                // failures are reported by the notifier
                app.add_appointment();
            }
            ClientDraft::FORM => {
                app.add_client();
            }
            "piece" | "portfolio" => info("Adding portfolio pieces is not available."),
            other => {
                return Err(AppError::UnknownCommand(format!("cannot add '{other}'")));
            }
        },
        ShellCommand::Estimate => print!(
            "{}",
            render::estimate(app.estimate_draft(), app.calculated_price(), cfg)
        ),
        ShellCommand::Dashboard => print!("{}", render::dashboard(app, cfg)),
        ShellCommand::Appointments { today } => print_appointments(app, cfg, today, None),
        ShellCommand::Clients => {
            header("Clients");
            print!("{}", render::clients(app.clients(), cfg));
        }
        ShellCommand::Portfolio => {
            header("Portfolio");
            print!("{}", render::portfolio(app.portfolio()));
        }
        ShellCommand::Guide => print!("{}", render::guide()),
        ShellCommand::Services => print!("{}", render::services()),
        ShellCommand::Log => print!("{}", render::activity_log(app.activity().entries())),
        ShellCommand::Help => print!("{HELP}"),
    }
    Ok(())
}

fn print_drafts(cfg: &Config, app: &StudioApp, form: Option<&str>) -> AppResult<()> {
    match form {
        Some(AppointmentDraft::FORM) => {
            print!("{}", render::appointment_draft(app.appointment_draft(), cfg))
        }
        Some(ClientDraft::FORM) => print!("{}", render::client_draft(app.client_draft())),
        Some(EstimateDraft::FORM) => print!(
            "{}",
            render::estimate(app.estimate_draft(), app.calculated_price(), cfg)
        ),
        Some(other) => {
            return Err(AppError::UnknownCommand(format!("unknown form '{other}'")));
        }
        None => {
            print!("{}", render::appointment_draft(app.appointment_draft(), cfg));
            print!("{}", render::client_draft(app.client_draft()));
        }
    }
    Ok(())
}
