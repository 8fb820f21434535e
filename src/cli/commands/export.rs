use crate::cli::parser::Commands;
use crate::core::app::StudioApp;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget};
use crate::utils::path::expand_tilde;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, app: &StudioApp) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        appointments: _,
        clients,
        portfolio,
        force,
    } = cmd
    {
        let target = if *clients {
            ExportTarget::Clients
        } else if *portfolio {
            ExportTarget::Portfolio
        } else {
            ExportTarget::Appointments
        };

        let path = expand_tilde(file);
        ExportLogic::export(app, target, *format, &path, *force)?;
    }

    Ok(())
}
