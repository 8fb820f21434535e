use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::StudioApp;
use crate::core::views;
use crate::errors::AppResult;
use crate::models::{Appointment, AppointmentStatus};
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config, app: &StudioApp) -> AppResult<()> {
    if let Commands::Appointments { today, status } = cmd {
        print_appointments(app, cfg, *today, *status);
    }
    Ok(())
}

/// Print the appointment listing, optionally narrowed to today and/or a status.
pub fn print_appointments(
    app: &StudioApp,
    cfg: &Config,
    today: bool,
    status: Option<AppointmentStatus>,
) {
    let mut list: Vec<&Appointment> = match status {
        Some(s) => views::appointments_with_status(app.appointments(), s),
        None => app.appointments().iter().collect(),
    };

    if today {
        let date = app.today();
        list.retain(|a| a.date == date);
    }

    if today {
        header(format!("Appointments for {}", app.today()));
    } else {
        header("Appointments");
    }
    print!("{}", render::appointments(&list, cfg));
}
