//! Read-only views derived from the authoritative collections.
//! Nothing here is cached: every call recomputes from its inputs.

use crate::models::{Appointment, AppointmentStatus};
use crate::utils::colors;
use serde::Serialize;

/// Appointments whose date string equals `today` (`YYYY-MM-DD`) exactly.
pub fn todays_appointments<'a>(appointments: &'a [Appointment], today: &str) -> Vec<&'a Appointment> {
    appointments.iter().filter(|a| a.date == today).collect()
}

/// Sum of prices over completed appointments only.
pub fn total_revenue(appointments: &[Appointment]) -> f64 {
    appointments
        .iter()
        .filter(|a| a.status.is_completed())
        .map(|a| a.price)
        .sum()
}

/// The first `n` appointments in storage order. Not sorted by date.
pub fn recent_appointments(appointments: &[Appointment], n: usize) -> &[Appointment] {
    &appointments[..n.min(appointments.len())]
}

pub fn appointments_with_status(
    appointments: &[Appointment],
    status: AppointmentStatus,
) -> Vec<&Appointment> {
    appointments.iter().filter(|a| a.status == status).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Blue,
    Green,
    Red,
    Gray,
}

impl StatusColor {
    pub fn name(&self) -> &'static str {
        match self {
            StatusColor::Blue => "blue",
            StatusColor::Green => "green",
            StatusColor::Red => "red",
            StatusColor::Gray => "gray",
        }
    }

    pub fn ansi(&self) -> &'static str {
        match self {
            StatusColor::Blue => colors::BLUE,
            StatusColor::Green => colors::GREEN,
            StatusColor::Red => colors::RED,
            StatusColor::Gray => colors::GREY,
        }
    }

    pub fn paint(&self, s: &str) -> String {
        format!("{}{}{}", self.ansi(), s, colors::RESET)
    }
}

/// Badge color for a status label. Labels outside the three known states
/// fall back to gray.
pub fn status_color(status: &str) -> StatusColor {
    match status {
        "scheduled" => StatusColor::Blue,
        "completed" => StatusColor::Green,
        "cancelled" => StatusColor::Red,
        _ => StatusColor::Gray,
    }
}

/// Figures shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: usize,
    pub todays_appointments: usize,
    pub total_revenue: f64,
    pub portfolio_pieces: usize,
}
