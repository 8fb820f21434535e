//! Text renderings of the studio views.
//!
//! Every function returns the text instead of printing it, so the shell and
//! the one-shot commands share the same output.

use crate::config::Config;
use crate::core::activity::LogEntry;
use crate::core::app::StudioApp;
use crate::core::views::status_color;
use crate::models::{
    Appointment, AppointmentDraft, Client, ClientDraft, Complexity, EstimateDraft,
    PortfolioPiece, Service, TattooSize,
};
use crate::utils::colors::{self, colorize_amount, colorize_optional};
use crate::utils::formatting::{bold, italic, pad_right, strip_ansi, truncate};
use crate::utils::table::Table;
use ansi_term::Colour;

const NOTES_WIDTH: usize = 40;
const WRAP_WIDTH: usize = 60;

/// Catalog label for a known service key, the raw text otherwise.
fn service_label(service: &str) -> String {
    let label = Service::from_key(service).map_or(service, |s| s.label());
    colorize_optional(label)
}

fn status_badge(a: &Appointment) -> String {
    let label = a.status.as_str();
    status_color(label).paint(label)
}

pub fn dashboard(app: &StudioApp, cfg: &Config) -> String {
    let stats = app.dashboard_stats();
    let revenue = cfg.money(stats.total_revenue);

    let mut out = String::new();
    out.push_str(&format!("🖋  {}\n", bold(&cfg.studio_name)));
    out.push_str(&format!(
        "Revenue: {} | Today: {} appointments\n\n",
        colorize_amount(stats.total_revenue, &revenue),
        stats.todays_appointments
    ));

    let cards = [
        ("Total Clients", stats.total_clients.to_string()),
        ("Today's Appointments", stats.todays_appointments.to_string()),
        ("Revenue", revenue.clone()),
        ("Portfolio Pieces", stats.portfolio_pieces.to_string()),
    ];
    for (title, value) in cards {
        out.push_str(&format!("{} {}\n", pad_right(title, 22), bold(&value)));
    }

    out.push_str(&format!("\n{}\n", bold("Recent Appointments")));
    let recent = app.recent_appointments();
    if recent.is_empty() {
        out.push_str(&format!("{}\n", italic("No appointments yet.")));
        return out;
    }

    let mut table = Table::with_headers(&["Client", "Service", "Status", "When"]);
    for a in recent {
        table.add_row(vec![
            a.client_name.clone(),
            service_label(&a.service),
            status_badge(a),
            a.when(),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn appointments(list: &[&Appointment], cfg: &Config) -> String {
    if list.is_empty() {
        return "No appointments found.\n".to_string();
    }

    let mut headers = vec!["ID", "Client", "Date", "Time", "Service", "Status", "Price"];
    if cfg.show_notes {
        headers.push("Notes");
    }

    let mut table = Table::with_headers(&headers);
    for a in list {
        let mut row = vec![
            a.id.clone(),
            a.client_name.clone(),
            a.date.clone(),
            a.time.clone(),
            service_label(&a.service),
            status_badge(a),
            cfg.money(a.price),
        ];
        if cfg.show_notes {
            row.push(colorize_optional(&truncate(&a.notes, NOTES_WIDTH)));
        }
        table.add_row(row);
    }
    table.render()
}

pub fn clients(list: &[Client], cfg: &Config) -> String {
    if list.is_empty() {
        return "No clients found.\n".to_string();
    }

    let mut table = Table::with_headers(&[
        "ID", "Name", "Email", "Phone", "Sessions", "Spent", "Last visit",
    ]);
    for c in list {
        table.add_row(vec![
            c.id.clone(),
            c.name.clone(),
            c.email.clone(),
            colorize_optional(&c.phone),
            c.total_sessions.to_string(),
            cfg.money(c.total_spent),
            c.last_visit.to_string(),
        ]);
    }
    table.render()
}

pub fn portfolio(pieces: &[PortfolioPiece]) -> String {
    if pieces.is_empty() {
        return "The portfolio is empty.\n".to_string();
    }

    let mut out = String::new();
    for p in pieces {
        out.push_str(&format!(
            "{}  [{}] [{}]\n",
            bold(&p.title),
            Colour::Cyan.paint(p.style.as_str()),
            Colour::Purple.paint(p.size.as_str())
        ));
        let opts = textwrap::Options::new(WRAP_WIDTH)
            .initial_indent("    ")
            .subsequent_indent("    ");
        out.push_str(&textwrap::fill(&p.description, opts));
        out.push('\n');
        out.push_str(&format!("    {}\n\n", colors::paint(colors::GREY, &p.image_url)));
    }
    out
}

pub fn estimate(draft: &EstimateDraft, price: i64, cfg: &Config) -> String {
    let size = TattooSize::from_key(&draft.size)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| draft.size.clone());
    let complexity = Complexity::from_key(&draft.complexity)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| draft.complexity.clone());

    let rows = [
        ("Size", colorize_optional(&size)),
        ("Complexity", colorize_optional(&complexity)),
        ("Hours", draft.hours.to_string()),
        ("Hourly rate", cfg.money(draft.hourly_rate)),
    ];

    let mut out = format!("{}\n", bold("Tattoo Price Calculator"));
    for (label, value) in rows {
        out.push_str(&format!("  {} {}\n", pad_right(label, 12), value));
    }
    out.push_str(&format!(
        "\nEstimated Price: {}\n",
        Colour::Green
            .bold()
            .paint(format!("{}{}", cfg.currency, price))
    ));
    out
}

pub fn guide() -> String {
    let mut out = format!("{}\n", bold("Pricing Guide"));

    out.push_str("\nSize Categories\n");
    for s in TattooSize::ALL {
        out.push_str(&format!("  • {}: {}\n", s.label(), s.price_band()));
    }

    out.push_str("\nAdditional Factors\n");
    for factor in [
        "Color vs Black & Gray",
        "Placement difficulty",
        "Design complexity",
        "Touch-up sessions",
    ] {
        out.push_str(&format!("  • {}\n", factor));
    }

    out.push_str("\nMultipliers\n");
    let mut table = Table::with_headers(&["Key", "Label", "x"]);
    for s in TattooSize::ALL {
        table.add_row(vec![
            s.key().to_string(),
            s.label().to_string(),
            format!("{:.1}", s.multiplier()),
        ]);
    }
    for c in Complexity::ALL {
        table.add_row(vec![
            c.key().to_string(),
            c.label().to_string(),
            format!("{:.1}", c.multiplier()),
        ]);
    }
    out.push_str(&table.render());
    out
}

pub fn services() -> String {
    let mut table = Table::with_headers(&["Key", "Service"]);
    for s in Service::ALL {
        table.add_row(vec![s.key().to_string(), s.label().to_string()]);
    }
    table.render()
}

pub fn appointment_draft(d: &AppointmentDraft, cfg: &Config) -> String {
    let fields = [
        ("client", d.client_name.clone(), true),
        ("date", d.date.clone(), true),
        ("time", d.time.clone(), true),
        ("service", d.service.clone(), false),
        ("price", cfg.money(d.price), false),
        ("notes", d.notes.clone(), false),
    ];
    draft_block("New appointment", &fields)
}

pub fn client_draft(d: &ClientDraft) -> String {
    let fields = [
        ("name", d.name.clone(), true),
        ("email", d.email.clone(), true),
        ("phone", d.phone.clone(), false),
    ];
    draft_block("New client", &fields)
}

fn draft_block(title: &str, fields: &[(&str, String, bool)]) -> String {
    let mut out = format!("{}\n", bold(title));
    for (name, value, required) in fields {
        let marker = if *required { "*" } else { " " };
        out.push_str(&format!(
            "  {}{} {}\n",
            pad_right(name, 8),
            marker,
            colorize_optional(value)
        ));
    }
    out
}

/// ANSI colour for an activity-log operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "rejected" => Colour::Red,
        _ => Colour::White,
    }
}

pub fn activity_log(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "📜 Activity log is empty.\n".to_string();
    }

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let op_w = entries
        .iter()
        .map(|e| e.operation.len() + e.target.len() + 3)
        .max()
        .unwrap_or(10)
        .min(40);

    let mut out = String::from("📜 Activity log:\n\n");
    for e in entries {
        let colored = format!(
            "{} ({})",
            color_for_operation(&e.operation).paint(e.operation.as_str()),
            e.target
        );
        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));
        out.push_str(&format!(
            "{:>id_w$}: {} | {}{} => {}\n",
            e.id,
            e.date,
            colored,
            padding,
            e.message,
            id_w = id_w
        ));
    }
    out
}
