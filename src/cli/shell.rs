//! Line grammar of the interactive shell.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `set <form> <field> <value...>`; the value keeps inner spaces
    Set {
        form: String,
        field: String,
        value: String,
    },
    Clear(String),
    Draft(Option<String>),
    Add(String),
    Estimate,
    Dashboard,
    Appointments { today: bool },
    Clients,
    Portfolio,
    Guide,
    Services,
    Log,
    Help,
    Quit,
    Empty,
}

/// Split off the first whitespace-delimited word.
fn next_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

pub fn parse_line(line: &str) -> AppResult<ShellCommand> {
    let (cmd, rest) = next_word(line.trim());

    let cmd = match cmd.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "set" => {
            let (form, rest) = next_word(rest);
            let (field, value) = next_word(rest);
            if form.is_empty() || field.is_empty() {
                return Err(AppError::UnknownCommand(
                    "usage: set <form> <field> <value>".to_string(),
                ));
            }
            ShellCommand::Set {
                form: form.to_lowercase(),
                field: field.to_lowercase(),
                value: value.trim_end().to_string(),
            }
        }
        "clear" => ShellCommand::Clear(required_form(rest, "clear")?),
        "draft" => {
            let (form, _) = next_word(rest);
            ShellCommand::Draft((!form.is_empty()).then(|| form.to_lowercase()))
        }
        "add" => ShellCommand::Add(required_form(rest, "add")?),
        "estimate" => ShellCommand::Estimate,
        "dashboard" => ShellCommand::Dashboard,
        "appointments" => ShellCommand::Appointments {
            today: next_word(rest).0.eq_ignore_ascii_case("today"),
        },
        "clients" => ShellCommand::Clients,
        "portfolio" => ShellCommand::Portfolio,
        "guide" => ShellCommand::Guide,
        "services" => ShellCommand::Services,
        "log" => ShellCommand::Log,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(AppError::UnknownCommand(other.to_string())),
    };

    Ok(cmd)
}

fn required_form(rest: &str, verb: &str) -> AppResult<String> {
    let (form, _) = next_word(rest);
    if form.is_empty() {
        return Err(AppError::UnknownCommand(format!("usage: {verb} <form>")));
    }
    Ok(form.to_lowercase())
}

pub const HELP: &str = "\
Commands:
  set <appointment|client|estimate> <field> <value>   edit a form field
  clear <appointment|client|estimate>                 reset a form
  draft [appointment|client|estimate]                 show form contents
  add appointment | add client                        submit a form
  estimate                                            show the estimated price
  dashboard | appointments [today] | clients | portfolio
  guide | services | log | help | quit

Fields:
  appointment: client, date, time, service, price, notes
  client:      name, email, phone
  estimate:    size, complexity, hours, rate
";
