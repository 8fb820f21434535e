use inkmaster::cli::shell::{ShellCommand, parse_line};

#[test]
fn test_set_keeps_spaces_in_value() {
    let cmd = parse_line("set appointment client   Alex  Johnson ").unwrap();
    assert_eq!(
        cmd,
        ShellCommand::Set {
            form: "appointment".into(),
            field: "client".into(),
            value: "Alex  Johnson".into(),
        }
    );
}

#[test]
fn test_set_without_value_clears_field() {
    let cmd = parse_line("set client phone").unwrap();
    assert_eq!(
        cmd,
        ShellCommand::Set {
            form: "client".into(),
            field: "phone".into(),
            value: String::new(),
        }
    );
}

#[test]
fn test_set_needs_form_and_field() {
    assert!(parse_line("set").is_err());
    assert!(parse_line("set client").is_err());
}

#[test]
fn test_simple_commands() {
    assert_eq!(parse_line("").unwrap(), ShellCommand::Empty);
    assert_eq!(parse_line("  quit").unwrap(), ShellCommand::Quit);
    assert_eq!(parse_line("EXIT").unwrap(), ShellCommand::Quit);
    assert_eq!(parse_line("add Client").unwrap(), ShellCommand::Add("client".into()));
    assert_eq!(
        parse_line("appointments today").unwrap(),
        ShellCommand::Appointments { today: true }
    );
    assert_eq!(
        parse_line("appointments").unwrap(),
        ShellCommand::Appointments { today: false }
    );
    assert_eq!(parse_line("draft").unwrap(), ShellCommand::Draft(None));
    assert_eq!(
        parse_line("draft estimate").unwrap(),
        ShellCommand::Draft(Some("estimate".into()))
    );
}

#[test]
fn test_unknown_and_incomplete_commands() {
    assert!(parse_line("delete appointment 1").is_err());
    assert!(parse_line("add").is_err());
    assert!(parse_line("clear").is_err());
}
