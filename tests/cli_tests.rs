use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{ink, ink_with_config, temp_config, temp_out};

#[test]
fn test_dashboard_shows_seed_figures() {
    ink()
        .args(["--as-of", "2024-01-15", "dashboard"])
        .assert()
        .success()
        .stdout(contains("InkMaster Studio"))
        .stdout(contains("$150"))
        .stdout(contains("Today: 1 appointments"))
        .stdout(contains("Recent Appointments"))
        .stdout(contains("Alex Johnson"));
}

#[test]
fn test_dashboard_empty_studio() {
    ink()
        .args(["--empty", "dashboard"])
        .assert()
        .success()
        .stdout(contains("No appointments yet."));
}

#[test]
fn test_appointments_today_filter() {
    ink()
        .args(["--as-of", "2024-01-16", "appointments", "--today"])
        .assert()
        .success()
        .stdout(contains("Appointments for 2024-01-16"))
        .stdout(contains("Sarah Williams"))
        .stdout(contains("Alex Johnson").not());
}

#[test]
fn test_appointments_status_filter() {
    ink()
        .args(["appointments", "--status", "scheduled"])
        .assert()
        .success()
        .stdout(contains("Alex Johnson"))
        .stdout(contains("Sarah Williams").not());

    ink()
        .args(["appointments", "--status", "pending"])
        .assert()
        .failure();
}

#[test]
fn test_clients_and_portfolio() {
    ink()
        .arg("clients")
        .assert()
        .success()
        .stdout(contains("alex@email.com"))
        .stdout(contains("(555) 987-6543"));

    ink()
        .arg("portfolio")
        .assert()
        .success()
        .stdout(contains("Dragon Sleeve"))
        .stdout(contains("Geometric Wolf"));
}

#[test]
fn test_estimate_command() {
    ink()
        .args([
            "estimate",
            "--size",
            "large",
            "--complexity",
            "detailed",
            "--hours",
            "2",
            "--rate",
            "100",
        ])
        .assert()
        .success()
        .stdout(contains("Estimated Price"))
        .stdout(contains("$390"));
}

#[test]
fn test_estimate_uses_configured_rate() {
    let cfg = temp_config("estimate_rate", "hourly_rate: 200\n");
    ink_with_config(&cfg)
        .args([
            "estimate",
            "--size",
            "medium",
            "--complexity",
            "moderate",
            "--hours",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("$400"));
}

#[test]
fn test_estimate_without_size_is_zero() {
    ink()
        .args(["estimate", "--complexity", "moderate", "--hours", "5"])
        .assert()
        .success()
        .stdout(contains("$0"));
}

#[test]
fn test_guide_and_services() {
    ink()
        .arg("guide")
        .assert()
        .success()
        .stdout(contains("Pricing Guide"))
        .stdout(contains("$1000+"))
        .stdout(contains("xlarge"));

    ink()
        .arg("services")
        .assert()
        .success()
        .stdout(contains("Touch-up Session"));
}

#[test]
fn test_shell_adds_appointment() {
    let input = "\
set appointment client Jordan Lee
set appointment date 2024-01-15
set appointment time 09:30
set appointment price 250
add appointment
appointments today
quit
";
    ink()
        .args(["--as-of", "2024-01-15", "shell"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Appointment scheduled successfully!"))
        .stdout(contains("Jordan Lee"))
        .stdout(contains("Alex Johnson"));
}

#[test]
fn test_shell_rejects_incomplete_client() {
    let input = "\
set client name Morgan Reyes
add client
draft client
clients
";
    ink()
        .arg("shell")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(contains("Please fill in name and email"))
        .stdout(contains("Morgan Reyes"))
        .stdout(contains("Client added successfully!").not());
}

#[test]
fn test_shell_adds_client_and_logs() {
    let input = "\
set client name Morgan Reyes
set client email morgan@email.com
add client
clients
log
";
    ink()
        .arg("shell")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Client added successfully!"))
        .stdout(contains("morgan@email.com"))
        .stdout(contains("Never"))
        .stdout(contains("Activity log"));
}

#[test]
fn test_shell_reports_bad_input_and_continues() {
    let input = "\
fly away
set appointment price lots
add piece
estimate
";
    ink()
        .arg("shell")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(contains("Unknown command: fly"))
        .stderr(contains("Invalid value 'lots' for appointment.price"))
        .stdout(contains("not available"))
        .stdout(contains("Estimated Price"));
}

#[test]
fn test_shell_estimate_form() {
    let input = "\
set estimate size xlarge
set estimate complexity simple
set estimate hours 3
draft estimate
";
    // 3 * 150 * 1.6 * 0.9 = 648
    ink()
        .arg("shell")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("X-Large (8+ inches)"))
        .stdout(contains("$648"));
}

#[test]
fn test_export_appointments_csv() {
    let out = temp_out("export_appointments_csv", "csv");

    ink()
        .args(["export", "--format", "csv", "--file", &out, "--appointments"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("clientName"));
    assert!(content.contains("Alex Johnson"));
    assert!(content.contains("completed"));
}

#[test]
fn test_export_clients_json() {
    let out = temp_out("export_clients_json", "json");

    ink()
        .args(["export", "--format", "json", "--file", &out, "--clients"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    assert!(content.contains("\"lastVisit\": \"2024-01-10\""));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let out = temp_out("export_no_overwrite", "json");
    fs::write(&out, "keep me").unwrap();

    ink()
        .args(["export", "--format", "json", "--file", &out, "--portfolio"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    ink()
        .args(["export", "--format", "json", "--file", &out, "--portfolio", "-f"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().contains("Rose Minimalist"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let cfg = temp_config(
        "studio_name",
        "studio_name: Black Lotus Tattoo\ncurrency: \"€\"\nseed_demo_data: true\n",
    );

    ink_with_config(&cfg)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Black Lotus Tattoo"))
        .stdout(contains("€150"));

    ink_with_config(&cfg)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("studio_name: Black Lotus Tattoo"))
        .stdout(contains("recent_limit: 3"));
}

#[test]
fn test_invalid_config_fails() {
    let cfg = temp_config("invalid", "hourly_rate: [\n");
    ink_with_config(&cfg)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(contains("Error:"));

    let cfg = temp_config("negative_rate", "hourly_rate: -5\n");
    ink_with_config(&cfg)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(contains("hourly_rate"));
}

#[test]
fn test_config_init_writes_defaults() {
    let path = temp_out("config_init", "conf");

    ink_with_config(&path)
        .args(["config", "--init"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).expect("read written config");
    assert!(content.contains("studio_name: InkMaster Studio"));
    assert!(content.contains("hourly_rate: 150"));
}
