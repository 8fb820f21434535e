use inkmaster::core::registry::{AppointmentRegistry, ClientRegistry};
use inkmaster::core::seed;
use inkmaster::core::views::{
    StatusColor, appointments_with_status, recent_appointments, status_color,
    todays_appointments, total_revenue,
};
use inkmaster::models::{AppointmentDraft, AppointmentStatus, ClientDraft};

#[test]
fn test_status_color_mapping() {
    assert_eq!(status_color("scheduled"), StatusColor::Blue);
    assert_eq!(status_color("completed"), StatusColor::Green);
    assert_eq!(status_color("cancelled"), StatusColor::Red);
    assert_eq!(status_color("no-show"), StatusColor::Gray);
    assert_eq!(status_color(AppointmentStatus::Completed.as_str()).name(), "green");
}

#[test]
fn test_total_revenue_ignores_non_completed() {
    let mut list = seed::appointments();
    list[0].status = AppointmentStatus::Cancelled;
    assert_eq!(total_revenue(&list), 150.0);

    list[0].status = AppointmentStatus::Completed;
    assert_eq!(total_revenue(&list), 950.0);
    assert_eq!(total_revenue(&[]), 0.0);
}

#[test]
fn test_todays_appointments_exact_match() {
    let list = seed::appointments();
    assert_eq!(todays_appointments(&list, "2024-01-15").len(), 1);
    assert_eq!(todays_appointments(&list, "2024-1-15").len(), 0);
    assert_eq!(todays_appointments(&list, "").len(), 0);
}

#[test]
fn test_recent_truncates_without_sorting() {
    let list = seed::appointments();
    assert_eq!(recent_appointments(&list, 1)[0].id, "1");
    assert_eq!(recent_appointments(&list, 10).len(), 2);
    assert!(recent_appointments(&list, 0).is_empty());
}

#[test]
fn test_filter_by_status() {
    let list = seed::appointments();
    let done = appointments_with_status(&list, AppointmentStatus::Completed);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].client_name, "Sarah Williams");
}

#[test]
fn test_registry_rejects_duplicate_ids() {
    let mut reg = AppointmentRegistry::from_items(seed::appointments());
    let draft = AppointmentDraft {
        client_name: "Jordan Lee".into(),
        date: "2024-02-01".into(),
        time: "11:00".into(),
        ..Default::default()
    };
    assert!(reg.add("1".into(), &draft).is_err());
    assert!(reg.add("1700000000000".into(), &draft).is_ok());
    assert_eq!(reg.len(), 3);
}

#[test]
fn test_registry_validation_error() {
    let mut reg = ClientRegistry::new();
    let err = reg
        .add("10".into(), &ClientDraft::default())
        .unwrap_err();
    assert!(err.is_validation());
    assert!(reg.is_empty());
}
