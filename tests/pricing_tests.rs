use inkmaster::core::pricing::{calculate_price, complexity_multiplier, estimate, size_multiplier};
use inkmaster::models::EstimateDraft;

#[test]
fn test_medium_moderate_is_base_price() {
    assert_eq!(calculate_price("medium", "moderate", 4.0, 150.0), 600);
}

#[test]
fn test_large_detailed() {
    assert_eq!(calculate_price("large", "detailed", 2.0, 100.0), 390);
}

#[test]
fn test_small_simple_rounds() {
    // 3 * 125 * 0.8 * 0.9 = 270
    assert_eq!(calculate_price("small", "simple", 3.0, 125.0), 270);
    // 1.5 * 99 * 1.6 * 1.3 = 308.88
    assert_eq!(calculate_price("xlarge", "complex", 1.5, 99.0), 309);
}

#[test]
fn test_missing_size_or_complexity_gives_zero() {
    assert_eq!(calculate_price("", "moderate", 5.0, 100.0), 0);
    assert_eq!(calculate_price("large", "", 5.0, 100.0), 0);
}

#[test]
fn test_zero_hours_gives_zero() {
    assert_eq!(calculate_price("xlarge", "simple", 0.0, 200.0), 0);
}

#[test]
fn test_unknown_keys_fall_back_to_one() {
    assert_eq!(calculate_price("unknown", "unknown", 3.0, 100.0), 300);
    assert_eq!(size_multiplier("huge"), 1.0);
    assert_eq!(complexity_multiplier("Detailed"), 1.0);
}

#[test]
fn test_negative_hours_are_not_an_error() {
    assert_eq!(calculate_price("medium", "moderate", -2.0, 100.0), -200);
}

#[test]
fn test_same_input_same_output() {
    let first = calculate_price("large", "complex", 3.5, 180.0);
    for _ in 0..10 {
        assert_eq!(calculate_price("large", "complex", 3.5, 180.0), first);
    }
}

#[test]
fn test_estimate_reads_draft() {
    let mut draft = EstimateDraft::with_rate(150.0);
    assert_eq!(estimate(&draft), 0);

    draft.set_field("size", "medium").unwrap();
    draft.set_field("complexity", "moderate").unwrap();
    draft.set_field("hours", "4").unwrap();
    assert_eq!(estimate(&draft), 600);

    draft.set_field("rate", "100").unwrap();
    assert_eq!(estimate(&draft), 400);

    assert!(draft.set_field("hours", "four").is_err());
    assert!(draft.set_field("colour", "red").is_err());
}
