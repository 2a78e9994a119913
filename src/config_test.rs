use super::*;

#[test]
fn from_raw_trims_whitespace_and_trailing_slashes() {
    let config = AppConfig::from_raw(Some("  https://api.example.com//  "));
    assert_eq!(config.backend_url, "https://api.example.com");
    assert!(!config.is_same_origin());
}

#[test]
fn from_raw_absent_or_blank_is_same_origin() {
    assert!(AppConfig::from_raw(None).is_same_origin());
    assert!(AppConfig::from_raw(Some("   ")).is_same_origin());
}
