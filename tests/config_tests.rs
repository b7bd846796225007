use chrono::NaiveDate;
use dwriter::config::Config;
use dwriter::core::store::Addressing;
use dwriter::errors::AppError;
use dwriter::utils::time::{DEFAULT_TIMESTAMP_FORMAT, format_moment, parse_moment};

#[test]
fn test_missing_fields_take_defaults() {
    let cfg: Config = serde_yaml::from_str("database: /tmp/journal.db\n").unwrap();

    assert_eq!(cfg.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    assert_eq!(cfg.addressing, Addressing::IdOffset);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_addressing_is_read_in_snake_case() {
    let yaml = "database: /tmp/journal.db\naddressing: insertion_order\n";
    let cfg: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.addressing, Addressing::InsertionOrder);

    let back = serde_yaml::to_string(&cfg).unwrap();
    assert!(back.contains("addressing: insertion_order"));
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut cfg = Config::default();
    cfg.database = "  ".into();
    assert!(matches!(cfg.validate(), Err(AppError::Config(_))));

    let mut cfg = Config::default();
    cfg.timestamp_format = "%Y-%!".into();
    assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
}

#[test]
fn test_absolute_database_path_is_kept() {
    let mut cfg = Config::default();
    let abs = std::env::temp_dir().join("dwriter_cfg_test.db");
    cfg.database = abs.to_string_lossy().to_string();

    assert_eq!(cfg.database_path(), abs);
}

#[test]
fn test_relative_database_path_lives_in_config_dir() {
    let mut cfg = Config::default();
    cfg.database = "other.db".into();

    assert_eq!(cfg.database_path(), Config::config_dir().join("other.db"));
}

#[test]
fn test_parse_moment_accepts_common_shapes() {
    let expected = NaiveDate::from_ymd_opt(2013, 2, 14)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    assert_eq!(parse_moment("2013-02-14 10:00:00"), Some(expected));
    assert_eq!(parse_moment("2013-02-14 10:00"), Some(expected));
    assert_eq!(parse_moment(" 2013-02-14T10:00:00 "), Some(expected));
    assert_eq!(
        parse_moment("2013-02-14"),
        NaiveDate::from_ymd_opt(2013, 2, 14).unwrap().and_hms_opt(0, 0, 0)
    );
    assert!(parse_moment("2013-02-14T10:00:00+01:00").is_some());
    assert_eq!(parse_moment("14/02/2013"), None);
}

#[test]
fn test_format_moment_rejects_broken_formats() {
    let m = NaiveDate::from_ymd_opt(2013, 2, 14)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    assert_eq!(format_moment(&m, "%Y/%m/%d").as_deref(), Some("2013/02/14"));
    assert_eq!(format_moment(&m, "%!"), None);
}
