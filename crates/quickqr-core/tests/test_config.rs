use quickqr_core::config::FetchConfig;
use quickqr_core::request::EcLevel;

#[test]
fn test_default_config_matches_service_defaults() {
    let config = FetchConfig::default();
    assert_eq!(config.endpoint, "https://quickchart.io/qr");
    assert_eq!(config.size, 480);
    assert_eq!(config.ec_level, EcLevel::Q);
    assert_eq!(config.save_name, "qrcode.png");
}

#[test]
fn test_request_for_applies_config() {
    let mut config = FetchConfig::default();
    config.size = 320;
    config.ec_level = EcLevel::H;

    let req = config.request_for("https://example.com");
    assert_eq!(req.text, "https://example.com");
    assert_eq!(req.size, 320);
    assert_eq!(req.ec_level, EcLevel::H);
    assert_eq!(req.endpoint, config.endpoint);
}

#[test]
fn test_toml_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quickqr.toml");

    let mut config = FetchConfig::default();
    config.size = 240;
    config.ec_level = EcLevel::L;
    config.save_name = "code.png".to_string();

    config.save(&path).unwrap();
    let loaded = FetchConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quickqr.toml");
    std::fs::write(&path, "size = 640\n").unwrap();

    let loaded = FetchConfig::load(&path).unwrap();
    assert_eq!(loaded.size, 640);
    assert_eq!(loaded.endpoint, FetchConfig::default().endpoint);
    assert_eq!(loaded.ec_level, EcLevel::Q);
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quickqr.toml");
    std::fs::write(&path, "size = \"not a number\"\n").unwrap();

    assert!(FetchConfig::load(&path).is_err());
}
