use foscam_rs::config::{Config, Protocol};
use foscam_rs::{Error, FoscamApiClient};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let config_content = r#"
[camera]
username = "admin"
password = "secret"
host = "192.168.1.50"
port = 443
protocol = "https"
verify_tls_certificates = false
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.camera.username, "admin");
    assert_eq!(config.camera.password, "secret");
    assert_eq!(config.camera.host, "192.168.1.50");
    assert_eq!(config.camera.port, 443);
    assert_eq!(config.camera.protocol, Protocol::Https);
    assert!(!config.camera.verify_tls_certificates);
}

#[test]
fn test_config_defaults() {
    let config = Config::from_toml_str(
        r#"
[camera]
username = "admin"
host = "cam.local"
"#,
    )
    .unwrap();

    assert_eq!(config.camera.password, "");
    assert_eq!(config.camera.port, 88);
    assert_eq!(config.camera.protocol, Protocol::Http);
    assert!(config.camera.verify_tls_certificates);

    let client = FoscamApiClient::new(config.camera).unwrap();
    assert_eq!(client.control_url(), "http://cam.local:88/cgi-bin/CGIProxy.fcgi");
}

#[test]
fn test_config_new_with_missing_file() {
    let dir = tempdir().unwrap();

    let result = Config::from_file(dir.path().join("config.toml"));

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_config_with_invalid_toml() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let invalid_content = r#"
[camera
username = "admin"
"#;

    fs::write(&config_path, invalid_content).unwrap();

    let result = Config::from_file(&config_path);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_config_missing_host() {
    let result = Config::from_toml_str(
        r#"
[camera]
username = "admin"
password = "secret"
"#,
    );

    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_config_empty_username() {
    let result = Config::from_toml_str(
        r#"
[camera]
username = ""
host = "cam.local"
"#,
    );

    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_config_unknown_protocol() {
    let result = Config::from_toml_str(
        r#"
[camera]
username = "admin"
host = "cam.local"
protocol = "ftp"
"#,
    );

    assert!(result.is_err());
}
