use anyhow::Result;
use clap::Parser;
use portfolio_contact::domain::ports::ConfigProvider;
use portfolio_contact::config::Command;
use portfolio_contact::{CliConfig, ContactError};
use tempfile::TempDir;

#[test]
fn test_cli_overrides_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("contact.toml");
    std::fs::write(
        &config_path,
        r#"
[endpoint]
url = "https://from-file.example.com/hook"

[endpoint.headers]
apikey = "file-key"
"#,
    )?;

    let config = CliConfig::try_parse_from([
        "portfolio-contact",
        "--config",
        config_path.to_str().unwrap(),
        "--endpoint",
        "https://from-cli.example.com/hook",
        "--header",
        "apikey=cli-key",
        "probe",
    ])?;

    let settings = config.settings()?;
    assert_eq!(settings.endpoint(), "https://from-cli.example.com/hook");
    assert_eq!(
        settings.headers().get("apikey").map(String::as_str),
        Some("cli-key")
    );
    Ok(())
}

#[test]
fn test_config_file_alone_is_enough() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("contact.toml");
    std::fs::write(&config_path, "[endpoint]\nurl = \"http://localhost:8080/contact\"\n")?;

    // 直接建構，避免 CONTACT_ENDPOINT 環境變數影響結果
    let config = CliConfig {
        endpoint: None,
        config: Some(config_path),
        headers: vec![],
        verbose: false,
        log_json: false,
        command: Command::Probe,
    };

    let settings = config.settings()?;
    assert_eq!(settings.endpoint(), "http://localhost:8080/contact");
    assert!(settings.headers().is_empty());
    Ok(())
}

#[test]
fn test_non_http_endpoint_fails_fast() -> Result<()> {
    let config = CliConfig::try_parse_from([
        "portfolio-contact",
        "--endpoint",
        "ftp://example.com/contact",
        "probe",
    ])?;

    assert!(matches!(
        config.settings(),
        Err(ContactError::InvalidConfigValueError { .. })
    ));
    Ok(())
}
