use anyhow::Result;
use casa_configurator::config::TomlConfig;
use casa_configurator::utils::validation::Validate;
use casa_configurator::CliConfig;
use clap::Parser;
use tempfile::TempDir;

#[tokio::test]
async fn test_cli_flags_override_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("configurator.toml");
    let static_dir = temp_dir.path().join("dist");
    tokio::fs::create_dir_all(&static_dir).await?;

    let config_content = format!(
        r#"
[server]
host = "127.0.0.1"
port = 8081
static_dir = "{}"

[contact]
email_recipient = "orcamentos@exemplo.pt"
whatsapp_number = "351900000000"

[logging]
json = true
"#,
        static_dir.to_str().unwrap().replace('\\', "/")
    );
    tokio::fs::write(&config_path, config_content).await?;

    let file_config = TomlConfig::from_file(&config_path)?;
    file_config.validate()?;

    let cli = CliConfig::parse_from([
        "casa-configurator",
        "--config",
        config_path.to_str().unwrap(),
        "--port",
        "9090",
    ]);
    let config = cli.resolve()?;
    config.validate()?;

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9090);
    assert!(config.json_logs);
    assert_eq!(config.contact.email_recipient, "orcamentos@exemplo.pt");
    assert_eq!(config.contact.whatsapp_number, "351900000000");
    assert_eq!(config.contact.email_subject, "Validação de Equipamentos");
    assert!(config.static_dir.is_some());
    Ok(())
}

#[tokio::test]
async fn test_invalid_contact_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    tokio::fs::write(
        &config_path,
        r#"
[contact]
email_recipient = "not-an-address"
"#,
    )
    .await?;

    let config = TomlConfig::from_file(&config_path)?;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("contact.email_recipient"));
    Ok(())
}
