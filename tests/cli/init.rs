use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["resourcesRoot"], "./resources");
    assert_eq!(parsed["rootNamespace"], "Localization");
    assert_eq!(parsed["defaultLocale"], "en");
    assert!(parsed["replacements"].is_object());
    assert!(parsed["ignores"].is_array());

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .t4resxrc.json

    ----- stderr -----
    note: resources directory './resources' does not exist yet; add <Class>[.<locale>].json files there
    ");

    assert!(test.root().join(".t4resxrc.json").exists());
    let content = test.read_file(".t4resxrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_with_overrides() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    assert_cmd_snapshot!(
        test.command().args([
            "init",
            "--locale",
            "fr",
            "--root-namespace",
            "App",
            "--replace",
            "BRAND=Acme",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .t4resxrc.json

    ----- stderr -----
    "
    );

    let parsed: Value = serde_json::from_str(&test.read_file(".t4resxrc.json")?)?;
    assert_eq!(parsed["defaultLocale"], "fr");
    assert_eq!(parsed["rootNamespace"], "App");
    assert_eq!(parsed["replacements"]["BRAND"], "Acme");

    // Later commands pick the stored values up without flags.
    assert_cmd_snapshot!(test.resolve_command().args(["App.Branding", "Welcome"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Bienvenue sur Acme

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".t4resxrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ .t4resxrc.json already exists, edit it instead
    ");
    assert_eq!(test.read_file(".t4resxrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("resources/Branding.json", r#"{"Title": "Sample"}"#)?;

    let output = test.resolve_command().args(["Branding", "Title"]).output()?;
    assert!(
        output.status.success(),
        "Resolve should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Sample\n");

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    let help = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for command in ["resolve", "discover", "init"] {
        assert!(help.contains(command), "help should mention {}", command);
    }

    Ok(())
}
