use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_discover_single_class() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    assert_cmd_snapshot!(test.discover_command().arg("^Branding"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Branding
      Greeting  Hello {0}, you have {1} new messages
      Submit    Send
      Title     Sample
      Twice     {0} {0}
      Welcome   Welcome to BRAND
    ✓ Discovered 1 class, 5 values

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_discover_json() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test
        .discover_command()
        .args(["--format", "json", "--locale", "fr", "--replace", "BRAND=Acme"])
        .output()?;

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed,
        json!({
            "Branding": {
                "Greeting": "Hello {0}, you have {1} new messages",
                "Submit": "Envoyer",
                "Title": "Sample",
                "Twice": "{0} {0}",
                "Welcome": "Bienvenue sur Acme"
            },
            "Models.User": {
                "Pseudo": "Enter your pseudo",
                "RequiredError": "This field is required"
            }
        })
    );

    Ok(())
}

#[test]
fn test_discover_namespace() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test
        .discover_command()
        .args(["Models", "--format", "json"])
        .output()?;

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed,
        json!({
            "User": {
                "Pseudo": "Enter your pseudo",
                "RequiredError": "This field is required"
            }
        })
    );

    Ok(())
}

#[test]
fn test_discover_nothing_matched() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    assert_cmd_snapshot!(test.discover_command().arg("Nowhere"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ No localized classes matched 'Nowhere'
    ");

    Ok(())
}

#[test]
fn test_discover_invalid_pattern_matches_all() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test
        .discover_command()
        .args(["^(unclosed", "--format", "json", "-v"])
        .output()?;

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed.as_object().map(|o| o.len()), Some(2));
    assert!(stderr(&output).contains("class pattern ignored"));

    Ok(())
}

#[test]
fn test_discover_custom_root_namespace() -> Result<()> {
    let test = CliTest::with_sample_resources()?;
    test.write_file(
        ".t4resxrc.json",
        r#"{ "rootNamespace": "App.Strings", "ignores": ["Models/**"] }"#,
    )?;

    let output = test
        .discover_command()
        .args(["--format", "json"])
        .output()?;

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    let classes: Vec<&String> = parsed.as_object().unwrap().keys().collect();
    assert_eq!(classes, vec!["Branding"]);

    let output = test
        .resolve_command()
        .args(["App.Strings.Branding", "Submit"])
        .output()?;
    assert_eq!(stdout(&output), "Send\n");

    Ok(())
}
