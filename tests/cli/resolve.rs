use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_resolve_neutral_value() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    assert_cmd_snapshot!(test.resolve_command().args(["Branding", "Submit"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Send

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_resolve_culture_fallback() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test
        .resolve_command()
        .args(["Branding", "Submit", "--locale", "fr-CA"])
        .output()?;
    assert_eq!(stdout(&output), "Envoyer\n");

    // No French title: neutral value is used.
    let output = test
        .resolve_command()
        .args(["Branding", "Title", "--locale", "fr-CA"])
        .output()?;
    assert_eq!(stdout(&output), "Sample\n");

    Ok(())
}

#[test]
fn test_locale_suffix_ignores_case() -> Result<()> {
    let test = CliTest::with_sample_resources()?;
    test.write_file("resources/Models/User.FR.json", r#"{"Pseudo": "Entrez votre pseudo"}"#)?;

    assert_cmd_snapshot!(test.resolve_command().args(["Models.User", "Pseudo", "-l", "fr-CA"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Entrez votre pseudo

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_resolve_fully_qualified_scope() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test
        .resolve_command()
        .args(["Localization.Models.User", "Pseudo"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Enter your pseudo\n");

    Ok(())
}

#[test]
fn test_named_token_defaults_to_identity() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test.resolve_command().args(["Branding", "Welcome"]).output()?;

    assert_eq!(stdout(&output), "Welcome to BRAND\n");

    Ok(())
}

#[test]
fn test_named_token_from_cli() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test
        .resolve_command()
        .args(["Branding", "Welcome", "--replace", "BRAND=Acme", "-l", "fr"])
        .output()?;

    assert_eq!(stdout(&output), "Bienvenue sur Acme\n");

    Ok(())
}

#[test]
fn test_named_token_from_config() -> Result<()> {
    let test = CliTest::with_sample_resources()?;
    test.write_file(
        ".t4resxrc.json",
        r#"{ "replacements": { "BRAND": "Globex" } }"#,
    )?;

    let output = test.resolve_command().args(["Branding", "Welcome"]).output()?;
    assert_eq!(stdout(&output), "Welcome to Globex\n");

    // CLI wins over the config file.
    let output = test
        .resolve_command()
        .args(["Branding", "Welcome", "--replace", "BRAND=Acme"])
        .output()?;
    assert_eq!(stdout(&output), "Welcome to Acme\n");

    Ok(())
}

#[test]
fn test_positional_arguments() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test
        .resolve_command()
        .args(["Branding", "Greeting", "Ada", "3"])
        .output()?;

    assert_eq!(stdout(&output), "Hello Ada, you have 3 new messages\n");

    Ok(())
}

#[test]
fn test_missing_positional_argument_is_padded() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    assert_cmd_snapshot!(test.resolve_command().args(["Branding", "Greeting", "Ada"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello Ada, you have argument {1} is undefined new messages

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_arguments_leaves_positional_tokens() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test.resolve_command().args(["Branding", "Greeting"]).output()?;

    assert_eq!(stdout(&output), "Hello {0}, you have {1} new messages\n");

    Ok(())
}

#[test]
fn test_repeated_positional_token() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test.resolve_command().args(["Branding", "Twice", "x"]).output()?;

    assert_eq!(stdout(&output), "x x\n");

    Ok(())
}

#[test]
fn test_missing_resource_fails() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    assert_cmd_snapshot!(test.resolve_command().args(["Branding", "Nope", "-l", "fr-CA"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ Resource 'Nope' not found in 'Localization.Branding' for locale 'fr-CA'
    ");

    Ok(())
}

#[test]
fn test_missing_resources_dir_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.resolve_command().args(["Branding", "Submit"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_invalid_replace_argument() -> Result<()> {
    let test = CliTest::with_sample_resources()?;

    let output = test
        .resolve_command()
        .args(["Branding", "Welcome", "--replace", "brand=Acme"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a token name"));

    Ok(())
}

#[test]
fn test_invalid_resource_file_warns() -> Result<()> {
    let test = CliTest::with_sample_resources()?;
    test.write_file("resources/Branding.de.json", "{ invalid json }")?;

    let output = test.resolve_command().args(["Branding", "Submit"]).output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Send\n");
    assert!(stderr(&output).contains("1 resource issue(s) found (use -v for details)"));

    let output = test
        .resolve_command()
        .args(["Branding", "Submit", "-v"])
        .output()?;
    assert!(stderr(&output).contains("Branding.de.json"));

    Ok(())
}
