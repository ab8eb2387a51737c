use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod discover;
mod init;
mod resolve;

const BIN_NAME: &str = "t4resx";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project holding the bundled sample resources.
    pub fn with_sample_resources() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "resources/Branding.json",
            r#"{
                "Submit": "Send",
                "Title": "Sample",
                "Welcome": "Welcome to {BRAND}",
                "Greeting": "Hello {0}, you have {1} new messages",
                "Twice": "{0} {0}"
            }"#,
        )?;
        test.write_file(
            "resources/Branding.fr.json",
            r#"{
                "Submit": "Envoyer",
                "Welcome": "Bienvenue sur {BRAND}"
            }"#,
        )?;
        test.write_file(
            "resources/Models/User.json",
            r#"{
                "Pseudo": "Enter your pseudo",
                "RequiredError": "This field is required"
            }"#,
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn resolve_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve");
        cmd
    }

    pub fn discover_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("discover");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
