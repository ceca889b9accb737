//! Check configuration: YAML file, environment overrides and defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "companion-check.yaml";

/// Settings for one check run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Organization every companion must belong to.
    pub organization: String,
    /// Repository name of the project under test.
    pub project: String,
    /// Source identity dependents use for this project's units. Derived from
    /// `git_host`, `organization` and `project` when unset.
    pub canonical_source: Option<String>,
    /// Dependents checked on their default branch unless a companion covers them.
    pub dependents: Vec<String>,
    /// Branch merged into the working branch before checking.
    pub target_branch: String,
    /// Change request being checked, if any.
    pub change_number: Option<u64>,
    /// Checkout of the project under test.
    pub project_dir: PathBuf,
    /// Parent directory of the per-dependent checkouts.
    pub work_dir: PathBuf,
    /// Host serving the organization's repositories.
    pub git_host: String,
    /// Base URL of the forge REST API.
    pub api_url: String,
    /// Token for the forge API.
    pub github_token: Option<String>,
    /// Timeout applied to every forge request.
    pub http_timeout_secs: u64,
    /// Shell command patching a dependent to use this project's code.
    pub patch_command: String,
    /// Shell command verifying the patched dependent.
    pub verify_command: String,
    /// Fail the run when soft failures were recorded.
    pub strict: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            organization: "paritytech".to_string(),
            project: "substrate".to_string(),
            canonical_source: None,
            dependents: Vec::new(),
            target_branch: "master".to_string(),
            change_number: None,
            project_dir: PathBuf::from("."),
            work_dir: PathBuf::from("target/companion-check"),
            git_host: "github.com".to_string(),
            api_url: "https://api.github.com".to_string(),
            github_token: None,
            http_timeout_secs: 30,
            patch_command: "diener patch --crates-to-patch {project_dir} --target {canonical_url} --path Cargo.toml"
                .to_string(),
            verify_command: "cargo check --workspace --all-targets".to_string(),
            strict: false,
        }
    }
}

impl CheckConfig {
    /// Loads the configuration.
    ///
    /// Reads `path`, or [`DEFAULT_CONFIG_FILE`] if it exists, then applies
    /// environment overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error string if an explicit file is missing, a file or
    /// variable cannot be parsed, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        let vars: HashMap<String, String> = std::env::vars().collect();
        config.apply_env(&vars)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))
    }

    /// Applies `COMPANION_CHECK_*` and `GITHUB_*` overrides from `vars`.
    ///
    /// # Errors
    ///
    /// Returns an error string if a numeric variable is not a number.
    pub fn apply_env(&mut self, vars: &HashMap<String, String>) -> Result<(), String> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        if let Some(v) = get("COMPANION_CHECK_ORG") {
            self.organization = v.to_string();
        }
        if let Some(v) = get("COMPANION_CHECK_PROJECT") {
            self.project = v.to_string();
        }
        if let Some(v) = get("COMPANION_CHECK_CANONICAL_SOURCE") {
            self.canonical_source = Some(v.to_string());
        }
        if let Some(v) = get("COMPANION_CHECK_DEPENDENTS") {
            self.dependents = split_list(v);
        }
        if let Some(v) = get("COMPANION_CHECK_TARGET_BRANCH") {
            self.target_branch = v.to_string();
        }
        if let Some(v) = get("COMPANION_CHECK_PR") {
            let number =
                v.parse().map_err(|e| format!("COMPANION_CHECK_PR={v:?} is not a number: {e}"))?;
            self.change_number = Some(number);
        }
        if let Some(v) = get("COMPANION_CHECK_WORK_DIR") {
            self.work_dir = PathBuf::from(v);
        }
        if let Some(v) = get("GITHUB_API_URL") {
            self.api_url = v.to_string();
        }
        if let Some(v) = get("GITHUB_TOKEN") {
            self.github_token = Some(v.to_string());
        }
        Ok(())
    }

    /// Rejects settings the checker cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the offending setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.organization.trim().is_empty() {
            return Err("organization must not be empty".to_string());
        }
        if self.project.trim().is_empty() {
            return Err("project must not be empty".to_string());
        }
        if self.http_timeout_secs == 0 {
            return Err("http_timeout_secs must be greater than zero".to_string());
        }
        if let Some(name) = self.dependents.iter().find(|d| d.is_empty() || d.contains('/')) {
            return Err(format!("invalid dependent name {name:?}"));
        }
        Ok(())
    }

    /// Source identity of this project's units as seen from a dependent.
    #[must_use]
    pub fn canonical_source(&self) -> String {
        self.canonical_source.clone().unwrap_or_else(|| format!("git+{}", self.canonical_url()))
    }

    /// Clone URL of this project.
    #[must_use]
    pub fn canonical_url(&self) -> String {
        format!("https://{}/{}/{}", self.git_host, self.organization, self.project)
    }

    /// Clone URL of a repository in the same organization.
    #[must_use]
    pub fn repository_url(&self, repository: &str) -> String {
        format!("https://{}/{}/{repository}.git", self.git_host, self.organization)
    }

    /// Working directory of a dependent's checkout.
    #[must_use]
    pub fn dependent_dir(&self, repository: &str) -> PathBuf {
        self.work_dir.join(repository)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}
