use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    config::Config,
    error::{DataError, ErdPickerResult},
    parsed_property::ParsedProperty,
};

/// Identifier of a branch; unique within its project.
pub type BranchId = String;

/// A named group of projects, as supplied by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationProjects {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization_name: Option<String>,
    /// `None` when the document omits the list or sets it to `null`.
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
}

impl OrganizationProjects {
    /// Projects that have at least one branch, in document order.
    pub fn projects_with_branches(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .flatten()
            .filter(|project| project.has_branches())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub branches: Option<Vec<Branch>>,
}

impl Project {
    /// Human-readable name, falling back to the identifier.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    pub fn branches(&self) -> &[Branch] {
        self.branches.as_deref().unwrap_or_default()
    }

    pub fn has_branches(&self) -> bool {
        !self.branches().is_empty()
    }

    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branches().iter().find(|branch| branch.name == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: BranchId,
    #[serde(default)]
    pub branch_name: String,
}

impl Branch {
    /// Label shown in the branch picker.
    pub fn label(&self) -> &str {
        if self.branch_name.is_empty() {
            &self.name
        } else {
            &self.branch_name
        }
    }
}

/// Parse the project data document.
///
/// A top-level `null` is accepted and means "no organizations".
pub fn parse_project_data(content: &str) -> serde_json::Result<Vec<OrganizationProjects>> {
    let data: Option<Vec<OrganizationProjects>> = serde_json::from_str(content)?;
    Ok(data.unwrap_or_default())
}

/// Read and parse the project data document from a file, or stdin for `-`.
pub fn load_project_data(source: &str) -> Result<Vec<OrganizationProjects>, DataError> {
    let source_name = if source == "-" { "stdin" } else { source };

    let content = if source == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(source)
    }
    .map_err(|e| DataError::Read {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;

    let data = parse_project_data(&content).map_err(|e| DataError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;

    tracing::info!(
        source = source_name,
        organizations = data.len(),
        "project data loaded"
    );
    Ok(data)
}

/// Resolved configuration with value provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the project data document, or `-` for stdin.
    pub data: ParsedProperty<String>,
    /// Directory holding the session-scoped storage file.
    pub session_dir: ParsedProperty<PathBuf>,
}

impl AppConfig {
    pub fn data(&self) -> &str {
        self.data.value()
    }

    pub fn session_dir(&self) -> &std::path::Path {
        self.session_dir.value()
    }

    pub fn reads_stdin(&self) -> bool {
        self.data() == "-"
    }

    /// Refuse `-` when stdin is the terminal the TUI is about to take over.
    pub fn check_data_source(&self, stdin_is_terminal: bool) -> ErdPickerResult<()> {
        if self.reads_stdin() && stdin_is_terminal {
            return Err(DataError::InteractiveStdin.into());
        }
        Ok(())
    }
}

#[derive(Parser, Clone, Debug, Default)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "Pick project apps and branches to include in an ERD view",
    long_about = "Shows the projects of every organization in a project data document,\n\
        lets you check the apps (and choose the branch of each) to include in an\n\
        entity-relationship diagram, then hands the selection to the ERD viewer.\n\n\
        Configuration can be provided via CLI arguments, environment variables (ERD_PICKER_*)\n\
        or a config file (~/.config/erd-picker/config.toml).",
    after_help = "EXAMPLES:\n    \
        # Pick apps from a document exported by the dashboard\n    \
        erd-picker --data projects.json\n\n    \
        # Read the document from stdin\n    \
        cat projects.json | erd-picker --data -\n\n    \
        # Create sample config file\n    \
        erd-picker --create-config"
)]
pub struct Args {
    /// Project data document (JSON array of organizations), `-` for stdin [default: projects.json]
    #[arg(short, long)]
    pub data: Option<String>,

    /// Directory holding the session storage file [default: $XDG_RUNTIME_DIR/erd-picker]
    #[arg(long)]
    pub session_dir: Option<PathBuf>,

    /// Create a sample configuration file at ~/.config/erd-picker/config.toml
    #[arg(long)]
    pub create_config: bool,

    /// Log level (trace, debug, info, warn, error); logging is off when unset
    #[arg(long, help_heading = "Logging")]
    pub log_level: Option<String>,

    /// Write logs to this file (required for logging while the TUI is active)
    #[arg(long, help_heading = "Logging")]
    pub log_file: Option<PathBuf>,

    /// Log format (text or json)
    #[arg(long, help_heading = "Logging")]
    pub log_format: Option<String>,
}

impl Args {
    /// Resolve the final configuration.
    ///
    /// Precedence: CLI > environment > config file > defaults.
    pub fn resolve_config(self) -> anyhow::Result<AppConfig> {
        let file_config = Config::load_from_file()?;
        let env_config = Config::load_from_env();

        let cli_config = Config {
            data: self
                .data
                .as_ref()
                .map(|v| ParsedProperty::Cli(v.clone(), v.clone())),
            session_dir: self
                .session_dir
                .as_ref()
                .map(|v| ParsedProperty::Cli(v.clone(), v.display().to_string())),
        };

        let merged = Config::default()
            .merge(file_config)
            .merge(env_config)
            .merge(cli_config);

        Ok(merged.into_app_config())
    }
}
