//! # ERD Picker Library
//!
//! Pick the project apps (and the branch of each) to include in an
//! entity-relationship diagram. This library provides:
//!
//! - Parsing of the organization/project document
//! - The "Select Apps" dialog as a terminal UI state machine
//! - Session-scoped storage shared with the ERD viewer
//! - A typed navigation hand-off carrying the selected apps
//!
//! ## Quick Start
//!
//! ```rust
//! use erd_picker::{
//!     navigation::RecordingNavigator,
//!     session::{ERD_DOCTYPES_KEY, InMemorySessionStorage},
//!     ui::{ErdApp, state::ViewErdDialogState},
//!     models::parse_project_data,
//! };
//! # use erd_picker::{models::AppConfig, parsed_property::ParsedProperty};
//! # use std::{path::PathBuf, sync::Arc};
//! # let config = AppConfig {
//! #     data: ParsedProperty::Default("projects.json".to_string()),
//! #     session_dir: ParsedProperty::Default(PathBuf::from("/tmp")),
//! # };
//!
//! let data = parse_project_data(
//!     r#"[{"name":"acme","projects":[{"name":"alpha","branches":[{"name":"alpha-main"}]}]}]"#,
//! )?;
//!
//! let navigator = RecordingNavigator::new();
//! let mut app = ErdApp::new(
//!     Arc::new(config),
//!     Box::new(InMemorySessionStorage::new().with_item(ERD_DOCTYPES_KEY, "[]")),
//!     Box::new(navigator.clone()),
//! );
//! app.set_data(data);
//!
//! let mut dialog = ViewErdDialogState::new(app.data());
//! dialog.on_toggle("alpha-main", true);
//! let request = dialog.on_view_erd(&app);
//!
//! assert_eq!(request.state.apps, vec!["alpha-main".to_string()]);
//! assert_eq!(navigator.last(), Some(request));
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod parsed_property;
pub mod selection;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{ErdPickerError, ErdPickerResult};
pub use models::{AppConfig, Args, Branch, BranchId, OrganizationProjects, Project};
pub use navigation::{NavigationRequest, Navigator, RecordingNavigator};
pub use selection::SelectedApps;
pub use session::{FileSessionStorage, InMemorySessionStorage, SessionStorage};

/// Core result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
