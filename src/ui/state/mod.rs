pub mod data_loading;
pub mod error;
pub mod project_row;
pub mod state_enum;
pub mod typed;
pub mod view_erd;

pub use data_loading::DataLoadingState;
pub use error::ErrorState;
pub use project_row::{BranchPicker, NO_BRANCH_LABEL, ProjectRow, RowIntent};
pub use state_enum::ErdModeState;
pub use typed::{TypedAppState, TypedStateChange};
pub use view_erd::ViewErdDialogState;
