// UI Components
pub mod command_bar;
pub mod dialog;
pub mod file_table;
pub mod path_bar;
pub mod sidebar;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::{CommandBar, CommandItem};
pub use dialog::{Dialog, DialogKind};
pub use file_table::{FileTable, IconMode};
pub use path_bar::PathBar;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
