// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

pub use layout::{LayoutAreas, LayoutManager, LayoutMode, MIN_HEIGHT, MIN_WIDTH};
pub use theme::{Theme, ThemeManager};

pub use components::{
    CommandBar, CommandItem, Dialog, DialogKind, FileTable, IconMode, PathBar, Sidebar,
    StatusBar, WarningScreen,
};
