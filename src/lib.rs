// filenav - single-panel terminal file browser
pub mod app;
pub mod core;
pub mod models;
pub mod system;
pub mod ui;
pub mod utils;
