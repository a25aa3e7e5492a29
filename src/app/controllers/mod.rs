pub(super) mod file_controller;
pub(super) mod view_controller;
