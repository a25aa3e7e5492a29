// Core Logic
pub mod actions;
pub mod visibility;
