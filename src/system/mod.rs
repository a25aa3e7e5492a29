// System Layer
pub mod filesystem;

pub use filesystem::FileSystem;
