//! Adapters - Connections between the application and the outside world.
//!
//! - `file` - Evaluation requests read from YAML/JSON files

pub mod file;

pub use file::FileRequestLoader;
