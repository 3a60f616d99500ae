//! File adapters - Reading evaluation requests from disk.

mod request_loader;

pub use request_loader::FileRequestLoader;
