//! Port implementations over `JsonStore`.
//!
//! Each repository is a thin handle on a shared store; the store owns the
//! locks and the lazy initialization.

mod blob_repository;
mod config_repository;
mod history_repository;

pub use blob_repository::FsImageBlobRepository;
pub use config_repository::JsonConfigRepository;
pub use history_repository::JsonHistoryRepository;
