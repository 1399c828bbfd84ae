//! File-backed persistence for `imgncli`.
//!
//! Config and history live in two independent JSON documents so a corrupt
//! history file can never take the config down with it. Generated images
//! are stored as standalone blobs next to them.
#![deny(unused_crate_dependencies)]

mod atomic;
mod error;
pub mod factory;
pub mod repositories;
mod store;

pub use error::StoreError;
pub use factory::StoreFactory;
pub use repositories::{FsImageBlobRepository, JsonConfigRepository, JsonHistoryRepository};
pub use store::JsonStore;
