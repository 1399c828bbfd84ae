//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete implementations.

mod app_core;
mod config_service;
mod history_service;

pub use app_core::AppCore;
pub use config_service::ConfigService;
pub use history_service::HistoryService;

#[cfg(test)]
pub(crate) mod testing;
