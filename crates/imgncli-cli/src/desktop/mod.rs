//! Host desktop integrations behind the core's collaborator ports.

mod clipboard;
mod exporter;

pub use clipboard::SystemClipboard;
pub use exporter::{DirectoryExporter, copy_file_name};
