//! Interactive session: in-memory state and the controller that applies
//! user intents to it.

mod controller;
mod state;

pub use controller::SessionController;
pub use state::{Intent, SessionState};
