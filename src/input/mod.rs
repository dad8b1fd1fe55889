//! Input handling: the symbolic event alphabet and the dispatcher
//!
//! Raw key presses and pointer clicks become [`InputEvent`]s; [`dispatch`]
//! applies one event to a [`crate::session::Session`] and reports what, if
//! anything, changed.

mod dispatcher;
mod event;

pub use dispatcher::{Change, Ignored, Outcome, dispatch};
pub use event::InputEvent;
