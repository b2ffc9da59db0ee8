//! Per-frame application context.
//!
//! [`ViewerContext`] replaces process-wide viewer state: it owns the
//! viewpoint, input processor, tour player and options, and is handed by
//! reference to whichever host callback needs it. Every mutation goes
//! through [`ViewCommand`].

pub mod command;
mod core;

pub use command::ViewCommand;
pub use self::core::ViewerContext;
