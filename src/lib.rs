// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First-person viewpoint control for interactive 3D scene viewers.
//!
//! flyview keeps a viewer's eye position, look-at target and orientation
//! basis consistent across arbitrary sequences of move and rotate commands,
//! and produces the view transform a renderer consumes each frame. Input
//! translation and scripted fly-throughs drive the same command set.
//!
//! # Key entry points
//!
//! - [`camera::Viewpoint`] - the viewpoint controller
//! - [`engine::ViewerContext`] - per-frame context owning viewpoint, input
//!   and tour
//! - [`input::InputProcessor`] - raw key/pointer events to commands
//! - [`tour::Tour`] - data-driven fly-through keyframes
//! - [`options::Options`] - TOML configuration (start pose, sensitivity,
//!   keybindings, pacing)
//!
//! # Frame flow
//!
//! The host feeds window events to [`ViewerContext::handle_input`], then
//! calls [`ViewerContext::update`] once per frame. The update plays the
//! tour's keyframes for the frame, applies held movement keys, and returns
//! the [`camera::ViewUniform`] to upload.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod tour;
pub mod util;

pub use camera::{MoveDirection, Viewpoint};
pub use engine::{ViewCommand, ViewerContext};
pub use error::FlyviewError;
pub use input::{InputEvent, InputProcessor};
