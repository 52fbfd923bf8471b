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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
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

//! Interactive 3D visualization of a city bus built on wgpu.
//!
//! A static model of the bus (exterior shell, windows, lights, wheels and
//! sliding doors, plus a furnished interior) is viewed through a camera
//! state machine with free-flight, orbit, bird's-eye, interior and driver
//! views.
//!
//! # Key entry points
//!
//! - [`engine::BusViewEngine`] - window-independent core: input, camera,
//!   bus state and drawing
//! - [`camera::CameraController`] - the camera state machine
//! - [`bus::BusState`] - bus position, wheels, lights and door animation
//! - [`scene::BusScene`] - the static primitive list and draw order
//! - [`options::Options`] - runtime configuration (window, camera,
//!   controls, keybindings)
//!
//! # Architecture
//!
//! Raw window events become [`input::InputEvent`]s. The
//! [`input::InputDispatcher`] turns them into
//! [`engine::command::BusCommand`]s, once per press for toggles and once
//! per frame, scaled by frame time, for held keys. The engine applies
//! them, steps the door animation, and submits one model matrix per
//! primitive to a [`renderer::PrimitiveRenderer`]. The wgpu
//! [`renderer::SceneRenderer`] draws those with a single depth-tested
//! pipeline.

pub mod bus;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::BusViewEngine;
pub use error::BusViewError;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
