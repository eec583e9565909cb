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
// Complexity limits (thresholds in clippy.toml)
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

//! Pointer-driven camera navigation for walk-through galleries.
//!
//! Atrium turns raw pointer input into camera moves: drags look around with
//! the horizon locked, a click on a panel glides the camera in to frame it,
//! a second click on the same panel glides back, and a click on the floor
//! walks there. Objects may carry click triggers that fire instead of
//! moving.
//!
//! # Key entry points
//!
//! - [`navigation::NavigationController`] - feed it pointer events and call
//!   `animate` every frame
//! - [`scene::SceneProvider`] - the read-only view of the host's scene graph
//! - [`camera::MotionExecutor`] - seam for custom camera motion
//! - [`options::Options`] - TOML-backed tuning (camera, thresholds, motion
//!   timing)
//!
//! # Architecture
//!
//! A click is handled in three stages. [`input`] decides whether a
//! press/release pair was a click or a drag. [`picking`] casts a ray through
//! the pointer and finds the nearest clickable object, falling back to the
//! floor. [`navigation`] classifies the hit, computes the target pose from
//! the panel's size and the [`viewport`] shape, and hands it to the motion
//! executor. Nothing here touches the GPU; the host renders.

pub mod camera;
pub mod error;
pub mod input;
pub mod navigation;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
pub mod viewport;
