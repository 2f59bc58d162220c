// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
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
// Float comparison: interpolation math compares against 0.0 and 1.0
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! Progress-driven animation engine behind an interactive
//! whale-watching site: the monthly heat-map cross-fade and the
//! scroll/timer-synced 3D whale glides.
//!
//! Both visual systems are instances of one abstraction — a scalar
//! phase in [0, 1], advanced by a clock or pushed in from outside,
//! resolved through a validated piecewise curve into renderer
//! attributes. The map library and 3D library stay behind narrow sink
//! traits; this crate only computes values.
//!
//! # Key entry points
//!
//! - [`morph::MorphController`] - clock-driven month cross-fade over
//!   heat layers
//! - [`scene::SceneController`] - externally-driven 3D transform
//!   resolution
//! - [`animation::TransformCurve`] - the shared segment model
//! - [`options::Options`] - TOML-preset configuration
//!
//! # Architecture
//!
//! Controllers are plain owned state machines stepped by the host: a
//! frame scheduler delivers timestamps to the morph side, scroll or a
//! [`scene::TimelinePlayer`] pushes progress to the scene side. Each
//! controller owns its phase, endpoints, and curve; instances never
//! share state and interleave freely on one thread.

pub mod animation;
pub mod driver;
pub mod error;
pub mod morph;
pub mod options;
pub mod scene;
pub mod sink;
pub mod util;
