//! Explicit time marching of a 1D field with a fixed 3 point stencil.
//!
//! Each step computes, for every interior point,
//! `next[i] = left * current[i - 1] + center * current[i] + right * current[i + 1]`
//! in parallel, then promotes `next` to `current`.
//! Ghost cells at both ends stay zero for the whole run.

pub mod args;
pub mod build_info;
pub mod config;
pub mod domain;
pub mod error;
pub mod initial_conditions;
pub mod par_slice;
pub mod par_stencil;
pub mod simulation;
pub mod solver;
pub mod stencil;
pub mod util;

pub use error::{StencilError, StencilResult};
