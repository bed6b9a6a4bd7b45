//! Native Rust ports of the GSL random number generators.
//!
//! Pick an algorithm from the [`catalog`], allocate an [`Rng`] for it and draw raw
//! values, uniform doubles or unbiased bounded integers. Generator state can be
//! cloned, copied between generators of the same type, and dumped to or
//! restored from its raw byte form.
//!
//! None of these generators is cryptographically secure.

pub mod catalog;
pub mod config;
pub mod error;

mod algorithms;
mod codec;
mod persist;
mod rng;
mod sample;

pub use catalog::{RngInfo, RngType};
pub use config::RngConfig;
pub use error::{Result, RngError};
pub use rng::Rng;
pub use rand_core::*;

#[cfg(test)] mod tests;
