//! Decoded mesh data structures.
//!
//! This module provides:
//! - [`Mesh`] - flat interleaved vertex buffer, triangle index list, groups
//! - [`Group`] - one directive-driven index range
//! - [`IndexFormat`] - index width hint for downstream GPU upload
//! - [`StrideLayout`] - byte layout of one interleaved vertex record

mod data;
mod layout;

pub use data::{Group, IndexFormat, Mesh};
pub use layout::StrideLayout;
