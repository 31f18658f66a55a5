//! # Domain Models
//!
//! This crate contains the pure fixture types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, clock reads, or heavy logic. Just data, defaults, and simple helpers.

pub mod config;
pub mod constants;
pub mod features;
pub mod records;
pub mod settings;
