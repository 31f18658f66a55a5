//! Kernel utilities shared by every consumer of the fixtures.
//! Keep this crate lightweight: pure functions over primitive values, plus the settings loader.
//!
//! ## Configuration accessor
//! ```rust
//! use fkit_kernel::config::{get_config, is_feature_enabled};
//!
//! assert_eq!(get_config().timeout, 30);
//! assert!(is_feature_enabled("caching"));
//! assert!(!is_feature_enabled("metrics"));
//! ```
//!
//! ## Utilities
//! ```rust
//! use fkit_kernel::utils::{calculate_total, format_message};
//! use fkit_kernel::helpers::truncate_string;
//!
//! assert_eq!(calculate_total(&[1, 2, 3]), 6);
//! assert_eq!(format_message("World", 42), "Hello World, you have 42 items.");
//! assert_eq!(truncate_string("abcdefghij", 5), "ab...");
//! ```
pub mod config;
pub mod utils;
pub mod helpers;
pub mod prelude;

pub use fkit_domain as domain;
