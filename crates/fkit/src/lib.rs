//! Facade crate for the fixture models and utilities.
//! Re-exports domain/kernel primitives so consumers depend on a single crate.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! ```rust
//! use fkit::prelude::*;
//!
//! assert!(is_feature_enabled("logging"));
//! assert_eq!(format_message("World", 42), "Hello World, you have 42 items.");
//! ```

pub use fkit_domain as domain;
pub use fkit_kernel as kernel;

pub mod prelude {
    pub use fkit_kernel::prelude::*;
}
