//! Parsing and ordering of tool and runtime version strings.
//!
//! Two version schemes are provided: [`GenericVersion`], any number of
//! delimiter separated sections, and [`RuntimeVersion`], the fixed
//! `major.middle.minor[_update][-identifier]` form.

pub mod error;
pub mod parser;
pub mod platform;
pub mod version;

pub use error::VersionError;
pub use version::{
    generic_version::GenericVersion, newest_first, runtime_version::RuntimeVersion, Version,
};
