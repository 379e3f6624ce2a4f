use std::{fmt::Display, hash::Hash, str::FromStr};

use crate::error::VersionError;

pub trait Version: Display + FromStr<Err = VersionError> + Ord + Hash + Clone {
    /// Check if this version satisfies a minimum requirement
    #[inline]
    fn is_at_least(&self, required: &Self) -> bool {
        self >= required
    }
}

/// Sort versions from newer to older, keeping the input order of equal ones
pub fn newest_first<V: Version>(versions: &mut [V]) {
    versions.sort_by(|a, b| b.cmp(a));
}

pub mod generic_version;
pub mod runtime_version;
