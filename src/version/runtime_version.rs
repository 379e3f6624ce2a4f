use serde::Serialize;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};
use tracing::debug;

use super::Version;
use crate::{
    error::{Result, VersionError},
    parser::{component, fragments, split_runtime, IDENTIFIER_MARKER, UPDATE_MARKER},
    platform::{EnvSource, VersionSource},
};

const COMPONENTS: usize = 3;

/// A runtime version in the form of `major.middle.minor[_update][-identifier]`
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeVersion {
    major: u64,
    middle: u64,
    minor: u64,
    update: u64,
    identifier: Option<String>,
}

impl RuntimeVersion {
    pub fn parse(input: &str) -> Result<Self> {
        let parts = split_runtime(input);

        let numbers: Vec<&str> = fragments(parts.numbers, ".").collect();
        if numbers.len() != COMPONENTS {
            return Err(VersionError::WrongComponentCount {
                expected: COMPONENTS,
                found: numbers.len(),
            });
        }

        Ok(Self {
            major: component(numbers[0])?,
            middle: component(numbers[1])?,
            minor: component(numbers[2])?,
            update: parts.update.map_or(Ok(0), component)?,
            identifier: parts.identifier.map(str::to_owned),
        })
    }

    /// Parse the version reported by the host platform
    pub fn current() -> Result<Self> {
        Self::from_source(&EnvSource::default())
    }

    /// Parse the version handed out by `source`
    pub fn from_source(source: &dyn VersionSource) -> Result<Self> {
        let reported = source.read().ok_or_else(|| VersionError::Unavailable {
            source_name: source.name(),
        })?;
        debug!("{} reported runtime version {:?}", source.name(), reported);

        Self::parse(&reported)
    }

    #[inline]
    pub fn major(&self) -> u64 {
        self.major
    }

    #[inline]
    pub fn middle(&self) -> u64 {
        self.middle
    }

    #[inline]
    pub fn minor(&self) -> u64 {
        self.minor
    }

    #[inline]
    pub fn update(&self) -> u64 {
        self.update
    }

    #[inline]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Everything that takes part in comparison, the identifier text does not
    fn key(&self) -> (u64, u64, u64, u64, bool) {
        (
            self.major,
            self.middle,
            self.minor,
            self.update,
            self.identifier.is_some(),
        )
    }
}

impl PartialEq for RuntimeVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RuntimeVersion {}

impl Ord for RuntimeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.key(), other.key());

        (a.0, a.1, a.2, a.3)
            .cmp(&(b.0, b.1, b.2, b.3))
            // a release without identifier is newer than a qualified one
            .then_with(|| b.4.cmp(&a.4))
    }
}

impl PartialOrd for RuntimeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for RuntimeVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.middle, self.minor)?;
        if self.update != 0 {
            write!(f, "{}{}", UPDATE_MARKER, self.update)?;
        }
        if let Some(identifier) = &self.identifier {
            write!(f, "{}{}", IDENTIFIER_MARKER, identifier)?;
        }

        Ok(())
    }
}

impl FromStr for RuntimeVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Version for RuntimeVersion {}
