use serde::Serialize;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use super::Version;
use crate::{
    error::{Result, VersionError},
    parser::components,
};

pub const DEFAULT_DELIMITERS: &str = ".";

/// A version made of any number of non-negative sections, e.g. `5.10.0.11`
#[derive(Debug, Clone, Serialize)]
pub struct GenericVersion {
    sections: Vec<u64>,
    #[serde(skip)]
    separator: char,
}

impl GenericVersion {
    /// Parse `input`, splitting on every character found in `delimiters`
    pub fn parse(input: &str, delimiters: &str) -> Result<Self> {
        let mut sections = components(input, delimiters)?;

        // nothing to parse means version 0
        if sections.is_empty() {
            sections.push(0);
        }

        Ok(Self {
            sections,
            separator: delimiters.chars().next().unwrap_or('.'),
        })
    }

    #[inline]
    pub fn sections(&self) -> &[u64] {
        &self.sections
    }

    /// Sections with the trailing zeros removed, `1.2.0.0` and `1.2` share
    /// the same significant part
    fn significant(&self) -> &[u64] {
        let len = self
            .sections
            .iter()
            .rposition(|&n| n != 0)
            .map_or(0, |i| i + 1);

        &self.sections[..len]
    }
}

impl PartialEq for GenericVersion {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for GenericVersion {}

impl Ord for GenericVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // slice ordering treats a missing section as smaller than any
        // section, which only matters for non-zero ones once trimmed
        self.significant().cmp(other.significant())
    }
}

impl PartialOrd for GenericVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for GenericVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for GenericVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections = self.sections.iter();

        if let Some(first) = sections.next() {
            write!(f, "{}", first)?;
        }
        for section in sections {
            write!(f, "{}{}", self.separator, section)?;
        }

        Ok(())
    }
}

impl FromStr for GenericVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, DEFAULT_DELIMITERS)
    }
}

impl Version for GenericVersion {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn v(input: &str) -> GenericVersion {
        input.parse().unwrap()
    }

    fn hash_of(version: &GenericVersion) -> u64 {
        let mut hasher = DefaultHasher::new();
        version.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_parse() {
        assert_eq!(v("5.10.0").sections(), &[5, 10, 0]);
        assert_eq!(v("1..2.").sections(), &[1, 2]);
        assert_eq!(
            GenericVersion::parse("5.15.12-100", ".-").unwrap().sections(),
            &[5, 15, 12, 100]
        );
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(v("").sections(), &[0]);
        assert_eq!(v("...").sections(), &[0]);
        assert_eq!(v(""), v("0.0"));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            GenericVersion::parse("1.x.0", "."),
            Err(VersionError::NotANumber {
                component: "x".to_owned()
            })
        );
        assert_eq!(
            GenericVersion::parse("1.-2", "."),
            Err(VersionError::NegativeValue {
                component: "-2".to_owned()
            })
        );
        assert!(GenericVersion::parse("1. 2", ".").is_err());
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(v("1.0"), v("1"));
        assert_eq!(v("1.2.0"), v("1.2"));
        assert_eq!(v("1.2.0").cmp(&v("1.2")), Ordering::Equal);
        assert_eq!(hash_of(&v("1.2.0")), hash_of(&v("1.2")));
        assert_eq!(hash_of(&v("1.0.0.0")), hash_of(&v("1")));
    }

    #[test]
    fn test_ordering() {
        assert!(v("1.2") < v("1.2.1"));
        assert!(v("1.2.1") > v("1.2"));
        assert!(v("1.10") > v("1.9"));
        assert!(v("2") > v("1.99.99"));
        assert!(v("0.0.1") > v(""));
        assert!(v("1.0.1") > v("1"));

        let (a, b, c) = (v("1.2"), v("1.2.0.1"), v("1.3"));
        assert!(a < b && b < c && a < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_render() {
        assert_eq!(v("1..2.").to_string(), "1.2");
        assert_eq!(v("").to_string(), "0");

        let dashed = GenericVersion::parse("-5-10--11", "-.").unwrap();
        assert_eq!(dashed.to_string(), "5-10-11");
        assert_eq!(GenericVersion::parse(&dashed.to_string(), "-.").unwrap(), dashed);

        for input in ["1.2.3", "0", "10.0.0.0", "3..4"] {
            let version = v(input);
            assert_eq!(v(&version.to_string()), version);
        }
    }

    #[test]
    fn test_is_at_least() {
        assert!(v("1.8").is_at_least(&v("1.8.0")));
        assert!(v("1.9").is_at_least(&v("1.8.5")));
        assert!(!v("1.8").is_at_least(&v("1.8.0.1")));
    }
}
