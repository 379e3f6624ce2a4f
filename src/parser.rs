use nom::{
    bytes::complete::take_till,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, rest},
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::{Result, VersionError};

pub const UPDATE_MARKER: char = '_';
pub const IDENTIFIER_MARKER: char = '-';

/// Slices of a runtime version string, not yet validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeParts<'a> {
    pub numbers: &'a str,
    pub update: Option<&'a str>,
    pub identifier: Option<&'a str>,
}

fn version_digit(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |x: &str| x.parse())(input)
}

fn negative_digit(input: &str) -> IResult<&str, &str> {
    preceded(char('-'), digit1)(input)
}

fn numbers(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == UPDATE_MARKER || c == IDENTIFIER_MARKER)(input)
}

fn update(input: &str) -> IResult<&str, &str> {
    preceded(char(UPDATE_MARKER), take_till(|c: char| c == IDENTIFIER_MARKER))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    preceded(char(IDENTIFIER_MARKER), rest)(input)
}

fn runtime_parts(input: &str) -> IResult<&str, RuntimeParts<'_>> {
    tuple((numbers, opt(update), opt(identifier)))(input).map(
        |(next, (numbers, update, identifier))| {
            (
                next,
                RuntimeParts {
                    numbers,
                    update,
                    identifier,
                },
            )
        },
    )
}

/// Parse a single version component
pub fn component(input: &str) -> Result<u64> {
    if let Ok((_, n)) = all_consuming(version_digit)(input) {
        return Ok(n);
    }

    if all_consuming(negative_digit)(input).is_ok() {
        Err(VersionError::NegativeValue {
            component: input.to_owned(),
        })
    } else {
        Err(VersionError::NotANumber {
            component: input.to_owned(),
        })
    }
}

/// Split on any of `delimiters`, dropping empty fragments
pub fn fragments<'a>(input: &'a str, delimiters: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    input
        .split(move |c: char| delimiters.contains(c))
        .filter(|s| !s.is_empty())
}

/// Parse every fragment of `input` as a version component
pub fn components(input: &str, delimiters: &str) -> Result<Vec<u64>> {
    fragments(input, delimiters).map(component).collect()
}

/// Cut a runtime version string at its update and identifier markers
///
/// Every piece may be empty and the identifier takes the rest of the input,
/// so any string splits.
pub fn split_runtime(input: &str) -> RuntimeParts<'_> {
    match runtime_parts(input) {
        Ok((_, parts)) => parts,
        Err(_) => RuntimeParts {
            numbers: input,
                update: None,
                identifier: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component() {
        assert_eq!(component("42"), Ok(42));
        assert_eq!(component("007"), Ok(7));
        assert_eq!(
            component("x"),
            Err(VersionError::NotANumber {
                component: "x".to_owned()
            })
        );
        assert_eq!(
            component("+5"),
            Err(VersionError::NotANumber {
                component: "+5".to_owned()
            })
        );
        assert_eq!(
            component("-5"),
            Err(VersionError::NegativeValue {
                component: "-5".to_owned()
            })
        );
        assert_eq!(
            component("99999999999999999999999"),
            Err(VersionError::NotANumber {
                component: "99999999999999999999999".to_owned()
            })
        );
    }

    #[test]
    fn test_fragments() {
        assert_eq!(
            fragments("1..2.3.", ".").collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
        assert_eq!(
            fragments("5.10-11", ".-").collect::<Vec<_>>(),
            vec!["5", "10", "11"]
        );
        assert_eq!(fragments("", ".").count(), 0);
        assert_eq!(fragments("1.2", "").collect::<Vec<_>>(), vec!["1.2"]);
    }

    #[test]
    fn test_components() {
        assert_eq!(components("1.2.3", "."), Ok(vec![1, 2, 3]));
        assert_eq!(components("...", "."), Ok(vec![]));
        assert_eq!(
            components("1.x.0", "."),
            Err(VersionError::NotANumber {
                component: "x".to_owned()
            })
        );
    }

    #[test]
    fn test_split_runtime() {
        assert_eq!(
            split_runtime("1.8.0"),
            RuntimeParts {
                numbers: "1.8.0",
                update: None,
                identifier: None,
            }
        );
        assert_eq!(
            split_runtime("1.8.0_201"),
            RuntimeParts {
                numbers: "1.8.0",
                update: Some("201"),
                identifier: None,
            }
        );
        assert_eq!(
            split_runtime("1.8.0-ea"),
            RuntimeParts {
                numbers: "1.8.0",
                update: None,
                identifier: Some("ea"),
            }
        );
        assert_eq!(
            split_runtime("1.8.0_201-b09-custom"),
            RuntimeParts {
                numbers: "1.8.0",
                update: Some("201"),
                identifier: Some("b09-custom"),
            }
        );
        assert_eq!(
            split_runtime("1.8.0_"),
            RuntimeParts {
                numbers: "1.8.0",
                update: Some(""),
                identifier: None,
            }
        );

        assert_eq!(
            split_runtime(""),
            RuntimeParts {
                numbers: "",
                update: None,
                identifier: None,
            }
        );
        assert_eq!(
            split_runtime("_-"),
            RuntimeParts {
                numbers: "",
                update: Some(""),
                identifier: Some(""),
            }
        );
    }
}
