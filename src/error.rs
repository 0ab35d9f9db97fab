use thiserror::Error;

use crate::{Flag, FlagKind};

/// Result type for flag lookups
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal misuse of the commandline
///
/// Optional lookups never produce these. They come out of default-bearing
/// lookups and [`Parser::require_str`](crate::Parser::require_str), and are
/// meant to be handed to [`Error::exit`] at the program's entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A mandatory flag was absent
    #[error("Mandatory flag `{short}` or `{long}` hasn't been passed")]
    MandatoryNotPassed { short: String, long: String },

    /// A flag that had to be present was absent
    #[error("Flag `{short}` or `{long}` hasn't been passed")]
    NotPassed { short: String, long: String },

    /// A flag's value had no leading number
    #[error("Failed to parse `{value}` to {expected}, value of the `{short}` or `{long}` flag.")]
    InvalidValue {
        short: String,
        long: String,
        value: String,
        expected: &'static str,
    },
}

impl Error {
    pub(crate) fn mandatory_not_passed(flag: &Flag<'_>) -> Self {
        Error::MandatoryNotPassed {
            short: flag.short.to_string(),
            long: flag.long.to_string(),
        }
    }

    pub(crate) fn not_passed(short: &str, long: &str) -> Self {
        Error::NotPassed {
            short: short.to_string(),
            long: long.to_string(),
        }
    }

    pub(crate) fn invalid_value(flag: &Flag<'_>, value: &str, kind: FlagKind) -> Self {
        Error::InvalidValue {
            short: flag.short.to_string(),
            long: flag.long.to_string(),
            value: value.to_string(),
            expected: kind.name(),
        }
    }

    /// Returns true if a mandatory flag was missing
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Error::MandatoryNotPassed { .. })
    }

    /// Returns true if a value failed to convert
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Error::InvalidValue { .. })
    }

    /// Status the process exits with for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Exit the program, printing the error to stderr
    pub fn exit(&self) -> ! {
        eprintln!("error: {}", self);
        std::process::exit(self.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::mandatory(
        Error::mandatory_not_passed(&Flag::string("-o", "--output")),
        "Mandatory flag `-o` or `--output` hasn't been passed"
    )]
    #[case::not_passed(
        Error::not_passed("-o", "--output"),
        "Flag `-o` or `--output` hasn't been passed"
    )]
    #[case::invalid_integer(
        Error::invalid_value(&Flag::integer("-i", "--integer"), "abc", FlagKind::Integer),
        "Failed to parse `abc` to integer, value of the `-i` or `--integer` flag."
    )]
    #[case::invalid_float(
        Error::invalid_value(&Flag::float("-f", "--float"), "notanumber", FlagKind::Float),
        "Failed to parse `notanumber` to float, value of the `-f` or `--float` flag."
    )]
    fn test_error_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_predicates() {
        let err = Error::mandatory_not_passed(&Flag::string("-o", "--output"));
        assert!(err.is_mandatory());
        assert!(!err.is_invalid_value());

        let err = Error::not_passed("-o", "--output");
        assert!(!err.is_mandatory());
        assert!(!err.is_invalid_value());
    }
}
