use log::{debug, trace};
use stoml::Value;

use crate::error::{Error, Result};
use crate::numeric::{leading_float, leading_int};
use crate::{Flag, FlagKind};

/// Typed flag lookup over raw commandline tokens
///
/// The parser only borrows the tokens, and every lookup scans them again from
/// the start, so lookups can be made in any order and any number of times.
/// Token 0 is normally the program name; it is scanned like any other token.
///
/// ```
/// use flagscan::{Flag, Parser};
///
/// static INCLUDE: Flag = Flag::string("-I", "--include");
///
/// let args = ["prog", "-I", "/usr/include"];
/// let parser = Parser::new(&args);
/// assert_eq!(parser.parse_str(&INCLUDE), Some("/usr/include"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a, S = String> {
    args: &'a [S],
}

impl<'a, S: AsRef<str>> Parser<'a, S> {
    pub fn new(args: &'a [S]) -> Self {
        Self { args }
    }

    /// The tokens this parser scans
    pub fn args(&self) -> &'a [S] {
        self.args
    }

    fn position(&self, short: &str, long: &str) -> Option<usize> {
        self.args.iter().position(|token| {
            let token = token.as_ref();
            token == short || token == long
        })
    }

    /// Find the token following the first occurrence of `short` or `long`
    ///
    /// Returns `None` when neither name appears, and also when the first
    /// match is the last token.
    pub fn find(&self, short: &str, long: &str) -> Option<&'a str> {
        let args = self.args;
        let Some(i) = self.position(short, long) else {
            trace!("`{}`/`{}` not in arguments", short, long);
            return None;
        };
        match args.get(i + 1) {
            Some(value) => {
                trace!("`{}`/`{}` matched at {}", short, long, i);
                Some(value.as_ref())
            }
            None => {
                trace!("`{}`/`{}` matched at {} with no value", short, long, i);
                None
            }
        }
    }

    /// The raw value token of a flag
    pub fn raw(&self, flag: &Flag<'_>) -> Option<&'a str> {
        self.find(flag.short, flag.long)
    }

    /// Returns true if either name of the flag appears, with or without a value
    pub fn passed(&self, flag: &Flag<'_>) -> bool {
        self.position(flag.short, flag.long).is_some()
    }

    /// The value of a flag, converted according to its kind
    ///
    /// A presence flag yields `Boolean(true)` when passed. Absent flags and
    /// values that fail to convert yield `None`; the mandatory marker is not
    /// checked here.
    pub fn parse(&self, flag: &Flag<'_>) -> Option<Value> {
        match flag.kind {
            FlagKind::String => self.parse_str(flag).map(|s| Value::String(s.to_string())),
            FlagKind::Integer => self.parse_int(flag).map(Value::Integer),
            FlagKind::Float => self.parse_float(flag).map(Value::Float),
            FlagKind::Presence => self.passed(flag).then_some(Value::Boolean(true)),
        }
    }

    /// The value of a flag converted according to its kind, or `default`
    ///
    /// Fails if the flag is mandatory and absent, or if its value does not
    /// convert.
    pub fn parse_or(&self, flag: &Flag<'_>, default: Value) -> Result<Value> {
        match flag.kind {
            FlagKind::Presence => {
                if self.passed(flag) {
                    return Ok(Value::Boolean(true));
                }
                self.fallback(flag, default)
            }
            kind => {
                let Some(raw) = self.raw(flag) else {
                    return self.fallback(flag, default);
                };
                let value = match kind {
                    FlagKind::Integer => leading_int(raw).map(Value::Integer),
                    FlagKind::Float => leading_float(raw).map(Value::Float),
                    _ => Some(Value::String(raw.to_string())),
                };
                value.ok_or_else(|| invalid(flag, raw, kind))
            }
        }
    }

    /// The value of a flag as a string
    pub fn parse_str(&self, flag: &Flag<'_>) -> Option<&'a str> {
        self.raw(flag)
    }

    /// The value of a flag as a string, or `default`
    pub fn parse_str_or(&self, flag: &Flag<'_>, default: &'a str) -> Result<&'a str> {
        match self.raw(flag) {
            Some(value) => Ok(value),
            None => self.fallback(flag, default),
        }
    }

    /// The value of a flag read as an integer
    pub fn parse_int(&self, flag: &Flag<'_>) -> Option<i64> {
        self.raw(flag).and_then(leading_int)
    }

    /// The value of a flag read as an integer, or `default`
    pub fn parse_int_or(&self, flag: &Flag<'_>, default: i64) -> Result<i64> {
        match self.raw(flag) {
            Some(raw) => leading_int(raw).ok_or_else(|| invalid(flag, raw, FlagKind::Integer)),
            None => self.fallback(flag, default),
        }
    }

    /// The value of a flag read as a floating-point number
    pub fn parse_float(&self, flag: &Flag<'_>) -> Option<f64> {
        self.raw(flag).and_then(leading_float)
    }

    /// The value of a flag read as a floating-point number, or `default`
    pub fn parse_float_or(&self, flag: &Flag<'_>, default: f64) -> Result<f64> {
        match self.raw(flag) {
            Some(raw) => leading_float(raw).ok_or_else(|| invalid(flag, raw, FlagKind::Float)),
            None => self.fallback(flag, default),
        }
    }

    /// The value of a flag as a string, failing if it was not passed
    ///
    /// Unlike the default-bearing lookups this fails whether or not the flag
    /// is mandatory.
    pub fn require_str(&self, flag: &Flag<'_>) -> Result<&'a str> {
        self.raw(flag).ok_or_else(|| {
            debug!("`{}`/`{}` required but not passed", flag.short, flag.long);
            Error::not_passed(flag.short, flag.long)
        })
    }

    fn fallback<T>(&self, flag: &Flag<'_>, default: T) -> Result<T> {
        if flag.mandatory {
            debug!("mandatory `{}`/`{}` not passed", flag.short, flag.long);
            return Err(Error::mandatory_not_passed(flag));
        }
        debug!("`{}`/`{}` not passed, using default", flag.short, flag.long);
        Ok(default)
    }
}

fn invalid(flag: &Flag<'_>, raw: &str, kind: FlagKind) -> Error {
    debug!(
        "`{}` is not a valid {} for `{}`/`{}`",
        raw,
        kind.name(),
        flag.short,
        flag.long
    );
    Error::invalid_value(flag, raw, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let args = ["prog", "-i", "1", "--integer", "2"];
        let parser = Parser::new(&args);
        assert_eq!(parser.parse_int(&Flag::integer("-i", "--integer")), Some(1));
    }

    #[test]
    fn test_flag_name_can_be_a_value() {
        // "-o" is taken as the value of "-I", and is also found as a flag
        let args = ["prog", "-I", "-o", "out"];
        let parser = Parser::new(&args);
        assert_eq!(parser.parse_str(&Flag::string("-I", "--include")), Some("-o"));
        assert_eq!(parser.parse_str(&Flag::string("-o", "--output")), Some("out"));
    }

    #[test]
    fn test_program_name_is_scanned() {
        let args = ["-x", "value"];
        let parser = Parser::new(&args);
        assert_eq!(parser.find("-x", "--x"), Some("value"));
    }

    #[test]
    fn test_no_prefix_or_inline_value() {
        let args = ["prog", "--include=/usr/include", "-I/usr/include"];
        let parser = Parser::new(&args);
        let flag = Flag::string("-I", "--include");
        assert!(!parser.passed(&flag));
        assert_eq!(parser.parse_str(&flag), None);
    }

    #[test]
    fn test_owned_strings() {
        let args: Vec<String> = vec!["prog".into(), "--float".into(), "2.5".into()];
        let parser = Parser::new(&args);
        assert_eq!(parser.parse_float(&Flag::float("-f", "--float")), Some(2.5));
    }
}
