mod error;
mod numeric;
mod parser;

pub use error::{Error, Result};
pub use parser::Parser;
pub use stoml::Value;

use std::fmt;

/// Help text used when a flag is declared without one
pub const EMPTY_HELP: &str = "[EMPTY]";

/// Column the help text of a rendered flag is aligned to
const HELP_WIDTH: usize = 24;

/// The type of value a flag carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// The next token, verbatim
    String,
    /// A base-10 integer read from the leading part of the next token
    Integer,
    /// A floating-point number read from the leading part of the next token
    Float,
    /// No value, only whether the flag appears at all
    Presence,
}

impl FlagKind {
    /// Name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            FlagKind::String => "string",
            FlagKind::Integer => "integer",
            FlagKind::Float => "float",
            FlagKind::Presence => "presence",
        }
    }
}

/// Declaration of a single flag
///
/// Every constructor is `const`, so flags can be declared as statics:
///
/// ```
/// use flagscan::Flag;
///
/// static INCLUDE: Flag = Flag::string("-I", "--include").help("Path to include files");
/// static OUTPUT: Flag = Flag::string("-o", "--output").mandatory();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag<'a> {
    /// Short form (e.g., "-I")
    pub short: &'a str,
    /// Long form (e.g., "--include")
    pub long: &'a str,
    /// Help description
    pub help: &'a str,
    /// Whether a default-bearing lookup must find this flag
    pub mandatory: bool,
    /// The type of value this flag carries
    pub kind: FlagKind,
}

impl<'a> Flag<'a> {
    /// Create a new flag with default help text that is not mandatory
    pub const fn new(short: &'a str, long: &'a str, kind: FlagKind) -> Self {
        Self {
            short,
            long,
            help: EMPTY_HELP,
            mandatory: false,
            kind,
        }
    }

    /// Create a new string flag
    pub const fn string(short: &'a str, long: &'a str) -> Self {
        Self::new(short, long, FlagKind::String)
    }

    /// Create a new integer flag
    pub const fn integer(short: &'a str, long: &'a str) -> Self {
        Self::new(short, long, FlagKind::Integer)
    }

    /// Create a new floating-point flag
    pub const fn float(short: &'a str, long: &'a str) -> Self {
        Self::new(short, long, FlagKind::Float)
    }

    /// Create a new presence-only flag
    pub const fn presence(short: &'a str, long: &'a str) -> Self {
        Self::new(short, long, FlagKind::Presence)
    }

    /// Set the help description
    pub const fn help(mut self, help: &'a str) -> Self {
        self.help = help;
        self
    }

    /// Mark this flag as mandatory
    pub const fn mandatory(self) -> Self {
        self.required(true)
    }

    /// Set the mandatory marker explicitly
    pub const fn required(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Returns true if `token` is either name of this flag
    pub fn matches(&self, token: &str) -> bool {
        token == self.short || token == self.long
    }
}

impl fmt::Display for Flag<'_> {
    /// Renders as `[-I, --include]` with the help text aligned to a fixed column
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.short.chars().count() + self.long.chars().count() + 4;
        let pad = HELP_WIDTH.saturating_sub(names).max(1);
        write!(
            f,
            "[{}, {}]{:>pad$}{}",
            self.short,
            self.long,
            " ",
            self.help,
            pad = pad
        )
    }
}

/// Format a usage block listing the given flags
///
/// ```
/// use flagscan::{Flag, usage};
///
/// let out = usage(&[&Flag::integer("-i", "--integer")]);
/// assert_eq!(out, "Usage:\n  [-i, --integer]         [EMPTY]\n");
/// ```
pub fn usage(flags: &[&Flag<'_>]) -> String {
    let mut help = String::from("Usage:\n");
    for flag in flags {
        help.push_str(&format!("  {}\n", flag));
    }
    help
}
