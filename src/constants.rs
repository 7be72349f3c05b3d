//! Constants used throughout envplate

/// STDIN indicator for the template argument
pub const STDIN_INDICATOR: &str = "-";

/// Sweeps the pass renderer makes over each kind of conditional block.
/// Nesting deeper than this is left partially unresolved.
pub const CONDITIONAL_SWEEPS: usize = 3;

/// Pattern for a tag name, shared by both renderers: one or more Unicode
/// word characters (letters, marks, digits, connector punctuation).
pub const NAME_PATTERN: &str = r"\w+";

/// Keyword separating a variable name from its fallback in `{{NAME|default:VALUE}}`
pub const DEFAULT_KEYWORD: &str = "|default:";

/// Tag delimiters
pub mod tags {
    pub const OPEN: &str = "{{";
    pub const CLOSE: &str = "}}";
    pub const SECTION: char = '#';
    pub const INVERTED: char = '^';
    pub const END: char = '/';
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
