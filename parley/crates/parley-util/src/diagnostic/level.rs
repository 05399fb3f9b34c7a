//! Diagnostic severity levels.

use std::fmt;

use serde::Serialize;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use parley_util::diagnostic::Level;
///
/// assert!(Level::Error.is_error());
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// A problem that makes the input invalid
    Error,
    /// Suspicious input that is still accepted
    Warning,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Lowercase name used when rendering
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
