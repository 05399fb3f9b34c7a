//! Diagnostic codes for categorizing errors and warnings.
//!
//! Codes render as `{prefix}{number:03}`, matching the codes the lexer
//! reports (`E000` .. `E005`).
//!
//! # Examples
//!
//! ```
//! use parley_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::new("E", 2);
//! assert_eq!(code.to_string(), "E002");
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
