use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "serde_repr")]
use serde_repr::{Deserialize_repr, Serialize_repr};
#[cfg(feature = "strum")]
use strum_macros::{AsRefStr, EnumIter};

/// Status codes used to categorize errors.
///
/// # Ranges:
/// - 1xxx: General / configuration errors
/// - 2xxx: Data errors
/// - 6xxx: IO
/// - 8xxx: Text format errors
///
/// # Implementation:
/// - `num_enum::TryFromPrimitive` gives a native `TryFrom<u32>`.
/// - optional: `strum` for `AsRefStr`/`EnumIter` (feature = "strum").
/// - optional: `serde_repr` to serialize as a number (feature = "serde_repr").
#[cfg_attr(feature = "strum", derive(AsRefStr, EnumIter))]
#[cfg_attr(feature = "serde_repr", derive(Serialize_repr, Deserialize_repr))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 1xxx: General ===
    Internal = 1003,
    InvalidConfig = 1006,

    // === 2xxx: Data ===
    NotFound = 2000,
    InvalidData = 2009,

    // === 6xxx: IO ===
    Io = 6000,
    Timeout = 6002,
    UnexpectedEof = 6007,

    // === 8xxx: Text format ===
    InvalidUtf8 = 8004,
    SizeLimit = 8007,
    IllegalEscape = 8012,
    MissingSeparator = 8013,
    EmptyKey = 8014,
    UnterminatedContinuation = 8015,
}

/// Level at which a failure with a given code is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Error,
}

////////////////////////////////////////////////////////////////////////////////
// Inherent methods
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    /// Numeric representation of the status code.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Tries to get a `StatusCode` variant from a `u32`.
    ///
    /// Uses `TryFrom<u32>` from `num_enum`; returns `None` if the value does
    /// not match any variant.
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Whether the problem lies in the caller's input rather than in the
    /// environment.
    ///
    /// Data errors (`2xxx`), format errors (`8xxx`) and `InvalidConfig`.
    pub fn is_client_error(&self) -> bool {
        matches!(self.code(), 2000..=2999)
            || self.is_format_error()
            || *self == Self::InvalidConfig
    }

    /// Error in the `.properties` text itself (range 8xxx).
    pub fn is_format_error(&self) -> bool {
        (8000..=8999).contains(&self.code())
    }

    /// Recommended log level for this code.
    ///
    /// Bad input is the caller's to fix and is reported as a warning; IO
    /// and internal failures are errors.
    pub fn log_level(&self) -> LogLevel {
        if self.is_client_error() {
            LogLevel::Warn
        } else {
            LogLevel::Error
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Trait implementations for StatusCode
////////////////////////////////////////////////////////////////////////////////

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        // With the "strum" feature use the AsRefStr name, Debug otherwise.
        #[cfg(feature = "strum")]
        {
            write!(f, "{} ({})", self.as_ref(), self.code())
        }
        #[cfg(not(feature = "strum"))]
        {
            write!(f, "{:?} ({})", self, self.code())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
