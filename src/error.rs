//! This module implements `DateError`.

use alloc::borrow::Cow;
use core::fmt;

use calendar_date_provider::TimeZoneProviderError;

/// `DateError`'s error kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A host or library failure not caused by the caller's input.
    #[default]
    Generic,
    /// A value that is not a real, normalized calendar date or day count.
    InvalidInput,
    /// A violated precondition on the relationship between arguments.
    InvalidArgument,
    /// The time zone provider could not resolve the request.
    TimeZone,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::InvalidInput => "InvalidInput",
            Self::InvalidArgument => "InvalidArgument",
            Self::TimeZone => "TimeZoneError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `calendar_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl DateError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput)
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Create a time zone error.
    #[must_use]
    pub fn time_zone() -> Self {
        Self::new(ErrorKind::TimeZone)
    }

    /// Creates an assertion error
    #[must_use]
    pub(crate) fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_message("Implementation error: assertion failed.")
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for DateError {}

impl From<TimeZoneProviderError> for DateError {
    fn from(value: TimeZoneProviderError) -> Self {
        let msg = match value {
            TimeZoneProviderError::UnknownIdentifier => "Unknown time zone identifier.",
            TimeZoneProviderError::Tzif(msg) => msg,
            TimeZoneProviderError::InstantOutOfRange => "Instant is outside the supported range.",
        };
        Self::time_zone().with_message(msg)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{DateError, ErrorKind};
    use calendar_date_provider::TimeZoneProviderError;

    #[test]
    fn display_includes_kind_and_message() {
        let err = DateError::invalid_input().with_message("month out of range");
        assert_eq!(err.to_string(), "InvalidInput: month out of range");
        assert_eq!(DateError::invalid_argument().to_string(), "InvalidArgument");
    }

    #[test]
    fn provider_errors_map_to_time_zone() {
        let err = DateError::from(TimeZoneProviderError::UnknownIdentifier);
        assert_eq!(err.kind(), ErrorKind::TimeZone);
        assert_eq!(err.message(), "Unknown time zone identifier.");
    }
}
