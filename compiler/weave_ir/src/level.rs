//! Log severity levels.

use std::fmt;

/// Severity of a log statement, ordered from least to most severe.
///
/// `None` is the sink's "never log" level; a descriptor may still name it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
    None,
}

impl LogLevel {
    /// All levels, least severe first.
    pub const ALL: &[LogLevel] = &[
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::None,
    ];

    /// Level name as written in declarations (`LogLevel::Debug` → `"Debug"`).
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Information => "Information",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Critical => "Critical",
            LogLevel::None => "None",
        }
    }

    /// The legacy extension method that logs at this level, if any.
    pub fn legacy_method(self) -> Option<&'static str> {
        match self {
            LogLevel::Trace => Some("LogTrace"),
            LogLevel::Debug => Some("LogDebug"),
            LogLevel::Information => Some("LogInformation"),
            LogLevel::Warning => Some("LogWarning"),
            LogLevel::Error => Some("LogError"),
            LogLevel::Critical => Some("LogCritical"),
            LogLevel::None => None,
        }
    }

    /// Inverse of [`LogLevel::legacy_method`].
    pub fn from_legacy_method(method: &str) -> Option<LogLevel> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.legacy_method() == Some(method))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a level name like `"Warning"`. Case-insensitive.
impl std::str::FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
