//! crates/konsol/src/method.rs
//! The closed set of console methods a logger forwards.

use std::fmt;
use std::str::FromStr;

use crate::console::Console;

/// Console methods exposed by every logger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// General output.
    Log,
    /// Informational output.
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
    /// Output followed by a stack trace.
    Trace,
    /// Inspection of a value.
    Dir,
    /// Starts a named timer.
    Time,
    /// Stops a named timer and reports the elapsed time.
    TimeEnd,
}

impl Method {
    /// Every method, in console declaration order.
    pub const ALL: [Self; 8] = [
        Self::Log,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Trace,
        Self::Dir,
        Self::Time,
        Self::TimeEnd,
    ];

    /// Console name of the method (`"timeEnd"` for [`Method::TimeEnd`]).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Trace => "trace",
            Self::Dir => "dir",
            Self::Time => "time",
            Self::TimeEnd => "timeEnd",
        }
    }

    /// Calls the matching method on `console`.
    pub(crate) fn dispatch(self, console: &dyn Console, module: &str, args: fmt::Arguments<'_>) {
        match self {
            Self::Log => console.log(module, args),
            Self::Info => console.info(module, args),
            Self::Warn => console.warn(module, args),
            Self::Error => console.error(module, args),
            Self::Trace => console.trace(module, args),
            Self::Dir => console.dir(module, args),
            Self::Time => console.time(module, args),
            Self::TimeEnd => console.time_end(module, args),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    /// Accepts the console spelling and the snake_case `time_end`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(Self::Log),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "trace" => Ok(Self::Trace),
            "dir" => Ok(Self::Dir),
            "time" => Ok(Self::Time),
            "timeEnd" | "time_end" => Ok(Self::TimeEnd),
            _ => Err(format!("unknown console method: {s}")),
        }
    }
}
