//! Check verdicts and the monitoring exit-code convention.

use std::fmt;
use std::process::ExitCode;

/// Severity understood by the monitoring system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Process exit code for this severity.
    pub fn code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Final outcome of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
}

impl Verdict {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { status: Status::Ok, message: message.into() }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self { status: Status::Critical, message: message.into() }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self { status: Status::Unknown, message: message.into() }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.status.into()
    }
}

/// The single status line: `<STATUS>: <message>`.
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Messages can carry API error text; keep the output on one line.
        let message = self.message.replace(['\r', '\n'], " ");
        write!(f, "{}: {}", self.status, message)
    }
}
