//! Error type shared by every stage of the run.
//!
//! Each variant maps to a process exit code (see [`AnscombeError::exit_code`]):
//!
//! - `2`: input/output problems (bad CSV, failed export)
//! - `3`: the data cannot be fitted or scored
//! - `4`: rendering/terminal failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnscombeError {
    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl AnscombeError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AnscombeError::DataFormat(_) | AnscombeError::Export(_) => 2,
            AnscombeError::LengthMismatch { .. }
            | AnscombeError::DegenerateFit(_)
            | AnscombeError::DivisionByZero(_) => 3,
            AnscombeError::Render(_) => 4,
        }
    }

    /// Prefix the message with some context (e.g. the series label).
    ///
    /// `LengthMismatch` carries no message and is returned unchanged.
    pub fn context(self, what: impl std::fmt::Display) -> Self {
        match self {
            AnscombeError::DataFormat(m) => AnscombeError::DataFormat(format!("{what}: {m}")),
            AnscombeError::DegenerateFit(m) => AnscombeError::DegenerateFit(format!("{what}: {m}")),
            AnscombeError::DivisionByZero(m) => AnscombeError::DivisionByZero(format!("{what}: {m}")),
            AnscombeError::Export(m) => AnscombeError::Export(format!("{what}: {m}")),
            AnscombeError::Render(m) => AnscombeError::Render(format!("{what}: {m}")),
            other @ AnscombeError::LengthMismatch { .. } => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnscombeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_group_by_stage() {
        assert_eq!(AnscombeError::DataFormat("x".into()).exit_code(), 2);
        assert_eq!(AnscombeError::Export("x".into()).exit_code(), 2);
        assert_eq!(AnscombeError::DegenerateFit("x".into()).exit_code(), 3);
        assert_eq!(AnscombeError::DivisionByZero("x".into()).exit_code(), 3);
        assert_eq!(AnscombeError::LengthMismatch { x_len: 1, y_len: 2 }.exit_code(), 3);
        assert_eq!(AnscombeError::Render("x".into()).exit_code(), 4);
    }

    #[test]
    fn context_prefixes_message() {
        let err = AnscombeError::DegenerateFit("all x values are equal".into()).context("Set 4");
        assert_eq!(err.to_string(), "Degenerate fit: Set 4: all x values are equal");
    }
}
