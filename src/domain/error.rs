//! Error types for the journal edges. The analytics core itself is made
//! of total functions and never returns an error.

/// Top-level error type for tradelens.
#[derive(Debug, thiserror::Error)]
pub enum TradelensError {
    #[error("trade source error: {reason}")]
    TradeSource { reason: String },

    #[error("invalid trade record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradelensError> for std::process::ExitCode {
    fn from(err: &TradelensError) -> Self {
        let code: u8 = match err {
            TradelensError::Io(_) => 1,
            TradelensError::ConfigParse { .. }
            | TradelensError::ConfigMissing { .. }
            | TradelensError::ConfigInvalid { .. } => 2,
            TradelensError::TradeSource { .. } | TradelensError::InvalidRecord { .. } => 3,
            TradelensError::Report { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = TradelensError::InvalidRecord {
            line: 12,
            reason: "bad pnl value".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid trade record on line 12: bad pnl value"
        );

        let err = TradelensError::ConfigMissing {
            section: "journal".into(),
            key: "input".into(),
        };
        assert_eq!(err.to_string(), "missing config key [journal] input");
    }
}
