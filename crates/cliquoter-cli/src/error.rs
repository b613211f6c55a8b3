use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
///
/// Everything here prints to stdout, as all of this tool's diagnostics do.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No data available for the given symbol! Please try a different input.")]
    NoData,

    #[error(transparent)]
    Validation(#[from] cliquoter_core::ValidationError),

    #[error(transparent)]
    Source(#[from] cliquoter_core::SourceError),

    #[error(transparent)]
    Report(#[from] cliquoter_core::ReportError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NoData => 1,
            Self::Validation(_) => 2,
            Self::Source(_) => 3,
            Self::Report(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_uses_the_exact_user_facing_message_and_exit_one() {
        let error = CliError::NoData;
        assert_eq!(
            error.to_string(),
            "No data available for the given symbol! Please try a different input."
        );
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn validation_and_source_errors_exit_nonzero() {
        let validation: CliError = cliquoter_core::ValidationError::EmptySymbol.into();
        assert_ne!(validation.exit_code(), 0);

        let source: CliError = cliquoter_core::SourceError::unavailable("down").into();
        assert_ne!(source.exit_code(), 0);
    }
}
