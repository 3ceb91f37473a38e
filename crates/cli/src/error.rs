//! Process exit codes.
//!
//! Only this module and `main` decide when the process terminates; every
//! component below returns typed errors and the mapping to a shell-visible
//! code happens exactly once, here.

use plextrac_client::ClientError;

/// Exit codes reported to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    AuthenticationFailed = 2,
    ConnectionError = 3,
    InvalidResponse = 5,
    Aborted = 6,
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => Self::AuthenticationFailed,
            ClientError::Aborted => Self::Aborted,
            ClientError::HttpError(_)
            | ClientError::ConnectionFailed { .. }
            | ClientError::Timeout { .. } => Self::ConnectionError,
            ClientError::InvalidResponse(_) => Self::InvalidResponse,
            ClientError::InvalidUrl(_) | ClientError::Prompt(_) => Self::GeneralError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Exit-code extraction for `anyhow` error chains.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        match self.downcast_ref::<ClientError>() {
            Some(client_err) => ExitCode::from(client_err),
            None => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_distinct_codes() {
        assert_eq!(
            ExitCode::from(&ClientError::AuthFailed("nope".to_string())),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(ExitCode::from(&ClientError::Aborted), ExitCode::Aborted);
        assert_eq!(
            ExitCode::from(&ClientError::Timeout {
                operation: "Root".to_string()
            }),
            ExitCode::ConnectionError
        );
        assert_eq!(
            ExitCode::from(&ClientError::InvalidResponse("not json".to_string())),
            ExitCode::InvalidResponse
        );
    }

    #[test]
    fn anyhow_chain_preserves_the_client_error_code() {
        let err = anyhow::Error::from(ClientError::Aborted);
        assert_eq!(err.exit_code(), ExitCode::Aborted);
    }

    #[test]
    fn plain_anyhow_errors_are_general() {
        let err = anyhow::anyhow!("client has no reports");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
