//! Credential verification stub.
//!
//! The real platform would verify credentials against an identity service.
//! The demo accepts any non-empty pair after a short delay. The trait is the
//! collaborator contract; swapping in a real implementation must not touch
//! the login flow.

use std::time::Duration;

use thiserror::Error;

/// How long the mock "round trip" takes.
pub const VERIFY_DELAY: Duration = Duration::from_millis(600);

/// Verification failure. The only recoverable error in the application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Identifier or secret was empty.
    #[error("please fill in all required fields")]
    InvalidCredentials,
}

/// Contract for the credential-issuance collaborator.
pub trait CredentialVerifier {
    /// Verify a credential pair.
    fn verify(
        &self,
        identifier: &str,
        secret: &str,
    ) -> impl Future<Output = Result<(), VerifyError>> + Send;
}

/// Demo verifier: any non-empty pair succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVerifier;

impl CredentialVerifier for MockVerifier {
    async fn verify(&self, identifier: &str, secret: &str) -> Result<(), VerifyError> {
        if identifier.trim().is_empty() || secret.trim().is_empty() {
            return Err(VerifyError::InvalidCredentials);
        }
        tracing::debug!(identifier, "mock verifier accepting credentials");
        tokio::time::sleep(VERIFY_DELAY).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn non_empty_pair_is_accepted() {
        assert!(MockVerifier.verify("a@b.com", "pw").await.is_ok());
    }

    #[tokio::test]
    async fn empty_fields_fail_without_delay() {
        assert_eq!(
            MockVerifier.verify("", "pw").await,
            Err(VerifyError::InvalidCredentials)
        );
        assert_eq!(
            MockVerifier.verify("a@b.com", "  ").await,
            Err(VerifyError::InvalidCredentials)
        );
    }
}
