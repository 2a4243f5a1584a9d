//! # Verification Client
//!
//! Issues and checks six-digit one-time codes. Delivery of the code (email) is not part
//! of this service; callers receive the code and decide what to do with it.
use crate::clock::SharedClock;
use crate::model::{CodeFilter, IssueCode, IssuedCode, VerificationCode};
use crate::verification_actor::{VerificationAction, VerificationError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct VerificationClient {
    inner: ResourceClient<VerificationCode>,
    clock: SharedClock,
    ttl: Duration,
}

impl VerificationClient {
    pub fn new(inner: ResourceClient<VerificationCode>, clock: SharedClock, ttl: Duration) -> Self {
        Self { inner, clock, ttl }
    }

    /// Issues a fresh code for `email`, replacing any earlier one.
    #[instrument(skip(self))]
    pub async fn issue(&self, email: &str) -> Result<IssuedCode, VerificationError> {
        if !email.contains('@') {
            return Err(VerificationError::Invalid("Valid email is required".into()));
        }

        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| VerificationError::Unavailable(e.to_string()))?;
        let code = rand::rng().random_range(100_000..=999_999u32).to_string();
        let expires_at = self.clock.now_utc() + ttl;
        let issue = IssueCode {
            code: code.clone(),
            expires_at,
        };

        self.inner
            .upsert(
                email.to_string(),
                issue.clone(),
                VerificationAction::Reissue(issue),
            )
            .await
            .map_err(Self::map_error)?;

        info!(%expires_at, "Verification code issued");
        Ok(IssuedCode { code, expires_at })
    }

    /// Checks `code` for `email`. Succeeds at most once per issued code.
    #[instrument(skip(self, code))]
    pub async fn verify(&self, email: &str, code: &str) -> Result<(), VerificationError> {
        if email.is_empty() || code.is_empty() {
            return Err(VerificationError::Invalid("Email and OTP are required".into()));
        }

        let action = VerificationAction::Verify {
            code: code.to_string(),
            now: self.clock.now_utc(),
        };
        match self.inner.perform_action(email.to_string(), action).await {
            Ok(_) => {
                info!("Verification code accepted");
                Ok(())
            }
            Err(e) => {
                let e = Self::map_error(e);
                warn!(error = %e, "Verification failed");
                Err(e)
            }
        }
    }

    /// Removes every code that was used or has expired. Returns how many were removed.
    pub async fn purge_unusable(&self) -> Result<usize, VerificationError> {
        let now = self.clock.now_utc();
        let removed = self
            .inner
            .purge(CodeFilter::Unusable(now))
            .await
            .map_err(Self::map_error)?;
        debug!(removed, "Purged verification codes");
        Ok(removed)
    }
}

#[async_trait]
impl ActorClient<VerificationCode> for VerificationClient {
    type Error = VerificationError;

    fn inner(&self) -> &ResourceClient<VerificationCode> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(_) => VerificationError::NotFound,
            other => other
                .downcast_entity::<VerificationError>()
                .unwrap_or_else(|e| VerificationError::Unavailable(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::verification_actor;
    use std::sync::Arc;

    fn setup(clock: &ManualClock) -> VerificationClient {
        let (actor, client) =
            verification_actor::new(10, Arc::new(clock.clone()), Duration::from_secs(300));
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_issue_and_verify_once() {
        let clock = ManualClock::default();
        let client = setup(&clock);

        let issued = client.issue("guest@example.com").await.unwrap();
        assert_eq!(issued.code.len(), 6);
        assert!((100_000..=999_999).contains(&issued.code.parse::<u32>().unwrap()));

        client.verify("guest@example.com", &issued.code).await.unwrap();
        assert_eq!(
            client.verify("guest@example.com", &issued.code).await,
            Err(VerificationError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_reissue_replaces_previous_code() {
        let clock = ManualClock::default();
        let client = setup(&clock);

        let first = client.issue("guest@example.com").await.unwrap();
        // Reissue until the new code differs from the first one.
        let second = loop {
            let issued = client.issue("guest@example.com").await.unwrap();
            if issued.code != first.code {
                break issued;
            }
        };

        assert_eq!(
            client.verify("guest@example.com", &first.code).await,
            Err(VerificationError::Mismatch)
        );
        client.verify("guest@example.com", &second.code).await.unwrap();
    }

    #[tokio::test]
    async fn test_expiry_and_sweep() {
        let clock = ManualClock::default();
        let client = setup(&clock);

        let stale = client.issue("stale@example.com").await.unwrap();
        clock.advance(chrono::Duration::seconds(301));
        let fresh = client.issue("fresh@example.com").await.unwrap();

        assert_eq!(
            client.verify("stale@example.com", &stale.code).await,
            Err(VerificationError::Expired)
        );
        assert_eq!(client.purge_unusable().await.unwrap(), 1);
        assert_eq!(
            client.verify("stale@example.com", &stale.code).await,
            Err(VerificationError::NotFound)
        );
        client.verify("fresh@example.com", &fresh.code).await.unwrap();
    }

    #[tokio::test]
    async fn test_input_validation() {
        let clock = ManualClock::default();
        let client = setup(&clock);

        assert!(matches!(
            client.issue("not-an-email").await,
            Err(VerificationError::Invalid(_))
        ));
        assert!(matches!(
            client.verify("", "123456").await,
            Err(VerificationError::Invalid(_))
        ));
        assert_eq!(
            client.verify("nobody@example.com", "123456").await,
            Err(VerificationError::NotFound)
        );
    }
}
