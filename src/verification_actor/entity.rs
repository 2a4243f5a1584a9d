//! Entity trait implementation for the VerificationCode domain type.

use super::{VerificationAction, VerificationError, VerificationOutcome};
use crate::model::{CodeFilter, IssueCode, VerificationCode};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for VerificationCode {
    type Id = String;
    type Create = IssueCode;
    type Update = ();
    type Action = VerificationAction;
    type ActionResult = VerificationOutcome;
    type Filter = CodeFilter;
    type Context = ();
    type Error = VerificationError;

    fn from_create_params(email: String, params: IssueCode) -> Result<Self, Self::Error> {
        Ok(Self {
            email,
            code: params.code,
            expires_at: params.expires_at,
            consumed: false,
        })
    }

    /// # Actions
    /// - `Reissue`: new code and expiry, usable again.
    /// - `Verify`: a consumed code is reported as absent. An expired code is consumed and
    ///   reported as expired. A wrong code leaves the stored one usable. A match consumes it.
    async fn handle_action(
        &mut self,
        action: VerificationAction,
        _ctx: &Self::Context,
    ) -> Result<VerificationOutcome, Self::Error> {
        match action {
            VerificationAction::Reissue(issue) => {
                self.code = issue.code;
                self.expires_at = issue.expires_at;
                self.consumed = false;
                Ok(VerificationOutcome::Issued)
            }
            VerificationAction::Verify { code, now } => {
                if self.consumed {
                    return Err(VerificationError::NotFound);
                }
                if self.is_expired(now) {
                    self.consumed = true;
                    return Err(VerificationError::Expired);
                }
                if self.code != code {
                    return Err(VerificationError::Mismatch);
                }
                self.consumed = true;
                Ok(VerificationOutcome::Verified)
            }
        }
    }

    fn matches(&self, filter: &CodeFilter) -> bool {
        match filter {
            CodeFilter::Unusable(now) => self.consumed || self.is_expired(*now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn code(expires_in: i64) -> VerificationCode {
        let issue = IssueCode {
            code: "123456".into(),
            expires_at: Utc::now() + Duration::seconds(expires_in),
        };
        VerificationCode::from_create_params("a@b.c".into(), issue).unwrap()
    }

    fn verify(code: &str) -> VerificationAction {
        VerificationAction::Verify {
            code: code.into(),
            now: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_wrong_code_keeps_code_usable() {
        let mut entity = code(60);
        let err = entity.handle_action(verify("000000"), &()).await.unwrap_err();
        assert_eq!(err, VerificationError::Mismatch);

        let ok = entity.handle_action(verify("123456"), &()).await.unwrap();
        assert_eq!(ok, VerificationOutcome::Verified);
    }

    #[tokio::test]
    async fn test_code_verifies_once() {
        let mut entity = code(60);
        entity.handle_action(verify("123456"), &()).await.unwrap();

        let again = entity.handle_action(verify("123456"), &()).await.unwrap_err();
        assert_eq!(again, VerificationError::NotFound);
        assert!(entity.matches(&CodeFilter::Unusable(Utc::now())));
    }

    #[tokio::test]
    async fn test_expired_code_is_consumed() {
        let mut entity = code(-1);
        let err = entity.handle_action(verify("123456"), &()).await.unwrap_err();
        assert_eq!(err, VerificationError::Expired);

        let again = entity.handle_action(verify("123456"), &()).await.unwrap_err();
        assert_eq!(again, VerificationError::NotFound);
    }

    #[tokio::test]
    async fn test_reissue_revives_consumed_code() {
        let mut entity = code(60);
        entity.handle_action(verify("123456"), &()).await.unwrap();

        let reissue = VerificationAction::Reissue(IssueCode {
            code: "654321".into(),
            expires_at: Utc::now() + Duration::seconds(60),
        });
        entity.handle_action(reissue, &()).await.unwrap();

        assert!(!entity.matches(&CodeFilter::Unusable(Utc::now())));
        let ok = entity.handle_action(verify("654321"), &()).await.unwrap();
        assert_eq!(ok, VerificationOutcome::Verified);
    }
}
