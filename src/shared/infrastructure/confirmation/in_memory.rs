use crate::shared::infrastructure::confirmation::{
    ConfirmationError, ConfirmationToken, StagedConfirmation,
};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

struct Pending<T> {
    payload: T,
    expires_at: DateTime<Utc>,
}

pub struct PendingConfirmations<T> {
    ttl: TimeDelta,
    pending: Mutex<HashMap<ConfirmationToken, Pending<T>>>,
}

impl<T: Send> PendingConfirmations<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            pending: Mutex::new(HashMap::new()),
        }
    }

    pub async fn stage(&self, payload: T) -> StagedConfirmation {
        self.stage_at(payload, Utc::now()).await
    }

    pub async fn stage_at(&self, payload: T, now: DateTime<Utc>) -> StagedConfirmation {
        let token = ConfirmationToken::generate();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut pending = self.pending.lock().await;
        pending.retain(|_, entry| entry.expires_at >= now);
        pending.insert(
            token,
            Pending {
                payload,
                expires_at,
            },
        );
        StagedConfirmation {
            confirmation_token: token,
            expires_at,
        }
    }

    pub async fn confirm(&self, token: ConfirmationToken) -> Result<T, ConfirmationError> {
        self.confirm_at(token, Utc::now()).await
    }

    /// Redeems a token. The token is gone afterwards, whether it was still valid or not.
    pub async fn confirm_at(
        &self,
        token: ConfirmationToken,
        now: DateTime<Utc>,
    ) -> Result<T, ConfirmationError> {
        let entry = self
            .pending
            .lock()
            .await
            .remove(&token)
            .ok_or(ConfirmationError::Unknown)?;
        if now > entry.expires_at {
            return Err(ConfirmationError::Expired);
        }
        Ok(entry.payload)
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}
