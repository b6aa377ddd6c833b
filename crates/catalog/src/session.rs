use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

const TOKEN_LENGTH: usize = 48;

/// An admin session persisted server-side. The token is the only thing the
/// browser holds; everything else lives in the sessions table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub const LIFETIME_HOURS: i64 = 12;

    /// Issues a fresh session with a random token, valid from now.
    pub fn issue() -> Self {
        let now = Utc::now();
        Self {
            token: generate_token(),
            created_at: now,
            expires_at: now + Duration::hours(Self::LIFETIME_HOURS),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_sessions_are_unexpired_and_distinct() {
        let a = Session::issue();
        let b = Session::issue();
        assert!(!a.is_expired_at(Utc::now()));
        assert_eq!(a.token.len(), TOKEN_LENGTH);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn sessions_expire_after_their_lifetime() {
        let session = Session::issue();
        let later = session.created_at + Duration::hours(Session::LIFETIME_HOURS);
        assert!(session.is_expired_at(later));
    }
}
