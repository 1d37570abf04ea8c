//! Landing page sign-up: creates the local profile.

use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use shared::Profile;
use thiserror::Error;

use crate::profile_service::{fallback_profile, ProfileService};
use crate::storage::{keys, set_flag, KeyValueStore, StorageError};

pub const SIGNUP_FAILED_MESSAGE: &str = "There was an error creating your profile. Please try again.";

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Default)]
pub struct SignupService {
    profiles: ProfileService,
}

impl SignupService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the username and profile, stamp `lastUpdate` and flag the
    /// session so the calendar generates fresh transactions.
    ///
    /// `fetched` is the remotely generated profile; the fallback profile is
    /// used when it is missing.
    pub fn create_profile<L, S>(
        &self,
        local: &L,
        session: &S,
        username: &str,
        fetched: Option<Profile>,
        now: DateTime<Utc>,
    ) -> Result<Profile, SignupError>
    where
        L: KeyValueStore + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let username = username.trim();
        if username.is_empty() {
            return Err(SignupError::EmptyUsername);
        }

        let mut profile = fetched.unwrap_or_else(fallback_profile);
        profile.username = username.to_string();

        local.set_raw(keys::USERNAME, username)?;
        self.profiles.save(local, &profile)?;
        local.set_raw(keys::LAST_UPDATE, &now.to_rfc3339_opts(SecondsFormat::Millis, true))?;
        set_flag(session, keys::COMING_FROM_LANDING, true)?;

        info!("Created profile for {}", username);
        Ok(profile)
    }
}
