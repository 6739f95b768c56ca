// src/sessions/store.rs
use crate::domain::location::LocationResult;
use crate::domain::property::{PropertyFeatures, PropertyForm};
use crate::domain::zip::ZipCode;
use crate::errors::ServerError;
use crate::sessions::token::{hash_token, new_session_token};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// One row of the prediction history.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub features: PropertyFeatures,
    /// ZIP exactly as submitted, valid or not.
    pub zip: String,
    pub adjusted_price: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Rating must be a whole number between 1 and 5")]
pub struct RatingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackRating(u8);

impl FeedbackRating {
    pub fn parse(raw: &str) -> Result<Self, RatingError> {
        match raw.trim().parse::<u8>() {
            Ok(v @ 1..=5) => Ok(Self(v)),
            _ => Err(RatingError),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct RememberedLocation {
    zip: ZipCode,
    location: LocationResult,
    resolved_at: i64,
}

/// Volatile state of one visitor.
#[derive(Debug)]
pub struct Session {
    history: Vec<PredictionRecord>,
    last_location: Option<RememberedLocation>,
    last_rating: Option<FeedbackRating>,
    /// Values of the most recent submission, used to refill the form.
    pub form: PropertyForm,
    last_seen: i64,
}

impl Session {
    fn new(now: i64) -> Self {
        Self {
            history: Vec::new(),
            last_location: None,
            last_rating: None,
            form: PropertyForm::default(),
            last_seen: now,
        }
    }

    pub fn record(&mut self, features: PropertyFeatures, zip: &str, adjusted_price: String, now: i64) {
        self.history.push(PredictionRecord {
            features,
            zip: zip.to_string(),
            adjusted_price,
            recorded_at: DateTime::from_timestamp(now, 0).unwrap_or_default(),
        });
    }

    pub fn history(&self) -> &[PredictionRecord] {
        &self.history
    }

    pub fn rate(&mut self, rating: FeedbackRating) {
        self.last_rating = Some(rating);
    }

    pub fn last_rating(&self) -> Option<FeedbackRating> {
        self.last_rating
    }

    /// The location resolved for `zip` on an earlier request, if it is
    /// still the session's current ZIP and younger than `ttl_secs`.
    pub fn remembered_location(&self, zip: &ZipCode, now: i64, ttl_secs: i64) -> Option<LocationResult> {
        self.last_location
            .as_ref()
            .filter(|r| &r.zip == zip && now - r.resolved_at < ttl_secs)
            .map(|r| r.location.clone())
    }

    pub fn remember_location(&mut self, zip: ZipCode, location: LocationResult, now: i64) {
        self.last_location = Some(RememberedLocation {
            zip,
            location,
            resolved_at: now,
        });
    }

    /// Drop the remembered location unless it belongs to `zip`.
    pub fn forget_location_unless(&mut self, zip: Option<&ZipCode>) {
        let keep = matches!((&self.last_location, zip), (Some(r), Some(z)) if &r.zip == z);
        if !keep {
            self.last_location = None;
        }
    }
}

/// A session opened for the current request.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub token: String,
    /// True when the request carried no usable cookie; the response must
    /// set one.
    pub is_new: bool,
    pub opened_at: i64,
}

/// Process-wide registry of sessions keyed by token hash.
pub struct SessionStore {
    sessions: Mutex<HashMap<[u8; 32], Session>>,
    idle_secs: i64,
}

impl SessionStore {
    pub fn new(idle_secs: i64) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_secs,
        }
    }

    /// Find the session for `token`, or start a new one.
    pub fn open(&self, token: Option<&str>, now: i64) -> Result<SessionHandle, ServerError> {
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;

        let idle = self.idle_secs;
        sessions.retain(|_, s| now - s.last_seen < idle);

        if let Some(token) = token {
            if let Some(session) = sessions.get_mut(&hash_token(token)) {
                session.last_seen = now;
                return Ok(SessionHandle {
                    token: token.to_string(),
                    is_new: false,
                    opened_at: now,
                });
            }
        }

        let token = new_session_token();
        sessions.insert(hash_token(&token), Session::new(now));
        tracing::debug!(active = sessions.len(), "session started");

        Ok(SessionHandle {
            token,
            is_new: true,
            opened_at: now,
        })
    }

    /// Run `f` against the session. The store lock is held for the
    /// duration, so `f` must not block on I/O.
    pub fn with_session<F, T>(&self, handle: &SessionHandle, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;
        let session = sessions
            .entry(hash_token(&handle.token))
            .or_insert_with(|| Session::new(handle.opened_at));
        Ok(f(session))
    }

    /// End the session, discarding its history.
    pub fn end(&self, token: &str) -> Result<(), ServerError> {
        let mut sessions = self.sessions.lock().map_err(|_| ServerError::InternalError)?;
        sessions.remove(&hash_token(token));
        Ok(())
    }

    pub fn active(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}
