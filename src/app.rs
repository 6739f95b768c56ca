// src/app.rs
use crate::geocoding::LocationResolver;
use crate::model::PriceModel;
use crate::sessions::SessionStore;

/// Everything a request handler needs, shared by all worker threads.
pub struct App {
    pub model: Box<dyn PriceModel>,
    pub resolver: LocationResolver,
    pub sessions: SessionStore,
}

impl App {
    pub fn new(model: Box<dyn PriceModel>, resolver: LocationResolver, sessions: SessionStore) -> Self {
        Self {
            model,
            resolver,
            sessions,
        }
    }
}

pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
