// src/app.rs
use std::sync::Mutex;

use crate::errors::ServerError;
use crate::ledger::Ledger;
use crate::ocr::TextExtractor;

/// Everything a request handler can reach.
pub struct AppContext {
    ledger: Mutex<Ledger>,
    extractor: Option<Box<dyn TextExtractor>>,
    pub max_body_bytes: usize,
}

impl AppContext {
    pub fn new(ledger: Ledger, extractor: Option<Box<dyn TextExtractor>>, max_body_bytes: usize) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            extractor,
            max_body_bytes,
        }
    }

    /// Run `f` with exclusive access to the ledger; each call is one
    /// indivisible state transition.
    pub fn with_ledger<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Ledger) -> Result<T, ServerError>,
    {
        let mut ledger = self.ledger.lock()?;
        f(&mut ledger)
    }

    pub fn extractor(&self) -> Option<&dyn TextExtractor> {
        self.extractor.as_deref()
    }
}
