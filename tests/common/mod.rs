#![allow(dead_code)]

use async_trait::async_trait;
use pid_resolver::application::services::{DEFAULT_FRESHNESS_WINDOW, PidResolver};
use pid_resolver::domain::entities::CatalogRecord;
use pid_resolver::domain::repositories::CatalogSource;
use pid_resolver::domain::surface::Surface;
use pid_resolver::error::{CatalogError, CatalogResult};
use pid_resolver::state::{AppState, Hosts};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PRIMARY_HOST: &str = "example.org";
pub const PID_HOST: &str = "pid.example.org";

pub const DNA_ID: &str = "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d";
pub const DNA_SLUG: &str = "dna-donation";
pub const BLOOD_ID: &str = "0f9e8d7c-6b5a-4948-8372-6150a4b3c2d1";
pub const BLOOD_SLUG: &str = "blood-donation";
pub const UNKNOWN_ID: &str = "ffffffff-ffff-4fff-8fff-ffffffffffff";

/// In-memory catalogue that can be switched to failing and counts fetches.
#[derive(Default)]
pub struct FakeCatalog {
    records: Mutex<Vec<CatalogRecord>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_records(records: Vec<CatalogRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn set_records(&self, records: Vec<CatalogRecord>) {
        *self.records.lock().unwrap() = records;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn fetch_catalog(&self) -> CatalogResult<Vec<CatalogRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::Status(503));
        }

        Ok(self.records.lock().unwrap().clone())
    }
}

pub fn sample_records() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::new(DNA_ID, DNA_SLUG),
        CatalogRecord::new(BLOOD_ID, BLOOD_SLUG),
        CatalogRecord {
            id: None,
            slug: Some("orphan-slug".to_string()),
        },
    ]
}

pub fn create_test_state(surface: Surface) -> (AppState, Arc<FakeCatalog>) {
    create_test_state_with(surface, sample_records(), DEFAULT_FRESHNESS_WINDOW)
}

pub fn create_test_state_with(
    surface: Surface,
    records: Vec<CatalogRecord>,
    freshness_window: Duration,
) -> (AppState, Arc<FakeCatalog>) {
    let catalog = Arc::new(FakeCatalog::with_records(records));
    let resolver = Arc::new(PidResolver::new(catalog.clone(), freshness_window));

    let state = AppState::new(resolver, Hosts::new(PRIMARY_HOST, PID_HOST), surface);

    (state, catalog)
}

pub fn resource_location(host: &str, slug: &str) -> String {
    format!("https://{}/resource/{}", host, slug)
}
