//! In-memory launch record store.
//!
//! An immutable seed baseline plus an append-only list of submitted records.
//! Appends go through a mutex so concurrent submissions stay atomic; nothing
//! is ever updated or deleted, and nothing survives the process.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::{LaunchRecord, Region, ValidatedLaunch};
use crate::seed;

/// Millisecond wall clock. Injectable so tests get deterministic IDs.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

pub struct LaunchStore {
    seed: Vec<LaunchRecord>,
    submitted: Mutex<Vec<LaunchRecord>>,
    clock: Arc<dyn Clock>,
}

impl LaunchStore {
    pub fn new(seed: Vec<LaunchRecord>, clock: Arc<dyn Clock>) -> Self {
        Self {
            seed,
            submitted: Mutex::new(Vec::new()),
            clock,
        }
    }

    /// Production store: static seed data, system clock.
    pub fn with_seed() -> Self {
        Self::new(seed::initial_launches(), Arc::new(SystemClock))
    }

    /// Appends a validated launch, assigning a
    /// `{base}-{region}-{now_millis}` ID when the submission carried none.
    pub async fn append(&self, launch: ValidatedLaunch) -> LaunchRecord {
        let id = launch.id.clone().unwrap_or_else(|| {
            format!(
                "{}-{}-{}",
                launch.base_product_name.to_lowercase(),
                launch.region.code().to_lowercase(),
                self.clock.now_millis()
            )
        });
        let record = LaunchRecord {
            id,
            product_name: launch.product_name,
            base_product_name: launch.base_product_name,
            year: launch.year,
            month: launch.month,
            day: launch.day,
            region: launch.region,
            category: launch.category,
            description: launch.description,
            strategy_kickoff_date: launch.strategy_kickoff_date,
            market_readout_date: launch.market_readout_date,
        };

        let mut submitted = self.submitted.lock().await;
        submitted.push(record.clone());
        info!(
            "Appended launch {} ({} submitted this session)",
            record.id,
            submitted.len()
        );
        record
    }

    /// Seed baseline concatenated with submissions, in append order.
    pub async fn all(&self) -> Vec<LaunchRecord> {
        let submitted = self.submitted.lock().await;
        self.seed.iter().chain(submitted.iter()).cloned().collect()
    }

    pub async fn by_region(&self, region: Region) -> Vec<LaunchRecord> {
        let submitted = self.submitted.lock().await;
        self.seed
            .iter()
            .chain(submitted.iter())
            .filter(|launch| launch.region == region)
            .cloned()
            .collect()
    }

    /// All regional variants of one product line.
    pub async fn by_base_product(&self, base_product_name: &str) -> Vec<LaunchRecord> {
        let submitted = self.submitted.lock().await;
        self.seed
            .iter()
            .chain(submitted.iter())
            .filter(|launch| launch.base_product_name == base_product_name)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.seed.len() + self.submitted.lock().await.len()
    }
}
