//! Staleness policy and check orchestration

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::check::error::CheckError;
use crate::check::fetcher::ReleaseFetcher;
use crate::check::record::CacheRecord;
use crate::check::store::CacheStore;
use crate::check::version;
use crate::config::{CheckConfig, UPGRADE_DOC_URL};

/// Result of one check invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Checking is disabled by configuration
    Skipped,
    /// The running version is the latest known one (or newer)
    UpToDate,
    /// A newer release exists
    UpdateAvailable { current: String, latest: String },
    /// The check could not be completed this run
    Inconclusive,
}

/// Orchestrates one version check: cache first, remote on staleness.
pub struct VersionChecker<F: ReleaseFetcher> {
    config: CheckConfig,
    store: CacheStore,
    fetcher: F,
}

impl<F: ReleaseFetcher> VersionChecker<F> {
    pub fn new(config: CheckConfig, fetcher: F) -> Self {
        let store = CacheStore::new(config.cache_path.clone());
        Self {
            config,
            store,
            fetcher,
        }
    }

    /// Seconds since the Unix epoch
    fn unix_now() -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX epoch")
            .as_secs_f64()
    }

    /// A record is stale if it cannot be trusted as-is: absent or malformed,
    /// written by a different tool version, past its TTL, or from the future.
    pub fn is_stale(&self, record: Option<&CacheRecord>, now: f64) -> bool {
        let Some(record) = record else {
            return true;
        };

        if !record.is_well_formed() {
            debug!("Encountered malformed cache record: {:?}", record);
            return true;
        }

        // A different binary is running now, so the cached comparison basis
        // no longer applies even inside the TTL.
        if record.tool_version != self.config.current_version {
            return true;
        }

        if record.last_check + self.config.cache_ttl.as_secs_f64() <= now {
            return true;
        }

        // Clock moved backward since the record was written. The cache
        // cannot prove its own validity, so refresh.
        if record.last_check > now {
            return true;
        }

        false
    }

    /// Performs the check and reports the outcome.
    ///
    /// Advisories go to the logging channel: two warnings when a newer
    /// release exists, debug chatter otherwise. Every internal failure is
    /// absorbed here and downgraded to a debug diagnostic. The check is
    /// best-effort advisory functionality; it must never disturb the host
    /// tool's own work, so no error leaves this method.
    pub async fn check_for_new_version(&self) -> CheckOutcome {
        if !self.config.enabled {
            debug!("Skipping version check");
            return CheckOutcome::Skipped;
        }

        debug!("Performing version check");

        match self.run_check(Self::unix_now()).await {
            Ok(outcome) => {
                match &outcome {
                    CheckOutcome::UpdateAvailable { current, latest } => {
                        warn!(
                            "A newer version of {} is available. Go to: {}",
                            self.config.tool_name, UPGRADE_DOC_URL
                        );
                        warn!(
                            "Your version of {} is {}, the latest version is {}.",
                            self.config.tool_name, current, latest
                        );
                    }
                    _ => debug!("{} is up-to-date", self.config.tool_name),
                }
                outcome
            }
            Err(e) => {
                debug!("Version check failed: {}", e);
                CheckOutcome::Inconclusive
            }
        }
    }

    async fn run_check(&self, now: f64) -> Result<CheckOutcome, CheckError> {
        let latest = match self.store.read() {
            Some(record) if !self.is_stale(Some(&record), now) => {
                debug!(
                    "Consulting cache at {:?} for the latest version",
                    self.store.path()
                );
                record.latest_version
            }
            _ => {
                debug!(
                    "Cache at {:?} is stale, consulting the version endpoint",
                    self.store.path()
                );
                let latest = self.fetcher.fetch_latest().await?;
                self.store.write(&CacheRecord {
                    last_check: now,
                    tool_version: self.config.current_version.clone(),
                    latest_version: latest.clone(),
                })?;
                latest
            }
        };

        if version::is_older(&self.config.current_version, &latest)? {
            Ok(CheckOutcome::UpdateAvailable {
                current: self.config.current_version.clone(),
                latest,
            })
        } else {
            Ok(CheckOutcome::UpToDate)
        }
    }
}
