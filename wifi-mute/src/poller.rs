// Poll cycle state

//! Poll cycle state
//!
//! The poller owns the configuration and the snapshot from the previous
//! cycle. Each cycle reads the current networks, diffs them against the
//! previous snapshot, stores the new snapshot and dispatches the transitions.
//! Cycles are driven one at a time by the main loop, so no locking is needed.

use crate::diff::{diff, Transitions};
use crate::dispatcher::{dispatch, DispatchReport};
use crate::error::{Error, Result};
use crate::mixer::AudioControl;
use crate::ssid_monitor::SnapshotSource;
use crate::types::{Config, Snapshot};

/// Result of one poll cycle
#[derive(Debug)]
pub enum CycleReport {
    /// First successful read; stored without firing any action
    Baseline(Snapshot),
    /// Transitions detected against the previous snapshot and dispatched
    Dispatched {
        /// Networks entered and exited
        transitions: Transitions,
        /// Outcome of the dispatched actions
        report: DispatchReport,
    },
}

/// Poll-cycle driver
pub struct Poller {
    config: Config,
    previous: Option<Snapshot>,
}

impl Poller {
    /// Create a poller with no baseline yet
    pub fn new(config: Config) -> Self {
        Self {
            config,
            previous: None,
        }
    }

    /// Snapshot from the last successful cycle
    pub fn previous(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }

    /// Record the initial snapshot before the timer starts
    pub async fn establish_baseline<S: SnapshotSource>(
        &mut self,
        source: &S,
    ) -> Result<&Snapshot> {
        let current = source
            .current_snapshot()
            .await
            .map_err(Error::SnapshotFetch)?;
        log::info!("Initial networks: {}", current);
        Ok(&*self.previous.insert(current))
    }

    /// Run one poll cycle
    ///
    /// A failed read leaves the previous snapshot untouched. Otherwise the new
    /// snapshot replaces the previous one before any action runs, and failed
    /// actions do not roll it back.
    pub async fn run_cycle<S, A>(&mut self, source: &S, audio: &A) -> Result<CycleReport>
    where
        S: SnapshotSource,
        A: AudioControl,
    {
        let current = source
            .current_snapshot()
            .await
            .map_err(Error::SnapshotFetch)?;

        let Some(previous) = self.previous.replace(current.clone()) else {
            log::info!("Initial networks: {}", current);
            return Ok(CycleReport::Baseline(current));
        };

        let transitions = diff(&previous, &current);
        if !transitions.is_empty() {
            log::debug!("Networks changed: {} -> {}", previous, current);
        }

        let report = dispatch(&self.config, &transitions, audio).await;

        Ok(CycleReport::Dispatched {
            transitions,
            report,
        })
    }
}
