// Error taxonomy for the daemon

//! Error types
//!
//! Platform glue reports failures as [`anyhow::Error`] with context; the poll
//! loop wraps them into these variants so each class can be handled on its
//! own terms. Only [`Error::ConfigLoad`] is fatal.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the daemon
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file missing, malformed or invalid (startup only)
    #[error("Failed to load configuration: {0:#}")]
    ConfigLoad(#[source] anyhow::Error),

    /// Current networks could not be read; the cycle is skipped
    #[error("Failed to read associated networks: {0:#}")]
    SnapshotFetch(#[source] anyhow::Error),

    /// SSID maps to an alias with no named profile
    #[error("Profile '{alias}' for {ssid} is not configured")]
    UnresolvedAlias {
        /// Network identity being dispatched
        ssid: String,
        /// Alias that could not be found
        alias: String,
    },

    /// Mute toggle failed for a transition
    #[error("Failed to {} audio for {ssid}: {source:#}", verb(.muted))]
    ActionExecution {
        /// Network identity whose rule triggered the action
        ssid: String,
        /// Requested mute state
        muted: bool,
        /// Underlying platform error
        #[source]
        source: anyhow::Error,
    },
}

fn verb(muted: &bool) -> &'static str {
    if *muted {
        "mute"
    } else {
        "unmute"
    }
}
