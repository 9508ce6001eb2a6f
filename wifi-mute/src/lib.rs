// Wi-Fi Triggered Audio Mute Library
// Shared modules for daemon and tests

#![warn(missing_docs)]

//! Wi-Fi Triggered Audio Mute Library
//!
//! This library provides the core functionality for muting and unmuting system
//! audio when the host joins or leaves configured wireless networks.
//!
//! # Main Components
//!
//! - [`config`]: Configuration file parsing and validation
//! - [`diff`]: Join/leave detection between two network snapshots
//! - [`dispatcher`]: Applies the configured action for each transition
//! - [`error`]: Error taxonomy
//! - [`mixer`]: System audio mute control
//! - [`poller`]: Poll cycle state (previous snapshot)
//! - [`resolver`]: SSID to action profile resolution
//! - [`ssid_monitor`]: Associated-network snapshots via D-Bus
//! - [`types`]: Shared data structures

pub mod config;
pub mod diff;
pub mod dispatcher;
pub mod error;
pub mod mixer;
pub mod poller;
pub mod resolver;
pub mod ssid_monitor;
pub mod types;
