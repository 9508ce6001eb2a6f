// Shared types between the poll loop, resolver and dispatcher

//! Shared data structures
//!
//! This module defines the observation types (snapshots of associated
//! networks), the per-network action profiles and the configuration
//! structure decoded from the configuration file.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Set of network identities (SSIDs) observed at one poll instant
///
/// Empty identities are never part of a snapshot and duplicates collapse
/// to a single membership. Identities are kept in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot(Vec<String>);

impl Snapshot {
    /// Build a snapshot from observed identities
    pub fn new<I, S>(ssids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ssids: Vec<String> = ssids
            .into_iter()
            .map(Into::into)
            .filter(|ssid| !ssid.is_empty())
            .collect();
        ssids.sort();
        ssids.dedup();
        Self(ssids)
    }

    /// Identities in sorted order
    pub fn ssids(&self) -> &[String] {
        &self.0
    }

    /// Whether the identity is part of this snapshot
    pub fn contains(&self, ssid: &str) -> bool {
        self.0.binary_search_by(|s| s.as_str().cmp(ssid)).is_ok()
    }

    /// Number of distinct identities
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no network is associated
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Snapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Transition direction for a network identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Network joined since the previous poll
    Enter,
    /// Network left since the previous poll
    Exit,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Enter => f.write_str("entered"),
            Direction::Exit => f.write_str("exited"),
        }
    }
}

/// Audio rule for one transition direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioRule {
    /// No rule configured for this direction
    #[default]
    #[serde(skip)]
    Unset,
    /// Turn audio on (unmute)
    On,
    /// Turn audio off (mute)
    Off,
}

impl AudioRule {
    /// Mute state requested by this rule, `None` when unset
    pub fn muted(self) -> Option<bool> {
        match self {
            AudioRule::Unset => None,
            AudioRule::On => Some(false),
            AudioRule::Off => Some(true),
        }
    }
}

/// Actions to take when a network is entered or exited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionProfile {
    /// Rule applied when the network is joined
    #[serde(default)]
    pub enter: AudioRule,
    /// Rule applied when the network is left
    #[serde(default)]
    pub exit: AudioRule,
}

impl ActionProfile {
    /// Rule for the given direction
    pub fn rule(&self, direction: Direction) -> AudioRule {
        match direction {
            Direction::Enter => self.enter,
            Direction::Exit => self.exit,
        }
    }
}

/// Per-network configuration entry: a named profile or an inline one
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WifiEntry {
    /// Name of an entry in the `profile` table
    Alias(String),
    /// Profile given directly
    Inline(ActionProfile),
}

/// Audio backend used to toggle mute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mixer {
    /// PulseAudio / PipeWire default sink via `pactl`
    #[default]
    Pactl,
    /// WirePlumber default sink via `wpctl`
    Wpctl,
    /// ALSA `Master` control via `amixer`
    Amixer,
}

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Restrict observation to one wireless interface
    #[serde(default)]
    pub network_interface: Option<String>,
    /// Named profiles referenced by alias from the `wifi` table
    #[serde(default)]
    pub profile: Option<HashMap<String, ActionProfile>>,
    /// Per-SSID entries
    pub wifi: HashMap<String, WifiEntry>,
    /// Poll interval in milliseconds
    pub interval: u64,
    /// Default log filter, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Audio backend
    #[serde(default)]
    pub mixer: Mixer,
}

fn default_log_level() -> String {
    "info".to_string()
}
