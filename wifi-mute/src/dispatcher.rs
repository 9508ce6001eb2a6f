// Transition dispatcher

//! Transition dispatcher
//!
//! Walks the transitions of one poll cycle, resolves each network's profile
//! and applies the configured mute state. Exits are handled before entries,
//! so a "leave" rule never overrides a "join" rule from the same cycle.

use crate::diff::Transitions;
use crate::error::Error;
use crate::mixer::AudioControl;
use crate::resolver::{resolve, ProfileLookup};
use crate::types::{Config, Direction};

/// What happened while dispatching one cycle
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Mute toggles that succeeded
    pub applied: usize,
    /// Transitions with nothing to do (unconfigured, no rule, bad alias)
    pub skipped: usize,
    /// Mute toggles that failed
    pub failures: Vec<Error>,
}

/// Dispatch exited then entered transitions to the audio controller
pub async fn dispatch<A: AudioControl>(
    config: &Config,
    transitions: &Transitions,
    audio: &A,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    let events = transitions
        .exited
        .iter()
        .map(|ssid| (ssid, Direction::Exit))
        .chain(transitions.entered.iter().map(|ssid| (ssid, Direction::Enter)));

    for (ssid, direction) in events {
        let profile = match resolve(config, ssid) {
            ProfileLookup::NotConfigured => {
                log::info!("{} is not configured, skipping", ssid);
                report.skipped += 1;
                continue;
            }
            ProfileLookup::UnresolvedAlias(alias) => {
                let err = Error::UnresolvedAlias {
                    ssid: ssid.clone(),
                    alias: alias.to_string(),
                };
                log::error!("{}, skipping", err);
                report.skipped += 1;
                continue;
            }
            ProfileLookup::Resolved(profile) => profile,
        };

        let rule = profile.rule(direction);
        let Some(muted) = rule.muted() else {
            log::debug!("{} {}, no rule for this direction", ssid, direction);
            report.skipped += 1;
            continue;
        };

        log::info!(
            "{} {}, turning audio {}",
            ssid,
            direction,
            if muted { "off" } else { "on" }
        );

        match audio.set_muted(muted).await {
            Ok(()) => report.applied += 1,
            Err(source) => {
                let err = Error::ActionExecution {
                    ssid: ssid.clone(),
                    muted,
                    source,
                };
                log::error!("{}", err);
                report.failures.push(err);
            }
        }
    }

    report
}
