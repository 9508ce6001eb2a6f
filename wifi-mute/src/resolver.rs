// SSID to action profile resolution

//! Profile resolver
//!
//! Maps a network identity to its effective action profile through the
//! `wifi` table and, for aliases, a single lookup in the `profile` table.

use crate::types::{ActionProfile, Config, WifiEntry};

/// Outcome of resolving a network identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup<'a> {
    /// No entry in the `wifi` table
    NotConfigured,
    /// Entry names an alias that has no named profile
    UnresolvedAlias(&'a str),
    /// Effective profile for the identity
    Resolved(ActionProfile),
}

/// Resolve the action profile configured for `ssid`
pub fn resolve<'a>(config: &'a Config, ssid: &str) -> ProfileLookup<'a> {
    match config.wifi.get(ssid) {
        None => ProfileLookup::NotConfigured,
        Some(WifiEntry::Inline(profile)) => ProfileLookup::Resolved(*profile),
        Some(WifiEntry::Alias(alias)) => match config
            .profile
            .as_ref()
            .and_then(|profiles| profiles.get(alias))
        {
            Some(profile) => ProfileLookup::Resolved(*profile),
            None => ProfileLookup::UnresolvedAlias(alias),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AudioRule, Mixer};
    use std::collections::HashMap;

    fn config(wifi: &[(&str, WifiEntry)], profile: Option<&[(&str, ActionProfile)]>) -> Config {
        Config {
            network_interface: None,
            profile: profile.map(|entries| {
                entries
                    .iter()
                    .map(|(name, p)| (name.to_string(), *p))
                    .collect::<HashMap<_, _>>()
            }),
            wifi: wifi
                .iter()
                .map(|(ssid, entry)| (ssid.to_string(), entry.clone()))
                .collect(),
            interval: 5000,
            log_level: "info".to_string(),
            mixer: Mixer::Pactl,
        }
    }

    const QUIET: ActionProfile = ActionProfile {
        enter: AudioRule::Off,
        exit: AudioRule::On,
    };

    #[test]
    fn test_resolve_not_configured() {
        let config = config(&[], None);
        assert_eq!(resolve(&config, "Guest"), ProfileLookup::NotConfigured);
    }

    #[test]
    fn test_resolve_inline() {
        let inline = ActionProfile {
            enter: AudioRule::Off,
            exit: AudioRule::Unset,
        };
        let config = config(&[("Office", WifiEntry::Inline(inline))], None);
        assert_eq!(resolve(&config, "Office"), ProfileLookup::Resolved(inline));
    }

    #[test]
    fn test_resolve_alias() {
        let config = config(
            &[("Office", WifiEntry::Alias("quiet".to_string()))],
            Some(&[("quiet", QUIET)]),
        );
        assert_eq!(resolve(&config, "Office"), ProfileLookup::Resolved(QUIET));
    }

    #[test]
    fn test_resolve_alias_missing_from_profiles() {
        let config = config(
            &[("Office", WifiEntry::Alias("loud".to_string()))],
            Some(&[("quiet", QUIET)]),
        );
        assert_eq!(
            resolve(&config, "Office"),
            ProfileLookup::UnresolvedAlias("loud")
        );
    }

    #[test]
    fn test_resolve_alias_without_profile_table() {
        let config = config(&[("Office", WifiEntry::Alias("quiet".to_string()))], None);
        assert_eq!(
            resolve(&config, "Office"),
            ProfileLookup::UnresolvedAlias("quiet")
        );
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let config = config(&[("Home", WifiEntry::Inline(QUIET))], None);
        assert_eq!(resolve(&config, "home"), ProfileLookup::NotConfigured);
        assert_eq!(resolve(&config, "Home "), ProfileLookup::NotConfigured);
    }

    #[test]
    fn test_ssid_named_like_profile_is_not_an_alias() {
        // Profile names and SSIDs live in separate tables
        let config = config(&[], Some(&[("Home", QUIET)]));
        assert_eq!(resolve(&config, "Home"), ProfileLookup::NotConfigured);
    }
}
