// Join/leave detection between two snapshots

//! Identity set differ
//!
//! Computes which networks were entered and which were exited between two
//! polls. Both inputs are walked in sorted order, so the output lists are
//! sorted as well, independent of the order the platform reported them in.

use crate::types::Snapshot;

/// Networks entered and exited between two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transitions {
    /// Present now, absent before
    pub entered: Vec<String>,
    /// Present before, absent now
    pub exited: Vec<String>,
}

impl Transitions {
    /// Whether nothing changed
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Compute entered/exited identities from `before` to `after`
pub fn diff(before: &Snapshot, after: &Snapshot) -> Transitions {
    let before = before.ssids();
    let after = after.ssids();

    let mut transitions = Transitions::default();
    let (mut i, mut j) = (0, 0);

    while i < before.len() && j < after.len() {
        match before[i].cmp(&after[j]) {
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                transitions.exited.push(before[i].clone());
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                transitions.entered.push(after[j].clone());
                j += 1;
            }
        }
    }

    transitions.exited.extend_from_slice(&before[i..]);
    transitions.entered.extend_from_slice(&after[j..]);

    transitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(ssids: &[&str]) -> Snapshot {
        Snapshot::new(ssids.iter().copied())
    }

    fn strings(ssids: &[&str]) -> Vec<String> {
        ssids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diff_from_empty() {
        let t = diff(&snap(&[]), &snap(&["y", "x"]));
        assert_eq!(t.entered, strings(&["x", "y"]));
        assert!(t.exited.is_empty());
    }

    #[test]
    fn test_diff_to_empty() {
        let t = diff(&snap(&["y", "x"]), &snap(&[]));
        assert!(t.entered.is_empty());
        assert_eq!(t.exited, strings(&["x", "y"]));
    }

    #[test]
    fn test_diff_both_empty() {
        assert!(diff(&snap(&[]), &snap(&[])).is_empty());
    }

    #[test]
    fn test_diff_unchanged() {
        let s = snap(&["Home", "Office", "Cafe"]);
        assert!(diff(&s, &s).is_empty());
    }

    #[test]
    fn test_diff_mixed() {
        let before = snap(&["Home", "Cafe", "Library"]);
        let after = snap(&["Office", "Home", "Airport"]);
        let t = diff(&before, &after);
        assert_eq!(t.entered, strings(&["Airport", "Office"]));
        assert_eq!(t.exited, strings(&["Cafe", "Library"]));
    }

    #[test]
    fn test_diff_output_sorted_not_arrival_order() {
        let t = diff(&snap(&[]), &snap(&["zeta", "alpha", "Mid"]));
        // Byte order: uppercase sorts before lowercase
        assert_eq!(t.entered, strings(&["Mid", "alpha", "zeta"]));
    }

    #[test]
    fn test_diff_ignores_duplicates_and_empty() {
        let before = Snapshot::new(["a", "a", ""]);
        let after = Snapshot::new(["", "b", "a"]);
        let t = diff(&before, &after);
        assert_eq!(t.entered, strings(&["b"]));
        assert!(t.exited.is_empty());
    }

    #[test]
    fn test_diff_symmetry() {
        let a = snap(&["a", "c", "e", "g"]);
        let b = snap(&["b", "c", "d", "g", "h"]);
        let forward = diff(&a, &b);
        let backward = diff(&b, &a);
        assert_eq!(forward.entered, backward.exited);
        assert_eq!(forward.exited, backward.entered);
    }

    #[test]
    fn test_diff_partitions_symmetric_difference() {
        let sets: [&[&str]; 5] = [
            &[],
            &["a"],
            &["a", "b"],
            &["b", "c", "d"],
            &["a", "d", "e", "f"],
        ];

        for before in sets {
            for after in sets {
                let (b, a) = (snap(before), snap(after));
                let t = diff(&b, &a);

                for ssid in &t.entered {
                    assert!(a.contains(ssid) && !b.contains(ssid));
                    assert!(!t.exited.contains(ssid));
                }
                for ssid in &t.exited {
                    assert!(b.contains(ssid) && !a.contains(ssid));
                }

                let expected = b.ssids().iter().filter(|s| !a.contains(s)).count()
                    + a.ssids().iter().filter(|s| !b.contains(s)).count();
                assert_eq!(t.entered.len() + t.exited.len(), expected);
            }
        }
    }

    #[test]
    fn test_diff_repeated_unchanged_polls() {
        let mut previous = snap(&["Home"]);
        for _ in 0..3 {
            let current = snap(&["Home"]);
            assert!(diff(&previous, &current).is_empty());
            previous = current;
        }
    }
}
