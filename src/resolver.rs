//! Match resolver: reduce the raw placement set to one placement per word.
//!
//! Placements are stably sorted by ascending defect count, so ties keep scan
//! order. For each word, every placement with a strictly higher defect count
//! than the word's best is removed. When several placements share that best
//! count, none of them is silently preferred: they are all flagged
//! [`Verdict::AmbiguousDuplicate`] and the caller's [`AmbiguityPolicy`] decides
//! what reaches the final set.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::placement::Placement;
use crate::scanner::PlacementSet;

/// Outcome for one candidate placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The only placement with the word's lowest defect count.
    UniqueWinner,
    /// Another placement of the same word has strictly fewer defects.
    RemovedLoser,
    /// Tied with at least one other placement at the word's lowest defect count.
    AmbiguousDuplicate,
}

/// What to do with words whose best placement is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Surface every tied placement.
    KeepAll,
    /// Keep the tied placement found first in scan order.
    #[default]
    EarliestScanOrder,
    /// Leave the word out of the final set.
    DropAmbiguous,
}

impl AmbiguityPolicy {
    /// Look up a policy by its short name (`earliest`, `keep`, `drop`, as on the
    /// command line) or its serialized name (`earliest_scan_order`, ...).
    /// Case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "earliest" | "earliest_scan_order" => Some(AmbiguityPolicy::EarliestScanOrder),
            "keep" | "keep_all" => Some(AmbiguityPolicy::KeepAll),
            "drop" | "drop_ambiguous" => Some(AmbiguityPolicy::DropAmbiguous),
            _ => None,
        }
    }
}

/// A candidate placement with its verdict and its position in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPlacement {
    pub placement: Placement,
    pub verdict: Verdict,
    pub scan_index: usize,
}

/// Every candidate of a solve, sorted by defect count, each with a verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    entries: Vec<ResolvedPlacement>,
}

/// Resolve a raw placement set.
///
/// An empty set resolves to an empty [`Resolution`].
#[must_use]
pub fn resolve(set: PlacementSet) -> Resolution {
    let mut entries: Vec<(usize, Placement)> = set.into_iter().enumerate().collect();
    // stable: equal defect counts stay in scan order
    entries.sort_by_key(|(_, p)| p.defect_count);

    // per word: (lowest defect count, how many placements share it)
    let mut best: HashMap<&str, (usize, usize)> = HashMap::new();
    for (_, p) in &entries {
        best.entry(p.word.as_str())
            .and_modify(|(min, ties)| {
                if p.defect_count < *min {
                    *min = p.defect_count;
                    *ties = 1;
                } else if p.defect_count == *min {
                    *ties += 1;
                }
            })
            .or_insert((p.defect_count, 1));
    }

    let verdicts: Vec<Verdict> = entries
        .iter()
        .map(|(_, p)| {
            // safe: every word was inserted above
            let (min, ties) = best.get(p.word.as_str()).copied().unwrap_or((p.defect_count, 1));
            if p.defect_count > min {
                Verdict::RemovedLoser
            } else if ties > 1 {
                Verdict::AmbiguousDuplicate
            } else {
                Verdict::UniqueWinner
            }
        })
        .collect();

    let entries = entries
        .into_iter()
        .zip(verdicts)
        .map(|((scan_index, placement), verdict)| ResolvedPlacement { placement, verdict, scan_index })
        .collect();

    Resolution { entries }
}

impl Resolution {
    /// All candidates, sorted by ascending defect count (ties in scan order).
    #[must_use]
    pub fn entries(&self) -> &[ResolvedPlacement] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn with_verdict(&self, verdict: Verdict) -> impl Iterator<Item = &Placement> + '_ {
        self.entries.iter().filter(move |e| e.verdict == verdict).map(|e| &e.placement)
    }

    /// Everything not removed: unique winners plus ambiguous duplicates.
    pub fn survivors(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.entries.iter().filter(|e| e.verdict != Verdict::RemovedLoser).map(|e| &e.placement)
    }

    pub fn unique_winners(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.with_verdict(Verdict::UniqueWinner)
    }

    pub fn ambiguous(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.with_verdict(Verdict::AmbiguousDuplicate)
    }

    pub fn removed(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.with_verdict(Verdict::RemovedLoser)
    }

    /// Words whose best placement is ambiguous, in first-seen order.
    #[must_use]
    pub fn ambiguous_words(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.ambiguous().map(|p| p.word.as_str()).filter(|w| seen.insert(*w)).collect()
    }

    /// The final placement set under `policy`.
    ///
    /// With any policy other than [`AmbiguityPolicy::KeepAll`] the result holds
    /// at most one placement per word.
    #[must_use]
    pub fn placements(&self, policy: AmbiguityPolicy) -> Vec<Placement> {
        let mut emitted: HashSet<&str> = HashSet::new();
        self.entries
            .iter()
            .filter(|e| match (e.verdict, policy) {
                (Verdict::RemovedLoser, _) => false,
                (Verdict::UniqueWinner, _) => true,
                (Verdict::AmbiguousDuplicate, AmbiguityPolicy::KeepAll) => true,
                (Verdict::AmbiguousDuplicate, AmbiguityPolicy::DropAmbiguous) => false,
                // entries are in scan order within a tie, so the first one seen wins
                (Verdict::AmbiguousDuplicate, AmbiguityPolicy::EarliestScanOrder) => {
                    emitted.insert(e.placement.word.as_str())
                }
            })
            .map(|e| e.placement.clone())
            .collect()
    }

    /// Consuming form of [`Resolution::placements`].
    #[must_use]
    pub fn into_placements(self, policy: AmbiguityPolicy) -> Vec<Placement> {
        self.placements(policy)
    }
}
