use std::collections::{BTreeMap, HashMap};

use crate::state::VotesView;

type CandidateCounts = HashMap<String, u64>;

/// Per-match ballots: category -> candidate -> count.
#[derive(Debug, Clone, Default)]
pub struct VoteLedger {
    matches: HashMap<String, HashMap<String, CandidateCounts>>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies for a match. A non-empty `allowed` list enumerates exactly those
    /// categories, voted or not; otherwise only categories holding votes appear.
    pub fn votes(&self, match_id: &str, allowed: Option<&[String]>) -> VotesView {
        let empty = HashMap::new();
        let ballots = self.matches.get(match_id).unwrap_or(&empty);

        let mut view = VotesView::default();
        match allowed {
            Some(cats) if !cats.is_empty() => {
                for cat in cats {
                    insert_category(&mut view, cat, ballots.get(cat));
                }
            }
            _ => {
                let voted = ballots
                    .iter()
                    .filter(|(_, counts)| counts.values().any(|n| *n > 0));
                for (cat, counts) in voted {
                    insert_category(&mut view, cat, Some(counts));
                }
            }
        }
        view
    }

    pub fn category_mut(&mut self, match_id: &str, category: &str) -> &mut CandidateCounts {
        self.matches
            .entry(match_id.to_string())
            .or_default()
            .entry(category.to_string())
            .or_default()
    }

    /// Records one ballot and returns the tally of that category alone.
    pub fn vote(&mut self, match_id: &str, category: &str, candidate: &str) -> VotesView {
        let counts = self.category_mut(match_id, category);
        let slot = counts.entry(candidate.to_string()).or_insert(0);
        *slot = slot.saturating_add(1);

        let mut view = VotesView::default();
        insert_category(&mut view, category, Some(&*counts));
        view
    }

    #[cfg(test)]
    fn count(&self, match_id: &str, category: &str, candidate: &str) -> u64 {
        self.matches
            .get(match_id)
            .and_then(|cats| cats.get(category))
            .and_then(|counts| counts.get(candidate))
            .copied()
            .unwrap_or(0)
    }
}

fn insert_category(view: &mut VotesView, category: &str, counts: Option<&CandidateCounts>) {
    let total = counts
        .map(|c| c.values().fold(0u64, |acc, n| acc.saturating_add(*n)))
        .unwrap_or(0)
        .max(1);
    let pct: BTreeMap<String, u32> = counts
        .into_iter()
        .flatten()
        .map(|(candidate, n)| (candidate.clone(), rounded_pct(*n, total)))
        .collect();
    view.percentages.insert(category.to_string(), pct);
    view.totals.insert(category.to_string(), total);
}

/// `count * 100 / total` rounded half up, with `total` floored at 1 and
/// `count` capped at `total`, so the result stays within 0..=100.
///
/// Each share is rounded on its own, so a category's shares need not add up
/// to exactly 100.
pub(crate) fn rounded_pct(count: u64, total: u64) -> u32 {
    let total = total.max(1);
    let count = u128::from(count.min(total));
    let total = u128::from(total);
    ((count * 200 + total) / (2 * total)) as u32
}
