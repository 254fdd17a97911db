use std::collections::HashMap;

use crate::state::RatingView;
use crate::votes::rounded_pct;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingCounter {
    pub likes: u64,
    pub dislikes: u64,
}

impl RatingCounter {
    pub fn view(&self) -> RatingView {
        RatingView {
            likes: self.likes,
            dislikes: self.dislikes,
            like_pct: rounded_pct(self.likes, self.likes.saturating_add(self.dislikes)),
        }
    }
}

/// Like/dislike counters keyed by match id.
#[derive(Debug, Clone, Default)]
pub struct RatingBook {
    counters: HashMap<String, RatingCounter>,
}

impl RatingBook {
    pub fn new() -> Self {
        Self::default()
    }

    // Read path never materializes a counter; unknown ids read as 0/0.
    pub fn rating(&self, match_id: &str) -> RatingView {
        self.counters
            .get(match_id)
            .copied()
            .unwrap_or_default()
            .view()
    }

    pub fn counter_mut(&mut self, match_id: &str) -> &mut RatingCounter {
        self.counters.entry(match_id.to_string()).or_default()
    }

    pub fn rate(&mut self, match_id: &str, like: bool) -> RatingView {
        let counter = self.counter_mut(match_id);
        if like {
            counter.likes = counter.likes.saturating_add(1);
        } else {
            counter.dislikes = counter.dislikes.saturating_add(1);
        }
        counter.view()
    }

    #[cfg(test)]
    fn is_tracked(&self, match_id: &str) -> bool {
        self.counters.contains_key(match_id)
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
