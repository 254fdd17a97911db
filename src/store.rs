use chrono::{DateTime, Utc};

use crate::error::{FallbackError, FallbackResult};
use crate::fixtures::FixtureCatalog;
use crate::lineups;
use crate::ratings::RatingBook;
use crate::state::{
    Competition, GroupedMatches, Match, MatchWithLineups, RatingView, VotesView,
};
use crate::votes::VoteLedger;

/// In-memory stand-in for the backend: seed catalog plus rating and vote counters.
///
/// Counters only change through [`DemoStore::rate`] and [`DemoStore::vote`] and are
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct DemoStore {
    catalog: FixtureCatalog,
    ratings: RatingBook,
    votes: VoteLedger,
}

impl DemoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: FixtureCatalog) -> Self {
        Self {
            catalog,
            ratings: RatingBook::new(),
            votes: VoteLedger::new(),
        }
    }

    pub fn catalog(&self) -> &FixtureCatalog {
        &self.catalog
    }

    pub fn competitions(&self) -> &[Competition] {
        self.catalog.list_competitions()
    }

    pub fn matches_for_competition(&self, competition_id: &str) -> Vec<Match> {
        self.catalog.matches_for_competition(competition_id)
    }

    pub fn get_match(&self, match_id: &str) -> Option<&Match> {
        self.catalog.get_match(match_id)
    }

    pub fn match_with_lineups(&self, match_id: &str) -> Option<MatchWithLineups> {
        self.catalog.get_match(match_id).map(lineups::with_lineups)
    }

    pub fn grouped_matches(&self, now: DateTime<Utc>, country: Option<&str>) -> GroupedMatches {
        self.catalog.grouped_matches(now, country)
    }

    pub fn rating(&self, match_id: &str) -> RatingView {
        self.ratings.rating(match_id)
    }

    pub fn rate(&mut self, match_id: &str, like: bool) -> RatingView {
        self.ratings.rate(match_id, like)
    }

    pub fn votes(&self, match_id: &str, allowed: Option<&[String]>) -> VotesView {
        self.votes.votes(match_id, allowed)
    }

    pub fn vote(&mut self, match_id: &str, category: &str, candidate: &str) -> VotesView {
        self.votes.vote(match_id, category, candidate)
    }

    /// Votes over every category the match's sport offers, voted or not.
    pub fn votes_for_match(&self, match_id: &str) -> FallbackResult<VotesView> {
        let m = self
            .catalog
            .get_match(match_id)
            .ok_or_else(|| FallbackError::MatchNotFound(match_id.to_string()))?;
        let allowed: Vec<String> = m
            .sport
            .vote_categories()
            .iter()
            .map(|c| c.to_string())
            .collect();
        Ok(self.votes.votes(match_id, Some(allowed.as_slice())))
    }
}
