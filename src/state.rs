use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionType {
    League,
    Cup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub season: String,
    #[serde(rename = "type")]
    pub kind: CompetitionType,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Basketball,
    Ufc,
}

impl Sport {
    /// Voting contests offered for a match of this sport.
    pub fn vote_categories(self) -> &'static [&'static str] {
        match self {
            Sport::Football => &["mvp", "scorer", "assist", "defender", "goalkeeper"],
            Sport::Basketball => &["mvp", "scorer", "assist", "defender"],
            Sport::Ufc => &["fight_of_the_night", "performance_of_the_night"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamType {
    Club,
    National,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "type")]
    pub kind: TeamType,
    pub name: String,
    #[serde(rename = "countryCode", default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineupRole {
    Starter,
    Sub,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupPlayer {
    pub number: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    pub role: LineupRole,
    #[serde(rename = "playerId", default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(
        rename = "nationalityCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub nationality_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsenceKind {
    Injury,
    Suspension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Out,
    Doubtful,
    Recovery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailablePlayer {
    pub name: String,
    pub reason: String,
    #[serde(rename = "type")]
    pub kind: AbsenceKind,
    pub status: AvailabilityStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineupsStatus {
    #[default]
    None,
    Probable,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "_id")]
    pub id: String,
    pub sport: Sport,
    pub tournament: String,
    #[serde(default)]
    pub subgroup: Option<String>,
    #[serde(rename = "homeTeam")]
    pub home_team: Team,
    #[serde(rename = "awayTeam")]
    pub away_team: Team,
    #[serde(rename = "startTime")]
    pub start_time: DateTime<Utc>,
    pub status: MatchStatus,
    // Country code -> channel names, in broadcaster priority order.
    #[serde(default)]
    pub channels: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub stadium: String,
    #[serde(default)]
    pub venue: String,
    pub competition_id: String,
    #[serde(default)]
    pub formation_home: Option<String>,
    #[serde(default)]
    pub formation_away: Option<String>,
    #[serde(default)]
    pub lineup_home: Vec<LineupPlayer>,
    #[serde(default)]
    pub lineup_away: Vec<LineupPlayer>,
    #[serde(default)]
    pub bench_home: Vec<LineupPlayer>,
    #[serde(default)]
    pub bench_away: Vec<LineupPlayer>,
    #[serde(default)]
    pub unavailable_home: Vec<UnavailablePlayer>,
    #[serde(default)]
    pub unavailable_away: Vec<UnavailablePlayer>,
    #[serde(default)]
    pub lineups_status: LineupsStatus,
    #[serde(default)]
    pub lineups_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub injuries_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideLineups {
    pub starters: Vec<LineupPlayer>,
    pub bench: Vec<LineupPlayer>,
    pub unavailable: Vec<UnavailablePlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupsView {
    pub lineups_status: LineupsStatus,
    pub formation_home: Option<String>,
    pub formation_away: Option<String>,
    pub home: SideLineups,
    pub away: SideLineups,
    pub lineups_updated_at: Option<DateTime<Utc>>,
    pub injuries_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWithLineups {
    #[serde(flatten)]
    pub fixture: Match,
    pub lineups: LineupsView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatingView {
    pub likes: u64,
    pub dislikes: u64,
    #[serde(rename = "likePct")]
    pub like_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VotesView {
    pub percentages: BTreeMap<String, BTreeMap<String, u32>>,
    pub totals: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedMatch {
    #[serde(flatten)]
    pub fixture: Match,
    pub id: String,
    #[serde(rename = "channelsForCountry")]
    pub channels_for_country: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupedMatches {
    pub today: Vec<GroupedMatch>,
    pub tomorrow: Vec<GroupedMatch>,
    pub week: Vec<GroupedMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoUser {
    pub id: String,
    pub email: String,
    pub score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: DemoUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillAverages {
    pub attack: f64,
    pub defense: f64,
    pub passing: f64,
    pub dribbling: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerRatingsSummary {
    pub count: u64,
    pub averages: SkillAverages,
    pub overall: f64,
    pub delta: f64,
}
