use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::state::{
    AbsenceKind, AvailabilityStatus, Competition, CompetitionType, GroupedMatch, GroupedMatches,
    LineupPlayer, LineupRole, LineupsStatus, Match, MatchStatus, Sport, Team, TeamType,
    UnavailablePlayer,
};

pub const COMP_LA_LIGA: &str = "comp_la_liga";
pub const COMP_UCL: &str = "comp_ucl";

#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    competitions: Vec<Competition>,
    matches: Vec<Match>,
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self::seeded(Utc::now())
    }

    /// Demo seed with kickoffs placed relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            competitions: seed_competitions(),
            matches: seed_matches(now),
        }
    }

    pub fn from_parts(competitions: Vec<Competition>, matches: Vec<Match>) -> Self {
        Self {
            competitions,
            matches,
        }
    }

    pub fn list_competitions(&self) -> &[Competition] {
        &self.competitions
    }

    pub fn list_matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn matches_for_competition(&self, competition_id: &str) -> Vec<Match> {
        self.matches
            .iter()
            .filter(|m| m.competition_id == competition_id)
            .cloned()
            .collect()
    }

    pub fn get_match(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub fn get_competition(&self, competition_id: &str) -> Option<&Competition> {
        self.competitions.iter().find(|c| c.id == competition_id)
    }

    /// Buckets the coming week into today / tomorrow / rest of week, by kickoff.
    pub fn grouped_matches(&self, now: DateTime<Utc>, country: Option<&str>) -> GroupedMatches {
        let sod = start_of_day(now);
        let today_end = sod + Duration::days(1);
        let tomorrow_end = sod + Duration::days(2);
        let week_end = sod + Duration::days(7);

        let mut window: Vec<&Match> = self
            .matches
            .iter()
            .filter(|m| m.start_time >= sod && m.start_time <= week_end)
            .collect();
        window.sort_by(|a, b| a.start_time.cmp(&b.start_time));

        let mut grouped = GroupedMatches::default();
        for m in window {
            let entry = GroupedMatch {
                fixture: m.clone(),
                id: m.id.clone(),
                channels_for_country: pick_channels(m, country),
            };
            if m.start_time <= today_end {
                grouped.today.push(entry);
            } else if m.start_time <= tomorrow_end {
                grouped.tomorrow.push(entry);
            } else {
                grouped.week.push(entry);
            }
        }
        grouped
    }
}

pub fn start_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(dt)
}

fn pick_channels(m: &Match, country: Option<&str>) -> Vec<String> {
    country
        .and_then(|code| m.channels.get(code))
        .cloned()
        .unwrap_or_default()
}

fn seed_competitions() -> Vec<Competition> {
    vec![
        Competition {
            id: COMP_LA_LIGA.to_string(),
            name: "La Liga".to_string(),
            country: "Spain".to_string(),
            country_code: "ES".to_string(),
            season: "2025".to_string(),
            kind: CompetitionType::League,
            slug: "la-liga-2025".to_string(),
        },
        Competition {
            id: COMP_UCL.to_string(),
            name: "UEFA Champions League".to_string(),
            country: "Europe".to_string(),
            country_code: "EU".to_string(),
            season: "2025".to_string(),
            kind: CompetitionType::Cup,
            slug: "uefa-champions-league-2025".to_string(),
        },
    ]
}

fn seed_matches(now: DateTime<Utc>) -> Vec<Match> {
    vec![
        Match {
            id: "m1".to_string(),
            sport: Sport::Football,
            tournament: "La Liga".to_string(),
            subgroup: Some("Matchday".to_string()),
            home_team: club("Team A", "ES"),
            away_team: club("Team B", "ES"),
            start_time: now + Duration::hours(6),
            status: MatchStatus::Scheduled,
            channels: channels([listing("ES", &["Movistar"]), listing("CH", &["blue Sport"])]),
            stadium: "Demo Stadium".to_string(),
            venue: "Madrid".to_string(),
            competition_id: COMP_LA_LIGA.to_string(),
            formation_home: Some("4-3-3".to_string()),
            formation_away: Some("4-2-3-1".to_string()),
            lineup_home: vec![
                starter("1", "GK Home", "GK").with_id("home_gk", "ES"),
                starter("9", "CF Home", "FW").with_id("home_cf", "ES"),
            ],
            lineup_away: vec![
                starter("1", "GK Away", "GK").with_id("away_gk", "ES"),
                starter("10", "CF Away", "FW").with_id("away_cf", "ES"),
            ],
            bench_home: vec![sub("12", "Sub H1", "MF")],
            bench_away: vec![sub("12", "Sub A1", "MF")],
            unavailable_home: vec![
                absent("Injured H1", "Hamstring", AbsenceKind::Injury, AvailabilityStatus::Out),
                absent("Doubt H2", "Knock", AbsenceKind::Injury, AvailabilityStatus::Doubtful),
            ],
            unavailable_away: vec![absent(
                "Susp A1",
                "Red card",
                AbsenceKind::Suspension,
                AvailabilityStatus::Out,
            )],
            lineups_status: LineupsStatus::Probable,
            lineups_updated_at: Some(now),
            injuries_updated_at: Some(now),
        },
        Match {
            id: "m2".to_string(),
            sport: Sport::Basketball,
            tournament: "EuroLeague".to_string(),
            subgroup: Some("Round".to_string()),
            home_team: club("Madrid Hoops", "ES"),
            away_team: club("Barcelona Dunks", "ES"),
            start_time: now + Duration::hours(12),
            status: MatchStatus::Scheduled,
            channels: channels([listing("ES", &["DAZN"])]),
            stadium: "WiZink Center".to_string(),
            venue: "Madrid".to_string(),
            competition_id: COMP_UCL.to_string(),
            formation_home: None,
            formation_away: None,
            lineup_home: vec![starter("7", "PG Home", "PG"), starter("23", "SF Home", "SF")],
            lineup_away: vec![starter("3", "PG Away", "PG"), starter("33", "SF Away", "SF")],
            bench_home: vec![sub("12", "G Bench", "G")],
            bench_away: vec![sub("15", "F Bench", "F")],
            unavailable_home: vec![absent(
                "Home G Injury",
                "Ankle",
                AbsenceKind::Injury,
                AvailabilityStatus::Out,
            )],
            unavailable_away: Vec::new(),
            lineups_status: LineupsStatus::Probable,
            lineups_updated_at: Some(now),
            injuries_updated_at: Some(now),
        },
        Match {
            id: "m3".to_string(),
            sport: Sport::Ufc,
            tournament: "UFC Fight Night".to_string(),
            subgroup: Some("Main Card".to_string()),
            home_team: club("Fighter A", "US"),
            away_team: club("Fighter B", "BR"),
            start_time: now + Duration::hours(20),
            status: MatchStatus::Scheduled,
            channels: channels([listing("US", &["ESPN+"])]),
            stadium: "T-Mobile Arena".to_string(),
            venue: "Las Vegas".to_string(),
            competition_id: COMP_UCL.to_string(),
            formation_home: None,
            formation_away: None,
            lineup_home: vec![fighter("Fighter A")],
            lineup_away: vec![fighter("Fighter B")],
            bench_home: Vec::new(),
            bench_away: Vec::new(),
            unavailable_home: Vec::new(),
            unavailable_away: Vec::new(),
            lineups_status: LineupsStatus::Confirmed,
            lineups_updated_at: Some(now),
            injuries_updated_at: Some(now),
        },
    ]
}

fn club(name: &str, country_code: &str) -> Team {
    Team {
        kind: TeamType::Club,
        name: name.to_string(),
        country_code: Some(country_code.to_string()),
    }
}

fn listing(country_code: &str, names: &[&str]) -> (String, Vec<String>) {
    (
        country_code.to_string(),
        names.iter().map(|n| n.to_string()).collect(),
    )
}

fn channels<const N: usize>(
    entries: [(String, Vec<String>); N],
) -> BTreeMap<String, Vec<String>> {
    entries.into_iter().collect()
}

fn player(number: &str, name: &str, pos: Option<&str>, role: LineupRole) -> LineupPlayer {
    LineupPlayer {
        number: number.to_string(),
        name: name.to_string(),
        pos: pos.map(|p| p.to_string()),
        role,
        player_id: None,
        nationality_code: None,
    }
}

fn starter(number: &str, name: &str, pos: &str) -> LineupPlayer {
    player(number, name, Some(pos), LineupRole::Starter)
}

fn sub(number: &str, name: &str, pos: &str) -> LineupPlayer {
    player(number, name, Some(pos), LineupRole::Sub)
}

fn fighter(name: &str) -> LineupPlayer {
    player("-", name, None, LineupRole::Starter)
}

fn absent(
    name: &str,
    reason: &str,
    kind: AbsenceKind,
    status: AvailabilityStatus,
) -> UnavailablePlayer {
    UnavailablePlayer {
        name: name.to_string(),
        reason: reason.to_string(),
        kind,
        status,
    }
}

impl LineupPlayer {
    fn with_id(mut self, player_id: &str, nationality_code: &str) -> Self {
        self.player_id = Some(player_id.to_string());
        self.nationality_code = Some(nationality_code.to_string());
        self
    }
}
