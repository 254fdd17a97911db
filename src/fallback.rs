use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::error::{FallbackError, FallbackResult};
use crate::state::{DemoUser, LoginResponse, PlayerRatingsSummary, SkillAverages};
use crate::store::DemoStore;

// Demo-mode login stub. Not an authentication boundary.
pub const DEMO_EMAIL: &str = "demo@demo.com";
pub const DEMO_PASSWORD: &str = "Demo123!";
pub const DEMO_TOKEN: &str = "demo-token";
pub const DEMO_USER_ID: &str = "demo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerRatingsInput {
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub attack: Option<f64>,
    #[serde(default)]
    pub defense: Option<f64>,
    #[serde(default)]
    pub passing: Option<f64>,
    #[serde(default)]
    pub dribbling: Option<f64>,
}

/// Every request shape the demo store can answer.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoRequest {
    Competitions,
    CompetitionMatches {
        competition_id: String,
    },
    GroupedMatches {
        country: Option<String>,
    },
    Match {
        match_id: String,
        with_lineups: bool,
    },
    Rating {
        match_id: String,
    },
    Votes {
        match_id: String,
    },
    Rate {
        match_id: String,
        like: bool,
    },
    Vote {
        match_id: String,
        category: String,
        player: String,
    },
    Login {
        email: String,
        password: String,
    },
    PlayerRatings {
        match_id: String,
        ratings: PlayerRatingsInput,
    },
    Unsupported {
        verb: Verb,
        path: String,
    },
}

impl DemoRequest {
    /// Maps a backend-style path (and JSON body for POSTs) onto a typed request.
    ///
    /// Paths outside the known set become [`DemoRequest::Unsupported`]; only a
    /// body missing required fields is an error.
    pub fn from_path(verb: Verb, path: &str, body: Option<&Value>) -> FallbackResult<Self> {
        let (route, query) = path.split_once('?').unwrap_or((path, ""));
        let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();

        let request = match (verb, segments.as_slice()) {
            (Verb::Get, ["api", "competitions"]) => DemoRequest::Competitions,
            (Verb::Get, ["api", "competitions", id, "matches"]) => {
                DemoRequest::CompetitionMatches {
                    competition_id: id.to_string(),
                }
            }
            (Verb::Get, ["api", "matches", "grouped"]) => DemoRequest::GroupedMatches {
                country: query_param(query, "country")
                    .filter(|c| !c.is_empty())
                    .map(|c| c.to_string()),
            },
            (Verb::Get, ["api", "matches", id]) => DemoRequest::Match {
                match_id: id.to_string(),
                with_lineups: query_param(query, "include")
                    .map(|inc| inc.split(',').any(|part| part == "lineups"))
                    .unwrap_or(false),
            },
            (Verb::Get, ["api", "matches", id, "rating"]) => DemoRequest::Rating {
                match_id: id.to_string(),
            },
            (Verb::Get, ["api", "matches", id, "votes"]) => DemoRequest::Votes {
                match_id: id.to_string(),
            },
            (Verb::Post, ["api", "auth", "login"]) => DemoRequest::Login {
                email: body_str(body, "email").unwrap_or_default().to_string(),
                password: body_str(body, "password").unwrap_or_default().to_string(),
            },
            (Verb::Post, ["api", "matches", id, "rate"]) => DemoRequest::Rate {
                match_id: id.to_string(),
                like: body.and_then(|b| b.get("like")).is_some_and(truthy),
            },
            (Verb::Post, ["api", "matches", id, "vote"]) => {
                let category = body_str(body, "category")
                    .ok_or_else(|| malformed(route, "missing category"))?;
                let player =
                    body_str(body, "player").ok_or_else(|| malformed(route, "missing player"))?;
                DemoRequest::Vote {
                    match_id: id.to_string(),
                    category: category.to_string(),
                    player: player.to_string(),
                }
            }
            (Verb::Post, ["api", "matches", id, "player_ratings"]) => {
                let ratings = match body {
                    Some(value) if !value.is_null() => {
                        PlayerRatingsInput::deserialize(value)
                            .map_err(|err| malformed(route, &err.to_string()))?
                    }
                    _ => PlayerRatingsInput::default(),
                };
                DemoRequest::PlayerRatings {
                    match_id: id.to_string(),
                    ratings,
                }
            }
            _ => DemoRequest::Unsupported {
                verb,
                path: path.to_string(),
            },
        };
        Ok(request)
    }
}

/// Answers a request from the store in the backend's JSON shape.
pub fn dispatch(
    store: &mut DemoStore,
    request: DemoRequest,
    now: DateTime<Utc>,
) -> FallbackResult<Value> {
    let value = match request {
        DemoRequest::Competitions => serde_json::to_value(store.competitions())?,
        DemoRequest::CompetitionMatches { competition_id } => {
            serde_json::to_value(store.matches_for_competition(&competition_id))?
        }
        DemoRequest::GroupedMatches { country } => {
            serde_json::to_value(store.grouped_matches(now, country.as_deref()))?
        }
        DemoRequest::Match {
            match_id,
            with_lineups,
        } => {
            if with_lineups {
                let m = store
                    .match_with_lineups(&match_id)
                    .ok_or(FallbackError::MatchNotFound(match_id))?;
                serde_json::to_value(m)?
            } else {
                let m = store
                    .get_match(&match_id)
                    .ok_or_else(|| FallbackError::MatchNotFound(match_id.clone()))?;
                serde_json::to_value(m)?
            }
        }
        DemoRequest::Rating { match_id } => serde_json::to_value(store.rating(&match_id))?,
        DemoRequest::Votes { match_id } => serde_json::to_value(store.votes(&match_id, None))?,
        DemoRequest::Rate { match_id, like } => {
            serde_json::to_value(store.rate(&match_id, like))?
        }
        DemoRequest::Vote {
            match_id,
            category,
            player,
        } => serde_json::to_value(store.vote(&match_id, &category, &player))?,
        DemoRequest::Login { email, password } => serde_json::to_value(login(&email, &password)?)?,
        DemoRequest::PlayerRatings { ratings, .. } => {
            serde_json::to_value(player_ratings_echo(&ratings))?
        }
        DemoRequest::Unsupported { verb: Verb::Get, .. } => Value::Object(Map::new()),
        DemoRequest::Unsupported {
            verb: Verb::Post, ..
        } => json!({ "ok": true }),
    };
    Ok(value)
}

/// [`DemoRequest::from_path`] followed by [`dispatch`].
pub fn dispatch_path(
    store: &mut DemoStore,
    verb: Verb,
    path: &str,
    body: Option<&Value>,
    now: DateTime<Utc>,
) -> FallbackResult<Value> {
    let request = DemoRequest::from_path(verb, path, body)?;
    dispatch(store, request, now)
}

pub fn login(email: &str, password: &str) -> FallbackResult<LoginResponse> {
    if email.trim().eq_ignore_ascii_case(DEMO_EMAIL) && password == DEMO_PASSWORD {
        return Ok(LoginResponse {
            token: DEMO_TOKEN.to_string(),
            user: DemoUser {
                id: DEMO_USER_ID.to_string(),
                email: DEMO_EMAIL.to_string(),
                score: 0,
            },
        });
    }
    Err(FallbackError::DemoLoginOnly)
}

// Echoes the submitted skills back; no cross-submission averaging happens in demo mode.
pub fn player_ratings_echo(input: &PlayerRatingsInput) -> PlayerRatingsSummary {
    PlayerRatingsSummary {
        count: 1,
        averages: SkillAverages {
            attack: input.attack.unwrap_or(0.0),
            defense: input.defense.unwrap_or(0.0),
            passing: input.passing.unwrap_or(0.0),
            dribbling: input.dribbling.unwrap_or(0.0),
        },
        overall: 0.0,
        delta: 0.0,
    }
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
}

fn body_str<'a>(body: Option<&'a Value>, key: &str) -> Option<&'a str> {
    body.and_then(|b| b.get(key)).and_then(Value::as_str)
}

// Loose truthiness: `1`, `"yes"` and `{}` count as a like; `0`, `""` and `null` do not.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn malformed(path: &str, reason: &str) -> FallbackError {
    FallbackError::MalformedBody {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
