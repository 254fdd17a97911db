use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use matchday_demo::error::FallbackError;
use matchday_demo::fallback::{
    DEMO_EMAIL, DEMO_PASSWORD, DemoRequest, Verb, dispatch, dispatch_path,
};
use matchday_demo::fixtures::FixtureCatalog;
use matchday_demo::store::DemoStore;

fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 1, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn store() -> DemoStore {
    DemoStore::with_catalog(FixtureCatalog::seeded(morning()))
}

fn get(store: &mut DemoStore, path: &str) -> Result<Value, FallbackError> {
    dispatch_path(store, Verb::Get, path, None, morning())
}

fn post(store: &mut DemoStore, path: &str, body: Value) -> Result<Value, FallbackError> {
    dispatch_path(store, Verb::Post, path, Some(&body), morning())
}

#[test]
fn parses_backend_paths_into_requests() {
    let cases = [
        (Verb::Get, "/api/competitions", DemoRequest::Competitions),
        (
            Verb::Get,
            "/api/competitions/comp_ucl/matches",
            DemoRequest::CompetitionMatches {
                competition_id: "comp_ucl".to_string(),
            },
        ),
        (
            Verb::Get,
            "/api/matches/m1?include=lineups",
            DemoRequest::Match {
                match_id: "m1".to_string(),
                with_lineups: true,
            },
        ),
        (
            Verb::Get,
            "/api/matches/m1",
            DemoRequest::Match {
                match_id: "m1".to_string(),
                with_lineups: false,
            },
        ),
        (
            Verb::Get,
            "/api/matches/m-42/rating",
            DemoRequest::Rating {
                match_id: "m-42".to_string(),
            },
        ),
        (
            Verb::Get,
            "/api/matches/m1/votes",
            DemoRequest::Votes {
                match_id: "m1".to_string(),
            },
        ),
        (
            Verb::Get,
            "/api/matches/grouped",
            DemoRequest::GroupedMatches { country: None },
        ),
    ];
    for (verb, path, expected) in cases {
        let parsed = DemoRequest::from_path(verb, path, None).expect("path should parse");
        assert_eq!(parsed, expected, "{path}");
    }
}

#[test]
fn verb_decides_between_read_and_write() {
    let parsed = DemoRequest::from_path(Verb::Get, "/api/matches/m1/rate", None)
        .expect("unknown GET is not an error");
    assert!(matches!(parsed, DemoRequest::Unsupported { verb: Verb::Get, .. }));

    let body = json!({ "like": true });
    let parsed = DemoRequest::from_path(Verb::Post, "/api/matches/m1/rate", Some(&body))
        .expect("rate body parses");
    assert_eq!(
        parsed,
        DemoRequest::Rate {
            match_id: "m1".to_string(),
            like: true
        }
    );
}

#[test]
fn lists_competitions_and_competition_matches() {
    let mut store = store();
    let comps = get(&mut store, "/api/competitions").expect("competitions");
    assert_eq!(comps.as_array().map(Vec::len), Some(2));
    assert_eq!(comps[0]["_id"], "comp_la_liga");
    assert_eq!(comps[0]["countryCode"], "ES");
    assert_eq!(comps[1]["type"], "cup");

    let matches = get(&mut store, "/api/competitions/comp_ucl/matches").expect("matches");
    let ids: Vec<&str> = matches
        .as_array()
        .expect("array of matches")
        .iter()
        .filter_map(|m| m["_id"].as_str())
        .collect();
    assert_eq!(ids, vec!["m2", "m3"]);

    let none = get(&mut store, "/api/competitions/comp_none/matches").expect("empty list");
    assert_eq!(none, json!([]));
}

#[test]
fn match_with_lineups_has_backend_shape() {
    let mut store = store();
    let m = get(&mut store, "/api/matches/m1?include=lineups").expect("m1 exists");
    assert_eq!(m["_id"], "m1");
    assert_eq!(m["homeTeam"]["name"], "Team A");
    assert_eq!(m["lineups"]["lineups_status"], "probable");
    assert_eq!(m["lineups"]["home"]["starters"][1]["playerId"], "home_cf");
    assert_eq!(m["lineups"]["away"]["unavailable"][0]["type"], "suspension");

    let plain = get(&mut store, "/api/matches/m1").expect("m1 exists");
    assert!(plain.get("lineups").is_none());
}

#[test]
fn unknown_match_lookup_fails_with_not_found() {
    let mut store = store();
    let err = get(&mut store, "/api/matches/nope?include=lineups")
        .expect_err("unknown match cannot be shaped");
    assert!(matches!(err, FallbackError::MatchNotFound(ref id) if id == "nope"));
}

#[test]
fn rate_then_read_rating() {
    let mut store = store();
    post(&mut store, "/api/matches/m2/rate", json!({ "like": true })).expect("rate");
    post(&mut store, "/api/matches/m2/rate", json!({ "like": true })).expect("rate");
    post(&mut store, "/api/matches/m2/rate", json!({ "like": true })).expect("rate");
    let last = post(&mut store, "/api/matches/m2/rate", json!({})).expect("missing like is a dislike");
    assert_eq!(last, json!({ "likes": 3, "dislikes": 1, "likePct": 75 }));
    assert_eq!(get(&mut store, "/api/matches/m2/rating").expect("rating"), last);
    let numeric = post(&mut store, "/api/matches/m2/rate", json!({ "like": 1 })).expect("rate");
    assert_eq!(numeric, json!({ "likes": 4, "dislikes": 1, "likePct": 80 }));
    let zero = post(&mut store, "/api/matches/m2/rate", json!({ "like": 0 })).expect("rate");
    assert_eq!(zero["dislikes"], 2);
}

#[test]
fn vote_then_read_votes() {
    let mut store = store();
    post(&mut store, "/api/matches/m1/vote", json!({ "category": "mvp", "player": "Alice" }))
        .expect("vote");
    post(&mut store, "/api/matches/m1/vote", json!({ "category": "scorer", "player": "Bob" }))
        .expect("vote");
    let scoped = post(&mut store, "/api/matches/m1/vote", json!({ "category": "mvp", "player": "Alice" }))
        .expect("vote");
    assert_eq!(
        scoped,
        json!({ "percentages": { "mvp": { "Alice": 100 } }, "totals": { "mvp": 2 } })
    );

    let all = get(&mut store, "/api/matches/m1/votes").expect("votes");
    assert_eq!(all["totals"], json!({ "mvp": 2, "scorer": 1 }));
}

#[test]
fn vote_without_category_is_malformed() {
    let mut store = store();
    let err = post(&mut store, "/api/matches/m1/vote", json!({ "player": "Alice" }))
        .expect_err("category is required");
    assert!(matches!(err, FallbackError::MalformedBody { .. }));
    assert!(store.votes("m1", None).percentages.is_empty());
}

#[test]
fn login_accepts_only_demo_account() {
    let mut store = store();
    let ok = post(
        &mut store,
        "/api/auth/login",
        json!({ "email": "Demo@Demo.com", "password": DEMO_PASSWORD }),
    )
    .expect("demo credentials accepted");
    assert_eq!(
        ok,
        json!({ "token": "demo-token", "user": { "id": "demo", "email": DEMO_EMAIL, "score": 0 } })
    );

    let err = post(
        &mut store,
        "/api/auth/login",
        json!({ "email": DEMO_EMAIL, "password": "wrong" }),
    )
    .expect_err("wrong password rejected");
    assert!(matches!(err, FallbackError::DemoLoginOnly));
    assert_eq!(err.to_string(), "demo_login_only");
}

#[test]
fn player_ratings_echo_submitted_values() {
    let mut store = store();
    let out = post(
        &mut store,
        "/api/matches/m1/player_ratings",
        json!({ "player": "CF Home", "attack": 8, "passing": 6.5 }),
    )
    .expect("player ratings stub");
    assert_eq!(out["count"], 1);
    assert_eq!(out["averages"]["attack"], 8.0);
    assert_eq!(out["averages"]["passing"], 6.5);
    assert_eq!(out["averages"]["defense"], 0.0);
    assert_eq!(out["overall"], 0.0);
    assert_eq!(out["delta"], 0.0);
}

#[test]
fn grouped_matches_route_uses_country() {
    let mut store = store();
    let grouped = get(&mut store, "/api/matches/grouped?country=CH").expect("grouped");
    let today = grouped["today"].as_array().expect("today bucket");
    assert_eq!(today.len(), 3);
    assert_eq!(today[0]["id"], "m1");
    assert_eq!(today[0]["channelsForCountry"], json!(["blue Sport"]));
    assert_eq!(today[1]["channelsForCountry"], json!([]));
}

#[test]
fn unrecognized_paths_return_neutral_objects() {
    let mut store = store();
    for path in ["/api/unknown", "", "///", "/api/matches/m1/votes/extra?x=1", "not a path"] {
        let out = get(&mut store, path).expect("unsupported GET never errors");
        assert_eq!(out, json!({}), "{path}");
    }
    let out = post(&mut store, "/api/push/register", json!({ "token": "abc" }))
        .expect("unsupported POST never errors");
    assert_eq!(out, json!({ "ok": true }));
}

#[test]
fn typed_requests_dispatch_without_paths() {
    let mut store = store();
    let out = dispatch(
        &mut store,
        DemoRequest::Vote {
            match_id: "m3".to_string(),
            category: "performance_of_the_night".to_string(),
            player: "Fighter B".to_string(),
        },
        morning(),
    )
    .expect("typed vote");
    assert_eq!(out["totals"]["performance_of_the_night"], 1);
}
