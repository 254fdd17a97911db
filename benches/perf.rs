use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

use matchday_demo::fallback::{Verb, dispatch_path};
use matchday_demo::lineups::derive_lineups_view;
use matchday_demo::store::DemoStore;

fn busy_store() -> DemoStore {
    let mut store = DemoStore::new();
    for i in 0..2_000u32 {
        let candidate = format!("Player {}", i % 25);
        let category = if i % 3 == 0 { "scorer" } else { "mvp" };
        store.vote("m1", category, &candidate);
        store.rate("m1", i % 4 != 0);
    }
    store
}

fn bench_vote_write(c: &mut Criterion) {
    let mut store = busy_store();
    c.bench_function("vote_write", |b| {
        b.iter(|| {
            let view = store.vote(black_box("m1"), "mvp", "Player 7");
            black_box(view.totals.len());
        })
    });
}

fn bench_votes_read(c: &mut Criterion) {
    let store = busy_store();
    let allowed: Vec<String> = ["mvp", "scorer", "assist", "defender", "goalkeeper"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    c.bench_function("votes_read_allowed", |b| {
        b.iter(|| {
            let view = store.votes(black_box("m1"), Some(allowed.as_slice()));
            black_box(view.percentages.len());
        })
    });
}

fn bench_lineups_view(c: &mut Criterion) {
    let store = DemoStore::new();
    let m = store.get_match("m1").cloned().expect("seed match m1");
    c.bench_function("lineups_view", |b| {
        b.iter(|| {
            let view = derive_lineups_view(black_box(&m));
            black_box(view.home.starters.len());
        })
    });
}

fn bench_dispatch_path(c: &mut Criterion) {
    let mut store = busy_store();
    let body = json!({ "category": "mvp", "player": "Player 3" });
    let now = chrono::Utc::now();
    c.bench_function("dispatch_vote_path", |b| {
        b.iter(|| {
            let out = dispatch_path(
                &mut store,
                Verb::Post,
                black_box("/api/matches/m1/vote"),
                Some(&body),
                now,
            )
            .unwrap();
            black_box(out);
        })
    });
    c.bench_function("dispatch_match_lineups", |b| {
        b.iter(|| {
            let out = dispatch_path(
                &mut store,
                Verb::Get,
                black_box("/api/matches/m1?include=lineups"),
                None,
                now,
            )
            .unwrap();
            black_box(out);
        })
    });
}

criterion_group!(
    perf,
    bench_vote_write,
    bench_votes_read,
    bench_lineups_view,
    bench_dispatch_path
);
criterion_main!(perf);
