use crate::state::{
    LineupPlayer, LineupRole, LineupsView, Match, MatchWithLineups, SideLineups,
    UnavailablePlayer,
};

pub fn derive_lineups_view(m: &Match) -> LineupsView {
    LineupsView {
        lineups_status: m.lineups_status,
        formation_home: m.formation_home.clone(),
        formation_away: m.formation_away.clone(),
        home: side_view(&m.lineup_home, &m.bench_home, &m.unavailable_home),
        away: side_view(&m.lineup_away, &m.bench_away, &m.unavailable_away),
        lineups_updated_at: m.lineups_updated_at,
        injuries_updated_at: m.injuries_updated_at,
    }
}

pub fn with_lineups(m: &Match) -> MatchWithLineups {
    MatchWithLineups {
        fixture: m.clone(),
        lineups: derive_lineups_view(m),
    }
}

// Starters come from the role tag on the single roster; the bench list is stored separately.
fn side_view(
    roster: &[LineupPlayer],
    bench: &[LineupPlayer],
    unavailable: &[UnavailablePlayer],
) -> SideLineups {
    SideLineups {
        starters: roster
            .iter()
            .filter(|p| p.role == LineupRole::Starter)
            .cloned()
            .collect(),
        bench: bench.to_vec(),
        unavailable: unavailable.to_vec(),
    }
}
