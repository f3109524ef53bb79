// crates/vb_core/src/models/record_contracts_test.rs

#[cfg(test)]
mod record_gates {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::game::{Game, GameStatus, Gender, UsageMode};
    use crate::models::rules::{default_rules_for, GameKind};
    use crate::models::team::{RosterPlayer, TeamInfo, TeamSide};

    fn team(name: &str) -> TeamInfo {
        TeamInfo {
            id: Uuid::new_v4(),
            name: name.to_string(),
            color: "#FF0000".to_string(),
            libero_color: "#FFFFFF".to_string(),
            players: vec![RosterPlayer { number: 1, name: "One".to_string() }],
            liberos: Vec::new(),
            captain: 1,
        }
    }

    fn game(kind: GameKind) -> Game {
        Game::new(
            Uuid::new_v4(),
            Utc::now(),
            Gender::Mixed,
            UsageMode::Normal,
            team("Home"),
            team("Guest"),
            default_rules_for(kind).clone(),
        )
        .unwrap()
    }

    // ============================================
    // GATE: refreshed counters always equal ladder counts
    // ============================================

    #[test]
    fn gate_refreshed_counters_match_ladder() {
        let mut game = game(GameKind::Indoor);
        game.start_set(TeamSide::Home).unwrap();
        for _ in 0..13 {
            game.record_point(TeamSide::Home).unwrap();
        }
        for _ in 0..8 {
            game.record_point(TeamSide::Guest).unwrap();
        }
        // Corrupt every cache the refresh must repair.
        game.sets[0].home_points = 1;
        game.sets[0].guest_points = 40;
        game.home_sets = 7;

        game.refresh_score();

        let set = game.set(0).unwrap();
        assert_eq!(set.home_points, set.points(TeamSide::Home));
        assert_eq!(set.guest_points, set.points(TeamSide::Guest));
        assert_eq!(set.home_points as usize + set.guest_points as usize, set.rally_count());
        assert_eq!(game.home_sets, 1);
        assert_eq!(game.guest_sets, 0);
    }

    // ============================================
    // GATE: a completed match holds a set majority
    // ============================================

    #[test]
    fn gate_completed_requires_majority() {
        // Beach is best of three; one set must not complete the match.
        let mut game = game(GameKind::Beach);
        game.start_set(TeamSide::Home).unwrap();
        for _ in 0..21 {
            game.record_point(TeamSide::Home).unwrap();
        }
        game.refresh_score();
        assert_eq!(game.status, GameStatus::Live);

        game.start_set(TeamSide::Guest).unwrap();
        for _ in 0..21 {
            game.record_point(TeamSide::Home).unwrap();
        }
        game.refresh_score();
        assert_eq!(game.status, GameStatus::Completed);
        assert!(game.home_sets >= game.rules.sets_to_win());
    }

    // ============================================
    // GATE: undecided sets never count toward either side
    // ============================================

    #[test]
    fn gate_tied_set_counts_for_nobody() {
        let mut game = game(GameKind::Indoor);
        game.start_set(TeamSide::Home).unwrap();
        game.record_point(TeamSide::Home).unwrap();
        game.record_point(TeamSide::Guest).unwrap();
        game.refresh_score();
        assert_eq!((game.home_sets, game.guest_sets), (0, 0));
        assert_eq!(game.status, GameStatus::Live);
    }
}
