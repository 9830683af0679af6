
#[cfg(test)]
mod test {
    use crate::console_interface::{load_level_file, run_script, LoadError, LevelError};
    use crate::core::*;
    use crate::models::GameSummary;

    const LEVEL: &str = "5 7\n#######\n#@....#\n#.A.A.#\n#.a.a.#\n#######\n";

    fn write_temp_level(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("sokoban_rules_{}_{}.lvl", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_level_file_reads_and_plays() {
        let path = write_temp_level("plays", LEVEL);
        let mut game = load_level_file(&path, EngineConfig::default()).unwrap();
        std::fs::remove_file(&path).unwrap();
        game.set_initial_state();

        assert_eq!(game.height(), 5);
        assert_eq!(game.width(), 7);
        assert_eq!(game.player_position(), Position::new(1, 1));

        run_script(&mut game, "ds wdds");
        assert!(game.is_won());
        assert_eq!(game.move_count(), 6);
        assert_eq!(
            game.to_string(),
            "#######\n#.....#\n#...@.#\n#.1.1.#\n#######\nPlayer Position: (4, 2)\n"
        );
    }

    #[test]
    fn load_level_file_reports_missing_file() {
        let path = std::env::temp_dir().join("sokoban_rules_does_not_exist.lvl");
        let err = load_level_file(&path, EngineConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)), "unexpected error {err}");
    }

    #[test]
    fn load_level_file_reports_bad_level() {
        let path = write_temp_level("bad", "2 3\n#@#\n");
        let err = load_level_file(&path, EngineConfig::default()).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::Level(LevelError::MissingRow { expected: 2, found: 1 })));
        assert_eq!(err.to_string(), "malformed level: level declares 2 rows but only has 1");
    }

    #[test]
    fn game_state_parses_from_str() {
        let game: GameState = LEVEL.parse().unwrap();
        assert_eq!(game.board().tally().loose_crates, 2);
        assert!(!game.has_initial_state());
        assert_eq!(game.undo_depth(), 0);
    }

    #[test]
    fn game_state_wraps_a_prebuilt_board() {
        let cells = vec![Cell::PlayerOnFloor, Cell::CrateOnFloor, Cell::Storage];
        let board = Board::from_cells(3, 1, cells).unwrap();
        let mut game = GameState::new(board).unwrap();
        assert_eq!(game.player_position(), Position::new(0, 0));

        game.move_player(Direction::Right);
        assert!(game.is_won());
        assert_eq!(game.to_string(), ".@1\nPlayer Position: (1, 0)\n");
    }

    #[test]
    fn prebuilt_board_with_two_players_is_rejected() {
        let cells = vec![Cell::PlayerOnFloor, Cell::Floor, Cell::PlayerOnStorage];
        let board = Board::from_cells(3, 1, cells).unwrap();
        let err = GameState::new(board).unwrap_err();
        assert_eq!(
            LevelError::from(err),
            LevelError::MultiplePlayers {
                first: Position::new(0, 0),
                second: Position::new(2, 0),
            }
        );
    }

    #[test]
    fn summary_serializes_final_state() {
        let mut game: GameState = "1 3\n@Aa\n".parse().unwrap();
        game.move_player(Direction::Right);
        game.move_player(Direction::Right);

        let summary = GameSummary::new(&game);
        assert_eq!(summary.rows, vec![".@1".to_string()]);
        assert!(summary.won);
        assert_eq!(summary.move_count, 1);
        assert_eq!(summary.undo_depth, 2);

        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["player"], serde_json::json!({ "x": 1, "y": 0 }));
        assert_eq!(json["won"], serde_json::json!(true));
    }
}
