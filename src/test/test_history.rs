
#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::{level_from_map, GameTestState};

    #[test]
    fn undo_and_redo_on_empty_stacks_do_nothing() {
        let mut game = GameTestState::new("@.");
        let before = game.game.snapshot();

        assert_eq!(game.game.undo(), GameUpdate::NoChange);
        assert_eq!(game.game.redo(), GameUpdate::NoChange);
        assert_eq!(before, game.game.snapshot());
    }

    #[test]
    fn undo_walks_back_in_order() {
        let mut game = GameTestState::new("@A..");
        game.assert_moves(&[Right, Right]);
        game.assert_matches("..@A");

        game.assert_step(UserAction::Undo);
        game.assert_matches(".@A.");
        assert_eq!(game.game.player_position(), Position::new(1, 0));

        game.assert_step(UserAction::Undo);
        game.assert_matches("@A..");
        assert_eq!(game.game.player_position(), Position::new(0, 0));

        assert_eq!(game.game.undo(), GameUpdate::NoChange);
    }

    #[test]
    fn undo_then_redo_restores_state() {
        let mut game = GameTestState::new("@Aa.");
        game.assert_moves(&[Right, Right]);
        let after_moves = game.game.snapshot();

        game.assert_step(UserAction::Undo);
        assert_ne!(after_moves, game.game.snapshot());
        game.assert_step(UserAction::Redo);

        assert_eq!(after_moves, game.game.snapshot());
        assert_eq!(game.game.redo_depth(), 0);
        assert_eq!(game.game.undo_depth(), 2);
    }

    #[test]
    fn undo_and_redo_leave_move_count_alone() {
        let mut game = GameTestState::new("@...");
        game.assert_moves(&[Right, Right, Right]);

        game.assert_step(UserAction::Undo);
        game.assert_step(UserAction::Undo);
        assert_eq!(game.game.move_count(), 3);

        game.assert_step(UserAction::Redo);
        assert_eq!(game.game.move_count(), 3);
    }

    #[test]
    fn new_move_after_undo_discards_redo() {
        let mut game = GameTestState::new(".@.");
        game.assert_move(Right);
        game.assert_step(UserAction::Undo);
        game.assert_move(Left);

        assert_eq!(game.game.redo(), GameUpdate::NoChange);
        game.assert_matches("@..");
    }

    #[test]
    fn reset_restores_initial_board_and_counter() {
        let map = r#"
#+..#
#.A.#
#...#
"#;
        let mut game = GameTestState::new(map);
        game.assert_moves(&[Right, Down]);
        game.assert_matches(r#"
#a..#
#.@.#
#.A.#
"#);
        // blocked: crate would leave the board
        game.game.move_player(Down);

        assert_eq!(game.game.reset(), GameUpdate::NextState(GameChangeType::Reset));
        game.assert_matches(map);
        assert_eq!(game.game.move_count(), 0);
        assert_eq!(game.game.player_position(), Position::new(1, 0));
        assert_eq!(game.game.board().find_player(), Some(game.game.player_position()));
    }

    #[test]
    fn reset_keeps_history() {
        let mut game = GameTestState::new("@..");
        game.assert_moves(&[Right, Right]);
        game.assert_step(UserAction::Undo);
        game.assert_step(UserAction::Reset);

        assert_eq!(game.game.undo_depth(), 1);
        assert_eq!(game.game.redo_depth(), 1);

        game.assert_step(UserAction::Redo);
        game.assert_matches("..@");
        assert_eq!(game.game.player_position(), Position::new(2, 0));
    }

    #[test]
    fn reset_uses_snapshot_from_set_initial_state() {
        let mut game = GameTestState::new("@..");
        game.assert_move(Right);
        game.game.set_initial_state();
        game.assert_move(Right);

        game.assert_step(UserAction::Reset);
        game.assert_matches(".@.");
        assert_eq!(game.game.player_position(), Position::new(1, 0));
    }

    #[test]
    fn reset_without_initial_state_is_ignored() {
        let mut game = GameState::from_level(&level_from_map("@..")).unwrap();
        game.move_player(Right);
        assert!(!game.has_initial_state());

        assert_eq!(game.reset(), GameUpdate::NoChange);
        assert_eq!(game.player_position(), Position::new(1, 0));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn history_limit_caps_undo_depth() {
        let level = level_from_map("@.....");
        let mut game = GameState::from_level_with_config(&level, EngineConfig::with_history_limit(2)).unwrap();
        for _ in 0..5 {
            game.move_player(Right);
        }

        assert_eq!(game.undo_depth(), 2);
        assert_eq!(game.undo(), GameUpdate::NextState(GameChangeType::Undo));
        assert_eq!(game.undo(), GameUpdate::NextState(GameChangeType::Undo));
        assert_eq!(game.undo(), GameUpdate::NoChange);
        assert_eq!(game.player_position(), Position::new(3, 0));
    }
}
