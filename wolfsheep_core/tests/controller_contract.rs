#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wolfsheep_core::{GameController, GameState, MoveError, Position, Role};

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    struct Observed {
        game: GameController,
        changes: Rc<RefCell<usize>>,
        moves: Rc<RefCell<usize>>,
    }

    impl Observed {
        /// A started game with counters on both notification streams.
        fn new() -> Self {
            let mut game = GameController::default();
            game.start_new_game();

            let changes = Rc::new(RefCell::new(0));
            let moves = Rc::new(RefCell::new(0));
            let change_counter = Rc::clone(&changes);
            game.subscribe_state_change(move |_| *change_counter.borrow_mut() += 1);
            let move_counter = Rc::clone(&moves);
            game.subscribe_move(move |_| *move_counter.borrow_mut() += 1);

            // Forget the replay sent on subscription.
            *changes.borrow_mut() = 0;
            Self {
                game,
                changes,
                moves,
            }
        }

        fn play(&mut self, from: (u8, u8), to: (u8, u8)) {
            self.game
                .move_piece(pos(from.0, from.1), pos(to.0, to.1))
                .unwrap();
        }

        /// Asserts the move is refused without touching state or listeners.
        fn reject(&mut self, from: (u8, u8), to: (u8, u8)) -> MoveError {
            let before = self.game.state().clone();
            let (changes, moves) = (*self.changes.borrow(), *self.moves.borrow());

            let err = self
                .game
                .move_piece(pos(from.0, from.1), pos(to.0, to.1))
                .unwrap_err();

            assert_eq!(*self.game.state(), before);
            assert_eq!(*self.changes.borrow(), changes);
            assert_eq!(*self.moves.borrow(), moves);
            err
        }
    }

    #[test]
    fn test_illegal_moves_are_silent_noops() {
        let mut obs = Observed::new();

        // Sheep moving on the wolf's turn.
        assert_eq!(obs.reject((1, 0), (2, 1)), MoveError::NotYourTurn(Role::Sheep));
        // Not adjacent.
        assert!(matches!(
            obs.reject((4, 7), (2, 5)),
            MoveError::InvalidMovePattern { .. }
        ));
        // Straight up.
        assert!(matches!(
            obs.reject((4, 7), (4, 6)),
            MoveError::InvalidMovePattern { .. }
        ));
        // Empty source.
        assert_eq!(obs.reject((0, 0), (1, 1)), MoveError::NoPieceAtSource(pos(0, 0)));

        obs.play((4, 7), (3, 6));
        obs.play((3, 0), (2, 1));
        obs.play((3, 6), (2, 5));

        // Destination taken by another sheep.
        assert_eq!(obs.reject((1, 0), (2, 1)), MoveError::TargetOccupied(pos(2, 1)));

        obs.play((2, 1), (3, 2));
        obs.play((2, 5), (3, 4));

        // Backward sheep move.
        assert!(matches!(
            obs.reject((3, 2), (2, 1)),
            MoveError::InvalidMovePattern { .. }
        ));

        assert_eq!(*obs.changes.borrow(), 5);
        assert_eq!(*obs.moves.borrow(), 5);
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut obs = Observed::new();

        // The corner sheep steps aside and the wolf runs up the right edge.
        let script = [
            ((4, 7), (5, 6)),
            ((7, 0), (6, 1)),
            ((5, 6), (6, 5)),
            ((6, 1), (5, 2)),
            ((6, 5), (7, 4)),
            ((1, 0), (0, 1)),
            ((7, 4), (6, 3)),
            ((0, 1), (1, 2)),
            ((6, 3), (7, 2)),
            ((1, 2), (0, 3)),
            ((7, 2), (6, 1)),
            ((0, 3), (1, 4)),
        ];
        for (from, to) in script {
            obs.play(from, to);
            assert_eq!(obs.game.state().winner, None);
        }

        obs.play((6, 1), (7, 0));
        assert_eq!(obs.game.state().winner, Some(Role::Wolf));

        assert_eq!(obs.reject((1, 4), (2, 5)), MoveError::GameOver);
        assert!(!obs.game.can_move_piece(pos(5, 0), pos(4, 1)));
        assert_eq!(obs.game.do_ai_move(), None);
        assert_eq!(*obs.moves.borrow(), script.len() + 1);
    }

    #[test]
    fn test_can_move_piece_is_idempotent() {
        let mut game = GameController::default();
        game.start_new_game();
        let snapshot: GameState = game.state().clone();

        for _ in 0..3 {
            assert!(game.can_move_piece(pos(4, 7), pos(3, 6)));
            assert!(game.can_move_piece(pos(4, 7), pos(5, 6)));
            assert!(!game.can_move_piece(pos(4, 7), pos(4, 6)));
            assert!(!game.can_move_piece(pos(1, 0), pos(0, 1)));
        }
        assert_eq!(*game.state(), snapshot);
    }

    #[test]
    fn test_restart_resets_state_and_notifies() {
        let mut obs = Observed::new();
        obs.play((4, 7), (5, 6));
        obs.game.start_new_game();
        assert_eq!(*obs.game.state(), GameState::new());
        assert_eq!(*obs.changes.borrow(), 2);
        assert_eq!(*obs.moves.borrow(), 1);
    }
}
