//! The single owner of the live game.
//!
//! Front-ends query legality and request moves here, and subscribe to two
//! notification streams: full state snapshots and completed moves.

use crate::engine::search::MinimaxEngine;
use crate::engine::{Move, Searcher};
use crate::logic::board::{Position, Role};
use crate::logic::eval_constants::SEARCH_DEPTH;
use crate::logic::events::{ListenerId, Listeners, MoveEvent};
use crate::logic::game::GameState;
use crate::logic::rules::{is_valid_move, MoveError};

pub struct GameController {
    state: GameState,
    engine: MinimaxEngine,
    state_listeners: Listeners<GameState>,
    move_listeners: Listeners<MoveEvent>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// A controller with no game running yet. Call [`Self::start_new_game`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::unstarted(),
            engine: MinimaxEngine::new(),
            state_listeners: Listeners::new(),
            move_listeners: Listeners::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers `listener` and immediately sends it the current state.
    pub fn subscribe_state_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GameState) + 'static,
    {
        let id = self.state_listeners.add(listener);
        self.state_listeners.notify_one(id, &self.state);
        id
    }

    pub fn unsubscribe_state_change(&mut self, id: ListenerId) -> bool {
        self.state_listeners.remove(id)
    }

    pub fn subscribe_move<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&MoveEvent) + 'static,
    {
        self.move_listeners.add(listener)
    }

    pub fn unsubscribe_move(&mut self, id: ListenerId) -> bool {
        self.move_listeners.remove(id)
    }

    pub fn start_new_game(&mut self) {
        self.state = GameState::new();
        self.state.update_status();
        log::info!("New game: wolf at {}, {} to move", self.state.wolf, Role::Wolf);
        self.emit_change();
    }

    #[must_use]
    pub fn can_move_piece(&self, from: Position, to: Position) -> bool {
        is_valid_move(&self.state, from, to).is_ok()
    }

    /// Applies a legal move and notifies listeners: state change first, then
    /// the completed move. An illegal move changes nothing and notifies no one.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<Role, MoveError> {
        let role = match self.state.make_move(from, to) {
            Ok(role) => role,
            Err(err) => {
                log::trace!("Rejected move {from} -> {to}: {err}");
                return Err(err);
            }
        };

        log::debug!("{role} moved {from} -> {to}");
        if let Some(winner) = self.state.winner {
            log::info!("Game over: {winner} wins");
        }

        self.emit_change();
        self.emit_move();
        Ok(role)
    }

    /// Lets the engine play for the side to move, always searching three
    /// plies deep. Does nothing when that side has no legal move or the game
    /// is over.
    pub fn do_ai_move(&mut self) -> Option<Move> {
        let (mv, _stats) = self.engine.search(&self.state, SEARCH_DEPTH)?;
        self.move_piece(mv.from, mv.to).ok()?;
        Some(mv)
    }

    fn emit_change(&mut self) {
        self.state_listeners.notify(&self.state);
    }

    fn emit_move(&mut self) {
        self.move_listeners.notify(&MoveEvent {
            turn: self.state.turn,
        });
    }
}
