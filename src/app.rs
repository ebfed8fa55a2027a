use anyhow::{bail, Result};
use clap::ValueEnum;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;
use wolfsheep_core::{GameController, GameState, MoveEvent, Position, Role};

/// Who plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Control {
    Human,
    Computer,
}

/// Terminal front-end: renders state snapshots, reads human moves and asks
/// the engine to answer whenever a computer-controlled side is to move.
pub struct App<R, W> {
    game: GameController,
    wolf: Control,
    sheep: Control,
    pending: Rc<RefCell<VecDeque<MoveEvent>>>,
    snapshots: Rc<RefCell<Vec<GameState>>>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(mut game: GameController, wolf: Control, sheep: Control, input: R, output: W) -> Self {
        let pending = Rc::new(RefCell::new(VecDeque::new()));
        let snapshots = Rc::new(RefCell::new(Vec::new()));

        let queue = Rc::clone(&pending);
        game.subscribe_move(move |event| queue.borrow_mut().push_back(*event));
        let sink = Rc::clone(&snapshots);
        game.subscribe_state_change(move |state| sink.borrow_mut().push(state.clone()));

        Self {
            game,
            wolf,
            sheep,
            pending,
            snapshots,
            input,
            output,
        }
    }

    const fn control(&self, role: Role) -> Control {
        match role {
            Role::Wolf => self.wolf,
            Role::Sheep => self.sheep,
        }
    }

    /// Plays `games` games in a row and returns their winners. Stops early if
    /// human input runs out.
    pub fn run(&mut self, games: u32) -> Result<Vec<Role>> {
        let mut winners = Vec::new();
        for round in 1..=games {
            log::info!("Game {round} of {games}");
            self.game.start_new_game();
            self.pending.borrow_mut().clear();
            // The side to move at the start gets the same nudge a move would give.
            self.pending.borrow_mut().push_back(MoveEvent {
                turn: self.game.state().turn,
            });

            match self.play_one()? {
                Some(winner) => winners.push(winner),
                None => break,
            }
        }
        Ok(winners)
    }

    fn play_one(&mut self) -> Result<Option<Role>> {
        loop {
            self.render_latest()?;

            if let Some(winner) = self.game.state().winner {
                writeln!(self.output, "{} wins", announce(winner))?;
                return Ok(Some(winner));
            }

            let event = self.pending.borrow_mut().pop_front();
            let Some(turn) = event.and_then(|e| e.turn) else {
                bail!("no side to move in a running game");
            };

            match self.control(turn) {
                Control::Computer => {
                    if self.game.do_ai_move().is_none() {
                        bail!("engine found no move for the {turn}");
                    }
                }
                Control::Human => {
                    if !self.human_move(turn)? {
                        return Ok(None);
                    }
                }
            }
        }
    }

    /// Prompts until a legal move is played. `false` on end of input.
    fn human_move(&mut self, turn: Role) -> Result<bool> {
        loop {
            write!(self.output, "{turn} to move (x1 y1 x2 y2): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }

            let Some((from, to)) = parse_move(&line) else {
                writeln!(self.output, "expected four coordinates between 0 and 7")?;
                continue;
            };
            match self.game.move_piece(from, to) {
                Ok(_) => return Ok(true),
                Err(err) => writeln!(self.output, "illegal move: {err}")?,
            }
        }
    }

    fn render_latest(&mut self) -> Result<()> {
        let latest = self.snapshots.borrow_mut().drain(..).last();
        if let Some(state) = latest {
            write!(self.output, "{}", render(&state))?;
        }
        Ok(())
    }
}

const fn announce(winner: Role) -> &'static str {
    match winner {
        Role::Wolf => "Mr. Wolf",
        Role::Sheep => "The flock",
    }
}

fn parse_move(line: &str) -> Option<(Position, Position)> {
    let coords: Vec<u8> = line
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match coords.as_slice() {
        &[x1, y1, x2, y2] => Some((Position::new(x1, y1)?, Position::new(x2, y2)?)),
        _ => None,
    }
}

fn render(state: &GameState) -> String {
    let mut out = String::from("  0 1 2 3 4 5 6 7\n");
    for y in 0..8 {
        out.push_str(&format!("{y} "));
        for x in 0..8 {
            let square = Position { x, y };
            let glyph = if state.wolf == square {
                'W'
            } else if state.sheep.contains(&square) {
                'S'
            } else if (x + y) % 2 == 1 {
                '.'
            } else {
                ' '
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
