//! Game state module - manages the complete game state
//!
//! This module ties together the board, shapes, randomizer, and scoring. It
//! owns the active and next pieces and every rule that mutates them: spawn,
//! horizontal movement, rotation, the gravity step with its lock/clear/score
//! sequence, pause, and restart.
//!
//! Every mutating command is gated on the game being neither paused nor over,
//! and every rejected command is rejected before anything is written.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::pieces::Shape;
use crate::rng::PieceRandomizer;
use crate::scoring::calculate_line_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, BOARD_WIDTH, GRAVITY_MS};
use crate::Board;

/// Active falling piece: a shape and its top-left anchor on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a shape at the spawn anchor: horizontally centred, top row.
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Right-most anchor column that keeps the shape inside the board
    pub fn max_x(&self) -> i8 {
        BOARD_WIDTH as i8 - self.shape.width() as i8
    }
}

/// Spawn column for a shape: `floor(COLUMNS / 2 - width / 2)`
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH as i8 - shape.width() as i8) / 2
}

/// Result of a single downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Paused, game over, or no active piece
    Ignored,
    /// The piece fell one row
    Moved,
    /// The piece locked; `lines_cleared` rows were removed
    Locked { lines_cleared: usize },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    active: Option<ActivePiece>,
    next: Shape,
    randomizer: PieceRandomizer<R>,
    score: u32,
    gravity_timer_ms: u32,
    paused: bool,
    game_over: bool,
}

impl GameState<StdRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut randomizer = PieceRandomizer::new(rng);
        let next = randomizer.draw();

        let mut state = Self {
            board: Board::new(),
            active: None,
            next,
            randomizer,
            score: 0,
            gravity_timer_ms: 0,
            paused: false,
            game_over: false,
        };
        state.initialize();
        state
    }

    /// Clear board, score and flags, restart gravity, and spawn the first piece.
    fn initialize(&mut self) {
        self.board.clear();
        self.score = 0;
        self.game_over = false;
        self.paused = false;
        self.gravity_timer_ms = 0;
        self.spawn();
    }

    /// Restart after a game over. Returns false (and does nothing) otherwise.
    pub fn reset(&mut self) -> bool {
        if !self.game_over {
            return false;
        }
        info!(final_score = self.score, "restarting game");
        self.initialize();
        true
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next(&self) -> Shape {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Time accumulated toward the next gravity step
    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Draw a uniformly random canonical shape
    pub fn draw_piece(&mut self) -> Shape {
        self.randomizer.draw()
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// If the promoted piece collides at its spawn anchor the board is full:
    /// the game ends and no piece is left active.
    pub fn spawn(&mut self) -> bool {
        let shape = std::mem::replace(&mut self.next, self.randomizer.draw());
        let piece = ActivePiece::spawn(shape);

        if self.collides(&piece.shape, piece.x, piece.y) {
            self.active = None;
            self.game_over = true;
            info!(score = self.score, "spawn blocked, game over");
            return false;
        }

        debug!(kind = ?shape.kind(), x = piece.x, "spawned piece");
        self.active = Some(piece);
        true
    }

    /// Whether `shape` anchored at `(x, y)` overlaps a wall, the floor, or a locked cell
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        self.board.collides(shape, x, y)
    }

    /// Shift the active piece by `dx` columns.
    ///
    /// The target column is clamped to the board first; the move is then
    /// dropped entirely if the clamped position collides.
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let new_x = active.x.saturating_add(dx).clamp(0, active.max_x());
        if self.collides(&active.shape, new_x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece { x: new_x, ..active });
        new_x != active.x
    }

    /// Move the active piece one row down, locking it when it cannot fall.
    ///
    /// Used for both the gravity tick and the soft-drop key.
    pub fn step_down(&mut self) -> DropOutcome {
        if !self.playable() {
            return DropOutcome::Ignored;
        }
        let Some(active) = self.active else {
            return DropOutcome::Ignored;
        };

        let y = active.y + 1;
        if !self.collides(&active.shape, active.x, y) {
            self.active = Some(ActivePiece { y, ..active });
            return DropOutcome::Moved;
        }

        // Locks at the tentative row minus one.
        let lines_cleared = self.lock_piece(&active.shape, active.x, y - 1);
        self.spawn();
        DropOutcome::Locked { lines_cleared }
    }

    /// Write a shape into the board, clear full rows, and score them.
    fn lock_piece(&mut self, shape: &Shape, x: i8, y: i8) -> usize {
        for (sx, sy, kind) in shape.filled() {
            self.board.place(x + sx, y + sy, kind);
        }
        self.active = None;

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len();
        let points = calculate_line_score(lines_cleared as i32);
        self.score = self.score.saturating_add(points);

        debug!(x, y, lines_cleared, points, score = self.score, "locked piece");
        lines_cleared
    }

    /// Turn the active piece 90° clockwise in place, if the result fits.
    ///
    /// No wall kicks: a colliding rotation is simply rejected.
    pub fn rotate_clockwise(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if self.collides(&rotated, active.x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape: rotated,
            ..active
        });
        true
    }

    /// Toggle pause. Allowed at any time, including after game over.
    pub fn pause_or_unpause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance the gravity clock, stepping the piece once per full period.
    ///
    /// Returns true if any step moved or locked the piece.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);

        let mut stepped = false;
        while self.gravity_timer_ms >= GRAVITY_MS {
            self.gravity_timer_ms -= GRAVITY_MS;
            stepped |= self.step_down() != DropOutcome::Ignored;
        }
        stepped
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.step_down() != DropOutcome::Ignored,
            GameAction::RotateCw => self.rotate_clockwise(),
            GameAction::Pause => {
                self.pause_or_unpause();
                true
            }
            GameAction::Restart => self.reset(),
        }
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
