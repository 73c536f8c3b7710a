//! Game state module - the session object
//!
//! `GameState` owns the board, the active and preview pieces, the piece
//! generator, score/level progress and the drop timer. Every mutation goes
//! through its methods; renderers read a [`GameSnapshot`] and sound consumers
//! drain [`GameEvent`]s.
//!
//! Lifecycle: `new` → `start` (Active) → spawn collision (GameOver) →
//! `restart` (Active again, everything reset).

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{clamp_x, try_rotate, Piece};
use crate::rng::PieceRng;
use crate::scoring::Progress;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, PreviewSnapshot};
use crate::types::{GameAction, GameEvent, SPAWN_Y};

/// Events buffered between two [`GameState::take_events`] calls.
pub const MAX_PENDING_EVENTS: usize = 32;

/// Pending feedback events, oldest first.
pub type EventQueue = ArrayVec<GameEvent, MAX_PENDING_EVENTS>;

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Piece,
    rng: PieceRng,
    progress: Progress,
    /// Time accumulated towards the next gravity step.
    drop_accumulator_ms: u32,
    running: bool,
    started: bool,
    /// Increments on every restart.
    episode_id: u32,
    /// Pieces successfully spawned in this session.
    pieces_spawned: u32,
    events: EventQueue,
}

impl GameState {
    /// Create a new game with a seeded uniform piece generator
    pub fn new(seed: u64) -> Self {
        Self::with_rng(PieceRng::new(seed))
    }

    /// Create a new game on an empty board with the given piece generator
    pub fn with_rng(rng: PieceRng) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Create a new game on a prepared board
    pub fn with_board(board: Board, mut rng: PieceRng) -> Self {
        let next = rng.random_piece();
        Self {
            board,
            active: None,
            next,
            rng,
            progress: Progress::new(),
            drop_accumulator_ms: 0,
            running: false,
            started: false,
            episode_id: 0,
            pieces_spawned: 0,
            events: EventQueue::new(),
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.running = true;
        self.push_event(GameEvent::Started);
        log::debug!("session {} started", self.episode_id);
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Active state: pieces fall and input is accepted.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Terminal state: only a restart is accepted.
    pub fn is_game_over(&self) -> bool {
        self.started && !self.running
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.progress.drop_interval_ms
    }

    pub fn drop_accumulator_ms(&self) -> u32 {
        self.drop_accumulator_ms
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// The preview piece that the next spawn will promote.
    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Drain queued feedback events.
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            log::trace!("event queue full, dropping {:?}", event);
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = [[None; crate::snapshot::BOARD_COLS]; crate::snapshot::BOARD_ROWS];
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = PreviewSnapshot::from(self.next);
        out.score = self.progress.score;
        out.lines = self.progress.lines;
        out.level = self.progress.level;
        out.drop_interval_ms = self.progress.drop_interval_ms;
        out.running = self.running;
        out.game_over = self.is_game_over();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the preview piece to active and draw a new preview
    ///
    /// The new piece is centered horizontally one row above the board. If it
    /// collides there the session ends and nothing is placed.
    pub fn spawn_piece(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let mut piece = self.next;
        self.next = self.rng.random_piece();
        piece.x = piece.centered_x();
        piece.y = SPAWN_Y;

        if self.board.collides(&piece.shape, piece.x, piece.y) {
            self.active = None;
            self.game_over();
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    fn game_over(&mut self) {
        self.running = false;
        self.push_event(GameEvent::GameOver);
        log::info!(
            "game over: score={} lines={} level={} pieces={}",
            self.progress.score,
            self.progress.lines,
            self.progress.level,
            self.pieces_spawned
        );
    }

    /// Shift the active piece horizontally by `dx`
    ///
    /// The target column is clamped onto the board before the collision test,
    /// so pushing against a wall commits the boundary column and still counts
    /// as a move. Returns false only when the clamped position collides.
    pub fn move_by(&mut self, dx: i8) -> bool {
        if !self.running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let target_x = clamp_x(active.x.saturating_add(dx), active.shape.width());
        if self.board.collides(&active.shape, target_x, active.y) {
            return false;
        }

        self.active = Some(Piece {
            x: target_x,
            ..active
        });
        self.push_event(GameEvent::Moved);
        true
    }

    /// Rotate the active piece clockwise with horizontal wall kicks
    ///
    /// Rejected rotations leave the piece untouched.
    pub fn rotate(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let result = try_rotate(&active.shape, active.x, active.y, |shape, x, y| {
            board.collides(shape, x, y)
        });

        let Some((shape, x)) = result else {
            return false;
        };

        self.active = Some(Piece { shape, x, ..active });
        self.push_event(GameEvent::Rotated);
        true
    }

    /// Move the active piece down one row, or lock it if it cannot fall
    ///
    /// Returns true if the piece stepped down, false if it was locked (or
    /// nothing happened because the session is not running).
    pub fn soft_drop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.board.piece_collides(&active, 0, 1) {
            self.lock_piece();
            return false;
        }

        self.active = Some(Piece {
            y: active.y + 1,
            ..active
        });
        self.push_event(GameEvent::SoftDropStep);
        true
    }

    /// Drop the active piece to the lowest legal row and lock it
    ///
    /// Returns the number of rows the piece fell.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.running {
            return 0;
        }
        let Some(mut active) = self.active else {
            return 0;
        };

        let mut distance = 0;
        while !self.board.piece_collides(&active, 0, 1) {
            active.y += 1;
            distance += 1;
        }
        self.active = Some(active);

        self.lock_piece();
        distance
    }

    /// Merge the active piece, clear full rows, update progress and spawn the next piece
    pub fn lock_piece(&mut self) {
        if !self.running {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge_piece(&active);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            let result = self.progress.apply_clear(cleared);
            self.push_event(GameEvent::LinesCleared(cleared.min(u8::MAX as u32) as u8));
            if result.level_changed {
                log::debug!(
                    "level {} reached, drop interval {}ms",
                    self.progress.level,
                    self.progress.drop_interval_ms
                );
            }
        }

        self.spawn_piece();
        // Lock feedback trails the clear and any game over.
        self.push_event(GameEvent::Locked);
    }

    /// Reset everything and start a new session
    ///
    /// Only accepted after game over. The piece generator keeps its stream.
    pub fn restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }

        let rng = std::mem::take(&mut self.rng);
        let events = std::mem::take(&mut self.events);
        let episode_id = self.episode_id.wrapping_add(1);

        *self = Self::with_rng(rng);
        self.events = events;
        self.episode_id = episode_id;
        self.start();
        true
    }

    /// Advance the drop timer by `elapsed_ms`
    ///
    /// Once the accumulated time exceeds the drop interval, one soft-drop step
    /// runs and the accumulator resets to zero; leftover time is discarded.
    /// Does nothing unless the session is running. Returns true if a step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }

        self.drop_accumulator_ms = self.drop_accumulator_ms.saturating_add(elapsed_ms);
        if self.drop_accumulator_ms <= self.progress.drop_interval_ms {
            return false;
        }

        self.soft_drop();
        self.drop_accumulator_ms = 0;
        true
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1),
            GameAction::MoveRight => self.move_by(1),
            GameAction::SoftDrop => {
                let was_running = self.running;
                self.soft_drop();
                was_running
            }
            GameAction::HardDrop => {
                let was_running = self.running && self.active.is_some();
                self.hard_drop();
                was_running
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
