//! Snake simulation data structures.
//!
//! Positions are pixel coordinates snapped to the cell size, origin top-left,
//! bounds `[0, width) x [0, height)`. The head lives at the front of the body.

use rand::Rng;
use std::collections::VecDeque;

use crate::constants::{GRID_HEIGHT, GRID_WIDTH, CELL_SIZE};
use crate::settings::Difficulty;

/// Cardinal heading for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector for this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A grid position (both coordinates multiples of the cell size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A bonus or anti-bonus with its own independent spawn timer.
#[derive(Debug, Clone, Copy)]
pub struct TimedItem {
    pub pos: Position,
    pub active: bool,
    /// Milliseconds since this item last spawned or was deactivated.
    pub idle_ms: u64,
}

impl TimedItem {
    fn inactive() -> Self {
        Self {
            pos: Position { x: 0, y: 0 },
            active: false,
            idle_ms: 0,
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.idle_ms = 0;
    }
}

/// The snake simulation state. Advanced by [`crate::game::logic`].
#[derive(Debug, Clone)]
pub struct SnakeSim {
    // Grid geometry (pixels)
    pub width: i32,
    pub height: i32,
    pub cell: i32,

    /// Body segments, head at the front.
    pub body: VecDeque<Position>,
    pub direction: Direction,
    /// Buffered turn request, applied at the next step. Never the reverse of
    /// `direction`.
    pub pending: Direction,

    pub food: Position,
    pub bonus: TimedItem,
    pub anti_bonus: TimedItem,

    pub score: u32,
    pub game_over: bool,

    /// Movement tick interval from the current difficulty.
    pub move_interval_ms: u64,
    /// Time accumulated toward the next movement step.
    pub accumulated_ms: u64,
    /// Wall-clock time since simulation start, gating the item warm-up.
    pub elapsed_ms: u64,
}

impl SnakeSim {
    /// Create a simulation on the default grid.
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::with_grid(GRID_WIDTH, GRID_HEIGHT, CELL_SIZE, difficulty, rng)
    }

    /// Create a simulation on an explicit grid. `width` and `height` must be
    /// multiples of `cell`.
    pub fn with_grid<R: Rng>(
        width: i32,
        height: i32,
        cell: i32,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Self {
        let mut sim = Self {
            width,
            height,
            cell,
            body: VecDeque::new(),
            direction: Direction::Right,
            pending: Direction::Right,
            food: Position { x: 0, y: 0 },
            bonus: TimedItem::inactive(),
            anti_bonus: TimedItem::inactive(),
            score: 0,
            game_over: false,
            move_interval_ms: difficulty.tick_interval_ms(),
            accumulated_ms: 0,
            elapsed_ms: 0,
        };
        sim.reset(rng);
        sim
    }

    /// Reinitialize for a fresh game: three segments at the grid center
    /// heading right, fresh food, all items inactive, timers and score zeroed.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let center_x = self.width / 2 / self.cell * self.cell;
        let center_y = self.height / 2 / self.cell * self.cell;

        self.body.clear();
        self.body.push_back(Position {
            x: center_x,
            y: center_y,
        }); // head
        self.body.push_back(Position {
            x: center_x - self.cell,
            y: center_y,
        });
        self.body.push_back(Position {
            x: center_x - 2 * self.cell,
            y: center_y,
        });

        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.bonus = TimedItem::inactive();
        self.anti_bonus = TimedItem::inactive();
        self.score = 0;
        self.game_over = false;
        self.accumulated_ms = 0;
        self.elapsed_ms = 0;
        self.food = spawn_position(self, rng);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.move_interval_ms = difficulty.tick_interval_ms();
    }

    pub fn head(&self) -> Option<Position> {
        self.body.front().copied()
    }

    /// True when `pos` is occupied by the body, the food, or an active item.
    pub fn occupied(&self, pos: Position) -> bool {
        self.body.contains(&pos)
            || pos == self.food
            || (self.bonus.active && pos == self.bonus.pos)
            || (self.anti_bonus.active && pos == self.anti_bonus.pos)
    }
}

/// Pick a uniformly random free cell, rejecting candidates that overlap the
/// body, the food or any active item. The grid always has free cells in
/// practice, so rejection sampling terminates.
pub fn spawn_position<R: Rng>(sim: &SnakeSim, rng: &mut R) -> Position {
    loop {
        let pos = Position {
            x: rng.gen_range(0..sim.width / sim.cell) * sim.cell,
            y: rng.gen_range(0..sim.height / sim.cell) * sim.cell,
        };
        if !sim.occupied(pos) {
            return pos;
        }
    }
}
