//! Snake simulation logic: turning, movement steps, collisions, item timers.

use rand::Rng;

use super::types::{spawn_position, Direction, SnakeSim};
use crate::constants::{
    ANTI_BONUS_INTERVAL_MS, ANTI_BONUS_PENALTY, ANTI_BONUS_SHRINK, BONUS_GROW, BONUS_INTERVAL_MS,
    BONUS_POINTS, FOOD_POINTS, ITEM_WARMUP_MS, MIN_BODY_LEN,
};

/// Something that happened during a movement step, for the caller to map to
/// sound cues and screen transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Ate,
    BonusPicked,
    PenaltyPicked,
    GameOver,
}

/// Buffer a turn request. Ignored when the simulation is over, the body is
/// empty, or the request is the exact reverse of the current heading.
pub fn change_direction(sim: &mut SnakeSim, dir: Direction) {
    if sim.game_over || sim.body.is_empty() {
        return;
    }
    if dir != sim.direction.opposite() {
        sim.pending = dir;
    }
}

/// Real-time driver. Accumulates `dt_ms`, performs at most one movement step
/// per call once the difficulty interval has elapsed, and advances the
/// per-item spawn timers.
pub fn advance<R: Rng>(sim: &mut SnakeSim, dt_ms: u64, rng: &mut R) -> Vec<StepEvent> {
    if sim.game_over || sim.body.is_empty() {
        return Vec::new();
    }

    // Clamp so a stall (pause, terminal resize) cannot flood the timers
    let dt_ms = dt_ms.min(500);
    sim.elapsed_ms += dt_ms;

    let mut events = Vec::new();
    sim.accumulated_ms += dt_ms;
    if sim.accumulated_ms >= sim.move_interval_ms {
        sim.accumulated_ms = 0;
        events.extend(step(sim, rng));
    }

    if !sim.game_over {
        advance_item_timers(sim, dt_ms, rng);
    }
    events
}

/// One movement step: apply the buffered heading, move the head one cell,
/// resolve collisions and pickups. No-op when over or the body is empty.
pub fn step<R: Rng>(sim: &mut SnakeSim, rng: &mut R) -> Vec<StepEvent> {
    let Some(&head) = sim.body.front() else {
        return Vec::new();
    };
    if sim.game_over {
        return Vec::new();
    }

    sim.direction = sim.pending;
    let (dx, dy) = sim.direction.delta();
    let new_head = super::types::Position {
        x: head.x + dx * sim.cell,
        y: head.y + dy * sim.cell,
    };

    // Collision order: walls first, then the body (excluding the old head,
    // which the snake is vacating).
    let out_of_bounds =
        new_head.x < 0 || new_head.x >= sim.width || new_head.y < 0 || new_head.y >= sim.height;
    if out_of_bounds || sim.body.iter().skip(1).any(|&seg| seg == new_head) {
        sim.game_over = true;
        return vec![StepEvent::GameOver];
    }

    sim.body.push_front(new_head);

    if new_head == sim.food {
        // Eating keeps the tail, so the body grows by one
        sim.food = spawn_position(sim, rng);
        sim.score += FOOD_POINTS;
        return vec![StepEvent::Ate];
    }

    sim.body.pop_back();
    if sim.bonus.active && new_head == sim.bonus.pos {
        grow(sim, BONUS_GROW);
        sim.bonus.deactivate();
        sim.score += BONUS_POINTS;
        vec![StepEvent::BonusPicked]
    } else if sim.anti_bonus.active && new_head == sim.anti_bonus.pos {
        shrink(sim, ANTI_BONUS_SHRINK);
        sim.anti_bonus.deactivate();
        sim.score = sim.score.saturating_sub(ANTI_BONUS_PENALTY);
        vec![StepEvent::PenaltyPicked]
    } else {
        Vec::new()
    }
}

/// Grow by duplicating the tail segment `n` times.
fn grow(sim: &mut SnakeSim, n: usize) {
    if let Some(&tail) = sim.body.back() {
        for _ in 0..n {
            sim.body.push_back(tail);
        }
    }
}

/// Shrink by up to `n` tail segments, never below the minimum body length.
fn shrink(sim: &mut SnakeSim, n: usize) {
    for _ in 0..n {
        if sim.body.len() > MIN_BODY_LEN {
            sim.body.pop_back();
        }
    }
}

/// Each item type owns an independent idle timer. After the warm-up delay an
/// inactive item respawns once its interval has elapsed.
fn advance_item_timers<R: Rng>(sim: &mut SnakeSim, dt_ms: u64, rng: &mut R) {
    sim.bonus.idle_ms += dt_ms;
    sim.anti_bonus.idle_ms += dt_ms;

    if sim.elapsed_ms < ITEM_WARMUP_MS {
        return;
    }

    if !sim.bonus.active && sim.bonus.idle_ms >= BONUS_INTERVAL_MS {
        sim.bonus.pos = spawn_position(sim, rng);
        sim.bonus.active = true;
        sim.bonus.idle_ms = 0;
    }
    if !sim.anti_bonus.active && sim.anti_bonus.idle_ms >= ANTI_BONUS_INTERVAL_MS {
        sim.anti_bonus.pos = spawn_position(sim, rng);
        sim.anti_bonus.active = true;
        sim.anti_bonus.idle_ms = 0;
    }
}
