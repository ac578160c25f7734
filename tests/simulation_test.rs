use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use serpent::constants::{ANTI_BONUS_SHRINK, BONUS_GROW, MIN_BODY_LEN};
use serpent::game::logic::{change_direction, step, StepEvent};
use serpent::game::types::{Direction, Position, SnakeSim};
use serpent::settings::Difficulty;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn pos(x: i32, y: i32) -> Position {
    Position { x, y }
}

/// Builds a 400x260 board with a 10 pixel cell and an explicit body, head
/// first, heading right.
fn board_with_body(segments: &[(i32, i32)]) -> (SnakeSim, ChaCha8Rng) {
    let mut r = rng(11);
    let mut sim = SnakeSim::with_grid(400, 260, 10, Difficulty::Normal, &mut r);
    sim.body = segments.iter().map(|&(x, y)| pos(x, y)).collect::<VecDeque<_>>();
    sim.direction = Direction::Right;
    sim.pending = Direction::Right;
    (sim, r)
}

#[test]
fn test_eating_food_grows_scores_and_respawns() {
    let (mut sim, mut r) = board_with_body(&[(100, 100), (90, 100), (80, 100)]);
    sim.food = pos(110, 100);

    let events = step(&mut sim, &mut r);

    assert_eq!(events, vec![StepEvent::Ate]);
    assert_eq!(sim.head().unwrap(), pos(110, 100));
    assert_eq!(sim.body.len(), 4);
    assert_eq!(sim.score, 1);
    assert_ne!(sim.food, pos(110, 100));
    assert!(!sim.game_over);
}

#[test]
fn test_reverse_is_rejected_for_every_heading() {
    let headings = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
    for heading in headings {
        let (mut sim, _) = board_with_body(&[(200, 100), (190, 100), (180, 100)]);
        sim.direction = heading;
        sim.pending = heading;

        change_direction(&mut sim, heading.opposite());
        assert_eq!(sim.pending, heading);

        for other in headings {
            if other != heading.opposite() {
                sim.pending = heading;
                change_direction(&mut sim, other);
                assert_eq!(sim.pending, other);
            }
        }
    }
}

#[test]
fn test_running_into_own_body_ends_the_game() {
    // Head at a corner of a loop; moving down lands on a middle segment
    let (mut sim, mut r) = board_with_body(&[
        (100, 100),
        (110, 100),
        (110, 110),
        (100, 110),
        (90, 110),
        (90, 120),
    ]);
    sim.direction = Direction::Down;
    sim.pending = Direction::Down;
    sim.food = pos(0, 0);

    let events = step(&mut sim, &mut r);
    assert_eq!(events, vec![StepEvent::GameOver]);
    assert!(sim.game_over);
}

#[test]
fn test_moving_into_tail_cell_is_fatal() {
    // The tail cell still counts as occupied when the head arrives
    let (mut sim, mut r) = board_with_body(&[(100, 100), (110, 100), (110, 110), (100, 110)]);
    sim.direction = Direction::Down;
    sim.pending = Direction::Down;
    sim.food = pos(0, 0);

    step(&mut sim, &mut r);
    assert!(sim.game_over);
}

#[test]
fn test_all_four_walls_are_fatal() {
    let cases = [
        (pos(390, 100), Direction::Right),
        (pos(0, 100), Direction::Left),
        (pos(100, 0), Direction::Up),
        (pos(100, 250), Direction::Down),
    ];
    for (head, heading) in cases {
        let (mut sim, mut r) = board_with_body(&[(head.x, head.y)]);
        sim.direction = heading;
        sim.pending = heading;
        sim.food = pos(200, 200);

        step(&mut sim, &mut r);
        assert!(sim.game_over, "expected death heading {:?}", heading);
    }
}

#[test]
fn test_bonus_pickup_net_growth() {
    let (mut sim, mut r) = board_with_body(&[(100, 100), (90, 100), (80, 100)]);
    sim.food = pos(0, 0);
    sim.bonus.pos = pos(110, 100);
    sim.bonus.active = true;

    step(&mut sim, &mut r);
    assert_eq!(sim.body.len(), 3 + BONUS_GROW);
    assert!(!sim.bonus.active);
}

#[test]
fn test_anti_bonus_shrinks_with_floor() {
    // A body of 4 loses at most one segment before hitting the minimum
    let (mut sim, mut r) = board_with_body(&[(100, 100), (90, 100), (80, 100), (70, 100)]);
    sim.food = pos(0, 0);
    sim.anti_bonus.pos = pos(110, 100);
    sim.anti_bonus.active = true;

    step(&mut sim, &mut r);
    assert_eq!(sim.body.len(), MIN_BODY_LEN);
    assert!(!sim.anti_bonus.active);
}

#[test]
fn test_anti_bonus_full_shrink_on_long_body() {
    let segments: Vec<(i32, i32)> = (0..10).map(|i| (200 - i * 10, 100)).collect();
    let (mut sim, mut r) = board_with_body(&segments);
    sim.food = pos(0, 0);
    sim.anti_bonus.pos = pos(210, 100);
    sim.anti_bonus.active = true;

    step(&mut sim, &mut r);
    assert_eq!(sim.body.len(), 10 - ANTI_BONUS_SHRINK);
}

#[test]
fn test_score_never_goes_negative() {
    let (mut sim, mut r) = board_with_body(&[(100, 100), (90, 100), (80, 100), (70, 100)]);
    sim.food = pos(0, 0);
    sim.score = 2;
    sim.anti_bonus.pos = pos(110, 100);
    sim.anti_bonus.active = true;

    step(&mut sim, &mut r);
    assert_eq!(sim.score, 0);
}

#[test]
fn test_same_seed_same_run() {
    let mut a_rng = rng(99);
    let mut b_rng = rng(99);
    let mut a = SnakeSim::new(Difficulty::Normal, &mut a_rng);
    let mut b = SnakeSim::new(Difficulty::Normal, &mut b_rng);
    assert_eq!(a.food, b.food);

    for turn in [Direction::Down, Direction::Right, Direction::Up] {
        change_direction(&mut a, turn);
        change_direction(&mut b, turn);
        for _ in 0..5 {
            step(&mut a, &mut a_rng);
            step(&mut b, &mut b_rng);
        }
        assert_eq!(a.body, b.body);
        assert_eq!(a.food, b.food);
        assert_eq!(a.score, b.score);
        assert_eq!(a.game_over, b.game_over);
    }
}
