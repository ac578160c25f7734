// Grid geometry. Positions are pixel coordinates snapped to CELL_SIZE.
pub const CELL_SIZE: i32 = 10;
pub const GRID_COLS: i32 = 40;
pub const GRID_ROWS: i32 = 26;
pub const GRID_WIDTH: i32 = GRID_COLS * CELL_SIZE;
pub const GRID_HEIGHT: i32 = GRID_ROWS * CELL_SIZE;

// Snake body rules
pub const MIN_BODY_LEN: usize = 3;
pub const BONUS_GROW: usize = 3;
pub const ANTI_BONUS_SHRINK: usize = 3;

// Scoring
pub const FOOD_POINTS: u32 = 1;
pub const BONUS_POINTS: u32 = 3;
pub const ANTI_BONUS_PENALTY: u32 = 3;

// Timed item spawning. Bonus and anti-bonus each own an independent idle
// timer; neither may spawn before the warm-up elapses.
pub const ITEM_WARMUP_MS: u64 = 30_000;
pub const BONUS_INTERVAL_MS: u64 = 30_000;
pub const ANTI_BONUS_INTERVAL_MS: u64 = 30_000;

// Event loop pacing
pub const INPUT_POLL_MS: u64 = 50;

// Persistence
pub const DATA_DIR_NAME: &str = ".serpent";
pub const SETTINGS_FILE: &str = "settings.cfg";
pub const USERS_FILE: &str = "users.txt";
pub const SCORES_FILE: &str = "scores.txt";

pub const LEADERBOARD_DISPLAY_LIMIT: usize = 10;
