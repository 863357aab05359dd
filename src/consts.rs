//! Assorted constants & hard-coded tuning
use std::time::Duration;

/// Points awarded for each piece of food eaten
pub const SCORE_PER_FOOD: u32 = 10;

/// How many random cells the food spawner samples before falling back to
/// scanning the board for the first free cell
pub const FOOD_SPAWN_ATTEMPTS: usize = 100;

/// Default number of breadth-first levels explored when measuring the space
/// accessible from a cell
pub const FLOOD_FILL_DEPTH: usize = 50;

/// Weight of accessible space relative to food distance for a snake of
/// length zero
pub const SPACE_WEIGHT_BASE: f64 = 0.5;

/// Every this many segments of snake length add 1 to the space weight
pub const SPACE_WEIGHT_LENGTH_SCALE: f64 = 10.0;

/// Default board width in pixels
pub const DEFAULT_BOARD_WIDTH: u32 = 800;

/// Default board height in pixels
pub const DEFAULT_BOARD_HEIGHT: u32 = 480;

/// Default edge length of a single cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Time between movements of a human-steered snake
pub const HUMAN_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Time between movements of a snake steered by the greedy autopilot
pub const GREEDY_TICK_PERIOD: Duration = Duration::from_millis(60);

/// Time between movements of a snake steered by the lookahead autopilot
pub const LOOKAHEAD_TICK_PERIOD: Duration = Duration::from_millis(40);

/// Default cap on the number of steps taken by the headless runner
pub const DEFAULT_MAX_STEPS: u64 = 10_000;
