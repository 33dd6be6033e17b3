// Screen and timing
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const TARGET_FPS: u32 = 60;
pub const FRAME_INTERVAL_MS: u64 = 1000 / TARGET_FPS as u64; // ~16ms

// Player ("visitor")
pub const PLAYER_SIZE: i32 = 100;
pub const PLAYER_SPEED: i32 = 7;
pub const PLAYER_START_X: i32 = SCREEN_WIDTH / 2 - PLAYER_SIZE / 2;
pub const PLAYER_Y: i32 = SCREEN_HEIGHT - 150;

// Obstacles ("bollards")
pub const OBSTACLE_SIZE: i32 = 50;
pub const OBSTACLE_COUNT: usize = 5;
pub const OBSTACLE_START_SPEED: i32 = 7;
pub const SPAWN_Y_MIN: i32 = -150;
pub const SPAWN_Y_MAX: i32 = -50;

// Session and difficulty
pub const STARTING_HEALTH: u32 = 3;
pub const LEVEL_THRESHOLD: u64 = 10;
/// Multiplier is tracked in half-steps: 2 == 1.0x, each level adds 1 (0.5x).
pub const MULTIPLIER_BASE_HALVES: u64 = 2;
pub const MULTIPLIER_STEP_HALVES: u64 = 1;

// Screen flow
pub const GAME_OVER_SUMMARY_SECONDS: u32 = 3;
pub const GAME_OVER_SUMMARY_FRAMES: u32 = GAME_OVER_SUMMARY_SECONDS * TARGET_FPS;

// Leaderboard
pub const LEADERBOARD_CAPACITY: usize = 5;
pub const MAX_NAME_LEN: usize = 20;
pub const LEADERBOARD_FILENAME: &str = "leaderboard.json";
pub const LEADERBOARD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Shared secret mixed into the leaderboard digest. Tamper evidence only:
/// anyone holding the binary can recover it.
pub const LEADERBOARD_SECRET: &str = "wpafb-gate-bollard-striker";

// Files
pub const GAME_DIR_NAME: &str = ".bollard-striker";
pub const SETTINGS_FILENAME: &str = "settings.json";
pub const LOG_FILENAME: &str = "bollard-striker.log";
