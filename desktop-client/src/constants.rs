pub const CONFIG_FILE: &str = "snake_arena_config.yaml";
pub const WINDOW_TITLE: &str = "Snake Arena";
/// Extra window space around the board for the score bar and event feed.
pub const WINDOW_MARGIN: [f32; 2] = [260.0, 120.0];
