pub mod game_utils;
pub mod logging;
