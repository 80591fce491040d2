// External API clients module
pub mod player_info;
