pub mod effects;
pub mod interactions;
pub mod plugin;
pub mod setup;
pub mod theme;
pub mod utils;
