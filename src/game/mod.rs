pub mod collision;
pub mod config;
pub mod constants;
pub mod food;
pub mod input;
pub mod math;
pub mod render;
pub mod session;
pub mod snake;
pub mod steering;
pub mod types;
