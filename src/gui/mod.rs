pub mod handlers;
pub mod launch;
pub mod render;
pub mod sprites;

pub const WINDOW_TITLE: &str = "Holy Hell";
