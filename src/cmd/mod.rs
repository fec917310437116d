pub mod describe;
pub mod langs;
pub mod render;
pub mod submit;
