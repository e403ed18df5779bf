pub mod actions;
pub mod encoder;
