mod health;

pub mod forge;
pub mod orchestrate;

pub use health::*;
