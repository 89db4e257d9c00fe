pub mod constants;
pub mod state;
pub mod wave;

pub use state::*;
