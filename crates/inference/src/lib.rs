pub mod artifacts;
pub mod classifier;
pub mod encoder;
pub mod error;
pub mod manifest;
pub mod predictor;

pub use artifacts::*;
pub use classifier::*;
pub use encoder::*;
pub use error::*;
pub use manifest::*;
pub use predictor::*;
