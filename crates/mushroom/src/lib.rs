pub mod label;
pub mod sample;
pub mod schema;

pub use label::*;
pub use sample::*;
pub use schema::*;
