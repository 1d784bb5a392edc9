pub mod constants;
pub mod direction;
pub mod error;
pub mod types;
