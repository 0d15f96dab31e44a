pub mod common;
pub mod order;
