pub mod constants;
pub mod enums;
pub mod layout;
pub mod model;
pub mod tables;
pub mod traits;
