pub mod error;
pub mod reports;
pub mod schema;
pub mod seed;
