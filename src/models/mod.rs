pub mod catalog;
pub mod cost;
pub mod error;
pub mod fixtures;
pub mod ict;
pub mod performance;
