pub mod assistant;
pub mod geocode;
pub mod query;
pub mod search;
pub mod session;
