pub mod visits;

pub use visits::visits_handler;
