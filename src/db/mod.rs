//! Database access: connection establishment and the visit queries.
//!
//! Layout:
//! - `connector.rs`: open + ping with a fixed-delay retry ceiling
//! - `visits.rs`: the message read and counter update/read statements
//! - `schema.rs`: DDL for the two tables (tests and local setup only)

pub mod connector;
pub mod schema;
pub mod visits;

pub use connector::connect;
pub use schema::SCHEMA;
pub use visits::record_visit;
