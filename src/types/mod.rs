//! Wire types returned by the `/` route.

pub mod visit;

pub use visit::{ErrorBody, VisitReport};
