//! Reusable presentation components.
//!
//! - [`Link`]: declarative navigational link

mod link;

pub use link::Link;
