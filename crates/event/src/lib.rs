//! Event domain module.
//!
//! An event gathers food trucks and answers questions across all of them:
//! who sells what, how much is on hand, what is overstocked. It also sells
//! down stock across trucks in the order they joined.

pub mod date;
pub mod event;
pub mod policy;
pub mod rollup;

pub use date::{DATE_FORMAT, format_event_date};
pub use event::Event;
pub use policy::OverstockPolicy;
pub use rollup::{ItemTotal, TotalInventory};
