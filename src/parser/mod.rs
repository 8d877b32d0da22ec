//! Streaming parser for the `.properties` text format.
//!
//! [`Parser`] is a byte-at-a-time state machine fed with chunks of any size;
//! [`load_from`] drives it from a [`std::io::Read`]. Completed definitions
//! go to a [`PropertySink`].

pub mod decoder;
pub mod loader;
pub mod sink;
pub mod state;

pub use decoder::{LoadSummary, Parser};
pub use loader::load_from;
pub use sink::PropertySink;
pub use state::{Phase, ScanState};
