//! Run phases

mod phase;

pub use phase::Phase;
