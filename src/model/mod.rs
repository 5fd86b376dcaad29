mod group;
mod insight;
mod normalized;
mod raw_match;
mod summary;
mod trend;

pub use group::*;
pub use insight::*;
pub use normalized::*;
pub use raw_match::*;
pub use summary::*;
pub use trend::*;
