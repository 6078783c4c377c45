//! Record definitions for the Pokédex.

mod record;
mod stats;

pub use record::*;
pub use stats::*;
