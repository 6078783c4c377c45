//! # Chatbot Core (The Brain)
//!
//! The "brain" of the Pokédex chatbot. This crate consumes the immutable
//! record store from `pokedex_data`, resolves fuzzy name references,
//! classifies the caller's intent, and synthesizes templated text answers.
//!
//! ## Core Components
//!
//! - **resolver**: two-stage entity resolution (exact lookup, then approximate matching)
//! - **classifier**: ordered keyword rules selecting the response category
//! - **synthesizer**: fixed answer templates, stat comparisons, type profiles
//! - **pipeline**: the `handle_query` seam the CLI/HTTP wrappers call
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every query is handled independently; the read-only store is the only shared resource
//! - **Total**: `handle_query` always returns text; "didn't understand" is an answer, not an error
//! - **Data-Driven**: the intent priority list is a table that tests can enumerate and assert on

pub mod classifier;
pub mod matcher;
pub mod pipeline;
pub mod resolver;
pub mod synthesizer;
pub mod tokens;

pub use classifier::*;
pub use matcher::*;
pub use pipeline::*;
pub use resolver::*;
pub use synthesizer::*;
pub use tokens::*;
