//! Rule-based ordering of candidates.
//!
//! Several engines need to process their inputs in a business-defined order:
//! inventory items by value density, customer groups by priority and then
//! size. [`Ranking`] composes [`RankingRule`]s sequentially; a later rule is
//! only consulted when every earlier rule ties exactly, and a full
//! tie keeps input order so results are reproducible.

mod engine;
mod types;

pub use engine::Ranking;
pub use types::RankingRule;
