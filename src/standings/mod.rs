//! Standings computation: the ranking half of the core.

pub mod ranker;

pub use ranker::rank;
