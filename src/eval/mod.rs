//! Position evaluation for the adversarial search

pub mod heuristic;

pub use heuristic::evaluate;
