//! Adversarial search for the fox and chicken players

pub mod alphabeta;

pub use alphabeta::{choose_move, search, ChosenMove, SearchResult, OSCILLATION_WINDOW};
