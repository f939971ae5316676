pub mod category;
pub mod config;
pub mod embedding;
pub mod error;
pub mod game;
pub mod lexicon;
pub mod metrics;
pub mod round;
pub mod routes;
pub mod scorer;
pub mod selector;
pub mod startup;
