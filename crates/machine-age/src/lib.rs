pub mod check;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod lister;
pub mod logging;
pub mod models;
pub mod report;
