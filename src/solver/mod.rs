pub mod constraint;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod problem;
pub mod stats;
pub mod trace;
