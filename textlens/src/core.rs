// src/core.rs
pub mod disclosure;
pub mod limit;
pub mod metrics;
pub mod scanner;
pub mod session;
