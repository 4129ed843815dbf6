//! Scene evaluation: compiled region programs and the per-frame session.

pub mod evaluator;
pub mod session;
