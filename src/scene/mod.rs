//! Scene description: declarative model, builder DSL, and the portfolio
//! preset.

pub mod dsl;
pub mod model;
pub mod presets;
