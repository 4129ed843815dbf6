pub mod cell;
pub mod theme;
