pub mod tracker;
pub mod velocity;
