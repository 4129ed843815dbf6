pub mod composer;
pub mod set;
