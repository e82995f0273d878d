pub mod analyze;
pub mod select;
pub mod shared;
pub mod split;
