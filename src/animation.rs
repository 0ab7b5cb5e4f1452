pub mod ease;
pub mod segment;
