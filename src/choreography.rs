/// Builder-style construction helpers.
pub mod dsl;
/// Script model types and validation.
pub mod model;
