/// FORMT section mapping pass.
pub mod formt;
/// Hero parallax mapping pass.
pub mod parallax;
