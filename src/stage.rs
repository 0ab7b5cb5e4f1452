/// Frame application onto a surface.
pub mod apply;
/// In-memory host for tests and headless runs.
pub mod memory;
/// Layout measurement contract.
pub mod metrics;
/// Visual state write contract.
pub mod surface;
