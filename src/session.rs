/// The scroll director.
pub mod director;
