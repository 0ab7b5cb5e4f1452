pub mod nav;
pub mod reveal;
pub mod selection;
