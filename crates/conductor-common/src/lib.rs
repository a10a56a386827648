pub mod formatter;
pub mod protocol;

pub use protocol::{ConductorCommand, ElementSelector, Point, SizeSelector};
