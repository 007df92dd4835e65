//! Frame geometry: home regions, the target region and containment

pub mod layout;
pub mod region;

pub use layout::Layout;
pub use region::{Point, Region};
