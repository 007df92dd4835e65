pub mod data;
pub mod element;

pub use data::{ElementInfo, ElementTable};
pub use element::{Element, PerElement, Rgb, GOLD};
