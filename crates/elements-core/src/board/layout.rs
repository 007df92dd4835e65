//! Board layout derived from frame dimensions

use crate::board::region::{Point, Region};
use crate::elements::{Element, PerElement};
use crate::error::LayoutError;
use serde::Serialize;

/// Home regions in the four corners and the target region at the bottom center
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    width: i32,
    height: i32,
    square_size: i32,
    homes: PerElement<Region>,
    target: Region,
}

impl Layout {
    /// Square size is a quarter of the shorter side.
    pub fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(LayoutError::FrameTooLarge { width, height });
        };

        let s = w.min(h) / 4;
        if s == 0 {
            return Err(LayoutError::FrameTooSmall { width, height });
        }

        let homes = PerElement::from_fn(|element| match element {
            Element::Fire => Region::new(0, 0, s),
            Element::Air => Region::new(w - s, 0, s),
            Element::Water => Region::new(0, h - s, s),
            Element::Earth => Region::new(w - s, h - s, s),
        });

        Ok(Self {
            width: w,
            height: h,
            square_size: s,
            homes,
            target: Region::new((w - s) / 2, h - s, s),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn square_size(&self) -> i32 {
        self.square_size
    }

    pub fn home(&self, element: Element) -> Region {
        self.homes[element]
    }

    pub fn target(&self) -> Region {
        self.target
    }

    /// Where each token starts and returns to on reset
    pub fn home_centers(&self) -> PerElement<Point> {
        PerElement::from_fn(|element| self.homes[element].center())
    }
}
