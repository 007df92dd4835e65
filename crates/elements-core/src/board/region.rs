//! Axis-aligned square regions and pixel points

use serde::{Deserialize, Serialize};

/// Pixel position in frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Square region anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, size: i32) -> Self {
        Self { x, y, size }
    }

    /// Exclusive right edge
    pub fn x1(&self) -> i32 {
        self.x + self.size
    }

    /// Exclusive bottom edge
    pub fn y1(&self) -> i32 {
        self.y + self.size
    }

    /// Strict interior test. Points on any edge are outside.
    pub fn contains(&self, point: Point) -> bool {
        self.x < point.x && point.x < self.x1() && self.y < point.y && point.y < self.y1()
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.size / 2, self.y + self.size / 2)
    }
}
