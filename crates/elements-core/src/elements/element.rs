use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// RGB color triple
pub type Rgb = (u8, u8, u8);

/// Color of the target region before any deposit and after completion
pub const GOLD: Rgb = (255, 255, 0);

/// The four draggable elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Air,
    Water,
    Earth,
}

impl Element {
    /// All elements in scan order
    pub const ALL: [Element; 4] = [Element::Fire, Element::Air, Element::Water, Element::Earth];

    pub fn index(self) -> usize {
        match self {
            Element::Fire => 0,
            Element::Air => 1,
            Element::Water => 2,
            Element::Earth => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Air => "air",
            Element::Water => "water",
            Element::Earth => "earth",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|element| element.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Element::Fire => "🔥",
            Element::Air => "💨",
            Element::Water => "🌊",
            Element::Earth => "🌱",
        }
    }

    pub fn default_color(self) -> Rgb {
        match self {
            Element::Fire => (255, 0, 0),
            Element::Air => (0, 215, 255),
            Element::Water => (0, 0, 255),
            Element::Earth => (0, 128, 128),
        }
    }

    /// Sound resource file name. Fire's is the looping ambience.
    pub fn default_sound(self) -> &'static str {
        match self {
            Element::Fire => "fireplace-6160.wav",
            Element::Air => "air.wav",
            Element::Water => "water.wav",
            Element::Earth => "earth.wav",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-size map with one slot per element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerElement<T>([T; 4]);

impl<T> PerElement<T> {
    /// Build a map by evaluating `f` once per element
    pub fn from_fn(f: impl FnMut(Element) -> T) -> Self {
        Self(Element::ALL.map(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, &T)> {
        Element::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.0.fill(value);
    }
}

impl<T> Index<Element> for PerElement<T> {
    type Output = T;

    fn index(&self, element: Element) -> &T {
        match element {
            Element::Fire => &self.0[0],
            Element::Air => &self.0[1],
            Element::Water => &self.0[2],
            Element::Earth => &self.0[3],
        }
    }
}

impl<T> IndexMut<Element> for PerElement<T> {
    fn index_mut(&mut self, element: Element) -> &mut T {
        match element {
            Element::Fire => &mut self.0[0],
            Element::Air => &mut self.0[1],
            Element::Water => &mut self.0[2],
            Element::Earth => &mut self.0[3],
        }
    }
}

/// Serialized as a map keyed by element name
impl<T: Serialize> Serialize for PerElement<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for (element, value) in self.iter() {
            map.serialize_entry(element.name(), value)?;
        }
        map.end()
    }
}
