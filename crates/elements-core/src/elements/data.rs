use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

use crate::elements::element::{Element, PerElement, Rgb};

/// Display and audio data for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    pub glyph: String,
    pub color: Rgb,
    pub sound: String,
}

impl ElementInfo {
    fn builtin(element: Element) -> Self {
        Self {
            glyph: element.glyph().to_string(),
            color: element.default_color(),
            sound: element.default_sound().to_string(),
        }
    }
}

/// Per-element glyph, color and sound resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTable {
    pub elements: PerElement<ElementInfo>,
}

impl Default for ElementTable {
    fn default() -> Self {
        Self {
            elements: PerElement::from_fn(ElementInfo::builtin),
        }
    }
}

impl ElementTable {
    pub fn get(&self, element: Element) -> &ElementInfo {
        &self.elements[element]
    }

    pub fn colors(&self) -> PerElement<Rgb> {
        PerElement::from_fn(|element| self.elements[element].color)
    }

    /// Load overrides from a `Name\-Glyph\-R,G,B\-sound` text file.
    ///
    /// Elements the file does not mention keep their built-in data.
    /// Malformed lines are skipped with a warning; unparsable color
    /// components are an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        let reader = BufReader::new(file);

        let mut table = Self::default();
        let mut loaded = 0;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("Failed to read line {} from {:?}", line_num + 1, path))?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(r"\-").map(|s| s.trim()).collect();

            if parts.len() != 4 {
                warn!(
                    "Invalid line format at line {}: '{}' (expected 4 parts separated by \\-)",
                    line_num + 1,
                    line
                );
                continue;
            }

            let Some(element) = Element::from_name(parts[0]) else {
                warn!("Unknown element '{}' at line {}", parts[0], line_num + 1);
                continue;
            };

            let rgb_parts: Vec<&str> = parts[2].split(',').map(|s| s.trim()).collect();
            if rgb_parts.len() != 3 {
                warn!(
                    "Invalid color format at line {}: '{}' (expected R,G,B)",
                    line_num + 1,
                    parts[2]
                );
                continue;
            }

            let channel = |index: usize, label: &str| -> Result<u8> {
                rgb_parts[index].parse::<u8>().with_context(|| {
                    format!(
                        "Invalid {} value at line {}: '{}'",
                        label,
                        line_num + 1,
                        rgb_parts[index]
                    )
                })
            };

            table.elements[element] = ElementInfo {
                glyph: parts[1].to_string(),
                color: (channel(0, "red")?, channel(1, "green")?, channel(2, "blue")?),
                sound: parts[3].to_string(),
            };
            loaded += 1;
        }

        info!("Loaded {} element entries from {:?}", loaded, path);
        Ok(table)
    }
}
