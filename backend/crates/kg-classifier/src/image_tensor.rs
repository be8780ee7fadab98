use crate::{ClassifierError, ClassifierResult};

use std::panic::Location;

use error_location::ErrorLocation;
use image::imageops::FilterType;

/// Side length both knee models were trained on
pub const DEFAULT_INPUT_SIZE: u32 = 224;

/// A single preprocessed image: `size × size` RGB pixels scaled to [0, 1],
/// stored row-major in height, width, channel order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    size: u32,
    data: Vec<f32>,
}

impl ImageTensor {
    /// Decode raw upload bytes and apply the fixed model preprocessing:
    /// RGB conversion, nearest-neighbour resize to a square, intensity / 255.
    #[track_caller]
    pub fn from_image_bytes(bytes: &[u8], size: u32) -> ClassifierResult<Self> {
        let decoded = image::load_from_memory(bytes).map_err(|source| ClassifierError::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgb = decoded
            .resize_exact(size, size, FilterType::Nearest)
            .to_rgb8();

        let data = rgb
            .pixels()
            .flat_map(|pixel| pixel.0)
            .map(|channel| f32::from(channel) / 255.0)
            .collect();

        Ok(Self { size, data })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Value at row `y`, column `x`, channel `c`
    pub fn get(&self, y: u32, x: u32, c: usize) -> Option<f32> {
        if y >= self.size || x >= self.size || c >= 3 {
            return None;
        }
        let index = ((y * self.size + x) as usize) * 3 + c;
        self.data.get(index).copied()
    }

    /// Nested `[height][width][channel]` layout, one instance of a batch
    pub fn to_instance(&self) -> Vec<Vec<[f32; 3]>> {
        self.data
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect::<Vec<_>>()
            .chunks(self.size as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}
