
use crate::{Classifier, ClassifierResult, ImageTensor};

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Encode a solid-colour PNG
pub(crate) fn png_bytes(width: u32, height: u32, colour: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(colour));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

/// Returns fixed scores and counts how often it was asked
pub(crate) struct StubClassifier {
    pub name: &'static str,
    pub scores: Vec<f32>,
    pub calls: AtomicUsize,
}

impl StubClassifier {
    pub(crate) fn new(name: &'static str, scores: Vec<f32>) -> Self {
        Self {
            name,
            scores,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    fn name(&self) -> &str {
        self.name
    }

    async fn predict(&self, _input: &ImageTensor) -> ClassifierResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.scores.clone())
    }
}
