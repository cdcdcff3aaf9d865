use crate::sample::{flat_index, position};
use crate::types::Color;
use rgb::RGB8;
use std::convert::Infallible;

/// A rendered frame, row-major like the sample buffer it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<RGB8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![RGB8::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, row: u32, col: u32) -> RGB8 {
        self.pixels[flat_index(self.width, row, col)]
    }

    /// Iterates `(row, col, pixel)`.
    pub fn enumerate(&self) -> impl Iterator<Item = (u32, u32, RGB8)> + '_ {
        self.pixels.iter().enumerate().map(|(i, &p)| {
            let (row, col) = position(self.width, i);
            (row, col, p)
        })
    }

    /// RGBRGBRGB… bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
    }
}

/// Receives every rendered frame. Frame numbers start at 1.
pub trait FrameSink {
    type Error;

    fn write_frame(&mut self, frame_number: usize, frame: &Frame) -> Result<(), Self::Error>;
}

impl<F, E> FrameSink for F
where
    F: FnMut(usize, &Frame) -> Result<(), E>,
{
    type Error = E;

    fn write_frame(&mut self, frame_number: usize, frame: &Frame) -> Result<(), E> {
        self(frame_number, frame)
    }
}

/// Drops every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl FrameSink for Discard {
    type Error = Infallible;

    fn write_frame(&mut self, _frame_number: usize, _frame: &Frame) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Paints every pixel with the center of its cluster.
pub fn render(labels: &[usize], centers: &[Color], frame: &mut Frame) {
    assert_eq!(labels.len(), frame.pixels.len());

    let palette: Vec<RGB8> = centers.iter().map(|c| c.to_rgb8()).collect();
    for (pixel, &label) in frame.pixels.iter_mut().zip(labels) {
        *pixel = palette[label];
    }
}
