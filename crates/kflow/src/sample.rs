use crate::types::Color;

/// Flat, row-major view of an image: sample `i` is the pixel at
/// `(i / width, i % width)`.
#[derive(Debug)]
pub struct SampledRgbSoA {
    pub width: u32,
    pub height: u32,
    pub r: Vec<f32>,
    pub g: Vec<f32>,
    pub b: Vec<f32>,
}

impl SampledRgbSoA {
    pub fn new(width: u32, height: u32) -> Self {
        let sample_size = width as usize * height as usize;
        Self {
            width,
            height,
            r: Vec::with_capacity(sample_size),
            g: Vec::with_capacity(sample_size),
            b: Vec::with_capacity(sample_size),
        }
    }

    #[inline(always)]
    pub fn push(&mut self, r: f32, g: f32, b: f32) {
        self.r.push(r);
        self.g.push(g);
        self.b.push(b);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.r.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> Color {
        Color::new(self.r[i], self.g[i], self.b[i])
    }

    #[inline(always)]
    pub fn flat_index(&self, row: u32, col: u32) -> usize {
        flat_index(self.width, row, col)
    }

    #[inline(always)]
    pub fn position(&self, i: usize) -> (u32, u32) {
        position(self.width, i)
    }
}

#[inline(always)]
pub fn flat_index(width: u32, row: u32, col: u32) -> usize {
    row as usize * width as usize + col as usize
}

/// Inverse of [`flat_index`], returns `(row, col)`.
#[inline(always)]
pub fn position(width: u32, i: usize) -> (u32, u32) {
    let w = width as usize;
    ((i / w) as u32, (i % w) as u32)
}

pub fn sample(width: u32, height: u32, buf: &[u8]) -> SampledRgbSoA {
    assert!(!buf.is_empty());
    assert!(width > 0);
    assert!(height > 0);
    assert!(buf.len().is_multiple_of(3));
    assert_eq!(buf.len(), width as usize * height as usize * 3);

    let mut result = SampledRgbSoA::new(width, height);
    for pixel in buf.chunks_exact(3) {
        result.push(pixel[0] as f32, pixel[1] as f32, pixel[2] as f32);
    }

    assert_eq!(result.len(), width as usize * height as usize);
    result
}
