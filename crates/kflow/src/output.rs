use crate::render::{Frame, FrameSink};
use image::RgbImage;
use log::info;
use snafu::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum OutputError {
    #[snafu(display("could not create output directory {}", path.display()))]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("could not save {}", path.display()))]
    SaveFrame {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Writes every frame to `<dir>/frame<N>.png`.
#[derive(Debug)]
pub struct PngSequence {
    dir: PathBuf,
}

impl PngSequence {
    /// Creates `dir` (and its parents) when it doesn't exist yet.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self, OutputError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).context(CreateDirSnafu { path: &dir })?;
        Ok(Self { dir })
    }

    pub fn frame_path(&self, frame_number: usize) -> PathBuf {
        self.dir.join(format!("frame{frame_number}.png"))
    }
}

impl FrameSink for PngSequence {
    type Error = OutputError;

    fn write_frame(&mut self, frame_number: usize, frame: &Frame) -> Result<(), OutputError> {
        let img = RgbImage::from_fn(frame.width(), frame.height(), |x, y| {
            let p = frame.get(y, x);
            image::Rgb([p.r, p.g, p.b])
        });

        let path = self.frame_path(frame_number);
        img.save(&path).context(SaveFrameSnafu { path: &path })?;
        info!("Frame {frame_number} completed");
        Ok(())
    }
}
