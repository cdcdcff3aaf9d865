mod config;
mod driver;
#[cfg(feature = "_debug")]
pub mod kmeans;
#[cfg(not(feature = "_debug"))]
mod kmeans;
#[cfg(feature = "image")]
mod output;
#[cfg(feature = "_debug")]
pub mod render;
#[cfg(not(feature = "_debug"))]
mod render;
#[cfg(feature = "_debug")]
pub mod rng;
#[cfg(not(feature = "_debug"))]
mod rng;
#[cfg(feature = "_debug")]
pub mod sample;
#[cfg(not(feature = "_debug"))]
mod sample;
mod types;

pub use config::{
    Config, ConfigError, DEFAULT_BPM, DEFAULT_CLUSTER_ANIMS, DEFAULT_CLUSTERS, DEFAULT_FLOW_SPEED,
    DEFAULT_FPS, DEFAULT_ITERATIONS, MAX_ANIMATION_PERIOD,
};
pub use driver::{Driver, Outcome};
pub use kmeans::ClusterState;
pub use kmeans::init::{ColorSource, RandomColors};
#[cfg(feature = "image")]
pub use output::{OutputError, PngSequence};
pub use render::{Discard, Frame, FrameSink};
pub use rgb::RGB8;
pub use sample::SampledRgbSoA;
pub use types::Color;

use snafu::prelude::*;
#[cfg(feature = "image")]
use std::ops::Deref;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum InputImageError {
    #[snafu(display("image size must be positive"))]
    ZeroImageSize,

    #[snafu(display("buffer length {len} is not a multiple of 3"))]
    InvalidBufferLength { len: usize },

    #[snafu(display("buffer is empty"))]
    EmptyBuffer,

    #[snafu(display("image size ({width}x{height}) doesn't match the buffer size ({buf_size})"))]
    ImageSizeMismatch {
        width: u32,
        height: u32,
        buf_size: usize,
    },
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AnimateError<E>
where
    E: std::error::Error + 'static,
{
    #[snafu(display("invalid configuration"))]
    InvalidConfig { source: ConfigError },

    #[snafu(display("could not write a frame"))]
    Sink { source: E },
}

/// A structure used as a façade for the image bytes.
#[derive(Debug, Copy, Clone)]
pub struct InputImage<'a> {
    width: u32,
    height: u32,
    buf: &'a [u8],
}

impl InputImage<'_> {
    /// The byte layout is assumed to be RGBRGBRGB…, row by row.
    pub fn from_bytes(
        width: u32,
        height: u32,
        buf: &[u8],
    ) -> Result<InputImage<'_>, InputImageError> {
        ensure!(!buf.is_empty(), EmptyBufferSnafu);
        ensure!(width > 0 && height > 0, ZeroImageSizeSnafu);
        ensure!(
            buf.len().is_multiple_of(3),
            InvalidBufferLengthSnafu { len: buf.len() }
        );
        ensure!(
            buf.len() == (width as usize) * (height as usize) * 3,
            ImageSizeMismatchSnafu {
                width,
                height,
                buf_size: buf.len()
            }
        );

        Ok(InputImage { width, height, buf })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flattens the image into the sample buffer the clustering runs on.
    pub fn samples(&self) -> SampledRgbSoA {
        sample::sample(self.width, self.height, self.buf)
    }
}

#[cfg(feature = "image")]
impl<'a, Container> TryFrom<&'a image::ImageBuffer<image::Rgb<u8>, Container>> for InputImage<'a>
where
    Container: Deref<Target = [<image::Rgb<u8> as image::Pixel>::Subpixel]> + 'a,
{
    type Error = InputImageError;

    fn try_from(
        img: &'a image::ImageBuffer<image::Rgb<u8>, Container>,
    ) -> Result<Self, Self::Error> {
        Self::from_bytes(img.width(), img.height(), img.as_raw().deref())
    }
}

/// Renders the animated palette reduction of `input` into `sink`.
///
/// ```
/// use std::convert::Infallible;
///
/// let input = kflow::InputImage::from_bytes(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
/// let config = kflow::Config {
///     clusters: 2,
///     iterations: 10,
///     ..kflow::Config::default()
/// };
///
/// let mut frames = Vec::new();
/// let mut sink = |n: usize, _: &kflow::Frame| -> Result<(), Infallible> {
///     frames.push(n);
///     Ok(())
/// };
/// kflow::animate(input, &config, &mut sink).unwrap();
///
/// assert_eq!(frames, (1..=10).collect::<Vec<_>>());
/// ```
///
/// Frame 0, the random initialization, is never handed to the sink. Random choices
/// come from `config.seed` when it is set and from fresh entropy otherwise.
pub fn animate<S>(
    input: InputImage,
    config: &Config,
    sink: &mut S,
) -> Result<Outcome, AnimateError<S::Error>>
where
    S: FrameSink,
    S::Error: std::error::Error + 'static,
{
    let seed = config.seed.unwrap_or_else(rand::random);
    log::debug!("random seed {seed}");
    animate_with(input, config, RandomColors::new(rng::seeded(seed)), sink)
}

/// [`animate`] with the random choices taken from `colors`.
pub fn animate_with<C, S>(
    input: InputImage,
    config: &Config,
    colors: C,
    sink: &mut S,
) -> Result<Outcome, AnimateError<S::Error>>
where
    C: ColorSource,
    S: FrameSink,
    S::Error: std::error::Error + 'static,
{
    config.validate().context(InvalidConfigSnafu)?;

    let samples = input.samples();
    Driver::new(&samples, config, colors)
        .run(sink)
        .context(SinkSnafu)
}
