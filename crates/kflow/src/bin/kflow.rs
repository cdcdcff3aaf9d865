use clap::Parser;
use kflow::{Config, InputImage, PngSequence};
use log::info;
use snafu::{ResultExt, Whatever};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Render an image's colors flowing through an animated k-means palette")]
struct Args {
    /// Image to quantize
    #[arg(default_value = "assets/test.png")]
    image: PathBuf,

    /// Directory the frames are written to
    #[arg(short, long, default_value = "Results")]
    output: PathBuf,

    /// Number of color clusters
    #[arg(short = 'k', long, default_value_t = kflow::DEFAULT_CLUSTERS)]
    clusters: usize,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value_t = kflow::DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Tempo the palette animation follows
    #[arg(long, default_value_t = kflow::DEFAULT_BPM)]
    bpm: f32,

    /// Playback frame rate the tempo is converted with
    #[arg(long, default_value_t = kflow::DEFAULT_FPS)]
    fps: f32,

    /// Clusters sent towards a random color on every beat
    #[arg(long, default_value_t = kflow::DEFAULT_CLUSTER_ANIMS)]
    cluster_anims: usize,

    /// Fraction of the way to its target a cluster moves per frame, in (0, 1)
    #[arg(long, default_value_t = kflow::DEFAULT_FLOW_SPEED)]
    flow_speed: f32,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            clusters: self.clusters,
            iterations: self.iterations,
            bpm: self.bpm,
            fps: self.fps,
            cluster_anims: self.cluster_anims,
            flow_speed: self.flow_speed,
            seed: self.seed,
        }
    }
}

#[snafu::report]
fn main() -> Result<(), Whatever> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();

    let img = image::open(&args.image)
        .with_whatever_context(|_| format!("could not load {}", args.image.display()))?
        .to_rgb8();
    info!(
        "Image loaded: {} ({}x{})",
        args.image.display(),
        img.width(),
        img.height()
    );

    let input = InputImage::try_from(&img).whatever_context("unusable image")?;
    let mut sink = PngSequence::create(&args.output).whatever_context("no output directory")?;

    let outcome =
        kflow::animate(input, &config, &mut sink).whatever_context("animation failed")?;
    info!(
        "{} frames written to {}",
        outcome.frames,
        args.output.display()
    );

    Ok(())
}
