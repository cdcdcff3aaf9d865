use snafu::prelude::*;

pub const DEFAULT_CLUSTERS: usize = 6;
pub const DEFAULT_ITERATIONS: usize = 300;
pub const DEFAULT_BPM: f32 = 95.0;
pub const DEFAULT_FPS: f32 = 25.0;
pub const DEFAULT_CLUSTER_ANIMS: usize = 2;
pub const DEFAULT_FLOW_SPEED: f32 = 0.06;
/// Longest animation cycle `validate` accepts, in iterations.
pub const MAX_ANIMATION_PERIOD: usize = 1 << 20;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConfigError {
    #[snafu(display("cluster count must be positive"))]
    ZeroClusters,

    #[snafu(display("tempo must be a positive number of beats per minute, got {bpm}"))]
    InvalidTempo { bpm: f32 },

    #[snafu(display("frame rate must be positive, got {fps}"))]
    InvalidFrameRate { fps: f32 },

    #[snafu(display("flow speed must be in (0, 1), got {flow_speed}"))]
    FlowSpeedOutOfRange { flow_speed: f32 },

    #[snafu(display(
        "{fps} fps at {bpm} bpm gives more than {} iterations per beat",
        MAX_ANIMATION_PERIOD
    ))]
    PeriodTooLong { bpm: f32, fps: f32 },
}

/// Parameters of an animation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of clusters (K).
    pub clusters: usize,
    /// Rendered frames. The loop runs one extra, unrendered, initialization pass.
    pub iterations: usize,
    /// Tempo the animation cycles are synced to.
    pub bpm: f32,
    /// Frame rate the output is meant to be played back at.
    pub fps: f32,
    /// Clusters given a random target on every beat. Clamped to `clusters`.
    pub cluster_anims: usize,
    /// Damping of the per-iteration center steps.
    pub flow_speed: f32,
    /// Seed for the random choices. `None` picks a fresh one per run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clusters: DEFAULT_CLUSTERS,
            iterations: DEFAULT_ITERATIONS,
            bpm: DEFAULT_BPM,
            fps: DEFAULT_FPS,
            cluster_anims: DEFAULT_CLUSTER_ANIMS,
            flow_speed: DEFAULT_FLOW_SPEED,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(self.clusters > 0, ZeroClustersSnafu);
        ensure!(
            self.bpm.is_finite() && self.bpm > 0.0,
            InvalidTempoSnafu { bpm: self.bpm }
        );
        ensure!(
            self.fps.is_finite() && self.fps > 0.0,
            InvalidFrameRateSnafu { fps: self.fps }
        );
        ensure!(
            self.iterations_per_beat() <= MAX_ANIMATION_PERIOD as f32,
            PeriodTooLongSnafu {
                bpm: self.bpm,
                fps: self.fps
            }
        );
        ensure!(
            self.flow_speed > 0.0 && self.flow_speed < 1.0,
            FlowSpeedOutOfRangeSnafu {
                flow_speed: self.flow_speed
            }
        );
        Ok(())
    }

    /// Iterations per beat, at least 1.
    pub fn animation_period(&self) -> usize {
        (self.iterations_per_beat() as usize).max(1)
    }

    fn iterations_per_beat(&self) -> f32 {
        (self.fps * 60.0 / self.bpm).round()
    }
}
