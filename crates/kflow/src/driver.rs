use crate::config::Config;
use crate::kmeans::init::{ColorSource, random_centers};
use crate::kmeans::{ClusterState, animation, assign, update};
use crate::render::{self, Frame, FrameSink};
use crate::sample::SampledRgbSoA;
use crate::types::Color;
use log::{debug, info};

/// What is left once the last frame is rendered.
#[derive(Debug)]
pub struct Outcome {
    pub centers: Vec<Color>,
    pub labels: Vec<usize>,
    pub frames: usize,
}

/// Runs the animated k-means loop over one sample buffer.
///
/// Iteration 0 places random centers and is never rendered; iterations
/// `1..=iterations` update, reassign and render. There is no early exit.
pub struct Driver<'a, C> {
    sample: &'a SampledRgbSoA,
    colors: C,
    iterations: usize,
    period: usize,
    cluster_anims: usize,
    flow_speed: f32,
    next_iteration: usize,
    clusters: ClusterState,
    labels: Vec<usize>,
    distances: Vec<f32>,
    frame: Frame,
}

impl<'a, C: ColorSource> Driver<'a, C> {
    /// `config` must be valid and `sample` non-empty.
    pub fn new(sample: &'a SampledRgbSoA, config: &Config, colors: C) -> Self {
        assert!(!sample.is_empty());
        let n = sample.len();

        Self {
            sample,
            colors,
            iterations: config.iterations,
            period: config.animation_period(),
            cluster_anims: config.cluster_anims,
            flow_speed: config.flow_speed,
            next_iteration: 0,
            clusters: ClusterState::new(config.clusters),
            labels: vec![0; n],
            distances: vec![0.0; n],
            frame: Frame::new(sample.width, sample.height),
        }
    }

    pub fn clusters(&self) -> &ClusterState {
        &self.clusters
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Runs every phase of the next iteration except rendering and returns its index.
    pub fn advance(&mut self) -> usize {
        let iteration = self.next_iteration;
        self.clusters.swap();

        if iteration == 0 {
            random_centers(&mut self.colors, &mut self.clusters);
        } else {
            let result = update::update_centers(
                self.sample,
                &self.labels,
                &mut self.clusters,
                iteration,
                self.period,
                self.flow_speed,
            );
            debug!(
                "iteration {iteration}: centers moved {:.3}, {} empty clusters",
                result.shift, result.empty_clusters,
            );
        }

        if animation::schedule(
            &mut self.colors,
            &mut self.clusters,
            iteration,
            self.period,
            self.cluster_anims,
        ) {
            debug!(
                "iteration {iteration}: new animation cycle, {} clusters animating",
                self.clusters.live_animations(),
            );
        }

        assign::assign_labels(
            self.sample,
            &self.clusters.centers,
            &mut self.labels,
            &mut self.distances,
        );

        self.next_iteration += 1;
        iteration
    }

    /// Runs all remaining iterations, handing frames `1..=iterations` to `sink`.
    /// Stops at the first sink error.
    pub fn run<S: FrameSink>(mut self, sink: &mut S) -> Result<Outcome, S::Error> {
        info!(
            "{} clusters over {} samples, {} frames, animation period {} iterations",
            self.clusters.k(),
            self.sample.len(),
            self.iterations,
            self.period,
        );

        let mut frames = 0;
        while self.next_iteration <= self.iterations {
            let iteration = self.advance();
            if iteration == 0 {
                continue;
            }

            render::render(&self.labels, &self.clusters.centers, &mut self.frame);
            sink.write_frame(iteration, &self.frame)?;
            frames += 1;

            if log::log_enabled!(log::Level::Debug) {
                let mean = self.distances.iter().map(|&d| d as f64).sum::<f64>()
                    / self.distances.len() as f64;
                debug!("frame {iteration}: mean distance to center {mean:.3}");
            }
        }

        Ok(Outcome {
            centers: self.clusters.centers,
            labels: self.labels,
            frames,
        })
    }
}
