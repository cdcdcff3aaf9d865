use super::ClusterState;
use crate::sample::SampledRgbSoA;
use crate::types::Color;

/// Fraction of the remaining distance a center covers in `iteration`.
///
/// Cycles start at `iteration % period == 1` (see `animation::is_active`), so the
/// phase runs `1/period, 2/period, ..., 1` and the exponent goes from just above 1
/// to exactly 2 on the last iteration of a cycle. Centers move fast after an
/// animation event and ease out towards the next one.
///
/// This is intentionally not `(iteration % period) / period`: that form drops the
/// exponent back to 1 on the last iteration of each cycle (`0.06` instead of
/// `0.0036` at flow 0.06), breaking the ease-out right before the next event.
///
/// Expects `iteration >= 1`.
#[inline]
pub fn speed(flow_speed: f32, iteration: usize, period: usize) -> f32 {
    debug_assert!(iteration >= 1 && period >= 1);
    let phase = ((iteration - 1) % period + 1) as f32 / period as f32;
    flow_speed.powf(1.0 + phase)
}

/// Per-cluster sums and member counts for the current labels.
pub fn accumulate(sample: &SampledRgbSoA, labels: &[usize], clusters: &mut ClusterState) {
    assert_eq!(labels.len(), sample.len());

    clusters.sums.fill([0.0; 3]);
    clusters.counts.fill(0);

    for (i, &label) in labels.iter().enumerate() {
        let sum = &mut clusters.sums[label];
        sum[0] += sample.r[i] as f64;
        sum[1] += sample.g[i] as f64;
        sum[2] += sample.b[i] as f64;
        clusters.counts[label] += 1;
    }
}

#[derive(Debug)]
pub struct UpdateResult {
    /// Total distance moved by all centers.
    pub shift: f32,
    pub empty_clusters: usize,
}

/// Computes `clusters.centers` from `clusters.previous` and the labels assigned in
/// the previous iteration. Expects `iteration >= 1`.
pub fn update_centers(
    sample: &SampledRgbSoA,
    labels: &[usize],
    clusters: &mut ClusterState,
    iteration: usize,
    period: usize,
    flow_speed: f32,
) -> UpdateResult {
    debug_assert!(iteration >= 1);

    accumulate(sample, labels, clusters);

    let speed = speed(flow_speed, iteration, period);
    let mut shift = 0f32;
    let mut empty_clusters = 0;

    for k in 0..clusters.k() {
        let previous = clusters.previous[k];
        let count = clusters.counts[k];

        // An empty cluster doesn't drift
        let centroid = if count == 0 {
            empty_clusters += 1;
            previous
        } else {
            let [r, g, b] = clusters.sums[k];
            let count = count as f64;
            Color::new((r / count) as f32, (g / count) as f32, (b / count) as f32)
        };

        let center = if iteration == 1 {
            // Full step away from the random initialization
            previous.step_towards(centroid, 1.0)
        } else {
            match clusters.animations[k] {
                None => previous.step_towards(centroid, speed),
                Some(target) => previous.step_towards(target, speed * 2.0),
            }
        };

        shift += previous.distance(center);
        clusters.centers[k] = center;
    }

    UpdateResult {
        shift,
        empty_clusters,
    }
}
