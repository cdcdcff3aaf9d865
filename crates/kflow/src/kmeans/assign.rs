use crate::sample::SampledRgbSoA;
use crate::types::Color;
use rayon::prelude::*;

// Samples per parallel task
const CHUNK_SIZE: usize = 4096;

/// Nearest center for the samples `start..start + labels.len()`.
///
/// Centers are scanned in index order and only a strictly smaller distance replaces
/// the current best, so ties go to the lowest index.
#[inline]
pub fn assign_range(
    sample: &SampledRgbSoA,
    centers: &[Color],
    start: usize,
    labels: &mut [usize],
    distances: &mut [f32],
) {
    debug_assert_eq!(labels.len(), distances.len());

    for (offset, (label, distance)) in labels.iter_mut().zip(distances.iter_mut()).enumerate() {
        let point = sample.get(start + offset);

        let mut min = f32::INFINITY;
        let mut min_idx = 0;
        for (k, &center) in centers.iter().enumerate() {
            let d = point.squared_distance(center);
            if d < min {
                min = d;
                min_idx = k;
            }
        }

        *label = min_idx;
        *distance = min.sqrt();
    }
}

/// Overwrites every label and distance. Each rayon task owns one contiguous chunk of
/// both output slices.
pub fn assign_labels(
    sample: &SampledRgbSoA,
    centers: &[Color],
    labels: &mut [usize],
    distances: &mut [f32],
) {
    assert!(!centers.is_empty());
    assert_eq!(labels.len(), sample.len());
    assert_eq!(distances.len(), sample.len());

    labels
        .par_chunks_mut(CHUNK_SIZE)
        .zip(distances.par_chunks_mut(CHUNK_SIZE))
        .enumerate()
        .for_each(|(chunk, (labels, distances))| {
            assign_range(sample, centers, chunk * CHUNK_SIZE, labels, distances);
        });
}
