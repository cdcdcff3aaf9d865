use crate::types::Color;

pub mod animation;
pub mod assign;
pub mod init;
pub mod update;

// The loop here is not the textbook one:
// - centers never snap to the centroid after the first real iteration, they take a
//   damped step towards it (see `update::speed`)
// - every animation period a few clusters chase a random color instead of their
//   centroid
// - there is no convergence check, the caller decides how many iterations to run
//
// Empty clusters stay where they are. They are not reseeded.

/// Per-cluster state of the animated k-means loop.
#[derive(Debug, Clone)]
pub struct ClusterState {
    pub centers: Vec<Color>,
    pub previous: Vec<Color>,
    pub animations: Vec<Option<Color>>,
    pub(crate) sums: Vec<[f64; 3]>,
    pub(crate) counts: Vec<u32>,
}

impl ClusterState {
    pub fn new(k: usize) -> Self {
        assert!(k > 0);
        Self {
            centers: vec![Color::default(); k],
            previous: vec![Color::default(); k],
            animations: vec![None; k],
            sums: vec![[0.0; 3]; k],
            counts: vec![0; k],
        }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.centers.len()
    }

    /// Current centers become the previous ones. The new current buffer holds stale
    /// values until the next update overwrites it.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.centers, &mut self.previous);
    }

    /// Member counts from the last accumulation.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn live_animations(&self) -> usize {
        self.animations.iter().filter(|a| a.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_state_is_not_animating() {
        let state = ClusterState::new(3);
        assert_eq!(state.k(), 3);
        assert_eq!(state.live_animations(), 0);
        assert_eq!(state.counts(), &[0, 0, 0]);
    }

    #[test]
    fn swap_exchanges_buffers() {
        let mut state = ClusterState::new(1);
        state.centers[0] = Color::new(1.0, 2.0, 3.0);
        state.swap();
        assert_eq!(state.previous[0], Color::new(1.0, 2.0, 3.0));
        assert_eq!(state.centers[0], Color::default());
    }

    #[test]
    #[should_panic(expected = "assertion failed: k > 0")]
    fn zero_clusters_panics() {
        ClusterState::new(0);
    }
}
