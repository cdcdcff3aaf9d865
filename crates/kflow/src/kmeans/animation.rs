use super::ClusterState;
use super::init::ColorSource;
use log::trace;

#[inline]
pub fn is_active(iteration: usize, period: usize) -> bool {
    iteration % period == 1
}

/// Starts a new animation cycle when `iteration` is the first one of a period: all
/// targets are cleared, then `cluster_anims` random clusters (at most all of them)
/// get a random target color. Otherwise the targets are left alone.
///
/// Returns whether a new cycle was started.
pub fn schedule(
    colors: &mut impl ColorSource,
    clusters: &mut ClusterState,
    iteration: usize,
    period: usize,
    cluster_anims: usize,
) -> bool {
    if !is_active(iteration, period) {
        return false;
    }

    clusters.animations.fill(None);

    let mut order: Vec<usize> = (0..clusters.k()).collect();
    colors.shuffle(&mut order);

    for &k in order.iter().take(cluster_anims) {
        let target = colors.random_color();
        trace!("iteration {iteration}: cluster {k} animates towards {target:?}");
        clusters.animations[k] = Some(target);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmeans::init::RandomColors;
    use crate::kmeans::init::testing::FixedColors;
    use crate::rng;
    use crate::types::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn active_on_first_iteration_of_period() {
        let active: Vec<usize> = (0..40).filter(|&i| is_active(i, 12)).collect();
        assert_eq!(active, vec![1, 13, 25, 37]);
        // A one-iteration period never fires
        assert!((0..40).all(|i| !is_active(i, 1)));
    }

    #[test]
    fn exact_number_of_live_targets() {
        let mut colors = RandomColors::new(rng::seeded(1));
        for k in 1..=6 {
            for cluster_anims in 0..=8 {
                let mut clusters = ClusterState::new(k);
                // Leftovers from an earlier cycle
                clusters.animations.fill(Some(Color::default()));

                assert!(schedule(&mut colors, &mut clusters, 13, 12, cluster_anims));
                assert_eq!(
                    clusters.live_animations(),
                    cluster_anims.min(k),
                    "k={k}, cluster_anims={cluster_anims}",
                );
            }
        }
    }

    #[test]
    fn inactive_iterations_leave_targets_alone() {
        let mut colors = RandomColors::new(rng::seeded(1));
        let mut clusters = ClusterState::new(4);
        let target = Color::new(9.0, 9.0, 9.0);
        clusters.animations[2] = Some(target);

        for iteration in [0, 2, 5, 12, 24] {
            assert!(!schedule(&mut colors, &mut clusters, iteration, 12, 3));
        }
        assert_eq!(clusters.animations, vec![None, None, Some(target), None]);
    }

    #[test]
    fn targets_follow_shuffled_order() {
        let a = Color::new(1.0, 2.0, 3.0);
        let b = Color::new(4.0, 5.0, 6.0);
        // FixedColors keeps the identity order
        let mut colors = FixedColors::new(vec![a, b]);
        let mut clusters = ClusterState::new(3);

        schedule(&mut colors, &mut clusters, 1, 5, 2);
        assert_eq!(clusters.animations, vec![Some(a), Some(b), None]);
    }
}
