use super::ClusterState;
use crate::types::{COMPONENT_MAX, Color};
use rand::RngExt;
use rand::seq::SliceRandom;

/// Source of the random decisions made by the loop: initial centers, animation
/// targets and which clusters get animated.
pub trait ColorSource {
    /// A color with every component uniform in `0.0..255.0`.
    fn random_color(&mut self) -> Color;

    /// Puts `indices` into a random order.
    fn shuffle(&mut self, indices: &mut [usize]);
}

/// [`ColorSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomColors<R>(R);

impl<R: RngExt> RandomColors<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: RngExt> ColorSource for RandomColors<R> {
    fn random_color(&mut self) -> Color {
        Color::new(
            self.0.random::<f32>() * COMPONENT_MAX,
            self.0.random::<f32>() * COMPONENT_MAX,
            self.0.random::<f32>() * COMPONENT_MAX,
        )
    }

    fn shuffle(&mut self, indices: &mut [usize]) {
        indices.shuffle(&mut self.0);
    }
}

/// Iteration 0: every center gets a random color and no cluster is animating.
pub fn random_centers(colors: &mut impl ColorSource, clusters: &mut ClusterState) {
    for (center, animation) in clusters.centers.iter_mut().zip(&mut clusters.animations) {
        *center = colors.random_color();
        *animation = None;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FixedColors;
    use super::*;
    use crate::rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn random_colors_in_range() {
        let mut colors = RandomColors::new(rng::seeded(7));
        for _ in 0..1000 {
            let c = colors.random_color();
            for component in [c.r, c.g, c.b] {
                assert!((0.0..COMPONENT_MAX).contains(&component), "{component}");
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut colors = RandomColors::new(rng::seeded(7));
        let mut indices: Vec<usize> = (0..32).collect();
        colors.shuffle(&mut indices);
        indices.sort();
        assert_eq!(indices, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn random_centers_clears_animations() {
        let mut clusters = ClusterState::new(2);
        clusters.animations[1] = Some(Color::new(1.0, 1.0, 1.0));

        let a = Color::new(10.0, 20.0, 30.0);
        let b = Color::new(40.0, 50.0, 60.0);
        random_centers(&mut FixedColors::new(vec![a, b]), &mut clusters);

        assert_eq!(clusters.centers, vec![a, b]);
        assert_eq!(clusters.live_animations(), 0);
    }
}
