use std::time::Duration;

use sortviz_core::Algorithm;

/// Per-step animation delay policy.
///
/// The animated cadence is per algorithm: the chattier engines pause less per
/// step so a full run stays watchable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pacing {
    /// The visualizer's cadence: 500 ms for merge/quick/insertion, 1000 ms
    /// for bubble, 1500 ms for selection/heap.
    Animated,
    /// The same fixed delay for every algorithm.
    Fixed(Duration),
}

impl Pacing {
    /// No delay at all. Used by tests and headless runs.
    pub fn none() -> Self {
        Pacing::Fixed(Duration::ZERO)
    }

    /// Delay to apply after each step of `algorithm`.
    pub fn delay(self, algorithm: Algorithm) -> Duration {
        match self {
            Pacing::Fixed(delay) => delay,
            Pacing::Animated => match algorithm {
                Algorithm::Merge | Algorithm::Quick | Algorithm::Insertion => {
                    Duration::from_millis(500)
                }
                Algorithm::Bubble => Duration::from_millis(1000),
                Algorithm::Selection | Algorithm::Heap => Duration::from_millis(1500),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animated_delays_match_the_per_algorithm_cadence() {
        let ms = |algo| Pacing::Animated.delay(algo).as_millis();
        assert_eq!(ms(Algorithm::Merge), 500);
        assert_eq!(ms(Algorithm::Quick), 500);
        assert_eq!(ms(Algorithm::Insertion), 500);
        assert_eq!(ms(Algorithm::Bubble), 1000);
        assert_eq!(ms(Algorithm::Selection), 1500);
        assert_eq!(ms(Algorithm::Heap), 1500);
    }

    #[test]
    fn fixed_applies_to_every_algorithm() {
        let pacing = Pacing::Fixed(Duration::from_millis(5));
        for algo in Algorithm::ALL {
            assert_eq!(pacing.delay(algo), Duration::from_millis(5));
        }
    }
}
