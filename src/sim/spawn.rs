//! Obstacle spawning and difficulty-scaled parameterization

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Always returns the same value (replays and tests)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f32);

impl RandomSource for FixedRandom {
    fn unit(&mut self) -> f32 {
        self.0
    }
}

/// Spawn timer plus the factory for new obstacles
#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    /// Time since the last spawn (ms)
    pub timer: f32,
    /// Current jitter added to the base interval (ms)
    pub jitter: f32,
    next_id: u32,
}

impl ObstacleGenerator {
    pub fn new(tuning: &Tuning, rng: &mut impl RandomSource) -> Self {
        Self {
            timer: 0.0,
            jitter: tuning.jitter(0, rng.unit()),
            next_id: 1,
        }
    }

    /// Total wait before the next spawn
    pub fn threshold(&self, tuning: &Tuning) -> f32 {
        tuning.spawn_interval + self.jitter
    }

    /// Spawn if the timer already exceeds interval + jitter, otherwise
    /// accumulate `dt`. The frame's delta is not counted on the frame that
    /// spawns, so a spawn lands one tick after the threshold is crossed.
    pub fn maybe_spawn(
        &mut self,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
        dt: f32,
        score: u32,
    ) -> Option<Obstacle> {
        if self.timer <= self.threshold(tuning) {
            self.timer += dt;
            return None;
        }

        self.timer = 0.0;
        self.jitter = tuning.jitter(score, rng.unit());
        Some(self.spawn(tuning, rng, score))
    }

    /// Build an obstacle for the given score
    pub fn spawn(&mut self, tuning: &Tuning, rng: &mut impl RandomSource, score: u32) -> Obstacle {
        let tier = tuning.tier(score);
        let gap_height = tuning.gap_height(tier, rng.unit());
        let gap_y = rng.unit() * (tuning.canvas_height - gap_height).max(0.0);
        let speed = tuning.speed(tier);
        let magnitude = tuning.oscillation(tier);
        let oscillation = if magnitude > 0.0 && rng.unit() < 0.5 {
            -magnitude
        } else {
            magnitude
        };

        let id = self.next_id;
        self.next_id += 1;

        log::debug!(
            "Spawn obstacle {}: score={} tier={} gap={:.0}@{:.0} speed={} osc={}",
            id,
            score,
            tier,
            gap_height,
            gap_y,
            speed,
            oscillation
        );

        Obstacle {
            id,
            x: tuning.canvas_width,
            width: tuning.obstacle_width,
            gap_y,
            gap_height,
            tier,
            speed,
            oscillation,
            marked_for_removal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_waits_for_threshold() {
        let tuning = Tuning::default();
        let mut rng = FixedRandom(0.0);
        let mut generator = ObstacleGenerator::new(&tuning, &mut rng);
        // interval 1000 + jitter 500
        assert_eq!(generator.threshold(&tuning), 1500.0);
        assert!(generator.maybe_spawn(&tuning, &mut rng, 1500.0, 0).is_none());
        // Exactly at the threshold is not past it
        assert!(generator.maybe_spawn(&tuning, &mut rng, 1.0, 0).is_none());
        assert_eq!(generator.timer, 1501.0);
        let spawned = generator.maybe_spawn(&tuning, &mut rng, 16.0, 0);
        assert!(spawned.is_some());
        assert_eq!(generator.timer, 0.0);
    }

    #[test]
    fn test_checks_timer_before_accumulating() {
        let tuning = Tuning::default();
        let mut rng = FixedRandom(0.0);
        let mut generator = ObstacleGenerator::new(&tuning, &mut rng);
        // A single huge delta crosses the threshold but only spawns next tick
        assert!(generator.maybe_spawn(&tuning, &mut rng, 5000.0, 0).is_none());
        assert_eq!(generator.timer, 5000.0);
        assert!(generator.maybe_spawn(&tuning, &mut rng, 16.0, 0).is_some());
        // The spawning tick's delta is dropped rather than carried over
        assert_eq!(generator.timer, 0.0);
        assert!(generator.maybe_spawn(&tuning, &mut rng, 16.0, 0).is_none());
        assert_eq!(generator.timer, 16.0);
    }

    #[test]
    fn test_jitter_rerolled_with_score() {
        let tuning = Tuning::default();
        let mut rng = FixedRandom(1.0);
        let mut generator = ObstacleGenerator::new(&tuning, &mut rng);
        assert_eq!(generator.jitter, 1500.0);
        assert!(generator.maybe_spawn(&tuning, &mut rng, 5000.0, 45).is_none());
        assert!(generator.maybe_spawn(&tuning, &mut rng, 16.0, 45).is_some());
        assert_eq!(generator.jitter, 450.0);
    }

    #[test]
    fn test_tier_two_band() {
        let tuning = Tuning::default();
        let mut rng = FixedRandom(0.5);
        let mut generator = ObstacleGenerator::new(&tuning, &mut rng);
        let o = generator.spawn(&tuning, &mut rng, 12);
        assert_eq!(o.tier, 2);
        assert_eq!(o.gap_height, 240.0);
        assert_eq!(o.speed, 6.0);
        assert_eq!(o.oscillation, 0.0);
        assert_eq!(o.gap_y, 0.5 * (720.0 - 240.0));
        assert_eq!(o.x, 800.0);
    }

    #[test]
    fn test_tier_eleven_band() {
        let tuning = Tuning::default();
        let mut rng = FixedRandom(0.75);
        let mut generator = ObstacleGenerator::new(&tuning, &mut rng);
        let o = generator.spawn(&tuning, &mut rng, 55);
        assert_eq!(o.tier, 11);
        assert_eq!(o.gap_height, 196.0);
        assert_eq!(o.speed, 10.5);
        assert_eq!(o.oscillation, 0.25);
    }

    #[test]
    fn test_fixed_random_is_reproducible() {
        let tuning = Tuning::default();
        for score in [0, 12, 55, 120, 400] {
            let mut a = ObstacleGenerator::new(&tuning, &mut FixedRandom(0.3));
            let mut b = ObstacleGenerator::new(&tuning, &mut FixedRandom(0.3));
            let oa = a.spawn(&tuning, &mut FixedRandom(0.3), score);
            let ob = b.spawn(&tuning, &mut FixedRandom(0.3), score);
            assert_eq!(oa, ob);
        }
    }

    #[test]
    fn test_seeded_generators_match() {
        let tuning = Tuning::default();
        let mut rng_a = Pcg32::seed_from_u64(7);
        let mut rng_b = Pcg32::seed_from_u64(7);
        let mut a = ObstacleGenerator::new(&tuning, &mut rng_a);
        let mut b = ObstacleGenerator::new(&tuning, &mut rng_b);
        for score in 0..200 {
            assert_eq!(
                a.spawn(&tuning, &mut rng_a, score),
                b.spawn(&tuning, &mut rng_b, score)
            );
        }
    }

    #[test]
    fn test_ids_increase() {
        let tuning = Tuning::default();
        let mut rng = FixedRandom(0.1);
        let mut generator = ObstacleGenerator::new(&tuning, &mut rng);
        let a = generator.spawn(&tuning, &mut rng, 0);
        let b = generator.spawn(&tuning, &mut rng, 0);
        assert!(b.id > a.id);
    }
}
