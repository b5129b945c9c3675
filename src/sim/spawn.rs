//! Obstacle scrolling, despawning and procedural spawning
//!
//! Gap placement draws from a [`GapRandom`] source so runs can be seeded
//! (or fully scripted in tests).

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, GameState, Obstacle};
use crate::consts::NORMAL_GAP_MARGIN;
use crate::tuning::Tuning;

/// Uniform random numbers for gap placement
pub trait GapRandom {
    /// Next value in `[0, 1)`
    fn next_unit(&mut self) -> f32;
}

impl GapRandom for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    index: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, index: 0 }
    }

    /// Always returns the same value
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl GapRandom for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.index % self.values.len()];
        self.index = (self.index + 1) % self.values.len();
        v
    }
}

/// Choose `(gap_top, gap_height)` for a new obstacle at the given score
///
/// Easy mode keeps the taller gap in the middle half of the screen; after
/// the threshold the narrower gap can sit anywhere with a fixed margin
/// from the top and bottom.
pub fn gap_for_score(score: u32, tuning: &Tuning, rng: &mut impl GapRandom) -> (f32, f32) {
    let h = tuning.screen_height;
    let r = rng.next_unit();

    if score < tuning.easy_threshold {
        let gap = tuning.easy_gap;
        let min_top = h * 0.25;
        let max_top = h * 0.75 - gap;
        (r * (max_top - min_top) + min_top, gap)
    } else {
        let gap = tuning.gap;
        (
            r * (h - gap - 2.0 * NORMAL_GAP_MARGIN) + NORMAL_GAP_MARGIN,
            gap,
        )
    }
}

/// Move every obstacle left by the current scroll speed and drop those
/// whose right edge has passed the left screen boundary
pub fn scroll(state: &mut GameState, tuning: &Tuning) {
    let speed = state.scroll_speed;
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }

    let before = state.obstacles.len();
    state
        .obstacles
        .retain(|o| o.right_edge(tuning.obstacle_width) >= 0.0);
    let removed = before - state.obstacles.len();
    if removed > 0 {
        log::debug!("Despawned {} obstacle(s) at tick {}", removed, state.tick);
    }
}

/// Spawn at the right edge once the newest obstacle is far enough in
pub fn maybe_spawn(state: &mut GameState, tuning: &Tuning, rng: &mut impl GapRandom) {
    let trigger = tuning.screen_width - tuning.obstacle_spacing;
    let due = state.obstacles.last().is_none_or(|last| last.x < trigger);
    if !due {
        return;
    }

    let (gap_top, gap_height) = gap_for_score(state.score, tuning, rng);
    state
        .obstacles
        .push(Obstacle::new(tuning.screen_width, gap_top, gap_height));
    state.push_event(GameEvent::ObstacleSpawned {
        gap_top,
        gap_height,
    });
    log::debug!(
        "Spawned obstacle at tick {}: gap {:.1}..{:.1}",
        state.tick,
        gap_top,
        gap_top + gap_height
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn tuning() -> Tuning {
        Tuning::default() // 800x600 desktop
    }

    #[test]
    fn test_easy_gap_formula() {
        let t = tuning();
        // Easy gap 220; band [150, 450 - 220 = 230]
        let (top, gap) = gap_for_score(0, &t, &mut ScriptedRandom::constant(0.0));
        assert_eq!(gap, 220.0);
        assert!((top - 150.0).abs() < 1e-4);

        let (top, _) = gap_for_score(9, &t, &mut ScriptedRandom::constant(0.5));
        assert!((top - 190.0).abs() < 1e-4);
    }

    #[test]
    fn test_normal_gap_formula() {
        let t = tuning();
        // Normal gap 180; top = r * (600 - 180 - 200) + 100
        let (top, gap) = gap_for_score(10, &t, &mut ScriptedRandom::constant(0.0));
        assert_eq!(gap, 180.0);
        assert!((top - 100.0).abs() < 1e-4);

        let (top, _) = gap_for_score(25, &t, &mut ScriptedRandom::constant(0.5));
        assert!((top - 210.0).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_when_empty() {
        let t = tuning();
        let mut state = GameState::new(&t);
        maybe_spawn(&mut state, &t, &mut ScriptedRandom::constant(0.0));
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, t.screen_width);
        assert!(!state.obstacles[0].scored);
        assert!(matches!(
            state.events[0],
            GameEvent::ObstacleSpawned { gap_height, .. } if gap_height == 220.0
        ));
    }

    #[test]
    fn test_spawn_trigger_boundary() {
        let t = tuning();
        let mut state = GameState::new(&t);
        let mut rng = ScriptedRandom::constant(0.5);

        // Exactly at W - S: not yet
        state.obstacles.push(Obstacle::new(400.0, 200.0, 180.0));
        maybe_spawn(&mut state, &t, &mut rng);
        assert_eq!(state.obstacles.len(), 1);

        // Just past it: spawn
        state.obstacles[0].x = 399.5;
        maybe_spawn(&mut state, &t, &mut rng);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[1].x, 800.0);
    }

    #[test]
    fn test_despawn_only_past_left_edge() {
        let t = tuning();
        let mut state = GameState::new(&t);
        state.scroll_speed = 1.0;
        state.obstacles.push(Obstacle::new(-79.0, 200.0, 180.0));
        state.obstacles.push(Obstacle::new(-79.5, 200.0, 180.0));
        state.obstacles.push(Obstacle::new(300.0, 200.0, 180.0));

        scroll(&mut state, &t);
        // -80.0 has right edge exactly 0 and stays; -80.5 is gone
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].x, -80.0);
        assert_eq!(state.obstacles[1].x, 299.0);
    }

    #[test]
    fn test_scripted_random_wraps() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(ScriptedRandom::new(Vec::new()).next_unit(), 0.0);
    }

    #[test]
    fn test_pcg_in_unit_range_and_seeded() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..100 {
            let v = a.next_unit();
            assert!((0.0..1.0).contains(&v));
            assert_eq!(v, b.next_unit());
        }
    }

    proptest! {
        #[test]
        fn prop_scroll_moves_by_speed(
            xs in proptest::collection::vec(0.0f32..800.0, 0..8),
            speed in 0.5f32..12.0,
        ) {
            let t = tuning();
            let mut state = GameState::new(&t);
            state.scroll_speed = speed;
            state.obstacles = xs.iter().map(|&x| Obstacle::new(x, 200.0, 180.0)).collect();

            scroll(&mut state, &t);

            // Nothing starts left of 0, so nothing can leave in one step
            prop_assert_eq!(state.obstacles.len(), xs.len());
            for (o, &x) in state.obstacles.iter().zip(&xs) {
                prop_assert_eq!(o.x, x - speed);
            }
        }

        #[test]
        fn prop_gap_stays_in_band(score in 0u32..100, r in 0.0f32..1.0) {
            let t = tuning();
            let (top, gap) = gap_for_score(score, &t, &mut ScriptedRandom::constant(r));
            if score < t.easy_threshold {
                prop_assert!(top >= 150.0 - 1e-3 && top <= 230.0 + 1e-3);
                prop_assert_eq!(gap, t.easy_gap);
            } else {
                prop_assert!(top >= 100.0 - 1e-3 && top + gap <= 500.0 + 1e-3);
                prop_assert_eq!(gap, t.gap);
            }
        }
    }
}
