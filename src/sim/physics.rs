//! Craft physics
//!
//! Gravity accumulates into velocity (capped at the fall limit) and
//! velocity moves the craft. A boost replaces the velocity outright.

use super::state::Craft;

/// Advance the craft by one tick
#[inline]
pub fn integrate(craft: &mut Craft, gravity: f32, max_fall_speed: f32) {
    craft.velocity = (craft.velocity + gravity).min(max_fall_speed);
    craft.y += craft.velocity;
}

/// Overwrite vertical velocity with an impulse (does not accumulate)
#[inline]
pub fn boost(craft: &mut Craft, impulse: f32) {
    craft.velocity = impulse;
}

/// Put the craft back at its start position, at rest
pub fn reset(craft: &mut Craft, start_y: f32) {
    craft.y = start_y;
    craft.velocity = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_from_rest() {
        let mut craft = Craft::new(300.0);
        integrate(&mut craft, 0.3, 10.0);
        assert!((craft.velocity - 0.3).abs() < 1e-6);
        assert!((craft.y - 300.3).abs() < 1e-4);
    }

    #[test]
    fn test_boost_overwrites_then_gravity_applies() {
        let mut craft = Craft::new(300.0);
        craft.velocity = 4.0;
        boost(&mut craft, -8.0);
        boost(&mut craft, -8.0);
        assert_eq!(craft.velocity, -8.0);

        integrate(&mut craft, 0.3, 10.0);
        assert!((craft.velocity - (-7.7)).abs() < 1e-5);
        assert!((craft.y - 292.3).abs() < 1e-4);
    }

    #[test]
    fn test_fall_speed_capped() {
        let mut craft = Craft::new(0.0);
        for _ in 0..200 {
            integrate(&mut craft, 0.3, 10.0);
        }
        assert_eq!(craft.velocity, 10.0);
    }

    #[test]
    fn test_reset() {
        let mut craft = Craft { y: 12.0, velocity: -3.0 };
        reset(&mut craft, 300.0);
        assert_eq!(craft, Craft::new(300.0));
    }

    proptest! {
        #[test]
        fn prop_integrate_matches_closed_form(
            y in -1000.0f32..1000.0,
            v in -20.0f32..20.0,
            g in 0.0f32..2.0,
            max in 1.0f32..30.0,
        ) {
            let mut craft = Craft { y, velocity: v };
            integrate(&mut craft, g, max);
            let expected_v = (v + g).min(max);
            prop_assert_eq!(craft.velocity, expected_v);
            prop_assert_eq!(craft.y, y + expected_v);
            prop_assert!(craft.velocity <= max);
        }
    }
}
