//! Straight-line motion prediction.
//!
//! Monsters are assumed to keep heading for their current target point at
//! constant speed. Predictions are only trusted for about one tick because
//! the host may re-target a monster between turns.

use crate::geometry::Point;

/// Position after travelling for `t` turns from `from` towards `target` at
/// `speed` units per turn.
///
/// The direction is recomputed from `from` on every call. When `target`
/// coincides with `from` the mover is treated as stationary.
pub fn extrapolate(from: Point, target: Point, speed: f64, t: f64) -> Point {
    from.step_towards(target, speed * t)
}

/// Earliest time at which a pursuer can close to `reach` of a moving quarry.
///
/// Solves `a*t^2 + b*t + c = 0` with
/// `a = pursuer_speed^2 - quarry_speed^2`,
/// `b = 2 * d * quarry_speed * cos(angle at quarry between its heading and the pursuer)`,
/// `c = -d^2`, where `d` is the gap that still has to be closed.
///
/// Returns `Some(0.0)` when the quarry is already within `reach` or is not
/// moving, and `None` when no non-negative root exists.
pub fn intercept_time(
    pursuer: Point,
    pursuer_speed: f64,
    quarry: Point,
    quarry_target: Point,
    quarry_speed: f64,
    reach: f64,
) -> Option<f64> {
    let gap = quarry.distance(pursuer) - reach;
    if gap < 0.0 {
        return Some(0.0);
    }
    if quarry.distance(quarry_target) <= f64::EPSILON || gap <= f64::EPSILON {
        return Some(0.0);
    }

    let cos = quarry.cosine_angle(quarry_target, pursuer);
    let a = pursuer_speed * pursuer_speed - quarry_speed * quarry_speed;
    let b = 2.0 * gap * quarry_speed * cos;
    let c = -gap * gap;

    if a.abs() <= f64::EPSILON {
        // Equal speeds: only a closing quarry can be caught.
        return (b > 0.0).then(|| -c / b);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let t = (-b + discriminant.sqrt()) / (2.0 * a);
    (t >= 0.0).then_some(t)
}
