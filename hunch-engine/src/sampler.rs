use hunch_core::{Direction, Step};
use rand::{Rng, RngExt};

/// Draws a candidate from a symmetric triangular distribution over the
/// bracket.
///
/// Candidates cluster toward the midpoint of the bracket without ever being
/// pinned to it. Reversed bounds are normalized into order first; a
/// zero-width bracket yields its single point.
#[must_use]
pub fn sample(lower: f64, upper: f64) -> f64 {
    sample_with(&mut rand::rng(), lower, upper)
}

/// Same as [`sample`], drawing uniform variates from the given source.
#[must_use]
pub fn sample_with<R: Rng + ?Sized>(rng: &mut R, lower: f64, upper: f64) -> f64 {
    let (a, b) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };
    let m = 0.5 * (a + b);
    let d = b - a;
    let u: f64 = rng.random();

    // Inverse CDF of the symmetric triangular distribution.
    let x = if u <= (m - a) / d {
        a + (d * (m - a) * u).sqrt()
    } else {
        b - (d * (b - m) * (1.0 - u)).sqrt()
    };

    // An out-of-bracket draw is a sampler bug, never a user-facing state.
    assert!(x >= a && x <= b, "sample {x} escaped the bracket [{a}, {b}]");
    x
}

/// Quantizes `x` and clamps it into the bracket, honoring the direction the
/// narrowing is about to take.
///
/// With `Some(Direction::Lower)` the result lands in `[lower, upper − step]`;
/// with `Some(Direction::Higher)` in `[lower + step, upper]`; with `None` in
/// the plain closed bracket. When only two representable values remain, the
/// requested direction therefore decides which of the two wins. Non-finite
/// input passes through unchanged.
#[must_use]
pub fn tweak(x: f64, lower: f64, upper: f64, step: Step, dir: Option<Direction>) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let q = step.quantize(x);
    match dir {
        Some(Direction::Lower) => q.max(lower).min(upper - step.size()),
        Some(Direction::Higher) => q.min(upper).max(lower + step.size()),
        None => q.max(lower).min(upper),
    }
}
