use thiserror::Error;

/// The fixed decimal precision to which bounds and candidates are rounded.
///
/// A `Step` of two decimal places has size `0.01`: candidates are quantized
/// to two places, and a narrowing move shifts a bound by at least `0.01`.
/// The precision is chosen when the engine is configured and stays fixed
/// while a bracket is being narrowed.
///
/// # Examples
/// ```
/// use hunch_core::Step;
///
/// let step = Step::default();
/// assert_eq!(step.decimals(), 2);
/// assert_eq!(step.quantize(3.14159), 3.14);
/// assert_eq!(step.format(5.0), "5.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    decimals: u32,
}

impl Step {
    /// The most decimal places a `Step` supports.
    ///
    /// Past this point `f64` cannot hold a full decimal digit reliably.
    pub const MAX_DECIMALS: u32 = 12;

    /// Creates a `Step` rounding to `decimals` decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::TooPrecise`] if `decimals` exceeds
    /// [`Step::MAX_DECIMALS`].
    pub fn new(decimals: u32) -> Result<Self, StepError> {
        if decimals > Self::MAX_DECIMALS {
            return Err(StepError::TooPrecise(decimals));
        }
        Ok(Self { decimals })
    }

    /// Returns the number of decimal places.
    #[must_use]
    pub fn decimals(self) -> u32 {
        self.decimals
    }

    /// Returns the size of one step, e.g. `0.01` for two decimal places.
    #[must_use]
    pub fn size(self) -> f64 {
        10f64.powi(-(self.decimals as i32))
    }

    /// Rounds `x` to this precision.
    ///
    /// Non-finite values pass through unchanged. Rounding goes through
    /// decimal text so the result is exactly the value a user would read
    /// back from the display.
    #[must_use]
    pub fn quantize(self, x: f64) -> f64 {
        if !x.is_finite() {
            return x;
        }
        // A fixed-precision rendering of a finite f64 always reparses.
        self.format(x).parse().unwrap_or(x)
    }

    /// Renders `x` as decimal text at this precision.
    #[must_use]
    pub fn format(self, x: f64) -> String {
        let prec = self.decimals as usize;
        format!("{x:.prec$}")
    }
}

impl Default for Step {
    /// Two decimal places: the step size is `0.01`.
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

/// Errors that can occur when constructing a [`Step`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// More decimal places than the precision `f64` can sustain.
    #[error("{0} decimal places exceeds the supported maximum of {max}", max = Step::MAX_DECIMALS)]
    TooPrecise(u32),
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn valid_precisions() {
        assert_eq!(Step::new(0).unwrap().decimals(), 0);
        assert_eq!(Step::new(2).unwrap().decimals(), 2);
        assert_eq!(Step::new(Step::MAX_DECIMALS).unwrap().decimals(), 12);
    }

    #[test]
    fn rejects_excess_precision() {
        assert!(matches!(Step::new(13), Err(StepError::TooPrecise(13))));
    }

    #[test]
    fn size_matches_decimals() {
        use approx::assert_relative_eq;

        assert_relative_eq!(Step::new(0).unwrap().size(), 1.0);
        assert_relative_eq!(Step::default().size(), 0.01);
        assert_relative_eq!(Step::new(4).unwrap().size(), 0.0001);
    }

    #[test]
    fn quantize_rounds_to_precision() {
        let step = Step::default();
        assert_eq!(step.quantize(1.234), 1.23);
        assert_eq!(step.quantize(1.236), 1.24);
        assert_eq!(step.quantize(-1.236), -1.24);
        assert_eq!(step.quantize(5.0), 5.0);
    }

    #[test]
    fn quantize_passes_non_finite_through() {
        let step = Step::default();
        assert!(step.quantize(f64::NAN).is_nan());
        assert_eq!(step.quantize(f64::INFINITY), f64::INFINITY);
        assert_eq!(step.quantize(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn format_is_fixed_width() {
        let step = Step::default();
        assert_eq!(step.format(0.0), "0.00");
        assert_eq!(step.format(9999.0), "9999.00");
        assert_eq!(step.format(f64::NAN), "NaN");
    }

    #[test]
    fn quantized_text_round_trips() {
        let step = Step::default();
        for x in [0.0, 0.005, 1.0 / 3.0, 42.125, 9998.999] {
            let q = step.quantize(x);
            let reparsed: f64 = step.format(q).parse().unwrap();
            assert_eq!(reparsed, q);
        }
    }
}
