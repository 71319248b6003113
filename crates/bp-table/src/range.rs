//! Range specifications and axis enumeration.
//!
//! A range is written `"x1:dx:x2"` (the middle token is the step, not the
//! end) or as a bare scalar `"x"`. Axis enumeration reproduces the
//! accumulation loops of the table grid: values are advanced by repeated
//! addition or multiplication, and the upper bound is admitted through a
//! fixed absolute tolerance so that accumulated rounding cannot drop the end
//! point.

use thiserror::Error;

/// Absolute tolerance added to an axis upper bound when testing loop
/// continuation.
pub const END_TOLERANCE: f64 = 1.0e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("non-numeric range token: {token:?}")]
    NonNumeric { token: String },

    #[error("expected \"x\" or \"x1:dx:x2\", got {count} tokens")]
    TokenCount { count: usize },
}

/// Normalized `(start, end, step)` triple.
///
/// Invariant: a well-formed range (end ≥ start) always yields at least one
/// grid value, the start value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Range {
    /// Single-point axis at `value`.
    pub fn single(value: f64) -> Self {
        Self {
            start: value,
            end: value,
            step: 1.0,
        }
    }

    /// Parse a range specification.
    ///
    /// One token yields a single-point axis. Three tokens are read as
    /// start:step:end. A zero step collapses to a single point so the
    /// downstream loop cannot spin in place.
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let tokens = tokenize(text)?;
        match tokens[..] {
            [value] => Ok(Self::single(value)),
            [start, step, end] => {
                if step == 0.0 {
                    Ok(Self::single(start))
                } else {
                    Ok(Self { start, end, step })
                }
            }
            _ => Err(RangeError::TokenCount {
                count: tokens.len(),
            }),
        }
    }

    /// Parse only a scalar value, ignoring any tokens beyond the first.
    ///
    /// Shares the tokenizer and numeric validation with [`Range::parse`];
    /// used for options that are never ranges.
    pub fn parse_scalar(text: &str) -> Result<f64, RangeError> {
        let tokens = tokenize(text)?;
        Ok(tokens[0])
    }

    /// Additively advancing enumeration (`v ← v + step`).
    pub fn additive_points(&self) -> AdditiveAxis {
        AdditiveAxis {
            next: self.start,
            end: self.end,
            step: self.step,
        }
    }

    /// Multiplicatively advancing enumeration (`v ← v · step`).
    ///
    /// Callers must reject `step ≤ 1` with `end > start` at validation time;
    /// such an axis never reaches its upper bound.
    pub fn geometric_points(&self) -> GeometricAxis {
        GeometricAxis {
            next: self.start,
            end: self.end,
            step: self.step,
        }
    }
}

/// Split on `":"` and require every token to be a finite number. Any bad
/// token fails the whole parse.
fn tokenize(text: &str) -> Result<Vec<f64>, RangeError> {
    text.split(':')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| RangeError::NonNumeric {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Iterator over an additive axis. Carries the running accumulator so the
/// visited values reproduce loop-accumulation rounding exactly.
#[derive(Debug, Clone)]
pub struct AdditiveAxis {
    next: f64,
    end: f64,
    step: f64,
}

impl Iterator for AdditiveAxis {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next < self.end + END_TOLERANCE {
            let value = self.next;
            self.next += self.step;
            Some(value)
        } else {
            None
        }
    }
}

/// Iterator over a multiplicative axis (pressure decades and the like).
#[derive(Debug, Clone)]
pub struct GeometricAxis {
    next: f64,
    end: f64,
    step: f64,
}

impl Iterator for GeometricAxis {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next < self.end + END_TOLERANCE {
            let value = self.next;
            self.next *= self.step;
            Some(value)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn additive_axis_stays_within_bound(
            start in -1.0e3_f64..1.0e3,
            span in 0.0_f64..1.0e3,
            step in 1.0e-2_f64..1.0e2,
        ) {
            let range = Range { start, end: start + span, step };
            let points: Vec<f64> = range.additive_points().take(200_000).collect();

            prop_assert!(!points.is_empty());
            prop_assert_eq!(points[0], start);
            let last = points[points.len() - 1];
            prop_assert!(last < range.end + END_TOLERANCE);
            prop_assert!(points.windows(2).all(|w| w[1] > w[0]));
        }

        #[test]
        fn geometric_axis_is_strictly_increasing(
            start in 1.0e-2_f64..1.0e3,
            decades in 0u32..6,
            step in 1.5_f64..10.0,
        ) {
            let end = start * 10f64.powi(decades as i32);
            let range = Range { start, end, step };
            let points: Vec<f64> = range.geometric_points().take(200_000).collect();

            prop_assert!(!points.is_empty());
            let last = points[points.len() - 1];
            prop_assert!(last < range.end + END_TOLERANCE);
            prop_assert!(points.windows(2).all(|w| w[1] > w[0]));
        }
    }
}
