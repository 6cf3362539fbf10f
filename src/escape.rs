// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.
//!
//! Unlike the textbook formulation, the orbit does not start at zero:
//! it starts at the point itself, so the first value tested is
//! already `c^2 + c`.  The escape test is applied *after* each update,
//! and the count returned is the zero-based index of the update that
//! escaped.  A point that escapes on the very first update therefore
//! scores zero, and a point that survives the whole budget scores the
//! budget itself.

use num::Complex;

use crate::error::{MandelbrotError, Result};

/// |z|^2 beyond which an orbit is considered to have escaped; this is
/// a radius of 2, squared so the loop never takes a square root.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

/// Returns the index of the iteration on which the orbit of `point`
/// escaped, or `max_iterations` if it never did.
#[inline]
pub fn escape_count(point: Complex<f64>, max_iterations: usize) -> usize {
    let mut z = point;
    for i in 0..max_iterations {
        z = z * z + point;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return i;
        }
    }
    max_iterations
}

/// The escape count normalized by the budget: a value in [0, 1], where
/// 1.0 means the point never escaped and is taken to be in the set.
pub fn escape_fraction(point: Complex<f64>, max_iterations: usize) -> Result<f64> {
    if max_iterations == 0 {
        return Err(MandelbrotError::ZeroIterationBudget);
    }
    Ok(escape_count(point, max_iterations) as f64 / max_iterations as f64)
}
