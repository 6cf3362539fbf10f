// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The zoom policy of an interactive explorer.  Zooming in doubles the
//! scale and adds fifty iterations to the budget; zooming out undoes
//! both.  Zooming out is refused once the scale drops below 0.5.

use log::debug;

use crate::viewport::Viewport;

/// Scale multiplier applied by a single zoom step.
pub const ZOOM_FACTOR: f64 = 2.0;

/// Iterations added or removed by a single zoom step.
pub const ITERATION_STEP: usize = 50;

/// Below this scale the explorer will not zoom out any further.
pub const MIN_SCALE: f64 = 0.5;

/// A single zoom step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Zoom {
    /// Closer.
    In,
    /// Further.
    Out,
}

/// Apply one zoom step to a viewport and its iteration budget.
/// Returns `None` when the step is refused.  The budget never drops
/// below one.
pub fn zoom(viewport: &Viewport, max_iterations: usize, step: Zoom) -> Option<(Viewport, usize)> {
    let (factor, budget) = match step {
        Zoom::In => (ZOOM_FACTOR, max_iterations.saturating_add(ITERATION_STEP)),
        Zoom::Out => {
            if viewport.scale() < MIN_SCALE {
                debug!("Refusing to zoom out past {}", viewport.scale_label());
                return None;
            }
            (
                1.0 / ZOOM_FACTOR,
                max_iterations.saturating_sub(ITERATION_STEP).max(1),
            )
        }
    };
    viewport.rescaled(factor).ok().map(|next| (next, budget))
}
