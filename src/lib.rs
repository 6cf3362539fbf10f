#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot escape-time kernel
//!
//! The Mandelbrot set is the set of points on the complex plane whose
//! orbit under `z -> z^2 + c` stays bounded.  For any point outside
//! the set, the number of iterations it takes the orbit to wander past
//! a radius of 2 is a measure of how far outside it is; this crate
//! computes that number for a single pixel of a viewport and turns it
//! into a shade of grey.
//!
//! Everything here is a pure function of its arguments.  Drawing the
//! pixels, owning the window, and deciding which pixels to ask about
//! belong to the caller.

pub mod color;
pub mod error;
pub mod escape;
pub mod navigate;
pub mod viewport;

pub use color::{color_for, Color};
pub use error::{MandelbrotError, Result};
pub use escape::{escape_count, escape_fraction};
pub use navigate::{zoom, Zoom};
pub use viewport::{Pan, Pixel, Viewport};

use log::trace;

/// Maps `pixel` into the plane described by `viewport`, measures how
/// quickly that point escapes within `max_iterations`, and returns the
/// matching shade of grey.  Points that never escape are white.
pub fn color_for_pixel(pixel: Pixel, max_iterations: usize, viewport: &Viewport) -> Result<Color> {
    let point = viewport.pixel_to_point(&pixel);
    let fraction = escape_fraction(point, max_iterations)?;
    let color = color_for(fraction)?;
    trace!("{:?} -> {} -> {} -> {}", pixel, point, fraction, color);
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_white() {
        let vp = Viewport::new(101, 101, 1.0, 0.0, 0.0).unwrap();
        assert_eq!(color_for_pixel(Pixel(0, 0), 100, &vp), Ok(Color(255, 255, 255)));
    }

    #[test]
    fn upper_left_of_a_shifted_view_escapes_immediately() {
        // Pixel (0, 0) lands on (-2, 1), which escapes on the first update.
        let vp = Viewport::new(101, 101, 1.0, -2.0, -1.0).unwrap();
        assert_eq!(escape_count(vp.pixel_to_point(&Pixel(0, 0)), 100), 0);
        assert_eq!(color_for_pixel(Pixel(0, 0), 100, &vp), Ok(Color(0, 0, 0)));
    }

    #[test]
    fn same_inputs_same_color() {
        let vp = Viewport::default();
        for pixel in vp.pixels().step_by(997) {
            assert_eq!(
                color_for_pixel(pixel, 64, &vp),
                color_for_pixel(pixel, 64, &vp)
            );
        }
    }

    #[test]
    fn shades_follow_the_escape_count() {
        // Pixel (2, 0) of a 5x5 view at scale 1 lands on (0.625, 0).
        let vp = Viewport::new(5, 5, 1.0, 0.0, 0.0).unwrap();
        let point = vp.pixel_to_point(&Pixel(2, 0));
        assert_eq!(point, num::Complex::new(0.625, 0.0));
        let count = escape_count(point, 10);
        let shade = (255.0 * (count as f64 / 10.0)) as u8;
        assert_eq!(
            color_for_pixel(Pixel(2, 0), 10, &vp),
            Ok(Color(shade, shade, shade))
        );
    }

    #[test]
    fn zero_budget_is_an_error() {
        assert_eq!(
            color_for_pixel(Pixel(0, 0), 0, &Viewport::default()),
            Err(MandelbrotError::ZeroIterationBudget)
        );
    }

    #[test]
    fn types_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Viewport>();
        assert_send_sync::<Color>();
        assert_send_sync::<MandelbrotError>();
    }
}
