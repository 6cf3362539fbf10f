// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The things a caller can get wrong.  Every one of these is a
//! contract violation on the caller's side; nothing in this crate
//! touches a resource that can fail transiently, so there is nothing
//! to retry.

use failure::Fail;

/// Errors reported by the kernel and the viewport constructors.
#[derive(Debug, Fail, PartialEq)]
pub enum MandelbrotError {
    /// The pixel grid must be at least two pixels in each direction,
    /// because the mapper divides by `width - 1` and `height - 1`.
    #[fail(
        display = "viewport must be at least 2x2 pixels, got {}x{}",
        width, height
    )]
    ViewportTooSmall {
        /// Requested pixel columns.
        width: usize,
        /// Requested pixel rows.
        height: usize,
    },

    /// Scale is a divisor; it has to be a positive, finite number.
    #[fail(display = "viewport scale must be positive and finite, got {}", _0)]
    InvalidScale(f64),

    /// Offsets must be finite.
    #[fail(
        display = "viewport offsets must be finite, got left {} top {}",
        left, top
    )]
    InvalidOffset {
        /// Requested left offset.
        left: f64,
        /// Requested top offset.
        top: f64,
    },

    /// An iteration budget of zero leaves nothing to divide by.
    #[fail(display = "iteration budget must be at least 1")]
    ZeroIterationBudget,

    /// The color mapper only accepts fractions in [0, 1].
    #[fail(display = "escape fraction {} lies outside [0, 1]", _0)]
    FractionOutOfRange(f64),

    /// Zoom factors multiply the scale and must keep it positive.
    #[fail(display = "zoom factor must be positive and finite, got {}", _0)]
    InvalidZoom(f64),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, MandelbrotError>;
