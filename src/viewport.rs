// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a region of the complex plane.  The region is not described by
//! its corners but by a scale and two offsets, and the mapping is
//! deliberately lopsided: the real axis spans `1.25 / scale` while
//! the imaginary axis spans `1.0 / scale`, and the top offset is
//! subtracted where the left offset is added.
use itertools::iproduct;
use log::debug;
use num::Complex;
use std::fmt;
use std::str::FromStr;

use crate::error::{MandelbrotError, Result};

/// Width of the visible real interval at scale 1.
const SPAN_RE: f64 = 1.25;

/// Height of the visible imaginary interval at scale 1.
const SPAN_IM: f64 = 1.0;

/// Fraction of the visible span moved by a single pan.
const PAN_STEP: f64 = 0.25;

/// Describes the column, row of a pixel.  Pixels outside the grid,
/// negative ones included, extrapolate the mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel(pub i64, pub i64);

/// The four directions a viewport can be panned in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pan {
    /// Raises the top offset.
    Up,
    /// Lowers the top offset.
    Down,
    /// Lowers the left offset.
    Left,
    /// Raises the left offset.
    Right,
}

impl FromStr for Pan {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "up" => Ok(Pan::Up),
            "down" => Ok(Pan::Down),
            "left" => Ok(Pan::Left),
            "right" => Ok(Pan::Right),
            _ => Err(format!("Unknown pan direction '{}'", s)),
        }
    }
}

/// An immutable description of the pixel grid and of the region of
/// the complex plane it looks at.  Navigation never mutates a
/// viewport; it hands back a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: usize,
    height: usize,
    scale: f64,
    left: f64,
    top: f64,
}

impl Default for Viewport {
    /// A 640x480 grid showing roughly [-2, 0.5] x [-1, 1].
    fn default() -> Self {
        Viewport {
            width: 640,
            height: 480,
            scale: 0.5,
            left: -2.0,
            top: 1.0,
        }
    }
}

impl Viewport {
    /// Constructor.  The grid must be at least 2x2, the scale positive
    /// and large enough that the visible span stays finite, and both
    /// offsets finite.
    pub fn new(width: usize, height: usize, scale: f64, left: f64, top: f64) -> Result<Viewport> {
        if width < 2 || height < 2 {
            return Err(MandelbrotError::ViewportTooSmall { width, height });
        }
        if !(scale > 0.0 && scale.is_finite() && (SPAN_RE / scale).is_finite()) {
            return Err(MandelbrotError::InvalidScale(scale));
        }
        if !(left.is_finite() && top.is_finite()) {
            return Err(MandelbrotError::InvalidOffset { left, top });
        }
        Ok(Viewport {
            width,
            height,
            scale,
            left,
            top,
        })
    }

    /// Pixel columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixel rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Zoom factor; larger is closer.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Real coordinate of the leftmost column.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Negated imaginary coordinate of the first row.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Given a pixel, return the corresponding point on the complex
    /// plane.  The arithmetic is evaluated strictly left to right so
    /// that results are reproducible bit for bit.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            SPAN_RE / self.scale * (pixel.0 as f64) / ((self.width - 1) as f64) + self.left,
            SPAN_IM / self.scale * (pixel.1 as f64) / ((self.height - 1) as f64) - self.top,
        )
    }

    /// Every pixel in the grid, one column at a time.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> {
        iproduct!(0..self.width as i64, 0..self.height as i64)
            .map(|(column, row)| Pixel(column, row))
    }

    /// Zoom by `factor` about the centre of the visible region.
    /// Factors above one zoom in.  A zoom that would leave the
    /// viewport invalid is an error.
    pub fn rescaled(&self, factor: f64) -> Result<Viewport> {
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(MandelbrotError::InvalidZoom(factor));
        }
        let width = SPAN_RE / self.scale;
        let height = SPAN_IM / self.scale;
        let next = Viewport::new(
            self.width,
            self.height,
            self.scale * factor,
            self.left + width / 2.0 * (1.0 - 1.0 / factor),
            self.top + height / 2.0 * (1.0 / factor - 1.0),
        )
        .map_err(|_| MandelbrotError::InvalidZoom(factor))?;
        debug!("Rescaled by {}: {} -> {}", factor, self, next);
        Ok(next)
    }

    /// Move a quarter of the visible span in `direction`.  Fails with
    /// `InvalidOffset` if the move runs off the end of `f64`.
    pub fn panned(&self, direction: Pan) -> Result<Viewport> {
        let step = PAN_STEP / self.scale;
        let (left, top) = match direction {
            Pan::Up => (self.left, self.top + step),
            Pan::Down => (self.left, self.top - step),
            Pan::Right => (self.left + step, self.top),
            Pan::Left => (self.left - step, self.top),
        };
        let next = Viewport::new(self.width, self.height, self.scale, left, top)?;
        debug!("Panned {:?}: {} -> {}", direction, self, next);
        Ok(next)
    }

    /// Human-readable zoom level: `1:4` when zoomed in, `2:1` when
    /// zoomed out.
    pub fn scale_label(&self) -> String {
        if self.scale > 1.0 {
            format!("1:{:.0}", self.scale)
        } else {
            format!("{:.0}:1", 1.0 / self.scale)
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} at {} (left {}, top {})",
            self.width,
            self.height,
            self.scale_label(),
            self.left,
            self.top
        )
    }
}
