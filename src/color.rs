// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps an escape fraction onto a greyscale color.

use std::fmt;

use crate::error::{MandelbrotError, Result};

/// An 8-bit RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.0, self.1, self.2)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.0, color.1, color.2])
    }
}

/// Scales `fraction` to a shade of grey.  The shade is truncated, not
/// rounded: only a fraction of exactly 1.0 reaches 255.
pub fn color_for(fraction: f64) -> Result<Color> {
    // Written this way round so that NaN is rejected too.
    if !(fraction >= 0.0 && fraction <= 1.0) {
        return Err(MandelbrotError::FractionOutOfRange(fraction));
    }
    let shade = (255.0 * fraction) as u8;
    Ok(Color(shade, shade, shade))
}
