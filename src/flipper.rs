// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Maps the width to the original height, and vice versa, as well as
//! every x to y and vice versa.
//!
//! This has the effect of making it possible to treat each column in a
//! horizontal scan as a contiguous row, so the seam finders and the
//! seam remover only ever have to know about vertical seams.  A
//! horizontal seam is a vertical seam of the flipped image, and
//! flipping the result back restores the orientation.

use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, Pixel, Primitive};

/// Transposition: `flip().flip()` is the identity.
pub trait Flipper {
    fn flip(&self) -> Self;
}

impl<P, S> Flipper for ImageBuffer<P, Vec<S>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn flip(&self) -> Self {
        let (width, height) = self.dimensions();
        ImageBuffer::from_fn(height, width, |x, y| *self.get_pixel(y, x))
    }
}

impl<T: Default + Copy> Flipper for TwoDimensionalMap<T> {
    fn flip(&self) -> Self {
        let (width, height) = self.dimensions();
        TwoDimensionalMap::from_fn(height, width, |x, y| self[(y, x)])
    }
}
