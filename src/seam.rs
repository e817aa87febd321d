// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams, and the handful of things worth knowing about one.
//!
//! A vertical seam is a list of x-coordinates that, when mapped with
//! the range (0..height), give the XY coordinates of each pixel in the
//! seam.  A horizontal seam is the dual: a list of y-coordinates, one
//! per column.

use crate::energy::EnergyMap;
use crate::errors::CarveError;
use image::{ImageBuffer, Pixel, Rgb, RgbImage};
use std::fmt;

pub type Seam = Vec<u32>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// Top to bottom; removing one narrows the image.
    Vertical,
    /// Left to right; removing one shortens the image.
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        })
    }
}

/// Verify that a vertical seam has one entry per row and that every
/// entry is a column of the image.
pub fn check_seam(seam: &[u32], width: u32, height: u32) -> Result<(), CarveError> {
    if seam.len() != height as usize {
        return Err(CarveError::InvalidSeam(format!(
            "seam has {} entries, image has {} rows",
            seam.len(),
            height
        )));
    }
    if let Some((row, col)) = seam.iter().enumerate().find(|(_, col)| **col >= width) {
        return Err(CarveError::InvalidSeam(format!(
            "column {} at row {} is outside an image {} wide",
            col, row, width
        )));
    }
    Ok(())
}

/// True if consecutive entries never differ by more than one.
pub fn is_connected(seam: &[u32]) -> bool {
    seam.windows(2)
        .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
}

/// The total energy along a vertical seam.
pub fn seam_cost(energy: &EnergyMap, seam: &[u32]) -> f64 {
    seam.iter()
        .enumerate()
        .map(|(y, x)| energy[(*x, y as u32)])
        .sum()
}

const SEAM_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Paint a seam in red over a copy of the image.
pub fn draw_seam<P>(image: &ImageBuffer<P, Vec<u8>>, seam: &[u32], orientation: Orientation) -> RgbImage
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = image.dimensions();
    let mut canvas = RgbImage::from_fn(width, height, |x, y| image.get_pixel(x, y).to_rgb());
    for (i, s) in seam.iter().enumerate() {
        let (x, y) = match orientation {
            Orientation::Vertical => (*s, i as u32),
            Orientation::Horizontal => (i as u32, *s),
        };
        if x < width && y < height {
            canvas.put_pixel(x, y, SEAM_COLOR);
        }
    }
    canvas
}
