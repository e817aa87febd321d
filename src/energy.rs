// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the average of the absolute horizontal and
//! vertical Sobel gradients of the image's BT.601 luminance, each saturated
//! to the 0..=255 range:
//!
//! ```text
//!        ⎡-1 0 1⎤          ⎡-1 -2 -1⎤
//!   Gx = ⎢-2 0 2⎥     Gy = ⎢ 0  0  0⎥     e = ½·min(|Gx|, 255) + ½·min(|Gy|, 255)
//!        ⎣-1 0 1⎦          ⎣ 1  2  1⎦
//! ```
//!
//! Pixels past the border are reflected without repeating the edge
//! pixel, so the column at `-1` is column `1` and the column at `width`
//! is column `width - 2`.

use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;

/// One non-negative energy value per pixel.
pub type EnergyMap = TwoDimensionalMap<f64>;

const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SATURATION: f64 = 255.0;

// Reflect-101 border handling.  A one-pixel-wide dimension has nothing
// to reflect, so everything lands on the single pixel.
#[inline]
fn reflect(i: i64, n: i64) -> u32 {
    if n == 1 {
        return 0;
    }
    let i = if i < 0 { -i } else { i };
    (if i >= n { 2 * n - 2 - i } else { i }) as u32
}

// BT.601, rounded to a whole intensity the way an 8-bit grey
// conversion rounds it.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

#[inline]
fn luminance<P, S>(p: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let channels = p.channels();
    let channel = |i: usize| channels[i].to_f64().unwrap_or(0.0);
    if channels.len() < 3 {
        return channel(0);
    }
    LUMA_WEIGHTS
        .iter()
        .enumerate()
        .map(|(i, weight)| weight * channel(i))
        .sum::<f64>()
        .round()
}

fn convolve(luma: &TwoDimensionalMap<f64>, kernel: &[[f64; 3]; 3], x: u32, y: u32) -> f64 {
    let (w, h) = (luma.width as i64, luma.height as i64);
    iproduct!(0..3usize, 0..3usize).fold(0.0, |acc, (ky, kx)| {
        let sx = reflect(x as i64 + kx as i64 - 1, w);
        let sy = reflect(y as i64 + ky as i64 - 1, h);
        acc + kernel[ky][kx] * luma[(sx, sy)]
    })
}

/// Compute the energy of every pixel in an image.  Three-channel
/// images are reduced to luminance first; single-channel images are
/// used as they are.
pub fn calculate_energy<I, P, S>(image: &I) -> EnergyMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let luma = TwoDimensionalMap::from_fn(width, height, |x, y| luminance(&image.get_pixel(x, y)));

    TwoDimensionalMap::from_fn(width, height, |x, y| {
        let gx = convolve(&luma, &SOBEL_X, x, y).abs().min(SATURATION);
        let gy = convolve(&luma, &SOBEL_Y, x, y).abs().min(SATURATION);
        0.5 * gx + 0.5 * gy
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

    #[test]
    fn reflection_skips_the_edge_pixel() {
        assert_eq!(reflect(-1, 4), 1);
        assert_eq!(reflect(4, 4), 2);
        assert_eq!(reflect(2, 4), 2);
        assert_eq!(reflect(-1, 1), 0);
        assert_eq!(reflect(1, 1), 0);
    }

    #[test]
    fn flat_images_have_no_energy() {
        let image = GrayImage::from_pixel(5, 4, Luma([77]));
        let energy = calculate_energy(&image);
        assert!(energy.as_slice().iter().all(|e| *e == 0.0));
    }

    #[test]
    fn horizontal_ramp() {
        const IMAGE_DATA: [u8; 9] = [10, 20, 30, 10, 20, 30, 10, 20, 30];
        let image: ImageBuffer<Luma<u8>, _> = ImageBuffer::from_raw(3, 3, IMAGE_DATA.to_vec()).unwrap();
        let energy = calculate_energy(&image);
        // 4 * (30 - 10) in the middle column, and the reflected borders
        // see the same pixel on both sides.
        assert_eq!(energy.as_slice(), &[0.0, 40.0, 0.0, 0.0, 40.0, 0.0, 0.0, 40.0, 0.0]);
    }

    #[test]
    fn gradients_saturate_instead_of_wrapping() {
        const IMAGE_DATA: [u8; 9] = [0, 0, 255, 0, 0, 255, 0, 0, 255];
        let image: ImageBuffer<Luma<u8>, _> = ImageBuffer::from_raw(3, 3, IMAGE_DATA.to_vec()).unwrap();
        let energy = calculate_energy(&image);
        assert_eq!(energy.row(1), &[0.0, 127.5, 0.0]);
    }

    #[test]
    fn falling_column_uses_the_absolute_gradient() {
        const IMAGE_DATA: [u8; 3] = [30, 20, 10];
        let image: ImageBuffer<Luma<u8>, _> = ImageBuffer::from_raw(1, 3, IMAGE_DATA.to_vec()).unwrap();
        let energy = calculate_energy(&image);
        assert_eq!(energy.as_slice(), &[0.0, 40.0, 0.0]);
    }

    #[test]
    fn color_images_are_reduced_to_luminance() {
        let black = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        assert!(calculate_energy(&black).as_slice().iter().all(|e| *e == 0.0));

        let striped = RgbImage::from_fn(4, 4, |x, _| {
            if x == 2 {
                Rgb([200, 120, 40])
            } else {
                Rgb([0, 0, 0])
            }
        });
        let energy = calculate_energy(&striped);
        assert!(energy[(1, 1)] > 0.0);
        assert_eq!(energy[(2, 1)], 0.0);
    }

    fn strip_with(pixel: Rgb<u8>) -> RgbImage {
        RgbImage::from_fn(4, 1, |x, _| if x == 2 { pixel } else { Rgb([0, 0, 0]) })
    }

    #[test]
    fn pure_red_edge() {
        // Red weighs 0.299, so the luma is 76 and 4 * 76 saturates.
        let energy = calculate_energy(&strip_with(Rgb([255, 0, 0])));
        assert_eq!(energy[(1, 0)], 127.5);
        assert_eq!(energy[(3, 0)], 0.0);
    }

    #[test]
    fn green_edge_uses_the_bt601_weight() {
        // 0.587 * 100 rounds to 59; half of 4 * 59.
        let energy = calculate_energy(&strip_with(Rgb([0, 100, 0])));
        assert_eq!(energy[(1, 0)], 118.0);
    }

    #[test]
    fn grey_pixels_keep_their_intensity() {
        let rgb = RgbImage::from_fn(5, 3, |x, y| {
            let v = (x * 37 + y * 11) as u8;
            Rgb([v, v, v])
        });
        let gray = GrayImage::from_fn(5, 3, |x, y| Luma([(x * 37 + y * 11) as u8]));
        assert_eq!(calculate_energy(&rgb), calculate_energy(&gray));
    }

    #[test]
    fn energy_has_the_image_dimensions() {
        let image = GrayImage::from_fn(7, 3, |x, y| Luma([(x * y) as u8]));
        assert_eq!(calculate_energy(&image).dimensions(), (7, 3));
    }
}
