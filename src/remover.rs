// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cutting a seam out of an image.
//!
//! The result is always a new, smaller buffer; the source image is
//! never touched.

use crate::errors::CarveError;
use crate::flipper::Flipper;
use crate::seam::{check_seam, Orientation};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// Remove one pixel per row.  Pixels left of the seam stay where they
/// are and pixels right of it shift one column left.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::EmptyImage);
    }
    check_seam(seam, width, height)?;

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for (y, cut) in (0..height).zip(seam.iter().copied()) {
        for x in (0..width).filter(|x| *x != cut) {
            imgbuf.put_pixel(cq!(x < cut, x, x - 1), y, image.get_pixel(x, y));
        }
    }
    Ok(imgbuf)
}

/// Remove one pixel per column, by way of the flipped image.
pub fn remove_horizontal_seam<P, S>(
    image: &ImageBuffer<P, Vec<S>>,
    seam: &[u32],
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    Ok(remove_vertical_seam(&image.flip(), seam)?.flip())
}

pub fn remove_seam<P, S>(
    image: &ImageBuffer<P, Vec<S>>,
    seam: &[u32],
    orientation: Orientation,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    match orientation {
        Orientation::Vertical => remove_vertical_seam(image, seam),
        Orientation::Horizontal => remove_horizontal_seam(image, seam),
    }
}
