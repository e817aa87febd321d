// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! Repeatedly carve seams out of an image until it reaches the target
//! size: all of the vertical seams first, then all of the horizontal
//! ones.

use crate::energy::calculate_energy;
use crate::errors::CarveError;
use crate::remover::remove_seam;
use crate::seam::{draw_seam, Orientation};
use crate::seamfinder::Strategy;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, RgbImage};
use log::{debug, info, trace};

/// Something that wants to watch a carve in progress.  It's handed the
/// image each seam was found in, before that seam is removed.  The
/// carve does not depend on anything the observer does.
pub trait CarveObserver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn seam_found(
        &mut self,
        _image: &ImageBuffer<P, Vec<S>>,
        _seam: &[u32],
        _orientation: Orientation,
        _index: u32,
        _total: u32,
    ) {
    }
}

/// Watches nothing.
pub struct NoObserver;

impl<P, S> CarveObserver<P, S> for NoObserver
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
}

/// Keeps a red-seam overlay of roughly every tenth seam of each pass.
#[derive(Default)]
pub struct SeamSnapshots {
    pub frames: Vec<(Orientation, u32, RgbImage)>,
}

impl<P> CarveObserver<P, u8> for SeamSnapshots
where
    P: Pixel<Subpixel = u8> + 'static,
{
    fn seam_found(
        &mut self,
        image: &ImageBuffer<P, Vec<u8>>,
        seam: &[u32],
        orientation: Orientation,
        index: u32,
        total: u32,
    ) {
        if index % (total / 10 + 1) == 0 {
            self.frames
                .push((orientation, index, draw_seam(image, seam, orientation)));
        }
    }
}

/// Reject a target that is bigger than the image, or empty.
pub fn check_target(width: u32, height: u32, newwidth: u32, newheight: u32) -> Result<(), CarveError> {
    if width == 0 || height == 0 {
        return Err(CarveError::EmptyImage);
    }
    if newwidth == 0 || newheight == 0 || newwidth > width || newheight > height {
        return Err(CarveError::InvalidTargetSize {
            width,
            height,
            target_width: newwidth,
            target_height: newheight,
        });
    }
    Ok(())
}

fn carve_pass<P, S, O>(
    mut scratch: ImageBuffer<P, Vec<S>>,
    orientation: Orientation,
    seams: u32,
    strategy: Strategy,
    observer: &mut O,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    O: CarveObserver<P, S>,
{
    if seams == 0 {
        return Ok(scratch);
    }
    info!(
        "Removing {} {} seams using {}...",
        seams,
        orientation,
        strategy.describe()
    );
    let finder = strategy.finder();
    for i in 0..seams {
        // The whole energy map is stale once a seam is gone.
        let energy = calculate_energy(&scratch);
        let seam = finder.find_seam(&energy, orientation);
        trace!(
            "{} seam {}: {:?} .. {:?}",
            orientation,
            i,
            seam.first(),
            seam.last()
        );
        observer.seam_found(&scratch, &seam, orientation, i, seams);
        scratch = remove_seam(&scratch, &seam, orientation)?;
        if (i + 1) % 10 == 0 || i + 1 == seams {
            debug!("Progress: {}/{}", i + 1, seams);
        }
    }
    Ok(scratch)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
    strategy: Strategy,
}

impl<'a, I, P, S> SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved, using the
    /// optimal seam finder.
    pub fn new(image: &'a I) -> Self {
        Self {
            image,
            strategy: Strategy::default(),
        }
    }

    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Given a desired new width and height, repeatedly carve seams
    /// out of a copy of the image.  The energy map is rebuilt from
    /// scratch for every seam.
    pub fn carve(&self, newwidth: u32, newheight: u32) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        self.carve_with(newwidth, newheight, &mut NoObserver)
    }

    /// As `carve`, reporting every seam to `observer` before it is
    /// removed.
    pub fn carve_with<O>(
        &self,
        newwidth: u32,
        newheight: u32,
        observer: &mut O,
    ) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
    where
        O: CarveObserver<P, S>,
    {
        let (width, height) = self.image.dimensions();
        check_target(width, height, newwidth, newheight)?;

        let mut scratch = ImageBuffer::<P, Vec<S>>::new(width, height);
        self.image
            .pixels()
            .for_each(|(x, y, p)| scratch.put_pixel(x, y, p));

        let scratch = carve_pass(
            scratch,
            Orientation::Vertical,
            width - newwidth,
            self.strategy,
            observer,
        )?;
        carve_pass(
            scratch,
            Orientation::Horizontal,
            height - newheight,
            self.strategy,
            observer,
        )
    }
}

/// Carve `image` down to `newwidth` x `newheight`.
pub fn seamcarve<I, P, S>(
    image: &I,
    newwidth: u32,
    newheight: u32,
    strategy: Strategy,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    SeamCarver::new(image)
        .with_strategy(strategy)
        .carve(newwidth, newheight)
}
