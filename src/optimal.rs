// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The globally cheapest seam, by dynamic programming.
//!
//! The cost of reaching a pixel is its own energy plus the cheapest of
//! the (up to) three pixels above it:
//!
//! ```text
//!           ⎧ M(x−1,y−1)
//! M(x,y)=e+min⎨ M(x,y−1)
//!           ⎩ M(x+1,y−1)
//! ```
//!
//! Only two rows of costs are ever alive at once, but the back-pointer
//! to the chosen parent is kept for every pixel so the seam can be
//! recovered from the bottom up.  Ties, both among parents and along
//! the bottom row, go to the leftmost column.

use crate::energy::EnergyMap;
use crate::seam::Seam;
use crate::seamfinder::{leftmost_minimum, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use std::mem;

/// Given an energy map, return the list of x-coordinates of the
/// cheapest connected top-to-bottom path.
pub fn find_vertical_seam_optimal(energy: &EnergyMap) -> Seam {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut parents: TwoDimensionalMap<u32> = TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    let mut previous = energy.row(0).to_vec();
    let mut current = vec![0.0; width as usize];

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            let parent_x = leftmost_minimum(range, |c| previous[c as usize]);
            current[x as usize] = energy[(x, y)] + previous[parent_x as usize];
            parents[(x, y)] = parent_x;
        }
        mem::swap(&mut previous, &mut current);
    }

    // Find the x coordinate of the bottommost seam with the least energy.
    let mut seam_col = leftmost_minimum(0..=maxwidth, |x| previous[x as usize]);

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = parents[(seam_col, y)];
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

#[derive(Debug, Default, Copy, Clone)]
pub struct OptimalSeamFinder;

impl SeamFinder for OptimalSeamFinder {
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Seam {
        find_vertical_seam_optimal(energy)
    }
}
