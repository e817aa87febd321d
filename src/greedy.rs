// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A myopic seam: start at the cheapest pixel of the top row and, for
//! each row after that, step to the cheapest of the three pixels
//! below.  No tables, no backtracking, and no guarantee the result is
//! anywhere near the cheapest seam.

use crate::energy::EnergyMap;
use crate::seam::Seam;
use crate::seamfinder::{leftmost_minimum, SeamFinder};

/// Straight down wins ties; otherwise left is checked before right
/// and only a strictly smaller energy moves the seam.
pub fn find_vertical_seam_greedy(energy: &EnergyMap) -> Seam {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let maxwidth = width - 1;
    let start = leftmost_minimum(0..=maxwidth, |x| energy[(x, 0)]);

    (1..height).fold(vec![start], |mut seam, y| {
        let c = seam[seam.len() - 1];
        let mut best = c;
        if c > 0 && energy[(c - 1, y)] < energy[(best, y)] {
            best = c - 1;
        }
        if c < maxwidth && energy[(c + 1, y)] < energy[(best, y)] {
            best = c + 1;
        }
        seam.push(best);
        seam
    })
}

#[derive(Debug, Default, Copy, Clone)]
pub struct GreedySeamFinder;

impl SeamFinder for GreedySeamFinder {
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Seam {
        find_vertical_seam_greedy(energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimal::find_vertical_seam_optimal;
    use crate::seam::seam_cost;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn follows_the_cheapest_neighbour() {
        const ENERGY_DATA: [f64; 16] = [
            9.0, 9.0, 0.0, 9.0, //
            9.0, 1.0, 9.0, 9.0, //
            9.0, 9.0, 1.0, 9.0, //
            9.0, 9.0, 9.0, 0.0,
        ];
        let energy = TwoDimensionalMap::from_raw(4, 4, ENERGY_DATA.to_vec()).unwrap();
        assert_eq!(find_vertical_seam_greedy(&energy), [2, 1, 2, 3]);
    }

    #[test]
    fn straight_down_wins_ties() {
        const ENERGY_DATA: [f64; 6] = [5.0, 0.0, 5.0, 2.0, 2.0, 2.0];
        let energy = TwoDimensionalMap::from_raw(3, 2, ENERGY_DATA.to_vec()).unwrap();
        assert_eq!(find_vertical_seam_greedy(&energy), [1, 1]);
    }

    #[test]
    fn left_beats_right_when_both_are_cheaper() {
        const ENERGY_DATA: [f64; 6] = [5.0, 0.0, 5.0, 1.0, 2.0, 1.0];
        let energy = TwoDimensionalMap::from_raw(3, 2, ENERGY_DATA.to_vec()).unwrap();
        assert_eq!(find_vertical_seam_greedy(&energy), [1, 0]);
    }

    #[test]
    fn greed_is_not_optimal() {
        // The cheap first step leads into an expensive wall.
        const ENERGY_DATA: [f64; 9] = [
            0.0, 1.0, 1.0, //
            9.0, 9.0, 1.0, //
            9.0, 9.0, 1.0,
        ];
        let energy = TwoDimensionalMap::from_raw(3, 3, ENERGY_DATA.to_vec()).unwrap();
        let greedy = find_vertical_seam_greedy(&energy);
        let optimal = find_vertical_seam_optimal(&energy);
        assert_eq!(greedy, [0, 0, 0]);
        assert_eq!(optimal, [1, 2, 2]);
        assert!(seam_cost(&energy, &greedy) > seam_cost(&energy, &optimal));
    }
}
