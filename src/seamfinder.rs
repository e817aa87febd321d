// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::energy::EnergyMap;
use crate::errors::UnknownStrategy;
use crate::flipper::Flipper;
use crate::greedy::GreedySeamFinder;
use crate::optimal::OptimalSeamFinder;
use crate::seam::{Orientation, Seam};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// This trait defines how we will return seams from an energy map.
/// Implementors only know about vertical seams; a horizontal seam is
/// the vertical seam of the flipped map, so both orientations share
/// the same tie-breaking and adjacency rules.
pub trait SeamFinder {
    /// A top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Seam;

    /// A left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self, energy: &EnergyMap) -> Seam {
        self.find_vertical_seam(&energy.flip())
    }

    fn find_seam(&self, energy: &EnergyMap, orientation: Orientation) -> Seam {
        match orientation {
            Orientation::Vertical => self.find_vertical_seam(energy),
            Orientation::Horizontal => self.find_horizontal_seam(energy),
        }
    }
}

/// Which seam finder the carver uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Dynamic programming: the globally cheapest seam.
    Optimal,
    /// One row at a time, never looking back.
    Greedy,
}

impl Strategy {
    pub fn finder(self) -> &'static dyn SeamFinder {
        match self {
            Strategy::Optimal => &OptimalSeamFinder,
            Strategy::Greedy => &GreedySeamFinder,
        }
    }

    /// Human-readable name, for logging.
    pub fn describe(self) -> &'static str {
        match self {
            Strategy::Optimal => "DP",
            Strategy::Greedy => "Greedy",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Optimal
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dp" => Ok(Strategy::Optimal),
            "greedy" => Ok(Strategy::Greedy),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Optimal => "dp",
            Strategy::Greedy => "greedy",
        })
    }
}

// Scans left to right and only moves on a strictly smaller cost, so
// among equal costs the leftmost candidate wins.
pub(crate) fn leftmost_minimum<F>(candidates: RangeInclusive<u32>, cost: F) -> u32
where
    F: Fn(u32) -> f64,
{
    let first = *candidates.start();
    candidates.fold(first, |best, candidate| {
        if cost(candidate) < cost(best) {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn strategies_parse_from_their_names() {
        assert_eq!("dp".parse::<Strategy>(), Ok(Strategy::Optimal));
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!(
            "fast".parse::<Strategy>(),
            Err(UnknownStrategy("fast".to_string()))
        );
        assert_eq!(Strategy::default().to_string(), "dp");
    }

    #[test]
    fn ties_go_to_the_left() {
        let costs = [3.0, 1.0, 0.5, 0.5, 2.0];
        assert_eq!(leftmost_minimum(0..=4, |x| costs[x as usize]), 2);
        assert_eq!(leftmost_minimum(3..=3, |x| costs[x as usize]), 3);
    }

    #[test]
    fn horizontal_seams_come_from_the_flipped_map() {
        // Cheapest row is the middle one, except one dip at the end.
        const ENERGY_DATA: [f64; 12] = [
            5.0, 5.0, 5.0, 5.0, //
            1.0, 1.0, 1.0, 5.0, //
            5.0, 5.0, 5.0, 0.0,
        ];
        let energy = TwoDimensionalMap::from_raw(4, 3, ENERGY_DATA.to_vec()).unwrap();
        for strategy in &[Strategy::Optimal, Strategy::Greedy] {
            let seam = strategy.finder().find_seam(&energy, Orientation::Horizontal);
            assert_eq!(seam, vec![1, 1, 1, 2]);
        }
    }
}
