// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image reduction.
//!
//! Shrinks an image by repeatedly removing the connected path of
//! pixels ("seam") with the least energy, rather than scaling every
//! pixel uniformly.

/// A ternary expression.  Rust's `if` already is one, but `cargo fmt`
/// spreads it over five lines, and the border cases of a seam search
/// read much better on one.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

pub mod energy;
pub mod errors;
pub mod flipper;
pub mod greedy;
pub mod optimal;
pub mod remover;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use energy::{calculate_energy, EnergyMap};
pub use errors::{CarveError, UnknownStrategy};
pub use greedy::{find_vertical_seam_greedy, GreedySeamFinder};
pub use optimal::{find_vertical_seam_optimal, OptimalSeamFinder};
pub use remover::{remove_horizontal_seam, remove_seam, remove_vertical_seam};
pub use seam::{check_seam, draw_seam, is_connected, seam_cost, Orientation, Seam};
pub use seamcarver::{check_target, seamcarve, CarveObserver, NoObserver, SeamCarver, SeamSnapshots};
pub use seamfinder::{SeamFinder, Strategy};
pub use twodmap::TwoDimensionalMap;
