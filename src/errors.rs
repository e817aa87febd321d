// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a carve can fail.
//!
//! Every operation is a pure function of its inputs, so none of these
//! are worth retrying.  `InvalidSeam` in particular means one of the
//! seam finders produced garbage, and that's a bug, not bad input.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CarveError {
    /// The requested size is larger than the image, or zero.
    #[error("cannot carve a {width}x{height} image to {target_width}x{target_height}")]
    InvalidTargetSize {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },

    /// A seam that does not fit the image it was applied to.
    #[error("invalid seam: {0}")]
    InvalidSeam(String),

    /// Zero width or zero height.
    #[error("cannot carve an empty image")]
    EmptyImage,
}

/// A strategy name that is neither `dp` nor `greedy`.
#[derive(Debug, Error, PartialEq)]
#[error("unknown seam strategy {0:?}, expected \"dp\" or \"greedy\"")]
pub struct UnknownStrategy(pub String);
