//! Match point conventions.

use serde::{Deserialize, Serialize};

/// Caller-supplied win/draw/loss point convention.
///
/// The core never interprets point values; it only sums whatever the caller
/// recorded on each match. This struct is the convention the manager applies
/// when turning reported results into point pairs, so win/lose-style and
/// points-style reporting both land in the same `Match` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScoring {
    /// Points for a win
    pub win: u32,
    /// Points each side earns for a draw
    pub draw: u32,
    /// Points for a loss
    pub loss: u32,
    /// Points awarded to a bye recipient
    pub bye: u32,
}

impl MatchScoring {
    /// The usual 2/1/0 convention, with a bye worth a full win
    pub fn standard() -> Self {
        Self {
            win: 2,
            draw: 1,
            loss: 0,
            bye: 2,
        }
    }
}

impl Default for MatchScoring {
    fn default() -> Self {
        Self::standard()
    }
}
