use crate::Side;

/// Contents of a single board square: an owner and a number of spots.
/// A square with no spots is always owned by [`Side::White`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    side: Side,
    spots: u32,
}

impl Square {
    pub const EMPTY: Square = Square {
        side: Side::White,
        spots: 0,
    };

    pub fn new(side: Side, spots: u32) -> Self {
        if spots == 0 {
            Square::EMPTY
        } else {
            Square { side, spots }
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn spots(&self) -> u32 {
        self.spots
    }

    pub fn is_empty(&self) -> bool {
        self.spots == 0
    }

    /// Returns this square with `delta` spots added and owned by `side`.
    pub(crate) fn with_added(&self, side: Side, delta: i64) -> Self {
        let spots = self.spots as i64 + delta;
        debug_assert!(spots >= 0, "square spot count went negative");
        Square::new(side, spots.max(0) as u32)
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::EMPTY
    }
}
