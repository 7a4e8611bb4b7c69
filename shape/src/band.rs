/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use serde::{Deserialize, Serialize};

use crate::{Dimension, ShapeError, ShapeType};

/// The envelope of the nonzero elements of a matrix, expressed as the
/// number of sub-diagonals (`lower`) and super-diagonals (`upper`) around
/// the main diagonal.
///
/// E.g., `Band::new(1, 2)` on a 5x5 matrix allows the following elements
/// to be nonzero:
///
/// ```text
/// | x, x, x, 0, 0 |
/// | x, x, x, x, 0 |
/// | 0, x, x, x, x |
/// | 0, 0, x, x, x |
/// | 0, 0, 0, x, x |
/// ```
///
/// A `Band` is also a (trivial) shape: its band is itself, whatever the
/// size of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Band {
    lower: usize,
    upper: usize,
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

impl From<Dimension> for Band {
    fn from(size: Dimension) -> Self {
        Self::full(&size)
    }
}

impl ShapeType for Band {
    const SYMMETRIC: bool = false;

    fn to_band(&self, _size: &Dimension) -> Result<Band, ShapeError> {
        Ok(*self)
    }
}

impl Band {
    /// Creates a new `Band` with `lower` sub-diagonals and `upper` super-diagonals
    #[must_use]
    pub const fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }

    /// Creates the widest `Band` a matrix of size `size` can have; this is,
    /// one that does not exclude any element.
    #[must_use]
    pub const fn full(size: &Dimension) -> Self {
        Self {
            lower: size.rows() - 1,
            upper: size.cols() - 1,
        }
    }

    /// The number of sub-diagonals
    pub const fn lower(&self) -> usize {
        self.lower
    }

    /// The number of super-diagonals
    pub const fn upper(&self) -> usize {
        self.upper
    }

    /// Returns the tightest `Band` that fits within both `self` and `other`.
    ///
    /// This is the band of a matrix that satisfies the constraints of
    /// both bands at the same time.
    #[must_use]
    pub fn merge(&self, other: &Band) -> Band {
        Band {
            lower: self.lower.min(other.lower),
            upper: self.upper.min(other.upper),
        }
    }

    /// Checks whether the element in (`row`, `col`) lies within the band,
    /// and is therefore allowed to be nonzero.
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        if row >= col {
            row - col <= self.lower
        } else {
            col - row <= self.upper
        }
    }

    /// Checks whether the band fits in a matrix of size `size`; i.e.,
    /// it does not have more sub-diagonals than `rows - 1` nor more
    /// super-diagonals than `cols - 1`
    pub const fn fits(&self, size: &Dimension) -> bool {
        self.lower < size.rows() && self.upper < size.cols()
    }
}

/// Merges two bands into the tightest band contained in both of them.
///
/// The operation is commutative, associative and idempotent, so
/// merging several bands gives the same result in any order.
///
/// ```
/// use shape::{merge_band, Band};
///
/// let a = Band::new(3, 0);
/// let b = Band::new(1, 1);
/// assert_eq!(merge_band(&a, &b), Band::new(1, 0));
/// ```
pub fn merge_band(first: &Band, second: &Band) -> Band {
    first.merge(second)
}
