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

/// The number of rows and columns of a matrix.
///
/// Both counts are always at least `1`, so that bands derived from it
/// (e.g., `rows - 1`) never underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimension")]
pub struct Dimension {
    rows: usize,
    cols: usize,
}

/// What a `Dimension` looks like before being checked
#[derive(Deserialize)]
struct RawDimension {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawDimension> for Dimension {
    type Error = String;

    fn try_from(raw: RawDimension) -> Result<Self, Self::Error> {
        Self::try_new(raw.rows, raw.cols)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl Dimension {
    /// Creates a new `Dimension` of `rows` by `cols`
    ///
    /// # Panics
    /// Panics if either `rows` or `cols` is zero. Use `try_new()`
    /// when the size comes from somewhere you do not control.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(d) => d,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a new `Dimension` of `rows` by `cols`, returning an
    /// error if any of them is zero.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, String> {
        if rows == 0 || cols == 0 {
            return Err(format!(
                "When creating Dimension: matrices need at least one row and one column... found rows = {} and cols = {}",
                rows, cols
            ));
        }
        Ok(Self { rows, cols })
    }

    /// The number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Checks whether there are as many rows as columns
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}
