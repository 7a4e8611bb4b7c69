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

use crate::{Band, Dimension, ShapeError, ShapeType};

/// A matrix with no structure at all; every element can be nonzero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct General;

impl ShapeType for General {
    const SYMMETRIC: bool = false;

    fn to_band(&self, size: &Dimension) -> Result<Band, ShapeError> {
        Ok(Band::full(size))
    }
}

/// A matrix equal to its own conjugate transpose. Only square
/// matrices can be self-adjoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelfAdjoint;

impl ShapeType for SelfAdjoint {
    const SYMMETRIC: bool = true;

    fn to_band(&self, size: &Dimension) -> Result<Band, ShapeError> {
        if !size.is_square() {
            return Err(ShapeError::NonSquare {
                rows: size.rows(),
                cols: size.cols(),
            });
        }
        Ok(Band::full(size))
    }
}

/// A matrix with zeroes below the main diagonal
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpperTriangular;

impl ShapeType for UpperTriangular {
    const SYMMETRIC: bool = false;

    fn to_band(&self, size: &Dimension) -> Result<Band, ShapeError> {
        Ok(Band::new(0, size.cols() - 1))
    }
}

/// A matrix with zeroes above the main diagonal
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LowerTriangular;

impl ShapeType for LowerTriangular {
    const SYMMETRIC: bool = false;

    fn to_band(&self, size: &Dimension) -> Result<Band, ShapeError> {
        Ok(Band::new(size.rows() - 1, 0))
    }
}

/// A matrix whose nonzero elements are in the main diagonal
/// and the ones right above and below it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tridiagonal;

impl ShapeType for Tridiagonal {
    const SYMMETRIC: bool = false;

    fn to_band(&self, _size: &Dimension) -> Result<Band, ShapeError> {
        Ok(Band::new(1, 1))
    }
}

/// A matrix with nonzero elements only in its main diagonal
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Diagonal;

impl ShapeType for Diagonal {
    const SYMMETRIC: bool = true;

    fn to_band(&self, _size: &Dimension) -> Result<Band, ShapeError> {
        Ok(Band::new(0, 0))
    }
}
