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

use crate::{
    Band, Diagonal, Dimension, General, LowerTriangular, SelfAdjoint, ShapeError, ShapeType,
    Tridiagonal, UpperTriangular,
};

/// Any of the structural shapes a test matrix can have.
///
/// This allows shapes of different kinds to be stored together (e.g., in
/// a `Vec<Shape>`) or read from a configuration file.
///
/// ```
/// use shape::{Shape, Band, Dimension};
///
/// let shapes: Vec<Shape> = serde_json::from_str(
///     r#"["upper_triangular", {"band": {"lower": 0, "upper": 2}}]"#
/// ).unwrap();
/// assert_eq!(shapes[0], Shape::UpperTriangular);
/// assert_eq!(shapes[1].to_band(&Dimension::new(4, 4)).unwrap(), Band::new(0, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// An explicit band
    Band(Band),
    /// See [`General`]
    General,
    /// See [`SelfAdjoint`]
    SelfAdjoint,
    /// See [`UpperTriangular`]
    UpperTriangular,
    /// See [`LowerTriangular`]
    LowerTriangular,
    /// See [`Tridiagonal`]
    Tridiagonal,
    /// See [`Diagonal`]
    Diagonal,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Band(b) => write!(f, "band {}", b),
            Self::General => write!(f, "general"),
            Self::SelfAdjoint => write!(f, "self-adjoint"),
            Self::UpperTriangular => write!(f, "upper triangular"),
            Self::LowerTriangular => write!(f, "lower triangular"),
            Self::Tridiagonal => write!(f, "tridiagonal"),
            Self::Diagonal => write!(f, "diagonal"),
        }
    }
}

impl Shape {
    /// Calculates the `Band` of a matrix of size `size` with this shape.
    ///
    /// Fails only for [`Shape::SelfAdjoint`] on non-square sizes.
    pub fn to_band(&self, size: &Dimension) -> Result<Band, ShapeError> {
        match self {
            Self::Band(b) => b.to_band(size),
            Self::General => General.to_band(size),
            Self::SelfAdjoint => SelfAdjoint.to_band(size),
            Self::UpperTriangular => UpperTriangular.to_band(size),
            Self::LowerTriangular => LowerTriangular.to_band(size),
            Self::Tridiagonal => Tridiagonal.to_band(size),
            Self::Diagonal => Diagonal.to_band(size),
        }
    }

    /// Whether matrices of this shape are symmetric. This depends only on
    /// the kind of shape, never on its contents.
    pub const fn symmetric(&self) -> bool {
        match self {
            Self::Band(_) => Band::SYMMETRIC,
            Self::General => General::SYMMETRIC,
            Self::SelfAdjoint => SelfAdjoint::SYMMETRIC,
            Self::UpperTriangular => UpperTriangular::SYMMETRIC,
            Self::LowerTriangular => LowerTriangular::SYMMETRIC,
            Self::Tridiagonal => Tridiagonal::SYMMETRIC,
            Self::Diagonal => Diagonal::SYMMETRIC,
        }
    }
}

macro_rules! shape_from {
    ( $variant : ident ) => {
        impl From<$variant> for Shape {
            fn from(_: $variant) -> Self {
                Shape::$variant
            }
        }
    };
}

shape_from!(General);
shape_from!(SelfAdjoint);
shape_from!(UpperTriangular);
shape_from!(LowerTriangular);
shape_from!(Tridiagonal);
shape_from!(Diagonal);

impl From<Band> for Shape {
    fn from(b: Band) -> Self {
        Shape::Band(b)
    }
}
