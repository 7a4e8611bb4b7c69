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

#![deny(missing_docs)]

//! Structural shapes of test matrices, and the bands they imply.
//!
//! A [`Band`] is the pair `(lower, upper)` of sub- and super-diagonals
//! that may hold nonzero values. Every shape in this crate (e.g.,
//! [`UpperTriangular`], [`Tridiagonal`]) maps a [`Dimension`] into
//! such a `Band`, and several shapes can be combined into their tightest
//! common `Band` through [`merge_band`].
//!
//! ```
//! use shape::*;
//!
//! let size = Dimension::new(5, 5);
//! let upper = UpperTriangular.to_band(&size).unwrap();
//! let diag = Diagonal.to_band(&size).unwrap();
//! assert_eq!(merge_band(&upper, &diag), Band::new(0, 0));
//!
//! // Non-square self-adjoint matrices do not exist
//! assert!(SelfAdjoint.to_band(&Dimension::new(3, 2)).is_err());
//! ```

mod band;
pub use crate::band::{merge_band, Band};

mod dimension;
pub use crate::dimension::Dimension;

mod error;
pub use crate::error::ShapeError;

mod shape_trait;
pub use crate::shape_trait::ShapeType;

mod variants;
pub use crate::variants::{
    Diagonal, General, LowerTriangular, SelfAdjoint, Tridiagonal, UpperTriangular,
};

mod shape;
pub use crate::shape::Shape;
