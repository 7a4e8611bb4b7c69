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

//! Helpers for generators of test matrices.
//!
//! A generator receives the size of the matrix it has to produce, together
//! with a list of properties. Some of these properties are structural
//! shapes (e.g., "upper triangular", "tridiagonal") and some are not (e.g.,
//! the seed of a random number generator). This crate folds all the shapes
//! into the single, tightest [`Band`] that satisfies all of them, so that
//! generators do not need to know about every possible combination of shapes.
//!
//! ```
//! use generator::{from_properties, Property};
//! use shape::{Band, Diagonal, Dimension, UpperTriangular};
//!
//! let folded = from_properties(
//!     &Dimension::new(5, 5),
//!     vec![
//!         Property::shape(UpperTriangular),
//!         Property::opaque(1234),
//!         Property::shape(Diagonal),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(folded.band, Band::new(0, 0));
//! assert!(folded.symmetric);
//! assert_eq!(folded.leftover, vec![1234]);
//! ```
//!
//! # Features
//!
//! * `quiet`: do not print warnings (e.g., when an explicit band does not
//! fit in the matrix) to the standard error.

pub use shape;
pub use shape::{merge_band, Band, Dimension, Shape, ShapeError, ShapeType};

mod error_msgs;
pub use crate::error_msgs::print_warning;

mod property;
pub use crate::property::Property;

mod fold;
pub use crate::fold::{from_properties, from_shapes, Folded};
