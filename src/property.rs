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
use shape::Shape;

/// An element of the list of properties passed on to a generator.
///
/// It is either a structural [`Shape`], which is folded into the `Band`
/// of the generated matrix, or some other value the generator cares
/// about (e.g., a seed or a distribution of values), which is passed
/// through untouched.
///
/// The variant is chosen when the list is built, so a value is never
/// reinterpreted as a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property<T> {
    /// A structural shape
    Shape(Shape),
    /// Anything else
    Opaque(T),
}

impl<T> Property<T> {
    /// Wraps a shape (e.g., `Diagonal` or `Band::new(1,1)`) into a `Property`
    pub fn shape<S: Into<Shape>>(s: S) -> Self {
        Self::Shape(s.into())
    }

    /// Wraps any other value into a `Property`
    pub fn opaque(v: T) -> Self {
        Self::Opaque(v)
    }
}

impl<T> From<Shape> for Property<T> {
    fn from(s: Shape) -> Self {
        Self::Shape(s)
    }
}
