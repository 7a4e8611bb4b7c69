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

use shape::{merge_band, Band, Dimension, General, Shape, ShapeError, ShapeType};

use crate::{print_warning, Property};

const MODULE_NAME: &str = "Property fold";

/// The result of folding a list of properties
#[derive(Debug, Clone, PartialEq)]
pub struct Folded<T> {
    /// The tightest band satisfying every shape in the list
    pub band: Band,

    /// Whether any of the shapes in the list is symmetric, meaning
    /// that only one triangle of the matrix needs to be generated
    pub symmetric: bool,

    /// The non-shape properties, in the same order they were given
    pub leftover: Vec<T>,

    /// Things that look wrong about the combination of shapes, although
    /// they do not prevent building the band. These are also printed to
    /// the standard error, unless the `quiet` feature is enabled.
    pub warnings: Vec<String>,
}

impl<T> Folded<T> {
    /// Splits `self` into its band and leftover properties, dropping
    /// the symmetry flag.
    pub fn into_parts(self) -> (Band, Vec<T>) {
        (self.band, self.leftover)
    }
}

/// Folds a list of properties for a matrix of size `size` into a single
/// `Band` plus the list of properties that are not shapes.
///
/// The band starts as the one of a `General` matrix (i.e., everything
/// allowed) and is then merged with the band of every shape found in
/// `properties`. The non-shape properties are returned in the same order
/// they came in.
///
/// Returns an error if any of the shapes cannot describe a matrix of
/// this size (e.g., a self-adjoint non-square matrix).
///
/// ```
/// use generator::{from_properties, Property};
/// use shape::{Band, Dimension, LowerTriangular};
///
/// let props = vec![
///     Property::opaque("42"),
///     Property::shape(LowerTriangular),
///     Property::opaque("seed"),
/// ];
/// let (band, rest) = from_properties(&Dimension::new(4, 4), props)
///     .unwrap()
///     .into_parts();
/// assert_eq!(band, Band::new(3, 0));
/// assert_eq!(rest, vec!["42", "seed"]);
/// ```
pub fn from_properties<T, I>(size: &Dimension, properties: I) -> Result<Folded<T>, ShapeError>
where
    I: IntoIterator<Item = Property<T>>,
{
    let mut band = General.to_band(size)?;
    let mut symmetric = false;
    let mut leftover = Vec::new();
    let mut warnings = Vec::new();

    for property in properties {
        match property {
            Property::Shape(s) => {
                let b = s.to_band(size)?;
                if !b.fits(size) {
                    warnings.push(format!(
                        "Shape '{}' does not fit in a {} matrix... it will be clamped",
                        s, size
                    ));
                }
                band = merge_band(&band, &b);
                symmetric = symmetric || s.symmetric();
            }
            Property::Opaque(v) => leftover.push(v),
        }
    }

    if symmetric && band.lower() != band.upper() {
        warnings.push(format!(
            "Symmetric matrix of size {} has an asymmetric band {}... mirroring its elements will leave the band",
            size, band
        ));
    }

    if cfg!(not(feature = "quiet")) {
        for w in warnings.iter() {
            print_warning(MODULE_NAME, w);
        }
    }

    Ok(Folded {
        band,
        symmetric,
        leftover,
        warnings,
    })
}

/// Merges the bands of `shapes` for a matrix of size `size`, starting
/// from the band of a `General` matrix.
///
/// This is what `from_properties()` does when the shapes have already been
/// separated from the rest of the properties.
pub fn from_shapes(size: &Dimension, shapes: &[Shape]) -> Result<Band, ShapeError> {
    let folded = from_properties::<(), _>(size, shapes.iter().copied().map(Property::Shape))?;
    Ok(folded.band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape::{Diagonal, SelfAdjoint, Tridiagonal, UpperTriangular};

    #[test]
    fn test_empty() {
        let size = Dimension::new(3, 5);
        let folded = from_properties::<i32, _>(&size, vec![]).unwrap();
        assert_eq!(folded.band, Band::new(2, 4));
        assert!(!folded.symmetric);
        assert!(folded.leftover.is_empty());
    }

    #[test]
    fn test_only_opaque() {
        let size = Dimension::new(2, 2);
        let props = vec![Property::opaque(1), Property::opaque(2)];
        let folded = from_properties(&size, props).unwrap();
        assert_eq!(folded.band, Band::new(1, 1));
        assert_eq!(folded.leftover, vec![1, 2]);
    }

    #[test]
    fn test_upper_and_diagonal() {
        let size = Dimension::new(5, 5);
        let props: Vec<Property<()>> =
            vec![Property::shape(UpperTriangular), Property::shape(Diagonal)];
        let folded = from_properties(&size, props).unwrap();
        assert_eq!(folded.band, Band::new(0, 0));
        assert!(folded.symmetric);
    }

    #[test]
    fn test_order_does_not_matter() {
        let size = Dimension::new(6, 6);
        let shapes = [
            Shape::LowerTriangular,
            Shape::Tridiagonal,
            Shape::Band(Band::new(4, 0)),
        ];
        let mut reversed = shapes;
        reversed.reverse();
        assert_eq!(
            from_shapes(&size, &shapes).unwrap(),
            from_shapes(&size, &reversed).unwrap()
        );
        assert_eq!(from_shapes(&size, &shapes).unwrap(), Band::new(1, 0));
    }

    #[test]
    fn test_explicit_band_is_clamped() {
        let size = Dimension::new(3, 3);
        let band = from_shapes(&size, &[Shape::Band(Band::new(10, 1))]).unwrap();
        assert_eq!(band, Band::new(2, 1));
    }

    #[test]
    fn test_oversized_band_warns() {
        let size = Dimension::new(3, 3);
        let props: Vec<Property<()>> = vec![Property::shape(Band::new(10, 1))];
        let folded = from_properties(&size, props).unwrap();
        assert_eq!(folded.band, Band::new(2, 1));
        assert_eq!(folded.warnings.len(), 1);
        assert!(folded.warnings[0].contains("band (10, 1)"));
        assert!(folded.warnings[0].contains("3x3"));
    }

    #[test]
    fn test_symmetric_with_asymmetric_band() {
        let size = Dimension::new(4, 4);
        let props: Vec<Property<()>> = vec![
            Property::shape(SelfAdjoint),
            Property::shape(UpperTriangular),
        ];
        let folded = from_properties(&size, props).unwrap();
        assert!(folded.symmetric);
        assert_eq!(folded.band, Band::new(0, 3));
        assert_eq!(folded.warnings.len(), 1);
        assert!(folded.warnings[0].contains("asymmetric band (0, 3)"));
    }

    #[test]
    fn test_no_warnings() {
        let size = Dimension::new(4, 4);
        let props = vec![
            Property::shape(SelfAdjoint),
            Property::opaque(1),
            Property::shape(Tridiagonal),
            Property::shape(Band::new(3, 3)),
        ];
        let folded = from_properties(&size, props).unwrap();
        assert!(folded.symmetric);
        assert_eq!(folded.band, Band::new(1, 1));
        assert!(folded.warnings.is_empty());
    }

    #[test]
    fn test_error_propagates() {
        let size = Dimension::new(3, 4);
        let props = vec![
            Property::opaque("a"),
            Property::shape(Tridiagonal),
            Property::shape(SelfAdjoint),
            Property::opaque("b"),
        ];
        let r = from_properties(&size, props);
        assert_eq!(r, Err(ShapeError::NonSquare { rows: 3, cols: 4 }));
    }

    #[test]
    fn test_from_shapes_empty() {
        let size = Dimension::new(7, 2);
        assert_eq!(from_shapes(&size, &[]).unwrap(), Band::new(6, 1));
    }
}
