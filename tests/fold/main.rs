use generator::{from_properties, from_shapes, Folded, Property};
use shape::{
    Band, Diagonal, Dimension, LowerTriangular, SelfAdjoint, Shape, ShapeError, Tridiagonal,
    UpperTriangular,
};

/// Some configuration a generator might carry along with the shapes
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
enum Setting {
    Seed(u64),
    Range(f64, f64),
    Name(String),
}

#[test]
fn no_properties() -> Result<(), String> {
    let size = Dimension::new(4, 6);
    let (band, leftover) = from_properties::<Setting, _>(&size, vec![])?.into_parts();
    assert_eq!(band, Band::new(3, 5));
    assert!(leftover.is_empty());
    Ok(())
}

#[test]
fn shapes_are_removed_and_order_is_kept() -> Result<(), String> {
    let size = Dimension::new(4, 4);
    let props = vec![
        Property::opaque(Setting::Seed(42)),
        Property::shape(LowerTriangular),
        Property::opaque(Setting::Name("seed".to_string())),
    ];
    let (band, leftover) = from_properties(&size, props)?.into_parts();
    assert_eq!(band, Band::new(3, 0));
    assert_eq!(
        leftover,
        vec![Setting::Seed(42), Setting::Name("seed".to_string())]
    );
    Ok(())
}

#[test]
fn diagonal_narrows_upper_triangular() -> Result<(), String> {
    let size = Dimension::new(5, 5);
    let props: Vec<Property<Setting>> =
        vec![Property::shape(UpperTriangular), Property::shape(Diagonal)];
    let folded = from_properties(&size, props)?;
    assert_eq!(
        folded,
        Folded {
            band: Band::new(0, 0),
            symmetric: true,
            leftover: vec![],
            warnings: vec![],
        }
    );
    Ok(())
}

#[test]
fn tridiagonal_on_non_square() -> Result<(), String> {
    let size = Dimension::new(3, 8);
    assert_eq!(from_shapes(&size, &[Shape::Tridiagonal])?, Band::new(1, 1));
    Ok(())
}

#[test]
fn explicit_band_ignores_size() -> Result<(), String> {
    let size = Dimension::new(9, 9);
    let band = from_shapes(&size, &[Shape::Band(Band::new(2, 3)), Shape::General])?;
    assert_eq!(band, Band::new(2, 3));
    Ok(())
}

#[test]
fn self_adjoint_non_square_fails() {
    let size = Dimension::new(2, 3);
    let props = vec![
        Property::opaque(Setting::Seed(1)),
        Property::shape(SelfAdjoint),
    ];
    match from_properties(&size, props) {
        Err(e) => assert_eq!(e, ShapeError::NonSquare { rows: 2, cols: 3 }),
        Ok(f) => panic!("Expected an error... found {:?}", f),
    }
}

#[test]
fn self_adjoint_tridiagonal() -> Result<(), String> {
    let size = Dimension::new(6, 6);
    let props = vec![
        Property::shape(SelfAdjoint),
        Property::opaque(Setting::Range(-1., 1.)),
        Property::shape(Tridiagonal),
    ];
    let folded = from_properties(&size, props)?;
    assert_eq!(folded.band, Band::new(1, 1));
    assert!(folded.symmetric);
    assert_eq!(folded.leftover, vec![Setting::Range(-1., 1.)]);

    // Every cell the generator would fill
    let n = (0..6)
        .flat_map(|r| (0..6).map(move |c| (r, c)))
        .filter(|(r, c)| folded.band.contains(*r, *c))
        .count();
    assert_eq!(n, 6 + 5 + 5);
    Ok(())
}

#[test]
fn from_json() -> Result<(), String> {
    let size: Dimension =
        serde_json::from_str(r#"{"rows": 5, "cols": 5}"#).map_err(|e| e.to_string())?;
    let props: Vec<Property<Setting>> = serde_json::from_str(
        r#"[
            {"shape": "upper_triangular"},
            {"opaque": {"seed": 7}},
            {"shape": {"band": {"lower": 3, "upper": 2}}},
            {"opaque": {"range": [0.0, 2.5]}}
        ]"#,
    )
    .map_err(|e| e.to_string())?;

    let folded = from_properties(&size, props)?;
    assert_eq!(folded.band, Band::new(0, 2));
    assert!(!folded.symmetric);
    assert_eq!(
        folded.leftover,
        vec![Setting::Seed(7), Setting::Range(0.0, 2.5)]
    );
    Ok(())
}

#[test]
fn concurrent_folds() {
    let shapes = [
        Shape::General,
        Shape::LowerTriangular,
        Shape::Band(Band::new(2, 0)),
    ];
    std::thread::scope(|s| {
        let handles: Vec<_> = (1..8)
            .map(|n| {
                let shapes = &shapes;
                s.spawn(move || from_shapes(&Dimension::new(n, n), shapes))
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let n = i + 1;
            let band = h.join().unwrap().unwrap();
            assert_eq!(band, Band::new((n - 1).min(2), 0));
        }
    });
}
