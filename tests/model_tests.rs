use rtcontour::{GeometryError, Point3D, Roi, Slice, StructureSet};

#[test]
fn test_flat_decoding_round_trip() {
    let flat = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let slice = Slice::from_flat(&flat).unwrap();
    assert_eq!(slice.len(), 2);
    assert_eq!(slice.points[0], Point3D::new(1.0, 2.0, 3.0));
    assert_eq!(slice.points[1], Point3D::new(4.0, 5.0, 6.0));
    assert_eq!(slice.to_flat(), flat);
}

#[test]
fn test_ragged_flat_data_is_rejected() {
    for len in [1, 2, 4, 7] {
        let flat = vec![0.0; len];
        let err = Slice::from_flat(&flat).unwrap_err();
        assert!(matches!(err, GeometryError::RaggedContour { len: l } if l == len));
    }
    // Empty is a whole number of points (zero).
    assert!(Slice::from_flat(&[]).unwrap().is_empty());
}

#[test]
fn test_roi_from_flat() {
    let roi = Roi::from_flat(
        "lung",
        &[vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]],
    )
    .unwrap();
    assert_eq!(roi.slices.len(), 2);
    assert_eq!(roi.point_count(), 3);

    let err = Roi::from_flat("lung", &[vec![0.0, 0.0]]).unwrap_err();
    assert!(matches!(err, GeometryError::RaggedContour { .. }));
}

#[test]
fn test_single_value_slice_is_degenerate_point() {
    let slice = Slice::from_flat(&[2.0, 3.0, 4.0]).unwrap();
    assert_eq!(slice.len(), 1);
    assert_eq!(slice.points[0], Point3D::new(2.0, 3.0, 4.0));
}

#[test]
fn test_name_lookup_is_last_wins() {
    let set = StructureSet::new(vec![
        Roi::new("dup", vec![Slice::new(vec![Point3D::new(1.0, 0.0, 0.0)])]),
        Roi::new("other", vec![]),
        Roi::new("dup", vec![Slice::new(vec![Point3D::new(2.0, 0.0, 0.0)])]),
    ]);
    assert_eq!(set.index_of("dup"), Some(2));
    assert_eq!(set.roi("dup").unwrap().slices[0].points[0].x, 2.0);
}

#[test]
fn test_isocenter_convention() {
    let set = StructureSet::new(vec![
        Roi::new("lesion", vec![Slice::new(vec![Point3D::new(9.0, 9.0, 9.0)])]),
        Roi::new(
            "Coord 1",
            vec![Slice::new(vec![Point3D::new(1.0, -2.0, 3.0)])],
        ),
    ]);
    assert_eq!(set.isocenter().unwrap(), Point3D::new(1.0, -2.0, 3.0));

    let empty = StructureSet::default();
    assert!(matches!(
        empty.isocenter().unwrap_err(),
        GeometryError::MissingIsocenter
    ));
}

#[test]
fn test_origin_conversion_validation() {
    let ok = Point3D::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
    assert_eq!(ok, Point3D::new(1.0, 2.0, 3.0));

    let err = Point3D::try_from(&[1.0, 2.0][..]).unwrap_err();
    assert!(matches!(err, GeometryError::MalformedOrigin { len: 2 }));
    let err = Point3D::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap_err();
    assert!(matches!(err, GeometryError::MalformedOrigin { len: 4 }));
    let err = Point3D::try_from(&[1.0, f64::NAN, 3.0][..]).unwrap_err();
    assert!(matches!(err, GeometryError::NonFiniteValue { .. }));
}

#[test]
fn test_point_distance() {
    let a = Point3D::new(1.0, 2.0, 3.0);
    let b = Point3D::new(4.0, 6.0, 3.0);
    assert!((a.distance(&b) - 5.0).abs() < 1e-12);
}

#[test]
fn test_structure_set_serializes() {
    let set = StructureSet::new(vec![Roi::new(
        "lesion",
        vec![Slice::new(vec![Point3D::new(0.5, -0.5, 1.0)])],
    )]);
    let json = serde_json::to_string(&set).unwrap();
    let back: StructureSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn test_slice_centroid() {
    let slice = Slice::new(vec![
        Point3D::new(0.0, 0.0, 2.0),
        Point3D::new(2.0, 4.0, 2.0),
    ]);
    assert_eq!(slice.centroid().unwrap(), Point3D::new(1.0, 2.0, 2.0));
    assert!(Slice::default().centroid().is_none());
}
