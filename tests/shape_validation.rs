//! Dimension validation, error taxonomy, and all-or-nothing update checks.

use std::f64::consts::PI;

use section_engine::{ErrorKind, Section, SectionError, Value};

fn dims<'a>(entries: &[(&'a str, f64)]) -> Vec<(&'a str, Value)> {
    entries
        .iter()
        .map(|(name, value)| (*name, Value::from(*value)))
        .collect()
}

fn assert_rejects(section: &mut Section, entries: &[(&str, f64)]) {
    let err = section
        .set_dimensions(&dims(entries))
        .expect_err("update should be rejected");
    assert_eq!(err.kind(), ErrorKind::Value, "unexpected error: {err}");
}

#[test]
fn rectangle_rejects_nonpositive_sides() {
    let mut sec = Section::rectangle()
        .with_dimensions(&dims(&[("a", 2.0), ("b", 3.0)]))
        .expect("rectangle");

    assert_rejects(&mut sec, &[("a", -1.0)]);
    assert_rejects(&mut sec, &[("a", 0.0)]);
    assert_rejects(&mut sec, &[("b", -1.0)]);
    assert_rejects(&mut sec, &[("b", 0.0)]);
}

#[test]
fn invalid_construction_fails_immediately() {
    let err = Section::rectangle()
        .with_dimensions(&dims(&[("a", -1.0), ("b", 2.0)]))
        .expect_err("invalid rectangle");
    assert_eq!(err.kind(), ErrorKind::Value);
}

#[test]
fn circular_sector_constraints() {
    let mut sec = Section::circular_sector()
        .with_dimensions(&dims(&[("ro", 5.0), ("ri", 0.0), ("phi", PI / 3.0)]))
        .expect("sector");

    assert_rejects(&mut sec, &[("ri", -1.0)]);
    assert_rejects(&mut sec, &[("ro", -1.0)]);
    assert_rejects(&mut sec, &[("ro", 0.0)]);
    assert_rejects(&mut sec, &[("ro", 1.0), ("ri", 2.0)]);
    assert_rejects(&mut sec, &[("phi", -0.1 * PI)]);
    assert_rejects(&mut sec, &[("phi", 0.0)]);
    assert_rejects(&mut sec, &[("phi", 2.1 * PI)]);
}

#[test]
fn circular_segment_constraints() {
    let mut sec = Section::circular_segment()
        .with_dimensions(&dims(&[("r", 3.0), ("phi", PI / 3.0)]))
        .expect("segment");

    assert_rejects(&mut sec, &[("r", -1.0)]);
    assert_rejects(&mut sec, &[("r", 0.0)]);
    assert_rejects(&mut sec, &[("phi", -1.0)]);
    assert_rejects(&mut sec, &[("phi", 0.0)]);
    assert_rejects(&mut sec, &[("phi", 2.1 * PI)]);
}

#[test]
fn circle_constraints() {
    let mut sec = Section::circle()
        .with_dimensions(&dims(&[("r", 1.0)]))
        .expect("circle");

    assert_rejects(&mut sec, &[("r", -1.0)]);
    assert_rejects(&mut sec, &[("r", 0.0)]);
}

#[test]
fn ring_constraints() {
    let mut sec = Section::ring()
        .with_dimensions(&dims(&[("ro", 5.0), ("ri", 3.0)]))
        .expect("ring");

    assert_rejects(&mut sec, &[("ro", -1.0)]);
    assert_rejects(&mut sec, &[("ro", 0.0)]);
    assert_rejects(&mut sec, &[("ri", -1.0)]);
    assert_rejects(&mut sec, &[("ri", 0.0)]);
    assert_rejects(&mut sec, &[("ro", 1.0), ("ri", 2.0)]);
}

#[test]
fn wedge_constraints() {
    let mut sec = Section::wedge()
        .with_dimensions(&dims(&[("r", 3.0), ("phi", PI)]))
        .expect("wedge");

    assert_rejects(&mut sec, &[("r", -1.0)]);
    assert_rejects(&mut sec, &[("r", 0.0)]);
    assert_rejects(&mut sec, &[("phi", -1.0)]);
    assert_rejects(&mut sec, &[("phi", 0.0)]);
    assert_rejects(&mut sec, &[("phi", 2.1 * PI)]);
}

#[test]
fn box_constraints() {
    let mut sec = Section::box_section()
        .with_dimensions(&dims(&[("a", 10.0), ("b", 20.0), ("ta", 2.0), ("tb", 1.0)]))
        .expect("box");

    assert_rejects(&mut sec, &[("a", -1.0)]);
    assert_rejects(&mut sec, &[("a", 0.0)]);
    assert_rejects(&mut sec, &[("b", -1.0)]);
    assert_rejects(&mut sec, &[("b", 0.0)]);
    assert_rejects(&mut sec, &[("ta", -1.0)]);
    assert_rejects(&mut sec, &[("ta", 0.0)]);
    assert_rejects(&mut sec, &[("tb", -1.0)]);
    assert_rejects(&mut sec, &[("tb", 0.0)]);
    // Walls that meet in the middle leave no cavity.
    assert_rejects(&mut sec, &[("a", 10.0), ("tb", 5.0)]);
    assert_rejects(&mut sec, &[("b", 20.0), ("ta", 10.0)]);
}

#[test]
fn base_fillet_constraints() {
    let mut sec = Section::base_fillet()
        .with_dimensions(&dims(&[("r", 3.0), ("phi", PI / 3.0)]))
        .expect("base fillet");

    assert_rejects(&mut sec, &[("r", -1.0)]);
    assert_rejects(&mut sec, &[("r", 0.0)]);
    assert_rejects(&mut sec, &[("phi", -1.0)]);
    assert_rejects(&mut sec, &[("phi", 0.0)]);
    assert_rejects(&mut sec, &[("phi", PI)]);
    assert_rejects(&mut sec, &[("phi", 2.0 * PI)]);

    sec.set_dimensions(&dims(&[("phi", 0.5 * PI)]))
        .expect("legal opening below pi");
    sec.set_dimensions(&dims(&[("phi", 1.5 * PI)]))
        .expect("legal opening above pi");
}

#[test]
fn fillet_constraints() {
    let mut sec = Section::fillet()
        .with_dimensions(&dims(&[("r", 3.0), ("phi0", PI / 3.0), ("phi1", 2.0 * PI / 3.0)]))
        .expect("fillet");

    assert_rejects(&mut sec, &[("r", -1.0)]);
    assert_rejects(&mut sec, &[("r", 0.0)]);
    assert_rejects(&mut sec, &[("phi0", 1.0), ("phi1", 0.0)]);
    assert_rejects(&mut sec, &[("phi0", 1.0), ("phi1", 1.0)]);
    assert_rejects(&mut sec, &[("phi0", 1.0), ("phi1", 1.0 + 2.1 * PI)]);
    assert_rejects(&mut sec, &[("phi0", 0.0), ("phi1", PI)]);
}

#[test]
fn rejected_updates_leave_dimensions_untouched() {
    let mut sec = Section::rectangle()
        .with_dimensions(&dims(&[("a", 3.0), ("b", 4.0)]))
        .expect("rectangle");

    // A type error in one entry must not commit the other.
    let err = sec
        .set_dimensions(&[("a", Value::from("abc")), ("b", Value::from(7.0))])
        .expect_err("bad batch");
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!((sec.dimension("a").expect("a") - 3.0).abs() < 1e-12);
    assert!((sec.dimension("b").expect("b") - 4.0).abs() < 1e-12);

    // Same for a geometric failure.
    assert_rejects(&mut sec, &[("a", -1.0)]);
    assert!((sec.area().expect("area") - 12.0).abs() < 1e-12);
}

#[test]
fn unknown_dimension_names_are_type_errors() {
    let mut sec = Section::rectangle();
    let err = sec
        .set_dimensions(&[("c", Value::from(1.0))])
        .expect_err("unknown name");
    assert!(matches!(err, SectionError::UnknownDimension(_)));
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn partially_dimensioned_sections_refuse_property_reads() {
    let sec = Section::circular_sector()
        .with_dimensions(&dims(&[("ro", 5.0), ("phi", PI / 3.0)]))
        .expect("partial construction is legal");

    let err = sec.area().expect_err("incomplete dimensions");
    assert_eq!(err.kind(), ErrorKind::NotSet);

    // Completing the set through one full update makes properties readable.
    let mut sec = sec;
    sec.set_dimensions(&dims(&[("ri", 0.0)])).expect("complete");
    assert!((sec.area().expect("area") - 13.089_969_389_957_47).abs() < 1e-7);
}

#[test]
fn completing_dimensions_requires_the_full_candidate_to_validate() {
    let mut sec = Section::rectangle();
    // Candidate still misses `b`, so validation reads an unset dimension.
    let err = sec
        .set_dimensions(&dims(&[("a", 1.0)]))
        .expect_err("incomplete candidate");
    assert_eq!(err.kind(), ErrorKind::NotSet);
    // And the partial entry was not committed.
    assert!(sec.dimension("a").is_err());
}

#[test]
fn zero_density_is_rejected() {
    let mut sec = Section::rectangle()
        .with_dimensions(&dims(&[("a", 2.0), ("b", 3.0)]))
        .expect("rectangle");

    assert!(matches!(sec.set_density(0.0), Err(SectionError::ZeroDensity)));
    assert!(matches!(
        Section::rectangle().with_density(0.0),
        Err(SectionError::ZeroDensity)
    ));

    sec.set_density(-2.0).expect("negative density is legal");
    assert!((sec.area().expect("area") + 12.0).abs() < 1e-12);
}

#[test]
fn compound_construction_checks_children_and_weights() {
    let child = || {
        Section::rectangle()
            .with_dimensions(&dims(&[("a", 1.0), ("b", 1.0)]))
            .expect("child")
    };

    assert!(matches!(
        Section::compound(vec![], vec![]),
        Err(SectionError::NoChildren)
    ));
    assert!(matches!(
        Section::compound(vec![child(), child()], vec![1.0]),
        Err(SectionError::WeightCountMismatch {
            children: 2,
            weights: 1
        })
    ));
    assert!(matches!(
        Section::compound(vec![child()], vec![0.0]),
        Err(SectionError::ZeroWeight)
    ));
}

#[test]
fn compound_propagates_signed_densities_to_children() {
    let child = || {
        Section::rectangle()
            .with_dimensions(&dims(&[("a", 2.0), ("b", 1.0)]))
            .expect("child")
    };
    let mut sec =
        Section::compound(vec![child(), child()], vec![2.0, -3.0]).expect("compound");

    // A = 2*(2) + (-3)*(2) = -2 under the default composite density of 1.
    assert!((sec.area().expect("area") + 2.0).abs() < 1e-12);

    sec.set_density(-2.0).expect("density");
    assert!((sec.area().expect("area") - 4.0).abs() < 1e-12);
}

#[test]
fn triangle_capacity_is_three() {
    let mut sec = Section::triangle();
    sec.assign_vertices(&[
        Value::from((0.0, 0.0)),
        Value::from((1.0, 0.0)),
        Value::from((0.0, 1.0)),
    ])
    .expect("three vertices");

    let err = sec.push_vertex(Value::from((1.0, 1.0))).expect_err("push");
    assert_eq!(err.kind(), ErrorKind::Index);
    let err = sec
        .extend_vertices(&[Value::from((1.0, 1.0))])
        .expect_err("extend");
    assert_eq!(err.kind(), ErrorKind::Index);
    let err = sec
        .insert_vertex(0, Value::from((1.0, 1.0)))
        .expect_err("insert");
    assert_eq!(err.kind(), ErrorKind::Index);
    let err = sec
        .assign_vertices(&[
            Value::from((0.0, 0.0)),
            Value::from((1.0, 0.0)),
            Value::from((0.0, 1.0)),
            Value::from((1.0, 1.0)),
        ])
        .expect_err("assign four");
    assert_eq!(err.kind(), ErrorKind::Index);

    // Shrinking through assignment stays legal.
    sec.assign_vertices(&[Value::from((0.0, 0.0)), Value::from((1.0, 0.0))])
        .expect("two vertices");
    assert_eq!(sec.vertex_count().expect("count"), 2);
}

#[test]
fn triangle_winding_never_flips_the_area_sign() {
    let vertices = [
        Value::from((0.0, 0.0)),
        Value::from((1.0, 0.0)),
        Value::from((0.0, 1.0)),
    ];
    let mut sec = Section::triangle();
    sec.assign_vertices(&vertices).expect("ccw");
    assert!(sec.area().expect("area") > 0.0);

    let mut reversed: Vec<Value> = vertices.to_vec();
    reversed.reverse();
    sec.assign_vertices(&reversed).expect("cw");
    assert!(
        sec.area().expect("area") > 0.0,
        "triangle area depends on vertex ordering"
    );
}

#[test]
fn polygon_needs_three_vertices() {
    let mut sec = Section::polygon();
    sec.assign_vertices(&[Value::from((0.0, 0.0)), Value::from((1.0, 0.0))])
        .expect("two vertices");

    let err = sec.area().expect_err("degenerate polygon");
    assert!(matches!(err, SectionError::TooFewVertices(2)));
    assert_eq!(err.kind(), ErrorKind::Value);
}

#[test]
fn polygon_with_unset_vertex_refuses_property_reads() {
    let mut sec = Section::polygon();
    sec.assign_vertices(&[
        Value::from((0.0, 0.0)),
        Value::from((1.0, 0.0)),
        Value::from((0.0, 1.0)),
    ])
    .expect("vertices");
    sec.set_vertex(1, Value::Unset).expect("clear");

    let err = sec.area().expect_err("unset vertex");
    assert_eq!(err.kind(), ErrorKind::NotSet);
}

#[test]
fn vertex_index_and_type_errors() {
    let mut sec = Section::polygon();
    sec.push_vertex(Value::from((0.0, 0.0))).expect("push");

    assert!(matches!(
        sec.vertex(1),
        Err(SectionError::VertexIndexOutOfRange { index: 1, len: 1 })
    ));
    let err = sec.set_vertex(0, Value::from(1.0)).expect_err("scalar");
    assert_eq!(err.kind(), ErrorKind::Type);
    let err = sec
        .push_vertex(Value::List(vec![
            Value::from(1.0),
            Value::from(2.0),
            Value::from(3.0),
        ]))
        .expect_err("triple");
    assert!(matches!(err, SectionError::VertexArity(3)));
}

#[test]
fn non_polygonal_shapes_have_no_vertex_storage() {
    let mut sec = Section::rectangle();
    let err = sec.push_vertex(Value::from((0.0, 0.0))).expect_err("push");
    assert!(matches!(err, SectionError::NoVertexStorage { .. }));
    assert_eq!(err.kind(), ErrorKind::Type);
}
