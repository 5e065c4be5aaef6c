//! Table-driven tests for the vector operations across dimensions.

use vec3d::{ErrorKind, Vector, add, dot, linear_combination, subtract};

fn v(components: &[i32]) -> Vector {
    components.iter().map(|&c| f64::from(c)).collect()
}

fn vs(list: &[&[i32]]) -> Vec<Vector> {
    list.iter().map(|c| v(c)).collect()
}

const TEN_A: &[i32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
const TEN_B: &[i32] = &[11, 12, 13, 14, 15, 16, 17, 18, 19, 20];

// =============================================================================
// add
// =============================================================================

#[test]
fn add_happy_path() {
    let cases: &[(&str, &[&[i32]], &[i32])] = &[
        ("2 2D vectors", &[&[1, 2], &[3, 4]], &[4, 6]),
        ("2 3D vectors", &[&[1, 2, 3], &[4, 5, 6]], &[5, 7, 9]),
        ("2 4D vectors", &[&[1, 2, 3, 4], &[5, 6, 7, 8]], &[6, 8, 10, 12]),
        (
            "2 10D vectors",
            &[TEN_A, TEN_B],
            &[12, 14, 16, 18, 20, 22, 24, 26, 28, 30],
        ),
        ("3 2D vectors", &[&[1, 2], &[3, 4], &[5, 6]], &[9, 12]),
        (
            "5 3D vectors",
            &[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9], &[10, 11, 12], &[13, 14, 15]],
            &[35, 40, 45],
        ),
    ];

    for (name, vectors, expected) in cases {
        let got = add(&vs(vectors)).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(got, v(expected), "{name}");
    }
}

#[test]
fn add_unhappy_path() {
    let cases: &[(&str, &[&[i32]], ErrorKind)] = &[
        ("no vectors", &[], ErrorKind::InsufficientOperands),
        ("single vector", &[&[1, 2]], ErrorKind::InsufficientOperands),
        ("missing operand", &[&[1, 2], &[]], ErrorKind::InvalidArgument),
        ("first vector longer", &[&[1, 2, 3], &[4, 5]], ErrorKind::ShapeMismatch),
        ("second vector longer", &[&[1, 2, 3], &[4, 5, 6, 7]], ErrorKind::ShapeMismatch),
        ("3 vectors, first is longer", &[&[1, 2, 3], &[3, 4], &[5, 6]], ErrorKind::ShapeMismatch),
        ("3 vectors, last is longer", &[&[1, 2], &[3, 4], &[5, 6, 7]], ErrorKind::ShapeMismatch),
        ("3 vectors, mid is longer", &[&[1, 2], &[3, 4, 5], &[5, 6]], ErrorKind::ShapeMismatch),
    ];

    for (name, vectors, kind) in cases {
        let err = add(&vs(vectors)).expect_err(name);
        assert_eq!(err.kind(), *kind, "{name}: {err}");
    }
}

// =============================================================================
// subtract
// =============================================================================

#[test]
fn subtract_happy_path() {
    let cases: &[(&str, &[i32], &[i32], &[i32])] = &[
        ("2D vectors", &[1, 2], &[3, 4], &[-2, -2]),
        ("3D vectors", &[1, 2, 3], &[4, 5, 6], &[-3, -3, -3]),
        ("4D vectors", &[1, 2, 3, 4], &[5, 6, 7, 8], &[-4, -4, -4, -4]),
        ("10D vectors", TEN_A, TEN_B, &[-10; 10]),
    ];

    for (name, a, b, expected) in cases {
        assert_eq!(subtract(&v(a), &v(b)).unwrap(), v(expected), "{name}");
    }
}

#[test]
fn subtract_unhappy_path() {
    let cases: &[(&str, &[i32], &[i32], ErrorKind)] = &[
        ("both missing", &[], &[], ErrorKind::InvalidArgument),
        ("first missing", &[], &[4, 5], ErrorKind::InvalidArgument),
        ("second missing", &[4, 5], &[], ErrorKind::InvalidArgument),
        ("first vector longer", &[1, 2, 3], &[4, 5], ErrorKind::ShapeMismatch),
        ("second vector longer", &[1, 2, 3], &[4, 5, 6, 7], ErrorKind::ShapeMismatch),
    ];

    for (name, a, b, kind) in cases {
        let err = subtract(&v(a), &v(b)).expect_err(name);
        assert_eq!(err.kind(), *kind, "{name}");
    }
}

// =============================================================================
// dot
// =============================================================================

#[test]
fn dot_happy_path() {
    let cases: &[(&str, &[i32], &[i32], f64)] = &[
        ("2D vectors", &[1, 2], &[3, 4], 11.0),
        ("3D vectors", &[1, 2, 3], &[4, 5, 6], 32.0),
        ("4D vectors", &[1, 2, 3, 4], &[5, 6, 7, 8], 70.0),
        ("10D vectors", TEN_A, TEN_B, 935.0),
    ];

    for (name, a, b, expected) in cases {
        assert_eq!(dot(&v(a), &v(b)).unwrap(), *expected, "{name}");
    }
}

#[test]
fn dot_unhappy_path() {
    let cases: &[(&str, &[i32], &[i32], ErrorKind)] = &[
        ("both missing", &[], &[], ErrorKind::InvalidArgument),
        ("first missing", &[], &[4, 5], ErrorKind::InvalidArgument),
        ("second missing", &[4, 5], &[], ErrorKind::InvalidArgument),
        ("first vector longer", &[1, 2, 3], &[4, 5], ErrorKind::ShapeMismatch),
        ("second vector longer", &[1, 2, 3], &[4, 5, 6, 7], ErrorKind::ShapeMismatch),
    ];

    for (name, a, b, kind) in cases {
        let err = dot(&v(a), &v(b)).expect_err(name);
        assert_eq!(err.kind(), *kind, "{name}");
    }
}

// =============================================================================
// linear_combination
// =============================================================================

#[test]
fn linear_combination_happy_path() {
    let cases: &[(&str, &[f64], &[&[i32]], &[i32])] = &[
        ("2 scalars, 2 2D vectors", &[2.0, 3.0], &[&[1, 2], &[3, 4]], &[11, 16]),
        (
            "3 scalars, 3 3D vectors",
            &[1.0, 2.0, 3.0],
            &[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]],
            &[30, 36, 42],
        ),
        (
            "2 scalars, 2 10D vectors",
            &[2.0, 3.0],
            &[TEN_A, TEN_B],
            &[35, 40, 45, 50, 55, 60, 65, 70, 75, 80],
        ),
    ];

    for (name, scalars, vectors, expected) in cases {
        let got = linear_combination(scalars, &vs(vectors)).unwrap();
        assert_eq!(got, v(expected), "{name}");
    }
}

#[test]
fn linear_combination_unhappy_path() {
    let cases: &[(&str, &[f64], &[&[i32]], ErrorKind)] = &[
        ("nothing", &[], &[], ErrorKind::InsufficientOperands),
        ("no scalars, one vector", &[], &[&[1, 2]], ErrorKind::InvalidArgument),
        ("one scalar, no vectors", &[1.0], &[], ErrorKind::InvalidArgument),
        ("one scalar, one vector", &[1.0], &[&[1, 2]], ErrorKind::InsufficientOperands),
        ("one scalar, two vectors", &[1.0], &[&[1, 2], &[3, 4]], ErrorKind::InvalidArgument),
        ("two scalars, one vector", &[1.0, 2.0], &[&[1, 2]], ErrorKind::InvalidArgument),
        ("first vector longer", &[1.0, 2.0], &[&[1, 2, 3], &[4, 5]], ErrorKind::ShapeMismatch),
        ("second vector longer", &[1.0, 2.0], &[&[1, 2, 3], &[4, 5, 6, 7]], ErrorKind::ShapeMismatch),
        ("3 vectors, first is longer", &[1.0, 2.0, 3.0], &[&[1, 2, 3], &[3, 4], &[5, 6]], ErrorKind::ShapeMismatch),
        ("3 vectors, last is longer", &[1.0, 2.0, 3.0], &[&[1, 2], &[3, 4], &[5, 6, 7]], ErrorKind::ShapeMismatch),
        ("3 vectors, mid is longer", &[1.0, 2.0, 3.0], &[&[1, 2], &[3, 4, 5], &[5, 6]], ErrorKind::ShapeMismatch),
    ];

    for (name, scalars, vectors, kind) in cases {
        let err = linear_combination(scalars, &vs(vectors)).expect_err(name);
        assert_eq!(err.kind(), *kind, "{name}: {err}");
    }
}

#[test]
fn mismatch_reports_offending_operand() {
    let err = add(&vs(&[&[1, 2], &[3, 4, 5], &[5, 6]])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "shape mismatch: operand 1 has 3 components, expected 2"
    );
}
