use quadrat_solver::{solve, Equation, Roots};

fn equation(tokens: [Option<&str>; 3]) -> Equation {
    tokens.map(|t| t.map(String::from))
}

#[test]
fn two_distinct_roots() {
    let solution = solve(&equation([Some("1"), Some("-3"), Some("2")]));

    assert_eq!(solution.coefficients, [Some(1), Some(-3), Some(2)]);
    assert_eq!(solution.roots, Roots::Two(2.0, 1.0));
    assert_eq!(solution.xmin, Some(1.5));
    assert_eq!(
        solution.to_string(),
        "(1,-3,2) => (2.000000, 1.000000) Xmin=1.500000"
    );
}

#[test]
fn double_root() {
    let solution = solve(&equation([Some("1"), Some("-6"), Some("9")]));

    assert_eq!(solution.roots, Roots::Two(3.0, 3.0));
    assert_eq!(
        solution.to_string(),
        "(1,-6,9) => (3.000000, 3.000000) Xmin=3.000000"
    );
}

#[test]
fn negative_discriminant_keeps_extremum() {
    let solution = solve(&equation([Some("1"), Some("2"), Some("3")]));

    assert_eq!(solution.roots, Roots::None);
    assert_eq!(solution.xmin, Some(-1.0));
    assert_eq!(solution.to_string(), "(1,2,3) => No roots Xmin=-1.000000");
}

#[test]
fn linear_single_root() {
    let solution = solve(&equation([Some("0"), Some("5"), Some("-5")]));

    assert_eq!(solution.roots, Roots::One(1.0));
    assert_eq!(solution.xmin, None);
    assert_eq!(solution.to_string(), "(0,5,-5) => (1.000000) No Xmin");
}

#[test]
fn degenerate_all_roots() {
    let solution = solve(&equation([Some("0"), Some("0"), Some("0")]));

    assert_eq!(solution.roots, Roots::All);
    assert_eq!(solution.to_string(), "(0,0,0) => All roots No Xmin");
}

#[test]
fn degenerate_no_roots() {
    let solution = solve(&equation([Some("0"), Some("0"), Some("1")]));

    assert_eq!(solution.roots, Roots::None);
    assert_eq!(solution.to_string(), "(0,0,1) => No roots No Xmin");
}

#[test]
fn missing_coefficients_are_invalid() {
    let solution = solve(&equation([Some("1"), None, None]));

    assert_eq!(solution.roots, Roots::Invalid);
    assert_eq!(solution.to_string(), "(1,,) => invalid input");
}

#[test]
fn malformed_token_is_invalid() {
    let solution = solve(&equation([Some("qwerty"), Some("1"), None]));

    assert_eq!(solution.coefficients, [None, Some(1), None]);
    assert_eq!(solution.to_string(), "(,1,) => invalid input");
}

#[test]
fn trailing_garbage_is_invalid() {
    let solution = solve(&equation([Some("1x"), Some("2"), Some("3")]));
    assert_eq!(solution.roots, Roots::Invalid);
}

#[test]
fn i64_bounds_parse() {
    let solution = solve(&equation([
        Some("9223372036854775807"),
        Some("-9223372036854775808"),
        None,
    ]));

    assert_eq!(
        solution.coefficients,
        [Some(i64::MAX), Some(i64::MIN), None]
    );
    assert_eq!(
        solution.to_string(),
        "(9223372036854775807,-9223372036854775808,) => invalid input"
    );
}

#[test]
fn out_of_range_token_is_invalid() {
    let solution = solve(&equation([
        Some("9223372036854775808"),
        Some("1"),
        Some("1"),
    ]));

    assert_eq!(solution.coefficients, [None, Some(1), Some(1)]);
    assert_eq!(solution.roots, Roots::Invalid);
}

#[test]
fn large_coefficients_stay_finite() {
    let solution = solve(&equation([
        Some("9223372036854775807"),
        Some("-9223372036854775807"),
        Some("1"),
    ]));

    // sum = 1, product is tiny; both roots must come out finite.
    match solution.roots {
        Roots::Two(r1, r2) => {
            assert!(r1.is_finite());
            assert!(r2.is_finite());
        }
        other => panic!("expected two roots, got {other:?}"),
    }
}
