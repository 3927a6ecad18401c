use tally::{
    evaluate,
    render::{format_result, render},
};

#[test]
fn box_layout() {
    let expected = "┌─────────┐\n\
                    │  3 + 5  │\n\
                    │         │\n\
                    │  =      │\n\
                    │         │\n\
                    │  8      │\n\
                    └─────────┘";
    assert_eq!(render("3 + 5", "8"), expected);
}

#[test]
fn box_widens_for_long_results() {
    let boxed = render("1", "0.30000000000000004");
    let widths: Vec<usize> = boxed.lines().map(|line| line.chars().count()).collect();

    assert_eq!(widths.len(), 7);
    assert!(widths.iter().all(|&w| w == "0.30000000000000004".len() + 6));
}

#[test]
fn integral_results_drop_the_fraction() {
    assert_eq!(format_result(Some(4.0)), "4");
    assert_eq!(format_result(evaluate("10 / 2").unwrap()), "5");
    assert!(!render("10 / 2", &format_result(Some(5.0))).contains("5.0"));
}

#[test]
fn fractional_and_special_results() {
    assert_eq!(format_result(Some(2.5)), "2.5");
    assert_eq!(format_result(Some(-0.0)), "0");
    assert_eq!(format_result(Some(f64::INFINITY)), "inf");
    assert_eq!(format_result(Some(f64::NAN)), "NaN");
    assert_eq!(format_result(None), "no result");
}

#[test]
fn error_text_fits_in_the_result_slot() {
    let boxed = render("10 / 0", "Division by zero");
    assert!(boxed.contains("10 / 0"));
    assert!(boxed.contains("Division by zero"));
}

#[test]
fn empty_expression_still_draws_a_box() {
    let boxed = render("", &format_result(None));
    assert!(boxed.starts_with('┌'));
    assert!(boxed.contains("no result"));
    assert!(boxed.ends_with('┘'));
}
