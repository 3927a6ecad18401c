/// Left padding inside the box, in columns.
const PADDING: usize = 2;

/// Formats an evaluation result for display.
///
/// Integral values drop their fractional part (`5`, not `5.0`) and negative
/// zero prints as `0`. Everything else uses the shortest representation that
/// round-trips, so `2.5` stays `2.5` and infinities print as `inf`.
///
/// # Example
/// ```
/// use tally::render::format_result;
///
/// assert_eq!(format_result(Some(5.0)), "5");
/// assert_eq!(format_result(Some(2.5)), "2.5");
/// assert_eq!(format_result(Some(-0.0)), "0");
/// assert_eq!(format_result(None), "no result");
/// ```
#[must_use]
pub fn format_result(result: Option<f64>) -> String {
    match result {
        None => "no result".to_string(),
        Some(value) if value == 0.0 => "0".to_string(),
        Some(value) => value.to_string(),
    }
}

/// Draws `expression` and `result` inside a box.
///
/// ```text
/// ┌─────────┐
/// │  3 + 5  │
/// │         │
/// │  =      │
/// │         │
/// │  8      │
/// └─────────┘
/// ```
///
/// The inner width is the longer of the two strings plus four columns.
/// `result` is printed verbatim, so an error message can stand in for a
/// number. The box has no trailing newline.
///
/// # Example
/// ```
/// use tally::render::render;
///
/// let boxed = render("10 / 4", "2.5");
/// assert!(boxed.starts_with('┌'));
/// assert!(boxed.ends_with('┘'));
/// assert_eq!(boxed.lines().count(), 7);
/// ```
#[must_use]
pub fn render(expression: &str, result: &str) -> String {
    let width = expression.chars().count().max(result.chars().count()) + 2 * PADDING;

    [format!("┌{}┐", "─".repeat(width)),
     row(expression, width),
     row("", width),
     row("=", width),
     row("", width),
     row(result, width),
     format!("└{}┘", "─".repeat(width))].join("\n")
}

fn row(text: &str, width: usize) -> String {
    let fill = width - PADDING - text.chars().count();
    format!("│{}{text}{}│", " ".repeat(PADDING), " ".repeat(fill))
}
