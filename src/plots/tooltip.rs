//! Tooltip label formatting
//!
//! Expands a percent-escape format string against one data row. The scanner
//! has two states: normal characters are copied through, and a `%` escapes
//! the next character into a tag lookup. Unknown tags reproduce the literal
//! `%` sequence; a trailing `%` is dropped.

/// Row values available to a tooltip format
#[derive(Debug, Clone, Copy, Default)]
pub struct TooltipRow<'a> {
    pub x: f64,
    pub y: f64,
    /// Density value for the row; `?` when absent
    pub density: Option<f64>,
    pub series_index: usize,
    pub series_label: &'a str,
    /// Caller-supplied per-row label (`%i`)
    pub indexed_label: Option<&'a str>,
    /// Category column value for the row (`%C`); `?` when absent
    pub category: Option<&'a str>,
}

/// Supported tags: `%x`, `%y`, `%z` (density), `%i` (indexed label),
/// `%l` (series label), `%c` (series index), `%C` (category value).
pub fn expand_format(format: &str, row: &TooltipRow<'_>) -> String {
    let mut label = String::with_capacity(format.len());
    let mut escape_next = false;
    for ch in format.chars() {
        if escape_next {
            match ch {
                'x' => label.push_str(&format_number(row.x)),
                'y' => label.push_str(&format_number(row.y)),
                'z' => match row.density {
                    Some(d) => label.push_str(&format_number(d)),
                    None => label.push('?'),
                },
                'i' => {
                    if let Some(indexed) = row.indexed_label {
                        label.push_str(indexed);
                    }
                }
                'l' => label.push_str(row.series_label),
                'c' => label.push_str(&row.series_index.to_string()),
                'C' => label.push_str(row.category.unwrap_or("?")),
                other => {
                    // No match: reproduce the entire format tag
                    label.push('%');
                    label.push(other);
                }
            }
            escape_next = false;
        } else if ch == '%' {
            escape_next = true;
        } else {
            label.push(ch);
        }
    }
    label
}

/// Integral values print without a decimal point, everything else with the
/// shortest round-trip representation.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row<'a>() -> TooltipRow<'a> {
        TooltipRow {
            x: 1.5,
            y: 2.0,
            density: Some(0.25),
            series_index: 3,
            series_label: "density",
            indexed_label: Some("row-3"),
            category: Some("setosa"),
        }
    }

    #[test]
    fn test_default_format_expansion() {
        let label = expand_format("%C, %l (%x, %y): %z", &row());
        assert_eq!(label, "setosa, density (1.5, 2): 0.25");
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(expand_format("no tags here", &row()), "no tags here");
    }

    #[test]
    fn test_unknown_tag_reproduced() {
        assert_eq!(expand_format("a %q b", &row()), "a %q b");
    }

    #[test]
    fn test_double_percent() {
        // "%%" escapes to the literal tag "%%"
        assert_eq!(expand_format("100%%", &row()), "100%%");
    }

    #[test]
    fn test_trailing_percent_dropped() {
        assert_eq!(expand_format("x=%x %", &row()), "x=1.5 ");
    }

    #[test]
    fn test_missing_density_and_category() {
        let r = TooltipRow {
            density: None,
            category: None,
            ..row()
        };
        assert_eq!(expand_format("%z %C", &r), "? ?");
    }

    #[test]
    fn test_missing_indexed_label_is_empty() {
        let r = TooltipRow {
            indexed_label: None,
            ..row()
        };
        assert_eq!(expand_format("[%i]", &r), "[]");
    }

    #[test]
    fn test_series_index_tag() {
        assert_eq!(expand_format("#%c", &row()), "#3");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(0.125), "0.125");
    }
}
