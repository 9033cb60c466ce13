use std::fmt::Display;
use std::fmt::Write as _;

/// Renders a one-dimensional numeric series as text: one value per line,
/// each row terminated by a newline, no header or index column, default
/// decimal representation. Downstream consumers rely on this exact shape.
pub fn to_csv<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for value in values {
        let _ = writeln!(out, "{value}");
    }
    out
}
