use std::fmt::Write;

/// Renders one raw (unnormalized) sample as a grid, `width` values per line.
///
/// ```text
/// label: 7
///   0   0  84 ...
/// ```
pub fn render_sample(label: usize, features: &[f64], width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "label: {}", label);
    for (j, value) in features.iter().enumerate() {
        let _ = write!(out, "{:>3} ", value.round() as i64);
        if width > 0 && (j + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}
