use std::io::{self, Write};

/// Write the frame column then the time column as an indexed listing.
///
/// ```text
/// 0    0
/// 1    1
/// Name: frame, Length: 2
/// ```
///
/// Values use the shortest representation that parses back to the same `f64`.
pub fn echo_columns<W: Write>(mut out: W, x: &[f64], y: &[f64]) -> io::Result<()> {
    write_listing(&mut out, "frame", x)?;
    write_listing(&mut out, "time_ms", y)?;
    out.flush()
}

fn write_listing<W: Write>(out: &mut W, name: &str, values: &[f64]) -> io::Result<()> {
    let width = values.len().saturating_sub(1).to_string().len();
    for (i, v) in values.iter().enumerate() {
        writeln!(out, "{i:<width$}    {v}")?;
    }
    writeln!(out, "Name: {name}, Length: {}", values.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_to_string(x: &[f64], y: &[f64]) -> String {
        let mut buf = Vec::new();
        echo_columns(&mut buf, x, y).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Parse one echoed listing back into its values.
    fn parse_listing<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Vec<f64> {
        let mut values = Vec::new();
        for line in lines {
            if line.starts_with("Name: ") {
                break;
            }
            let value = line.split_whitespace().nth(1).unwrap();
            values.push(value.parse().unwrap());
        }
        values
    }

    #[test]
    fn lists_x_then_y() {
        let out = echo_to_string(&[0.0, 1.0, 2.0], &[10.2, 11.0, 9.8]);
        let expected = "\
0    0
1    1
2    2
Name: frame, Length: 3
0    10.2
1    11
2    9.8
Name: time_ms, Length: 3
";
        assert_eq!(out, expected);
    }

    #[test]
    fn echoed_values_parse_back_exactly() {
        let x: Vec<f64> = (0..12).map(f64::from).collect();
        let y = vec![
            0.1, 1.0 / 3.0, 2.5e-7, 12345.678901234, 9.8, 0.0, 1e21, 7.0, 0.30000000000000004,
            3.14159, 42.0, 1e-3,
        ];
        let out = echo_to_string(&x, &y);
        let mut lines = out.lines();
        assert_eq!(parse_listing(&mut lines), x);
        assert_eq!(parse_listing(&mut lines), y);
    }

    #[test]
    fn empty_columns_only_print_footers() {
        let out = echo_to_string(&[], &[]);
        assert_eq!(out, "Name: frame, Length: 0\nName: time_ms, Length: 0\n");
    }
}
