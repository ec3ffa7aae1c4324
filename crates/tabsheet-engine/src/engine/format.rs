/// Format a computed number for display.
///
/// Whole values print without a decimal point, everything else with exactly
/// two decimal digits.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Inf" } else { "-Inf" }.to_string()
    } else if n.fract() == 0.0 {
        // -0.0 prints as "0"
        format!("{:.0}", n + 0.0)
    } else {
        format!("{:.2}", n)
    }
}

/// Read the leading numeric prefix of a display string, or 0 when there is none.
///
/// Accepts an optional sign, digits, an optional fraction and an optional
/// exponent, after leading whitespace. `"3 apples"` reads as 3, `"abc"` as 0.
pub fn leading_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    let has_int = int_end > end;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        if frac_end > int_end + 1 {
            mantissa_end = frac_end;
        }
    }
    if !has_int && mantissa_end == int_end {
        return 0.0;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}
