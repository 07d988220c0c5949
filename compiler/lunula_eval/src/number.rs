//! Number formatting and string-to-number coercion.

/// Significant digits used when a number becomes text (printing and `..`).
pub const PRECISION: usize = 14;

/// Format a number the way C's `%.14g` does.
///
/// Fixed notation when the decimal exponent is in `-4..14`, exponential
/// notation otherwise; trailing zeros of the fraction are removed.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return if n.is_sign_negative() { "-nan" } else { "nan" }.to_owned();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // Rounding to PRECISION digits first decides which notation applies
    let scientific = format!("{:.*e}", PRECISION - 1, n);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };

    let precision = i32::try_from(PRECISION).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(precision - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{n:.decimals$}")).to_owned()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Convert a string operand to a number.
///
/// Leading and trailing whitespace is allowed; anything else left over makes
/// the conversion fail. Accepts decimal and exponent forms, `inf`/`nan`, and
/// hexadecimal integers with an optional sign (`0x1F`, `-0X10`).
pub fn str_to_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return None;
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if let Some(digits) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        let value = parse_hex(digits)?;
        return Some(if negative { -value } else { value });
    }

    trimmed.parse::<f64>().ok()
}

fn parse_hex(digits: &str) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(16).map(|digit| acc * 16.0 + f64::from(digit))
    })
}
