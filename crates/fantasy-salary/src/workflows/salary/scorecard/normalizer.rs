const MARKER_GLYPHS: [char; 3] = ['†', '‡', '*'];

/// Drops `(c)`/`(wk)` style annotations and keeper/captain glyphs, then
/// collapses whitespace.
pub(crate) fn clean_player_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;

    for ch in raw.chars() {
        match ch {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth > 0 => {}
            _ if MARKER_GLYPHS.contains(&ch) => out.push(' '),
            _ => out.push(ch),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Leading-digit integer parse: `"45*"` is 45, `"-"` or `"DNB"` is 0.
pub(crate) fn parse_count(raw: &str) -> u32 {
    let digits = leading_digits(raw.trim());
    digits.parse().unwrap_or(0)
}

/// Leading-decimal float parse; anything unparseable is 0.0.
pub(crate) fn parse_rate(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let whole = leading_digits(rest);
    let fraction = rest[whole.len()..]
        .strip_prefix('.')
        .map(leading_digits)
        .unwrap_or("");

    if whole.is_empty() && fraction.is_empty() {
        return 0.0;
    }

    let literal = format!(
        "{}.{}",
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction }
    );
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => sign * value,
        _ => 0.0,
    }
}

fn leading_digits(value: &str) -> &str {
    let end = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    &value[..end]
}
