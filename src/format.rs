//! Text formatting for listing values and HTML output.

/// Group digits by thousands with a space: `250000` -> `"250 000"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Whole-unit price with grouped thousands and a currency suffix.
pub fn format_price(price: f64, currency: &str) -> String {
    let grouped = group_thousands(price.round() as i64);
    let currency = currency.trim();
    if currency.is_empty() {
        grouped
    } else {
        format!("{} {}", grouped, currency)
    }
}

/// Surface in square metres to one decimal; values that round to a whole
/// number drop the decimal.
pub fn format_surface(surface: f64) -> String {
    let rounded = (surface * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0} m²", rounded)
    } else {
        format!("{:.1} m²", rounded)
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn html_attr(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(group_thousands(250000), "250 000");
        assert_eq!(group_thousands(1234567), "1 234 567");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1 000");
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(-45000), "-45 000");
    }

    #[test]
    fn price_rounds_and_appends_currency() {
        assert_eq!(format_price(250000.0, "€"), "250 000 €");
        assert_eq!(format_price(1249.5, "€"), "1 250 €");
        assert_eq!(format_price(850.0, ""), "850");
    }

    #[test]
    fn surface_formatting() {
        assert_eq!(format_surface(85.0), "85 m²");
        assert_eq!(format_surface(72.5), "72.5 m²");
        assert_eq!(format_surface(72.04), "72 m²");
        assert_eq!(format_surface(72.96), "73 m²");
        assert_eq!(format_surface(72.36), "72.4 m²");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape("<b>A & B</b>"), "&lt;b&gt;A &amp; B&lt;/b&gt;");
        assert_eq!(html_attr("say \"hi\""), "say &quot;hi&quot;");
    }
}
