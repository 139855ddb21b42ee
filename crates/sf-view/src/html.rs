pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Cut `text` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}\u{2026}", text[..cut].trim_end()),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<b>"men's" & co</b>"#),
            "&lt;b&gt;&quot;men&#39;s&quot; &amp; co&lt;/b&gt;"
        );
    }

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(109.95), "$109.95");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("ñandú rápido", 5), "ñandú\u{2026}");
        assert_eq!(excerpt("exactly", 7), "exactly");
    }
}
