use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    let target_width = max_width.saturating_sub(1); // Room for ellipsis

    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    format!("{result}{ellipsis}")
}

pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_inclusive(' ') {
        let word_width = word.width();

        if current_width + word_width <= max_width {
            current_line.push_str(word);
            current_width += word_width;
        } else {
            if !current_line.is_empty() {
                lines.push(current_line.trim_end().to_string());
            }
            if word_width > max_width {
                let truncated = truncate_text(word.trim_end(), max_width);
                current_width = truncated.width();
                current_line = truncated;
            } else {
                current_line = word.to_string();
                current_width = word_width;
            }
        }
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line.trim_end().to_string());
    }

    lines
}

/// `$1,234.50` style money.
#[must_use]
pub fn format_money(amount: f64) -> String {
    let cents = format!("{amount:.2}");
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_text("Samsung Electronics", 8), "Samsung…");
        assert_eq!(truncate_text("Honda", 8), "Honda");
    }

    #[test]
    fn test_wrap_breaks_on_spaces() {
        assert_eq!(
            wrap_text("Production capacity available", 12),
            vec!["Production", "capacity", "available"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(25.5), "$25.50");
        assert_eq!(format_money(1234567.0), "$1,234,567.00");
        assert_eq!(format_money(0.0), "$0.00");
    }
}
