use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max_width` terminal columns, ending in "..." when shortened.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// "12.3 KB" style size for the audio status line.
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}
