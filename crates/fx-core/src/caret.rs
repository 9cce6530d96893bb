//! Fake caret positioning for styled text inputs.

/// Text of `value` before the caret.
///
/// `selection_start` is a UTF-16 offset as reported by
/// `HTMLInputElement.selectionStart`. An offset that lands inside a surrogate
/// pair stops before that character.
pub fn prefix_before_caret(value: &str, selection_start: u32) -> &str {
    let limit = selection_start as usize;
    let mut units = 0usize;
    for (byte_idx, ch) in value.char_indices() {
        let next = units + ch.len_utf16();
        if next > limit {
            return &value[..byte_idx];
        }
        units = next;
    }
    value
}

/// Parse a computed CSS length such as `"12px"` or `"12.5px"`.
///
/// Anything that does not start with a number yields 0.
pub fn parse_css_px(raw: &str) -> f64 {
    let raw = raw.trim();
    let end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    raw[..end].parse::<f64>().unwrap_or(0.0)
}

/// Left offset of the caret inside its wrapper, in CSS pixels.
#[inline]
pub fn caret_left(padding_left: f64, text_width: f64, scroll_left: f64) -> f64 {
    padding_left + text_width - scroll_left
}
