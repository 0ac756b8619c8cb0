//! Common utility functions shared across the codebase.

use unicode_width::UnicodeWidthChar;

/// Maximum display width of a code preview in diagnostics.
pub const PREVIEW_WIDTH: usize = 50;

/// Cut `text` down to at most `max_width` display columns.
///
/// Wide characters (CJK, emoji) count as two columns and are never split.
///
/// # Examples
///
/// ```
/// use feather::utils::truncate_to_width;
///
/// assert_eq!(truncate_to_width("void function(int x)", 4), "void");
/// assert_eq!(truncate_to_width("你好世界", 5), "你好");
/// assert_eq!(truncate_to_width("short", 50), "short");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut end = 0;

    for (idx, c) in text.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            return text[..end].to_string();
        }
        width += char_width;
        end = idx + c.len_utf8();
    }

    text.to_string()
}
