//! Telegram MarkdownV2 helpers.

/// Characters MarkdownV2 treats as markup outside of code spans.
const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes `text` so it renders literally under `ParseMode::MarkdownV2`.
///
/// ```
/// use food_order_bot::utils::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("Alu Kabli (Half)"), "Alu Kabli \\(Half\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
