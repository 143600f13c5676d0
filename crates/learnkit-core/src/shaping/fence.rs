const FENCE: &str = "```";

/// Strip a markdown code fence from model output.
///
/// Handles an opening fence with or without a language tag (`json`,
/// `JSON`, ...), a missing closing fence, and a fenced block that follows
/// some prose. A fence only opens at the start of a line, so backticks
/// inside JSON strings are kept. Without a fence, prose before the first
/// `{` or `[` is dropped. Stripping is idempotent.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    if text.starts_with('{') || text.starts_with('[') {
        return text;
    }

    let Some(open) = opening_fence(text) else {
        return text.find(['{', '[']).map_or(text, |start| &text[start..]);
    };

    let after_open = &text[open + FENCE.len()..];
    let body = after_open.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = match body.rfind(FENCE) {
        Some(close) => &body[..close],
        None => body,
    };
    body.trim()
}

/// Byte offset of the first fence that starts a line, ignoring indentation.
fn opening_fence(text: &str) -> Option<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(newline, _)| newline + 1))
        .map(|start| {
            let line = &text[start..];
            start + line.len() - line.trim_start_matches([' ', '\t']).len()
        })
        .find(|&start| text[start..].starts_with(FENCE))
}
