//! Delimiter-depth scan used to bound a block without a parser.

/// Find the byte offset of the `}` that closes the first block opened at or
/// after `start`.
///
/// Depth starts at zero and every `{` / `}` in `text[start..]` moves it by
/// one. The scan stops at the first `}` that brings depth back to exactly
/// zero. A stray `}` before any `{` takes the depth negative and the scan
/// keeps going. Returns None when no closing delimiter is found.
///
/// Delimiters inside string literals and comments are counted like any
/// other, so such content can desynchronize the result.
pub fn find_block_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth: i64 = 0;

    for (offset, &byte) in bytes.get(start..)?.iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}
