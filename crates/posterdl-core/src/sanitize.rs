//! Title-to-filename sanitization.

/// Characters that never survive into a derived filename.
pub const RESERVED_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// True if `c` is one of [`RESERVED_CHARS`].
pub fn is_reserved(c: char) -> bool {
    RESERVED_CHARS.contains(&c)
}

/// Sanitizes a film title for use as a single path segment.
///
/// - Drops `\ / : * ? " < > |`
/// - Replaces each space with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing underscores
///
/// The result is empty when every character was dropped; callers use it as-is.
pub fn sanitize_filename(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_underscore = false;

    for c in title.chars() {
        if is_reserved(c) {
            continue;
        }
        let c = if c == ' ' { '_' } else { c };

        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    out.trim_matches('_').to_string()
}
