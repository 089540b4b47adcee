// src/domain/post/text.rs
//
// Pure text helpers behind slug generation and the derived post fields
// (excerpt, meta description, read time). No I/O; slug uniqueness against
// live data lives in `services::PostSlugService`.

/// Default excerpt length in characters.
pub const EXCERPT_LENGTH: usize = 150;
/// Default meta description length in characters.
pub const META_DESCRIPTION_LENGTH: usize = 160;
/// Assumed reading speed for the read-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Convert arbitrary text into a URL-safe slug: lowercase, strip everything
/// outside `[a-z0-9\s-]`, turn whitespace runs into single hyphens, collapse
/// repeated hyphens and trim them from the ends. Idempotent.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for c in lowered.trim().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        match c {
            'a'..='z' | '0'..='9' => out.push(c),
            '-' if !out.ends_with('-') => out.push('-'),
            _ => {}
        }
    }
    out.trim_matches('-').to_string()
}

/// Resolve a slug against a known candidate set by appending `-1`, `-2`, ...
/// until the slug is untaken. The caller supplies the set; this function
/// never touches storage.
pub fn generate_unique_slug<S: AsRef<str>>(text: &str, existing: &[S]) -> String {
    let base = slugify(text);
    let taken = |candidate: &str| existing.iter().any(|s| s.as_ref() == candidate);

    if !taken(&base) {
        return base;
    }
    let mut counter = 1u64;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// True iff `slug` is non-empty and matches `^[a-z0-9-]+$`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Remove HTML tags (`<[^>]*>`). A `<` with no closing `>` is kept verbatim.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start + 1..].find('>') {
            Some(offset) => rest = &rest[start + 1 + offset + 1..],
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Strip HTML, collapse whitespace, and truncate to `max_length` characters.
/// The ellipsis is appended only when the text was actually truncated.
pub fn excerpt(content: &str, max_length: usize) -> String {
    let clean = strip_html(content);
    let clean = clean.split_whitespace().collect::<Vec<_>>().join(" ");
    if clean.chars().count() <= max_length {
        return clean;
    }
    let truncated: String = clean.chars().take(max_length).collect();
    format!("{}...", truncated.trim_end())
}

/// Estimated reading time in whole minutes: `ceil(words / wpm)`, never below
/// one minute for non-empty content, zero for empty content.
pub fn read_time_minutes(content: &str, wpm: usize) -> u32 {
    if content.trim().is_empty() {
        return 0;
    }
    let words = strip_html(content).split_whitespace().count();
    let minutes = words.div_ceil(wpm.max(1)).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Truncate to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
