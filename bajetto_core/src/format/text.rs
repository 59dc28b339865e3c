/// Shortens `text` to `max_length` characters, ending in `...`.
///
/// Text that already fits is returned unchanged. Below a `max_length` of 3 the
/// kept prefix is measured back from the end of the text instead, so
/// `truncate("Hello World", 2)` keeps ten characters: `"Hello Worl..."`.
pub fn truncate(text: &str, max_length: usize) -> String {
    let len = text.chars().count();
    if len <= max_length {
        return text.to_string();
    }
    let keep = match max_length.checked_sub(3) {
        Some(keep) => keep,
        None => len.saturating_sub(3 - max_length),
    };
    let prefix: String = text.chars().take(keep).collect();
    format!("{}...", prefix)
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes every space-separated word.
///
/// Splits on single spaces, so runs of spaces survive as empty words.
pub fn to_title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
