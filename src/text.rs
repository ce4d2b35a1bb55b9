// src/text.rs
//! Record title formatting

/// `INCOME_TAX_RETURN` → `Income Tax Return`
pub fn record_title(title: &str) -> String {
    title
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
