use tracing::trace;

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a category tag such as `frozen_meat` into a heading like `Frozen Meat`.
///
/// Every word is capitalised and the remainder lower-cased, so
/// `beauty_and_personal_care` becomes `Beauty And Personal Care`.
pub fn category_title(tag: &str) -> String {
    let title = tag
        .replace('_', " ")
        .split(' ')
        .map(|word| capitalize_first(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ");
    trace!(tag, %title, "Category title");
    title
}
