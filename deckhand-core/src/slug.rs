//! Title-to-slug conversion for backing filenames.

/// Longest slug emitted; keeps filenames readable.
const MAX_SLUG_LEN: usize = 40;

/// Generate a kebab-case slug from a slide title.
///
/// Lower-cases the title, collapses every run of non-alphanumeric
/// characters to a single hyphen, strips leading and trailing hyphens,
/// and truncates to 40 characters without leaving a trailing hyphen.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
