/// Derive a URL slug from a display name.
///
/// ASCII letters and digits are kept (lowercased); every other run of
/// characters collapses into a single `-`. Leading and trailing separators are
/// dropped, so the result always matches `SLUG_REGEX` unless it is empty.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Slug for a record: the explicit value when given, otherwise derived from
/// `source`. Names with no ASCII letters or digits get `<fallback>-<random>`.
pub fn derive_slug(explicit: Option<&str>, source: &str, fallback: &str) -> String {
    let slug = match explicit {
        Some(value) => slugify(value),
        None => slugify(source),
    };
    if !slug.is_empty() {
        return slug;
    }

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", fallback, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::SLUG_REGEX;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Men's Fashion"), "men-s-fashion");
        assert_eq!(slugify("  Home & Living  "), "home-living");
        assert_eq!(slugify("Eid Sale 2025"), "eid-sale-2025");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("ইলেকট্রনিক্স Electronics"), "electronics");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_output_matches_slug_regex() {
        for name in ["Kids -- Toys", "A", "Summer_Sale!", "x  y  z"] {
            let slug = slugify(name);
            assert!(SLUG_REGEX.is_match(&slug), "{} -> {}", name, slug);
        }
    }

    #[test]
    fn test_derive_slug_prefers_explicit_value() {
        assert_eq!(derive_slug(Some("Eid Offer"), "Anything", "slider"), "eid-offer");
        assert_eq!(derive_slug(None, "Summer Sale", "slider"), "summer-sale");

        let fallback = derive_slug(None, "ইলেকট্রনিক্স", "category");
        assert!(fallback.starts_with("category-"));
        assert_eq!(fallback.len(), "category-".len() + 8);
    }
}
