use heck::ToSnakeCase;

/// Converts `src` to `lower_snake_case`. `LastName` and `lastName` both become
/// `last_name`; acronyms collapse (`ID` becomes `id`).
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Returns the plural form of an english word (`person` → `people`).
pub fn pluralize(src: &str) -> String {
    pluralizer::pluralize(src, 2, false)
}
