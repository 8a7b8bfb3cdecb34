//! Identifier helpers shared by the schema and build crates.
//!
//! Table names arrive in whatever casing the database reports; class and
//! accessor names are derived from them here so every crate agrees on the
//! mapping.

use convert_case::{Case, Casing};

/// Strip a configured table prefix, leaving the name untouched when the
/// prefix is empty or absent.
#[must_use]
pub fn remove_prefix<'a>(table: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        table
    } else {
        table.strip_prefix(prefix).unwrap_or(table)
    }
}

/// Derive a class name from a table name: strip the prefix, then PascalCase.
///
/// No singularization is attempted; `blog_posts` becomes `BlogPosts`.
#[must_use]
pub fn prettify_table_name(table: &str, prefix: &str) -> String {
    remove_prefix(table, prefix).to_case(Case::Pascal)
}

/// camelCase form used for accessor method names.
#[must_use]
pub fn camel_case(name: &str) -> String {
    name.to_case(Case::Camel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_prefix_strips_only_leading_match() {
        assert_eq!(remove_prefix("app_users", "app_"), "users");
        assert_eq!(remove_prefix("users", "app_"), "users");
        assert_eq!(remove_prefix("users_app_", "app_"), "users_app_");
    }

    #[test]
    fn remove_prefix_empty_prefix_is_identity() {
        assert_eq!(remove_prefix("users", ""), "users");
    }

    #[test]
    fn prettify_pascal_cases_stripped_name() {
        assert_eq!(prettify_table_name("app_blog_posts", "app_"), "BlogPosts");
        assert_eq!(prettify_table_name("users", ""), "Users");
    }

    #[test]
    fn camel_case_for_accessors() {
        assert_eq!(camel_case("blog_posts"), "blogPosts");
        assert_eq!(camel_case("users"), "users");
    }
}
