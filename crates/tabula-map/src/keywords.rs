//! Declarative keyword-hint tables, one list per canonical role.
//!
//! Kept as data rather than branching code so the tables are
//! independently testable and extensible.

use tabula_model::Role;

/// Per-role keyword lists matched case-insensitively as substrings.
pub const KEYWORD_HINTS: &[(Role, &[&str])] = &[
    (
        Role::Measure,
        &["total", "amount", "score", "marks", "value", "sum", "points"],
    ),
    (
        Role::Entity,
        &["name", "id", "student", "employee", "customer", "user", "person"],
    ),
    (Role::Time, &["date", "time", "year", "month", "day"]),
    (
        Role::Dimension,
        &["region", "category", "type", "subject", "department", "class", "group"],
    ),
];

/// Keyword list for a role.
#[must_use]
pub fn keywords_for(role: Role) -> &'static [&'static str] {
    KEYWORD_HINTS
        .iter()
        .find(|(r, _)| *r == role)
        .map_or(&[], |(_, keywords)| keywords)
}

/// True when the column name contains any of the role's keywords.
#[must_use]
pub fn name_matches(column_name: &str, role: Role) -> bool {
    let name = column_name.to_lowercase();
    keywords_for(role).iter().any(|kw| name.contains(kw))
}
