//! SQL helpers for user-supplied search terms

use sea_orm::sea_query::LikeExpr;

/// Escape LIKE wildcards in user-supplied search terms.
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Contains-style LIKE pattern with an explicit ESCAPE clause. SQLite has
/// no default escape character, so the clause is required for the escaping
/// above to take effect there.
pub fn contains_pattern(input: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like_pattern(input))).escape('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::{
        Alias, Expr, ExprTrait, Query, QueryStatementBuilder, SqliteQueryBuilder,
    };

    #[test]
    fn test_escapes_wildcards() {
        assert_eq!(escape_like_pattern("ab%cd"), "ab\\%cd");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
        assert_eq!(escape_like_pattern("plain"), "plain");
    }

    #[test]
    fn test_contains_pattern_renders_escape_clause() {
        let sql = Query::select()
            .column(Alias::new("nama"))
            .from(Alias::new("santri"))
            .and_where(Expr::col(Alias::new("nama")).like(contains_pattern("50%_x")))
            .to_string(SqliteQueryBuilder);

        assert!(sql.contains(r"ESCAPE '\'"), "missing ESCAPE clause: {sql}");
        assert!(sql.contains(r"\%"), "wildcard not escaped: {sql}");
        assert!(sql.contains(r"\_"), "underscore not escaped: {sql}");
    }
}
