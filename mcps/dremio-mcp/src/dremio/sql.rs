//! SQL text helpers: read-only statement check and identifier quoting
//!
//! Everything here runs before a request is built, so a rejected statement
//! or table path never reaches the network.

use super::error::{DremioError, DremioResult};

/// Check whether `sql` is a plain SELECT statement
///
/// Line comments (`-- ...`) and non-nested block comments (`/* ... */`) are
/// removed first, then the text must start with `SELECT` (any case) followed
/// by whitespace. Empty and comment-only input is rejected.
pub fn is_select_query(sql: &str) -> bool {
    let stripped = strip_comments(sql);
    let text = stripped.trim();

    let Some(keyword) = text.get(..6) else {
        return false;
    };
    keyword.eq_ignore_ascii_case("select")
        && text[6..].chars().next().is_some_and(char::is_whitespace)
}

/// Fail with [`DremioError::NotSelect`] unless `sql` passes [`is_select_query`]
pub fn ensure_select(sql: &str) -> DremioResult<()> {
    if is_select_query(sql) {
        Ok(())
    } else {
        Err(DremioError::NotSelect)
    }
}

fn strip_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        match (c, next) {
            ('-', Some('-')) => {
                // Keep the newline so the surrounding tokens stay separated
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Double-quote one identifier, doubling any embedded double quotes
pub fn quote_identifier(segment: &str) -> String {
    format!("\"{}\"", segment.replace('"', "\"\""))
}

/// Build a dot-joined, per-segment quoted table reference
///
/// `["Samples", "nyc.trips"]` becomes `"Samples"."nyc.trips"`.
pub fn table_reference<S: AsRef<str>>(path: &[S]) -> DremioResult<String> {
    if path.is_empty() {
        return Err(DremioError::EmptyTablePath);
    }

    let quoted = path
        .iter()
        .map(|segment| {
            let segment = segment.as_ref();
            if segment.is_empty() {
                Err(DremioError::InvalidIdentifier(segment.to_string()))
            } else {
                Ok(quote_identifier(segment))
            }
        })
        .collect::<DremioResult<Vec<_>>>()?;

    Ok(quoted.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_select() {
        assert!(is_select_query("SELECT 1"));
        assert!(is_select_query("select * from t"));
        assert!(is_select_query("SeLeCt\t1"));
        assert!(is_select_query("SELECT\n  a\nFROM t"));
    }

    #[test]
    fn test_select_after_comments() {
        assert!(is_select_query("  -- comment\nSELECT 1"));
        assert!(is_select_query("/* x */ select * from t"));
        assert!(is_select_query("/* multi\nline */\n-- and one more\n  SELECT 1"));
        assert!(is_select_query("-- /* not a block\nSELECT 1"));
    }

    #[test]
    fn test_rejects_writes() {
        assert!(!is_select_query("DROP TABLE t"));
        assert!(!is_select_query("DELETE FROM t"));
        assert!(!is_select_query("INSERT INTO t SELECT 1"));
        assert!(!is_select_query("-- SELECT 1\nDROP TABLE t"));
        assert!(!is_select_query("/* SELECT 1 */ DROP TABLE t"));
    }

    #[test]
    fn test_requires_whitespace_after_keyword() {
        assert!(!is_select_query("SELECTX"));
        assert!(!is_select_query("SELECT"));
        assert!(!is_select_query("SELECT*FROM t"));
    }

    #[test]
    fn test_empty_and_comment_only() {
        assert!(!is_select_query(""));
        assert!(!is_select_query("   \n\t"));
        assert!(!is_select_query("-- just a comment"));
        assert!(!is_select_query("/* only */"));
        assert!(!is_select_query("/* unterminated SELECT 1"));
    }

    #[test]
    fn test_non_ascii_prefix() {
        assert!(!is_select_query("ééé SELECT 1"));
    }

    #[test]
    fn test_ensure_select() {
        assert!(ensure_select("SELECT 1").is_ok());
        assert!(matches!(
            ensure_select("UPDATE t SET a = 1"),
            Err(DremioError::NotSelect)
        ));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
        assert_eq!(quote_identifier("plain"), "\"plain\"");
        assert_eq!(quote_identifier("has.dot"), "\"has.dot\"");
    }

    #[test]
    fn test_table_reference() {
        assert_eq!(table_reference(&["s", "t"]).unwrap(), "\"s\".\"t\"");
        assert_eq!(
            table_reference(&["Samples", "weird\"name"]).unwrap(),
            "\"Samples\".\"weird\"\"name\""
        );
    }

    #[test]
    fn test_table_reference_rejects_bad_paths() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            table_reference(&empty),
            Err(DremioError::EmptyTablePath)
        ));
        assert!(matches!(
            table_reference(&["s", ""]),
            Err(DremioError::InvalidIdentifier(_))
        ));
    }
}
