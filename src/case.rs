//! Identifier case conversion.
//!
//! `_` is the only word delimiter recognised by [`camel_case`] and
//! [`pascal_case`]; [`snake_case`] splits before ASCII capitals instead.
//! Characters that are not at a word boundary pass through unchanged, so
//! `camel_case("myHTTP_client")` is `"myHTTPClient"`.

/// Converts to camelCase, e.g. `"My_Name"` to `"myName"`.
///
/// The first character is lowercased. Every later `_` is dropped and the
/// character after it uppercased.
///
/// # Examples
/// ```
/// use u_toolkit::case::camel_case;
/// assert_eq!(camel_case("my_name"), "myName");
/// assert_eq!(camel_case("MyName"), "myName");
/// ```
pub fn camel_case(s: &str) -> String {
    join_words(s, |c, out| out.extend(c.to_lowercase()))
}

/// Converts to PascalCase, e.g. `"my_name"` to `"MyName"`.
///
/// The first character is uppercased. Every later `_` is dropped and the
/// character after it uppercased; a trailing `_` is simply dropped.
pub fn pascal_case(s: &str) -> String {
    join_words(s, |c, out| out.extend(c.to_uppercase()))
}

fn join_words(s: &str, first: impl FnOnce(char, &mut String)) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    if let Some(c) = chars.next() {
        first(c, &mut out);
    }
    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }
        // The character after a delimiter is consumed even if it is another
        // delimiter, so "a__b" becomes "a_b".
        if let Some(next) = chars.next() {
            out.extend(next.to_uppercase());
        }
    }
    out
}

/// Converts to snake_case, e.g. `"MyName"` to `"my_name"`.
///
/// A `_` is inserted before every ASCII uppercase letter that is neither
/// the first character nor already preceded by `_`, then the whole result
/// is lowercased. Non-ASCII capitals are lowercased without a split. Runs
/// of capitals are split per letter: `"HTTPServer"` becomes
/// `"h_t_t_p_server"`.
///
/// # Examples
/// ```
/// use u_toolkit::case::snake_case;
/// assert_eq!(snake_case("MyName"), "my_name");
/// assert_eq!(snake_case("my_Name"), "my_name");
/// ```
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 2);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p != '_') {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMS: [&str; 5] = ["MyName", "myName", "my_name", "my_Name", "My_Name"];

    #[test]
    fn test_camel_case() {
        for s in FORMS {
            assert_eq!(camel_case(s), "myName", "input {s:?}");
        }
    }

    #[test]
    fn test_pascal_case() {
        for s in FORMS {
            assert_eq!(pascal_case(s), "MyName", "input {s:?}");
        }
    }

    #[test]
    fn test_snake_case() {
        for s in FORMS {
            assert_eq!(snake_case(s), "my_name", "input {s:?}");
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(camel_case(""), "");
        assert_eq!(pascal_case(""), "");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn test_trailing_delimiter_dropped() {
        assert_eq!(pascal_case("my_name_"), "MyName");
        assert_eq!(camel_case("My_"), "my");
    }

    #[test]
    fn test_double_delimiter() {
        assert_eq!(pascal_case("a__b"), "A_b");
        assert_eq!(camel_case("A__b"), "a_b");
    }

    #[test]
    fn test_inner_case_preserved() {
        assert_eq!(camel_case("myHTTP_client"), "myHTTPClient");
        assert_eq!(pascal_case("xml_HTTP"), "XmlHTTP");
    }

    #[test]
    fn test_snake_case_capital_runs() {
        assert_eq!(snake_case("HTTPServer"), "h_t_t_p_server");
        assert_eq!(snake_case("_Leading"), "_leading");
    }

    #[test]
    fn test_snake_pascal_round_trip() {
        for s in ["MyName", "my_name", "my_Name"] {
            let snake = snake_case(s);
            assert_eq!(snake_case(&pascal_case(&snake)), snake, "input {s:?}");
        }
    }

    #[test]
    fn test_snake_case_splits_only_ascii_capitals() {
        assert_eq!(pascal_case("école_été"), "ÉcoleÉté");
        assert_eq!(snake_case("ÉcoleÉté"), "écoleété");
        assert_eq!(snake_case("ÉcoleEté"), "école_eté");
    }
}
