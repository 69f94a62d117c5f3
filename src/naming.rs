//! Identifier policy for declaration names and property keys.
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9]+").expect("separator pattern is valid")
});

/// Used when a root name normalizes to nothing.
pub const FALLBACK_ROOT_NAME: &str = "Root";

/// Prefix for names allocated to anonymous nested objects.
pub const SYNTHETIC_PREFIX: &str = "Interface";

pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// `"test-name_with-special"` → `TestNameWithSpecial`.
///
/// Each word keeps only its first letter upper-cased; the rest is lowered,
/// so `"isActive"` becomes `Isactive`. This is plain concatenation and can
/// yield an empty string or one starting with a digit; declaration names go
/// through [`declaration_name`], which repairs both.
pub fn to_pascal_case(s: &str) -> String {
    NON_ALNUM_RUN
        .split(s)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Pascal-case `raw` and make sure the result can start a declaration.
///
/// Beyond [`to_pascal_case`]: a name that normalizes to nothing becomes
/// [`FALLBACK_ROOT_NAME`], and one that starts with a digit gets a leading
/// `_` (`"2024-data"` → `_2024Data`), so the output is always a valid
/// identifier.
pub fn declaration_name(raw: &str) -> String {
    let name = to_pascal_case(raw);
    match name.chars().next() {
        None => FALLBACK_ROOT_NAME.to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{name}"),
        Some(_) => name,
    }
}

pub fn synthetic_name(n: u32) -> String {
    format!("{SYNTHETIC_PREFIX}{n}")
}

/// Property key as written inside a declaration: bare when it is an
/// identifier, otherwise a quoted string literal.
pub fn property_key(key: &str) -> String {
    if is_valid_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

/// Strip everything but ASCII letters and digits, e.g. for file stems.
pub fn alphanumeric_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
    }
}

fn quote(key: &str) -> String {
    // JSON string syntax is a valid TS string literal
    serde_json::Value::from(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_splits_on_non_alphanumerics() {
        assert_eq!(to_pascal_case("test-name_with-special"), "TestNameWithSpecial");
        assert_eq!(to_pascal_case("--leading  and trailing__"), "LeadingAndTrailing");
        assert_eq!(to_pascal_case("Test"), "Test");
        assert_eq!(to_pascal_case("isActive"), "Isactive");
        assert_eq!(to_pascal_case("HTTP_server"), "HttpServer");
        assert_eq!(to_pascal_case("v2-api"), "V2Api");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("¿?"), "");
    }

    #[test]
    fn declaration_name_is_always_an_identifier() {
        assert_eq!(declaration_name("sample"), "Sample");
        assert_eq!(declaration_name("!!!"), FALLBACK_ROOT_NAME);
        assert_eq!(declaration_name("2024-data"), "_2024Data");
        for raw in ["sample", "!!!", "2024-data", "a b c", "ünïcode"] {
            assert!(is_valid_identifier(&declaration_name(raw)), "{raw}");
        }
    }

    #[test]
    fn identifier_pattern() {
        for ok in ["name", "_private", "$ref", "camelCase", "a1", "A_$9"] {
            assert!(is_valid_identifier(ok), "{ok}");
        }
        for bad in ["", "invalid-key", "123numeric", "with space", "é", "a.b"] {
            assert!(!is_valid_identifier(bad), "{bad}");
        }
    }

    #[test]
    fn property_keys_are_quoted_when_needed() {
        assert_eq!(property_key("isActive"), "isActive");
        assert_eq!(property_key("invalid-key"), r#""invalid-key""#);
        assert_eq!(property_key("123numeric"), r#""123numeric""#);
        assert_eq!(property_key("with space"), r#""with space""#);
        assert_eq!(property_key(""), r#""""#);
        assert_eq!(property_key(r#"say "hi""#), r#""say \"hi\"""#);
    }

    #[test]
    fn synthetic_names_count_from_given_number() {
        assert_eq!(synthetic_name(1), "Interface1");
        assert_eq!(synthetic_name(12), "Interface12");
    }

    #[test]
    fn alphanumeric_only_drops_everything_else() {
        assert_eq!(alphanumeric_only("my-data_file v2"), "mydatafilev2");
        assert_eq!(alphanumeric_only("données"), "donnes");
    }
}
