//! Best-effort name interpretation kept for backward compatibility
//!
//! Older callers treat any name that starts with a quote character as quoted
//! as a whole, strip every quote character from it, and split namespace from
//! name on the first dot. This never fails.

const QUOTE_CHARS: &[char] = &['`', '"', '[', ']'];

/// Result of the legacy interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyName {
    pub namespace: Option<String>,
    pub name: String,
    pub quoted: bool,
}

/// Whether the raw name starts with an opening quote character
pub fn is_identifier_quoted(raw: &str) -> bool {
    matches!(raw.chars().next(), Some('`' | '"' | '['))
}

/// Remove every quote character from `raw`
pub fn trim_quotes(raw: &str) -> String {
    raw.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect()
}

/// Interpret `raw` the legacy way
pub fn interpret(raw: &str) -> LegacyName {
    let quoted = is_identifier_quoted(raw);
    let unquoted = if quoted {
        trim_quotes(raw)
    } else {
        raw.to_string()
    };

    match unquoted.split_once('.') {
        Some((namespace, name)) => LegacyName {
            namespace: Some(namespace.to_string()),
            name: name.to_string(),
            quoted,
        },
        None => LegacyName {
            namespace: None,
            name: unquoted,
            quoted,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let legacy = interpret("users");
        assert_eq!(legacy.namespace, None);
        assert_eq!(legacy.name, "users");
        assert!(!legacy.quoted);
    }

    #[test]
    fn test_splits_on_first_dot_only() {
        let legacy = interpret("app.audit.log");
        assert_eq!(legacy.namespace.as_deref(), Some("app"));
        assert_eq!(legacy.name, "audit.log");
    }

    #[test]
    fn test_leading_quote_marks_whole_name_quoted() {
        let legacy = interpret("\"App\".\"Users\"");
        assert_eq!(legacy.namespace.as_deref(), Some("App"));
        assert_eq!(legacy.name, "Users");
        assert!(legacy.quoted);

        let legacy = interpret("[dbo].[Orders]");
        assert_eq!(legacy.namespace.as_deref(), Some("dbo"));
        assert_eq!(legacy.name, "Orders");
        assert!(legacy.quoted);
    }

    #[test]
    fn test_quotes_kept_when_not_leading() {
        let legacy = interpret("app.\"Users\"");
        assert!(!legacy.quoted);
        assert_eq!(legacy.name, "\"Users\"");
    }
}
