//! Family specification parsing.
//!
//! A request names each font family with a compact colon-separated spec:
//! `family[:axis][:key@value]...`. The axis token is forwarded to the
//! upstream API; the remaining tokens are rewrite directives handled
//! locally.

/// Parsed instruction for one requested font family.
///
/// Parsing is best effort and never fails: a token without `@` becomes an
/// option with an empty value, which downstream treats as unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FamilySpec {
    /// Family name as requested (first token).
    pub family: String,

    /// Variation axis token forwarded upstream, e.g. `wght@400`.
    pub axis: Option<String>,

    /// Serve matching faces under this family name as well.
    pub rename: Option<String>,

    /// `unicode-range` list to subtract from matching faces.
    pub exclude: Option<String>,

    /// Literal `unicode-range` value overriding matching faces.
    pub include: Option<String>,

    /// Unrecognized `key@value` tokens, preserved but ignored.
    pub extra: Vec<(String, String)>,
}

impl FamilySpec {
    /// Parse a spec string such as `Roboto:wght@400:rename@Romeo`.
    pub fn parse(input: &str) -> Self {
        let mut tokens = input.split(':');
        let family = tokens.next().unwrap_or_default().to_string();
        let axis = tokens.next().map(str::to_string);

        let mut spec = Self { family, axis, ..Self::default() };
        for token in tokens {
            let (key, value) = match token.split_once('@') {
                Some((key, value)) => (key, value.to_string()),
                None => (token, String::new()),
            };
            match key {
                "rename" => spec.rename = Some(value),
                "exclude" => spec.exclude = Some(value),
                "include" => spec.include = Some(value),
                _ => spec.extra.push((key.to_string(), value)),
            }
        }
        spec
    }

    /// Family value sent to the upstream API: `family` or `family:axis`.
    pub fn google_family(&self) -> String {
        match self.axis.as_deref().filter(|axis| !axis.is_empty()) {
            Some(axis) => format!("{}:{axis}", self.family),
            None => self.family.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_family() {
        let spec = FamilySpec::parse("Roboto");
        assert_eq!(spec.family, "Roboto");
        assert_eq!(spec.axis, None);
        assert_eq!(spec.google_family(), "Roboto");
    }

    #[test]
    fn test_parse_family_with_axis() {
        let spec = FamilySpec::parse("Roboto:wght@400");
        assert_eq!(spec.family, "Roboto");
        assert_eq!(spec.axis.as_deref(), Some("wght@400"));
        assert_eq!(spec.google_family(), "Roboto:wght@400");
    }

    #[test]
    fn test_parse_options_after_axis() {
        let spec = FamilySpec::parse("Open Sans:ital,wght@0,400:rename@Body:exclude@U+0-7F");
        assert_eq!(spec.family, "Open Sans");
        assert_eq!(spec.axis.as_deref(), Some("ital,wght@0,400"));
        assert_eq!(spec.rename.as_deref(), Some("Body"));
        assert_eq!(spec.exclude.as_deref(), Some("U+0-7F"));
        assert_eq!(spec.include, None);
    }

    #[test]
    fn test_empty_axis_is_not_forwarded() {
        // `family::include@...` skips the axis slot with an empty token.
        let spec = FamilySpec::parse("Roboto::include@U+0-7F");
        assert_eq!(spec.axis.as_deref(), Some(""));
        assert_eq!(spec.google_family(), "Roboto");
        assert_eq!(spec.include.as_deref(), Some("U+0-7F"));
    }

    #[test]
    fn test_option_without_value_does_not_fail() {
        let spec = FamilySpec::parse("Roboto:wght@400:rename");
        assert_eq!(spec.rename.as_deref(), Some(""));
    }

    #[test]
    fn test_unrecognized_options_are_preserved() {
        let spec = FamilySpec::parse("Roboto:wght@400:subset@latin");
        assert_eq!(spec.extra, vec![("subset".to_string(), "latin".to_string())]);
        assert_eq!(spec.rename, None);
    }
}
