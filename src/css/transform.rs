//! Per-family rewriting of a font-face sequence.
//!
//! Each [`FamilySpec`] is folded over the working sequence in request
//! order, so later specs see the output of earlier ones, renamed
//! duplicates included.

use crate::css::family::FamilySpec;
use crate::css::font_face::FontFace;
use crate::css::unicode_range::{generate_range, parse_range, subtract_range};

/// Apply every spec to the record sequence, producing a new sequence.
pub fn transform(faces: Vec<FontFace>, specs: &[FamilySpec]) -> Vec<FontFace> {
    specs.iter().fold(faces, apply_spec)
}

fn apply_spec(faces: Vec<FontFace>, spec: &FamilySpec) -> Vec<FontFace> {
    // Upstream quotes family names, the spec string does not.
    let target = format!("'{}'", spec.family);
    let rename = non_empty(&spec.rename);
    let exclude = non_empty(&spec.exclude);
    let include = non_empty(&spec.include);

    let mut out = Vec::with_capacity(faces.len());
    for face in faces {
        if face.family != target {
            out.push(face);
            continue;
        }

        // A rename keeps the original face and adds a modified copy under
        // the new name; the original is yielded untouched, ahead of it.
        if rename.is_some() {
            out.push(face.clone());
        }

        let mut modified = face;
        if let Some(name) = rename {
            modified.family = format!("'{name}'");
        }
        if let Some(excluded) = exclude {
            if let Some(range) = &modified.unicode_range {
                modified.unicode_range = Some(generate_range(&subtract_range(
                    parse_range(range),
                    &parse_range(excluded),
                )));
            }
        }
        if let Some(included) = include {
            // Include wins over any exclude result.
            modified.unicode_range = Some(included.to_string());
        }
        out.push(modified);
    }
    out
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(family: &str, range: Option<&str>) -> FontFace {
        FontFace {
            family: family.to_string(),
            style: "normal".to_string(),
            weight: "400".to_string(),
            display: Some("swap".to_string()),
            src: "url(x)".to_string(),
            unicode_range: range.map(str::to_string),
        }
    }

    fn spec(input: &str) -> FamilySpec {
        FamilySpec::parse(input)
    }

    #[test]
    fn test_no_matching_spec_is_noop() {
        let faces = vec![face("'Roboto'", Some("U+0-7F"))];
        let out = transform(faces.clone(), &[spec("Lato:wght@400:rename@Other")]);
        assert_eq!(out, faces);
    }

    #[test]
    fn test_rename_duplicates_with_original_first() {
        let faces = vec![face("'Roboto'", None)];
        let out = transform(faces, &[spec("Roboto:wght@400:rename@MyRoboto")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].family, "'Roboto'");
        assert_eq!(out[1].family, "'MyRoboto'");
        assert_eq!(out[0].src, out[1].src);
    }

    #[test]
    fn test_exclude_recomputes_range() {
        let faces = vec![face("'Roboto'", Some("U+0-7F"))];
        let out = transform(faces, &[spec("Roboto:wght@400:exclude@U+41-5A")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].unicode_range.as_deref(), Some("U+0-40, U+5b-7f"));
    }

    #[test]
    fn test_exclude_without_range_is_ignored() {
        let faces = vec![face("'Roboto'", None)];
        let out = transform(faces, &[spec("Roboto:wght@400:exclude@U+41-5A")]);
        assert_eq!(out[0].unicode_range, None);
    }

    #[test]
    fn test_include_overrides_exclude() {
        let faces = vec![face("'Roboto'", Some("U+0-7F"))];
        let out = transform(
            faces,
            &[spec("Roboto:wght@400:exclude@U+41-5A:include@U+100-1FF")],
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].unicode_range.as_deref(), Some("U+100-1FF"));
    }

    #[test]
    fn test_rename_applies_exclude_to_copy_only() {
        let faces = vec![face("'Roboto'", Some("U+0-7F"))];
        let out = transform(faces, &[spec("Roboto:wght@400:rename@Romeo:exclude@U+0-3F")]);
        assert_eq!(out[0].family, "'Roboto'");
        assert_eq!(out[0].unicode_range.as_deref(), Some("U+0-7F"));
        assert_eq!(out[1].family, "'Romeo'");
        assert_eq!(out[1].unicode_range.as_deref(), Some("U+40-7f"));
    }

    #[test]
    fn test_empty_option_value_is_unset() {
        let faces = vec![face("'Roboto'", Some("U+0-7F"))];
        let out = transform(faces.clone(), &[spec("Roboto:wght@400:rename")]);
        assert_eq!(out, faces);
    }

    #[test]
    fn test_later_spec_sees_earlier_output() {
        // The second spec matches the renamed copy produced by the first.
        let faces = vec![face("'Roboto'", Some("U+0-7F"))];
        let out = transform(
            faces,
            &[
                spec("Roboto:wght@400:rename@Romeo"),
                spec("Romeo:wght@400:include@U+100"),
            ],
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].unicode_range.as_deref(), Some("U+0-7F"));
        assert_eq!(out[1].family, "'Romeo'");
        assert_eq!(out[1].unicode_range.as_deref(), Some("U+100"));
    }

    #[test]
    fn test_unmatched_faces_pass_through_in_order() {
        let faces = vec![
            face("'Lato'", None),
            face("'Roboto'", None),
            face("'Lato'", None),
        ];
        let out = transform(faces, &[spec("Roboto:wght@400:rename@Romeo")]);
        let families: Vec<&str> = out.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(families, vec!["'Lato'", "'Roboto'", "'Romeo'", "'Lato'"]);
    }
}
