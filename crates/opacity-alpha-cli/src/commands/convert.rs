//! Conversion commands (to-alpha, to-opacity, snippet)

use super::Outcome;
use opacity_alpha::{RangePolicy, SnippetOptions, checked_alpha_to_opacity, convert, parse_number};
use serde_json::json;

/// Convert opacity text to an alpha value
pub fn to_alpha(text: &str, options: &SnippetOptions) -> anyhow::Result<Outcome> {
    let conversion = convert(text, options)?;
    Ok(Outcome::line(
        conversion.alpha.to_string(),
        serde_json::to_value(&conversion)?,
    ))
}

/// Convert alpha text to an opacity value
pub fn to_opacity(text: &str, policy: RangePolicy) -> anyhow::Result<Outcome> {
    let alpha = parse_number(text)?;
    let opacity = checked_alpha_to_opacity(alpha, policy)?;
    tracing::debug!(alpha, opacity, "converted alpha");
    Ok(Outcome::line(
        opacity.to_string(),
        json!({
            "alpha": alpha,
            "opacity": opacity
        }),
    ))
}

/// Generate the `.withValues(alpha: N)` replacement for opacity text
pub fn snippet(text: &str, options: &SnippetOptions) -> anyhow::Result<Outcome> {
    let conversion = convert(text, options)?;
    Ok(Outcome::line(
        conversion.snippet.clone(),
        serde_json::to_value(&conversion)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use opacity_alpha::ConvertError;

    #[test]
    fn test_to_alpha() {
        let outcome = to_alpha("0.7", &SnippetOptions::default()).unwrap();
        assert_eq!(outcome.text, "179\n");
        assert_eq!(outcome.json["alpha"], 179);
        assert_eq!(outcome.json["opacity"], 0.7);
    }

    #[test]
    fn test_to_opacity() {
        let outcome = to_opacity("255", RangePolicy::Reject).unwrap();
        assert_eq!(outcome.text, "1\n");
        assert_eq!(outcome.json["opacity"], 1.0);

        let outcome = to_opacity("51", RangePolicy::Reject).unwrap();
        assert_eq!(outcome.text, "0.2\n");
    }

    #[test]
    fn test_to_opacity_range_policies() {
        let err = to_opacity("300", RangePolicy::Reject).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::OutOfRange { .. })
        ));

        let outcome = to_opacity("300", RangePolicy::Clamp).unwrap();
        assert_eq!(outcome.text, "1\n");
    }

    #[test]
    fn test_snippet() {
        let outcome = snippet("1", &SnippetOptions::default()).unwrap();
        assert_eq!(outcome.text, ".withValues(alpha: 255)\n");
        assert_eq!(outcome.json["snippet"], ".withValues(alpha: 255)");
    }

    #[test]
    fn test_snippet_invalid_input() {
        let err = snippet("seventy", &SnippetOptions::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConvertError>(),
            Some(&ConvertError::invalid_input("seventy"))
        );
    }
}
