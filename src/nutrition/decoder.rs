use serde_json::Value;
use tracing::debug;

use crate::nutrition::facts::NutrientFact;

/// Split a braced, comma-separated payload into its top-level fragments.
///
/// One enclosing `{`/`}` pair is stripped first. Commas only split while
/// outside a quoted string; a backslash escapes the next character, so an
/// escaped quote never toggles quoting. Fragments are trimmed and empty ones
/// dropped.
pub fn split_fragments(payload: &str) -> Vec<String> {
    let body = strip_enclosing(payload.trim(), '{', '}');

    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in body.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }

        match ch {
            '\\' => {
                escaped = true;
                current.push(ch);
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => fragments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fragments.push(current);

    fragments
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

/// Parse every readable fact out of a raw nutrient payload, in order.
///
/// Well-formed JSON (a single fact object or an array of facts) is read
/// directly. Anything else goes through [`split_fragments`], with each
/// fragment unquoted and unescaped before parsing. Unreadable pieces are
/// skipped.
pub fn parse_facts(payload: &str) -> Vec<NutrientFact> {
    match serde_json::from_str::<Value>(payload) {
        Ok(object @ Value::Object(_)) => fact_from_value(object).into_iter().collect(),
        Ok(Value::Array(values)) => values.into_iter().filter_map(fact_from_value).collect(),
        _ => split_fragments(payload)
            .iter()
            .filter_map(|fragment| parse_fragment(fragment))
            .collect(),
    }
}

fn parse_fragment(fragment: &str) -> Option<NutrientFact> {
    let unquoted = strip_enclosing(fragment, '"', '"');
    let unescaped = unquoted.replace("\\\"", "\"");

    match serde_json::from_str::<NutrientFact>(&unescaped) {
        Ok(fact) => Some(fact),
        Err(e) => {
            debug!(fragment = %fragment, error = %e, "skipping unreadable nutrient fragment");
            None
        }
    }
}

/// Array elements may be fact objects or strings holding an encoded fact.
fn fact_from_value(value: Value) -> Option<NutrientFact> {
    match value {
        Value::String(encoded) => parse_fragment(&encoded),
        other => match serde_json::from_value::<NutrientFact>(other) {
            Ok(fact) => Some(fact),
            Err(e) => {
                debug!(error = %e, "skipping unreadable nutrient fact");
                None
            }
        },
    }
}

/// Remove exactly one enclosing `open`/`close` pair if both are present.
fn strip_enclosing(s: &str, open: char, close: char) -> &str {
    if s.len() >= 2 && s.starts_with(open) && s.ends_with(close) {
        &s[open.len_utf8()..s.len() - close.len_utf8()]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESCAPED_PAYLOAD: &str = r#"{"{\"name\": \"Calories\", \"value\": 150}", "{\"name\": \"Total fat, with trans\", \"value\": 5}"}"#;

    #[test]
    fn test_split_ignores_commas_inside_quotes() {
        let fragments = split_fragments(ESCAPED_PAYLOAD);
        assert_eq!(fragments.len(), 2);
        assert!(fragments[1].contains("Total fat, with trans"));
    }

    #[test]
    fn test_escaped_quote_does_not_toggle() {
        // The escaped quotes inside the first fragment would otherwise close
        // the string early and expose the inner comma.
        let fragments = split_fragments(r#""a\",b", "c""#);
        assert_eq!(fragments, vec![r#""a\",b""#.to_string(), r#""c""#.to_string()]);
    }

    #[test]
    fn test_split_strips_one_brace_pair_only() {
        let fragments = split_fragments("{{x}}");
        assert_eq!(fragments, vec!["{x}".to_string()]);
    }

    #[test]
    fn test_split_empty_payload() {
        assert!(split_fragments("").is_empty());
        assert!(split_fragments("{}").is_empty());
    }

    #[test]
    fn test_parse_escaped_fragments() {
        let facts = parse_facts(ESCAPED_PAYLOAD);
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].name, "Calories");
        assert_eq!(facts[0].value, 150.0);
        assert_eq!(facts[1].name, "Total fat, with trans");
        assert_eq!(facts[1].value, 5.0);
    }

    #[test]
    fn test_parse_single_object() {
        let facts = parse_facts(r#"{"name":"Protein","value":20.37}"#);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].name, "Protein");
    }

    #[test]
    fn test_parse_json_array_with_extra_fields() {
        let payload = r#"[
            {"name": "Calories", "value": 210, "unit": "kcal"},
            {"name": "Protein", "value": 12.5, "dailyValue": 25},
            {"name": "Sodium"}
        ]"#;
        let facts = parse_facts(payload);
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[1].value, 12.5);
    }

    #[test]
    fn test_malformed_fragments_are_skipped() {
        let payload = r#"{"{\"name\": \"Protein\", \"value\": 9}", "garbage", "{\"name\": \"Sugar\", \"value\": \"lots\"}"}"#;
        let facts = parse_facts(payload);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].name, "Protein");
    }

    #[test]
    fn test_completely_unreadable_payload() {
        assert!(parse_facts("not a payload at all").is_empty());
    }
}
