//! Parse free-form model replies into impact records

use crate::error::ExtractError;
use newslens_domain::{ImpactRecord, ImpactType, Listed, MAX_IMPACT_SCORE};
use serde_json::Value;
use tracing::warn;

/// Parse a raw model reply into validated impact records.
///
/// The reply is not assumed to be pure JSON: models routinely surround
/// the array with prose or markdown fences. The greedy bracket scan
/// (first `[` to last `]`) strips all of that, matching the original
/// `\[.*\]` extraction. Elements that fail the field-domain check are
/// dropped individually; valid siblings survive.
pub fn parse_reply(reply: &str) -> Result<Vec<ImpactRecord>, ExtractError> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyResponse);
    }

    let json_str = extract_array(trimmed)?;

    let json: Value = serde_json::from_str(json_str)
        .map_err(|e| ExtractError::InvalidJson(e.to_string()))?;

    let elements = json
        .as_array()
        .ok_or_else(|| ExtractError::InvalidJson("expected a JSON array".to_string()))?;

    let mut records = Vec::new();
    for (idx, element) in elements.iter().enumerate() {
        match parse_record(element) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("dropping malformed element {}: {}", idx, e);
            }
        }
    }

    Ok(records)
}

/// Locate the greedy bracket-delimited array substring in the reply.
fn extract_array(reply: &str) -> Result<&str, ExtractError> {
    let start = reply.find('[').ok_or(ExtractError::NoJsonArray)?;
    let end = reply.rfind(']').ok_or(ExtractError::NoJsonArray)?;
    if end < start {
        return Err(ExtractError::NoJsonArray);
    }
    Ok(&reply[start..=end])
}

/// Parse and validate a single array element.
fn parse_record(element: &Value) -> Result<ImpactRecord, String> {
    let obj = element
        .as_object()
        .ok_or_else(|| "element is not a JSON object".to_string())?;

    let company_name = obj
        .get("company name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing or invalid 'company name'".to_string())?
        .to_string();

    let impact_type = obj
        .get("impact type")
        .and_then(|v| v.as_str())
        .and_then(ImpactType::parse)
        .ok_or_else(|| "missing or out-of-domain 'impact type'".to_string())?;

    let industry = obj
        .get("company industry")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing or invalid 'company industry'".to_string())?
        .to_string();

    let score = obj
        .get("impact score")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| "missing or invalid 'impact score'".to_string())?;
    if !(0..=MAX_IMPACT_SCORE as i64).contains(&score) {
        return Err(format!("impact score {} out of range [0, {}]", score, MAX_IMPACT_SCORE));
    }

    let listed = obj
        .get("listed")
        .and_then(|v| v.as_str())
        .and_then(Listed::parse)
        .ok_or_else(|| "missing or out-of-domain 'listed'".to_string())?;

    let record = ImpactRecord {
        company_name,
        impact_type,
        industry,
        impact_score: score as u8,
        listed,
    };
    record.validate()?;

    Ok(record)
}
