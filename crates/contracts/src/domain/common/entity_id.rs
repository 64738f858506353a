use serde::{Deserialize, Deserializer};

/// Identifier of every backend row
pub type EntityId = i64;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

fn parse_raw<E: serde::de::Error>(raw: RawId) -> Result<Option<EntityId>, E> {
    match raw {
        RawId::Number(n) => Ok(Some(n)),
        RawId::Text(s) if s.trim().is_empty() => Ok(None),
        RawId::Text(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| E::custom(format!("invalid id '{}': {}", s, e))),
    }
}

/// Accepts a reference id sent either as a JSON number or as a numeric string.
///
/// The backend stores some foreign keys (customer number, sales rep) as text.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawId::deserialize(deserializer)?;
    parse_raw(raw)?.ok_or_else(|| serde::de::Error::custom("empty id"))
}

/// Same as [`lenient_id`] for optional references; `null` and "" map to `None`.
pub fn lenient_id_opt<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        Some(raw) => parse_raw(raw),
        None => Ok(None),
    }
}

/// Reads a nullable string column as an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_id")]
        owner: EntityId,
        #[serde(default, deserialize_with = "lenient_id_opt")]
        rep: Option<EntityId>,
        #[serde(default, deserialize_with = "null_as_empty")]
        note: String,
    }

    #[test]
    fn test_numeric_and_text_ids() {
        let row: Row = serde_json::from_str(r#"{"owner": 103, "rep": "1370"}"#).unwrap();
        assert_eq!(row.owner, 103);
        assert_eq!(row.rep, Some(1370));
        assert_eq!(row.note, "");

        let row: Row = serde_json::from_str(r#"{"owner": "42", "rep": null, "note": null}"#).unwrap();
        assert_eq!(row.owner, 42);
        assert_eq!(row.rep, None);
    }

    #[test]
    fn test_blank_optional_id() {
        let row: Row = serde_json::from_str(r#"{"owner": 1, "rep": ""}"#).unwrap();
        assert_eq!(row.rep, None);
    }

    #[test]
    fn test_invalid_id() {
        assert!(serde_json::from_str::<Row>(r#"{"owner": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"owner": ""}"#).is_err());
    }
}
