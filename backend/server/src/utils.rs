use payloads::BusinessQuery;
use serde::Deserialize;
use tracing::warn;

use crate::error::AppError;

/// Name/location as sent by the caller, before validation.
#[derive(Deserialize, Debug, Default)]
pub struct RawQuery {
    pub name: Option<String>,
    pub location: Option<String>,
}

/// Both fields must be present and non-empty. Whitespace is kept as sent.
pub fn validate_query(raw: RawQuery, message: &'static str) -> Result<BusinessQuery, AppError> {
    match (raw.name, raw.location) {
        (Some(name), Some(location)) if !name.is_empty() && !location.is_empty() => {
            Ok(BusinessQuery { name, location })
        }
        _ => {
            warn!("Rejected query: {message}");

            Err(AppError::Validation(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BODY_FIELDS_REQUIRED;

    fn raw(name: Option<&str>, location: Option<&str>) -> RawQuery {
        RawQuery {
            name: name.map(str::to_string),
            location: location.map(str::to_string),
        }
    }

    #[test]
    fn test_valid() {
        let query = validate_query(raw(Some("Joe's Cafe"), Some("Austin")), BODY_FIELDS_REQUIRED)
            .unwrap();

        assert_eq!(query, BusinessQuery::new("Joe's Cafe", "Austin"));
    }

    #[test]
    fn test_missing_or_empty() {
        for case in [
            raw(Some(""), Some("Austin")),
            raw(Some("Joe's Cafe"), Some("")),
            raw(None, Some("Austin")),
            raw(Some("Joe's Cafe"), None),
            raw(None, None),
        ] {
            assert!(matches!(
                validate_query(case, BODY_FIELDS_REQUIRED),
                Err(AppError::Validation(BODY_FIELDS_REQUIRED))
            ));
        }
    }
}
