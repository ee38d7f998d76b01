use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::CheckinError;

/// Identity fields the airline matches a reservation against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traveler {
    pub first_name: String,
    pub last_name: String,
    pub confirmation_number: String,
}

impl Traveler {
    /// Check the three identity fields.
    ///
    /// Reports the first blank field. Values are kept as given; the confirmation
    /// number format is left to the airline.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        confirmation_number: impl Into<String>,
    ) -> Result<Self, CheckinError> {
        let first_name = required(first_name.into(), "first name")?;
        let last_name = required(last_name.into(), "last name")?;
        let confirmation_number = required(confirmation_number.into(), "confirmation number")?;

        Ok(Self {
            first_name,
            last_name,
            confirmation_number,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, CheckinError> {
    if value.trim().is_empty() {
        return Err(CheckinError::MissingField(field));
    }
    Ok(value)
}

/// Mobile check-in response (every field optional, unknown fields ignored)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckInResponse {
    /// Status code the airline embeds in the body, not the HTTP status line.
    #[serde(rename = "httpStatusCode", default, deserialize_with = "lenient")]
    pub http_status_code: i64,
    #[serde(rename = "opstatus", default, deserialize_with = "lenient")]
    pub operation_status: String,
    #[serde(rename = "errmsg", default, deserialize_with = "lenient")]
    pub error_message: String,
    #[serde(rename = "interMsg", default, deserialize_with = "lenient")]
    pub interstitial_message: String,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    /// Boarding pass link, only present on some outcomes.
    #[serde(rename = "flightcheckin_url", default, deserialize_with = "lenient")]
    pub check_in_url: String,
    #[serde(rename = "CODA_PNR", default, deserialize_with = "lenient")]
    pub coda_pnr: String,

    // Airline-defined shapes, passed through untouched.
    #[serde(rename = "departItinerary", default, deserialize_with = "lenient")]
    pub depart_itinerary: Vec<Value>,
    #[serde(rename = "returnItinerary", default, deserialize_with = "lenient")]
    pub return_itinerary: Vec<Value>,
    #[serde(rename = "departOperator", default, deserialize_with = "lenient")]
    pub depart_operator: Vec<Value>,
    #[serde(rename = "returnOperator", default, deserialize_with = "lenient")]
    pub return_operator: Vec<Value>,
    #[serde(rename = "form_input", default, deserialize_with = "lenient")]
    pub form_input: Vec<Value>,
    #[serde(rename = "passenger_names", default, deserialize_with = "lenient")]
    pub passenger_names: Vec<Value>,

    #[serde(flatten)]
    pub hazmat: HazmatNotice,
}

/// Hazardous materials disclosure text shown next to the boarding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HazmatNotice {
    #[serde(rename = "hazmatnoteTitle", default, deserialize_with = "lenient")]
    pub note_title: String,
    #[serde(rename = "hazmatnoteContent", default, deserialize_with = "lenient")]
    pub note_content: String,
    #[serde(rename = "hazmatnoteContentBold", default, deserialize_with = "lenient")]
    pub note_content_bold: String,
    #[serde(rename = "hazmatnoteLinkText", default, deserialize_with = "lenient")]
    pub note_link_text: String,
    #[serde(rename = "hazmatnoteLinkValue", default, deserialize_with = "lenient")]
    pub note_link_value: String,
    #[serde(rename = "hazViewMoreLinkHeading", default, deserialize_with = "lenient")]
    pub view_more_heading: String,
    #[serde(rename = "hazViewMoreLinkContentBold", default, deserialize_with = "lenient")]
    pub view_more_content_bold: String,
    #[serde(rename = "hazViewMoreLinkContent1", default, deserialize_with = "lenient")]
    pub view_more_content_1: String,
    #[serde(rename = "hazViewMoreLinkContent2", default, deserialize_with = "lenient")]
    pub view_more_content_2: String,
    #[serde(rename = "hazViewMoreLinkContent3a", default, deserialize_with = "lenient")]
    pub view_more_content_3a: String,
    #[serde(rename = "hazViewMoreLinkContent3b", default, deserialize_with = "lenient")]
    pub view_more_content_3b: String,
    #[serde(rename = "hazViewMoreLinkContent4", default, deserialize_with = "lenient")]
    pub view_more_content_4: String,
    #[serde(
        rename = "hazViewMoreLinkContent4LinkText",
        default,
        deserialize_with = "lenient"
    )]
    pub view_more_content_4_link_text: String,
    #[serde(
        rename = "hazViewMoreLinkContent4LinkValue",
        default,
        deserialize_with = "lenient"
    )]
    pub view_more_content_4_link_value: String,
}

/// Deserialize a field, falling back to its default when the JSON type doesn't fit.
///
/// The endpoint changes field types between outcomes (`"none"` where a list is
/// expected, `null` for strings), and one odd field must not sink the rest.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traveler_keeps_fields_as_given() {
        let traveler = Traveler::new("  Jane ", "Doe\n", " ABC123").unwrap();
        assert_eq!(traveler.first_name, "  Jane ");
        assert_eq!(traveler.last_name, "Doe\n");
        assert_eq!(traveler.confirmation_number, " ABC123");
    }

    #[test]
    fn test_traveler_reports_first_blank_field() {
        let err = Traveler::new("Jane", "   ", "").unwrap_err();
        assert!(matches!(err, CheckinError::MissingField("last name")));

        let err = Traveler::new("", "Doe", "ABC123").unwrap_err();
        assert!(matches!(err, CheckinError::MissingField("first name")));

        let err = Traveler::new("Jane", "Doe", " ").unwrap_err();
        assert!(matches!(err, CheckinError::MissingField("confirmation number")));
    }

    #[test]
    fn test_hazmat_fields_flatten_from_top_level() {
        let response: CheckInResponse = serde_json::from_str(
            r#"{
                "hazmatnoteTitle": "Hazardous Materials",
                "hazViewMoreLinkContent4LinkValue": "https://example.test/hazmat",
                "hazViewMoreLinkContent3a": 12
            }"#,
        )
        .unwrap();

        assert_eq!(response.hazmat.note_title, "Hazardous Materials");
        assert_eq!(
            response.hazmat.view_more_content_4_link_value,
            "https://example.test/hazmat"
        );
        assert_eq!(response.hazmat.view_more_content_3a, "");
    }

    #[test]
    fn test_null_string_falls_back_to_empty() {
        let response: CheckInResponse =
            serde_json::from_str(r#"{"errmsg": null, "title": "Check In"}"#).unwrap();
        assert_eq!(response.error_message, "");
        assert_eq!(response.title, "Check In");
    }

    #[test]
    fn test_status_code_as_string_falls_back_to_zero() {
        let response: CheckInResponse =
            serde_json::from_str(r#"{"httpStatusCode": "200", "opstatus": 0}"#).unwrap();
        assert_eq!(response.http_status_code, 0);
        assert_eq!(response.operation_status, "");
    }
}
