use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Gender choice driving the occasion tag list. Serialized lowercase to
/// match the form values the generation service expects.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Fixed occasion vocabulary per gender.
pub fn occasions_for(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => &[
            "Wedding",
            "Reception",
            "Casual Outing",
            "Office / Formal",
            "Party Night",
            "Date Night",
            "Festive",
            "College",
            "Vacation",
        ],
        Gender::Female => &[
            "Wedding Guest",
            "Reception",
            "Party",
            "Casual",
            "Office",
            "Date",
            "Festive",
            "Brunch",
            "Vacation",
            "Traditional Function",
        ],
    }
}

/// Body of `POST /api/fash-ai`. Optional fields serialize as `null` when
/// the corresponding form field was left blank.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FashAiRequest {
    pub image: String,
    pub outfit: String,
    pub occasion: Option<String>,
    pub fit: Option<String>,
    pub color: Option<String>,
    pub accessories: Option<Vec<String>>,
    pub vibe: Option<String>,
    pub aesthetic: Option<String>,
    pub variation: bool,
    pub ratio: String,
}

/// Response of `POST /api/fash-ai`. The service relays upstream payloads
/// verbatim, so everything beyond `success` is optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FashAiResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub creation_id: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<GeneratedItem>>,
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// One generated asset. Upstream providers disagree on which field carries
/// the image URL, so every known spelling is kept.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct GeneratedItem {
    #[serde(default)]
    pub result_url: Option<String>,
    #[serde(default)]
    pub media_urls: Option<Vec<String>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl GeneratedItem {
    /// Resolves the displayable URL. Accessors are tried in a fixed order:
    /// `result_url`, `media_urls[0]`, `url`, `image_url`, `image`; the first
    /// non-empty one wins.
    pub fn primary_url(&self) -> Option<&str> {
        let candidates: [Option<&str>; 5] = [
            self.result_url.as_deref(),
            self.media_urls
                .as_deref()
                .and_then(|urls| urls.first())
                .map(String::as_str),
            self.url.as_deref(),
            self.image_url.as_deref(),
            self.image.as_deref(),
        ];
        candidates.into_iter().flatten().find(|url| !url.is_empty())
    }
}

impl FashAiResponse {
    /// URL of the first generated item. Only `result[0]` is consulted; a
    /// URL-less first item is a failure even when later items carry one.
    pub fn primary_url(&self) -> Option<&str> {
        self.result.as_ref()?.first()?.primary_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: &str) -> GeneratedItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn result_url_wins_over_everything() {
        let item = item(r#"{"result_url":"X","media_urls":["Y"],"url":"Z"}"#);
        assert_eq!(item.primary_url(), Some("X"));
    }

    #[test]
    fn media_urls_first_entry_is_second_choice() {
        let item = item(r#"{"media_urls":["Y","other"],"url":"Z"}"#);
        assert_eq!(item.primary_url(), Some("Y"));
    }

    #[test]
    fn remaining_fallbacks_in_order() {
        assert_eq!(item(r#"{"url":"Z","image_url":"A"}"#).primary_url(), Some("Z"));
        assert_eq!(item(r#"{"image_url":"A","image":"B"}"#).primary_url(), Some("A"));
        assert_eq!(item(r#"{"image":"B"}"#).primary_url(), Some("B"));
    }

    #[test]
    fn empty_item_has_no_url() {
        assert_eq!(item("{}").primary_url(), None);
        assert_eq!(item(r#"{"result_url":"","media_urls":[]}"#).primary_url(), None);
    }

    #[test]
    fn response_resolves_from_the_first_item() {
        let response: FashAiResponse =
            serde_json::from_str(r#"{"success":true,"result":[{"result_url":"X"},{"url":"Z"}]}"#)
                .unwrap();
        assert_eq!(response.primary_url(), Some("X"));
    }

    #[test]
    fn later_items_are_not_consulted() {
        let response: FashAiResponse =
            serde_json::from_str(r#"{"success":true,"result":[{},{"media_urls":["Y"]}]}"#).unwrap();
        assert_eq!(response.primary_url(), None);
    }

    #[test]
    fn response_without_result_list_has_no_url() {
        let response: FashAiResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(response.primary_url(), None);
    }

    #[test]
    fn request_serializes_blank_optionals_as_null() {
        let request = FashAiRequest {
            image: "data:image/png;base64,abc".into(),
            outfit: "Modern outfit".into(),
            occasion: None,
            fit: None,
            color: None,
            accessories: None,
            vibe: None,
            aesthetic: None,
            variation: false,
            ratio: "4:5".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["occasion"], serde_json::Value::Null);
        assert_eq!(value["accessories"], serde_json::Value::Null);
        assert_eq!(value["ratio"], "4:5");
    }

    #[test]
    fn gender_round_trips_lowercase() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }

    #[test]
    fn occasion_tables_are_gender_specific() {
        assert!(occasions_for(Gender::Male).contains(&"College"));
        assert!(!occasions_for(Gender::Female).contains(&"College"));
        assert_eq!(occasions_for(Gender::Female).len(), 10);
    }
}
