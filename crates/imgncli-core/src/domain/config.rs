//! Persisted user preferences.

use serde::{Deserialize, Serialize};

use super::Model;

/// The singleton `config.json` document.
///
/// Created empty on first run and only ever replaced as a whole. Unknown
/// fields are ignored; `selectedModel` is accepted as an older spelling of
/// `selectedModelId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// `OpenRouter` API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Id of the selected catalog model.
    #[serde(alias = "selectedModel", skip_serializing_if = "Option::is_none")]
    pub selected_model_id: Option<String>,
}

impl Config {
    /// The configured API key, treating an empty string as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// The selected model, with the catalog fallback applied.
    pub fn selected_model(&self) -> Model {
        Model::resolve(self.selected_model_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_key(), None);
        assert_eq!(config.selected_model(), Model::default_model());
    }

    #[test]
    fn test_camel_case_round_trip() {
        let config = Config {
            api_key: Some("sk-or-abc".to_string()),
            selected_model_id: Some("openai/gpt-5-image".to_string()),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["apiKey"], "sk-or-abc");
        assert_eq!(json["selectedModelId"], "openai/gpt-5-image");

        let back: Config = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_legacy_selected_model_alias() {
        let config: Config =
            serde_json::from_str(r#"{"selectedModel":"openai/gpt-5-image-mini"}"#).unwrap();
        assert_eq!(config.selected_model().name, "GPT-5 Image Mini");
    }

    #[test]
    fn test_empty_api_key_is_absent() {
        let config = Config {
            api_key: Some(String::new()),
            selected_model_id: None,
        };
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_stale_model_falls_back_to_default() {
        let config = Config {
            api_key: None,
            selected_model_id: Some("removed/model".to_string()),
        };
        assert_eq!(config.selected_model(), Model::default_model());
    }
}
