//! Wire types for the chat-completions endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub modalities: [&'static str; 2],
    pub messages: [ChatMessage; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl<'a> ChatRequest<'a> {
    pub fn image_prompt(model: &'a str, prompt: &str) -> Self {
        Self {
            model,
            modalities: ["image", "text"],
            messages: [ChatMessage {
                role: "user",
                content: format!("Generate an image of: {prompt}"),
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

impl ChatResponse {
    /// Message of the first choice, if the response carries one.
    pub fn into_first_message(self) -> Option<ResponseMessage> {
        self.choices?.into_iter().next()?.message
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    /// Usually a string; some providers send an array of typed parts.
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub images: Option<Vec<ImagePart>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImagePart {
    pub image_url: ImageUrl,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageUrl {
    pub url: String,
}

impl ResponseMessage {
    /// Text content, joined from text parts if the content is an array.
    pub fn text(&self) -> String {
        match &self.content {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Array(parts)) => parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(""),
            _ => String::new(),
        }
    }

    /// URL of the first image attachment.
    pub fn first_image_url(&self) -> Option<&str> {
        self.images
            .as_deref()
            .and_then(<[ImagePart]>::first)
            .map(|part| part.image_url.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(ChatRequest::image_prompt("m/x", "a cat")).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "m/x",
                "modalities": ["image", "text"],
                "messages": [{"role": "user", "content": "Generate an image of: a cat"}]
            })
        );
    }

    #[test]
    fn test_text_from_parts() {
        let message: ResponseMessage = serde_json::from_value(json!({
            "content": [{"type": "text", "text": "a "}, {"type": "text", "text": "cat"}]
        }))
        .unwrap();
        assert_eq!(message.text(), "a cat");
        assert_eq!(message.first_image_url(), None);
    }

    #[test]
    fn test_first_message_absent_shapes() {
        for body in [
            json!({}),
            json!({"choices": null}),
            json!({"choices": []}),
            json!({"choices": [{}]}),
            json!({"choices": [{"message": null}]}),
        ] {
            let response: ChatResponse = serde_json::from_value(body.clone()).unwrap();
            assert!(response.into_first_message().is_none(), "body: {body}");
        }
    }

    #[test]
    fn test_null_content_is_empty() {
        let message: ResponseMessage =
            serde_json::from_value(json!({"content": null, "images": []})).unwrap();
        assert_eq!(message.text(), "");
        assert_eq!(message.first_image_url(), None);
    }
}
