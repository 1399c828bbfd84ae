//! Image model catalog.

use serde::Serialize;

/// An image generation model offered by the remote API.
///
/// The catalog is fixed at compile time; `id` is the stable identifier that
/// config and history records refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Remote model identifier, e.g. `google/gemini-2.5-flash-image`.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Whether this is the catalog default.
    pub is_default: bool,
}

/// All models the client can select, default first.
pub const AVAILABLE_MODELS: [Model; 4] = [
    Model {
        id: "google/gemini-2.5-flash-image",
        name: "🍌 Nano Banana",
        is_default: true,
    },
    Model {
        id: "google/gemini-3-pro-image-preview",
        name: "🍌 Nano Banana Pro",
        is_default: false,
    },
    Model {
        id: "openai/gpt-5-image",
        name: "GPT-5 Image",
        is_default: false,
    },
    Model {
        id: "openai/gpt-5-image-mini",
        name: "GPT-5 Image Mini",
        is_default: false,
    },
];

impl Model {
    /// The whole catalog as a slice.
    pub const fn catalog() -> &'static [Self] {
        &AVAILABLE_MODELS
    }

    /// The catalog default model.
    pub fn default_model() -> Self {
        AVAILABLE_MODELS
            .iter()
            .copied()
            .find(|m| m.is_default)
            .unwrap_or(AVAILABLE_MODELS[0])
    }

    /// Look up a model by id.
    pub fn find(id: &str) -> Option<Self> {
        AVAILABLE_MODELS.iter().copied().find(|m| m.id == id)
    }

    /// Resolve an optional stored id, falling back to the default model
    /// when the id is absent or no longer in the catalog.
    pub fn resolve(id: Option<&str>) -> Self {
        id.and_then(Self::find).unwrap_or_else(Self::default_model)
    }

    /// Position of this model in the catalog.
    pub fn catalog_index(&self) -> usize {
        AVAILABLE_MODELS
            .iter()
            .position(|m| m.id == self.id)
            .unwrap_or(0)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::default_model()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
