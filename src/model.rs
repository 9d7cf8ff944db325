use serde::Serialize;

/// Default number of servings written in a new recipe header
pub const DEFAULT_SERVINGS: u32 = 6;

/// Raw recipe sections as found on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrapedRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Values written in the `>>` header of a recipe file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeMetadata {
    pub title: String,
    pub time: Option<String>,
    pub servings: u32,
    pub source: Option<String>,
}

impl Default for RecipeMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            time: None,
            servings: DEFAULT_SERVINGS,
            source: None,
        }
    }
}

impl RecipeMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// `>> key: value` lines in the order title, time, servings, source.
    /// Missing optional values and an empty title are left out.
    pub fn to_header(&self) -> String {
        let servings = self.servings.to_string();
        let entries = [
            ("title", (!self.title.is_empty()).then_some(self.title.as_str())),
            ("time", self.time.as_deref()),
            ("servings", Some(servings.as_str())),
            ("source", self.source.as_deref()),
        ];

        let mut header = String::new();
        for (key, value) in entries {
            if let Some(value) = value {
                header.push_str(&format!(">> {key}: {value}\n"));
            }
        }
        header
    }
}

/// Full recipe file content: metadata header, a blank line, then the annotated body.
pub fn render_document(metadata: &RecipeMetadata, body: &str) -> String {
    format!("{}\n{}", metadata.to_header(), body)
}
