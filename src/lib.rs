pub mod annotator;
pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod ingredients;
pub mod model;

pub use annotator::{annotate, annotate_steps, AnnotatedRecipe};
pub use builder::{ImportResult, InputSource, OutputMode, RecipeImporter, RecipeImporterBuilder};
pub use config::{load_config, ImportConfig, ScrapingConfig};
pub use error::ImportError;
pub use extractors::SectionExtractor;
pub use fetchers::{FixtureFetcher, PageFetcher, RequestFetcher};
pub use ingredients::{IngredientMapping, IngredientParser, IngredientRecord, Vocabulary};
pub use model::{render_document, RecipeMetadata, ScrapedRecipe};

/// Parse ingredient lines with the default vocabulary.
///
/// # Example
/// ```
/// let mapping = cookbook_import::parse_ingredients(&["200g de farine", "2 oeufs"]);
/// assert_eq!(mapping.get("farine"), Some("@farine{200%g}"));
/// assert_eq!(mapping.get("oeufs"), Some("@oeufs{2}"));
/// ```
pub fn parse_ingredients<S: AsRef<str>>(lines: &[S]) -> IngredientMapping {
    IngredientParser::default().parse(lines)
}

/// Fetch a recipe page and return its raw sections.
pub async fn url_to_recipe(url: &str) -> Result<ScrapedRecipe, ImportError> {
    match RecipeImporter::builder().url(url).extract_only().build().await? {
        ImportResult::Components(recipe) => Ok(recipe),
        ImportResult::Cooklang(_) => Err(ImportError::BuilderError(
            "Unexpected Cooklang result in extract-only mode".to_string(),
        )),
    }
}

/// Fetch a recipe page and return the complete Cooklang document.
pub async fn url_to_cooklang(url: &str) -> Result<String, ImportError> {
    match RecipeImporter::builder().url(url).build().await? {
        ImportResult::Cooklang(document) => Ok(document),
        ImportResult::Components(_) => Err(ImportError::BuilderError(
            "Unexpected components result in conversion mode".to_string(),
        )),
    }
}
