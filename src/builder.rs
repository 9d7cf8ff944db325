use std::time::Duration;

use log::{debug, info};
use scraper::Html;

use crate::annotator::annotate;
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::extractors::SectionExtractor;
use crate::fetchers::{PageFetcher, RequestFetcher};
use crate::ingredients::IngredientParser;
use crate::model::{render_document, RecipeMetadata, ScrapedRecipe};

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch the recipe page at a URL
    Url(String),
    /// Ingredient and step lines obtained elsewhere
    Lists {
        ingredients: Vec<String>,
        steps: Vec<String>,
    },
}

/// Represents the desired output format
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Full Cooklang document (default)
    #[default]
    Cooklang,
    /// Raw sections without conversion
    Components,
}

/// Result of a recipe import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    /// Cooklang document: metadata header, blank line, annotated steps
    Cooklang(String),
    /// Sections as scraped
    Components(ScrapedRecipe),
}

/// Builder for configuring and executing recipe imports
#[derive(Default)]
pub struct RecipeImporterBuilder {
    source: Option<InputSource>,
    mode: OutputMode,
    metadata: Option<RecipeMetadata>,
    config: Option<ImportConfig>,
    fetcher: Option<Box<dyn PageFetcher>>,
    timeout: Option<Duration>,
}

impl RecipeImporterBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use cookbook_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recette");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Use ingredient and step lines directly, skipping any fetch
    ///
    /// # Example
    /// ```
    /// use cookbook_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .lists(vec!["2 oeufs"], vec!["Battre les oeufs."]);
    /// ```
    pub fn lists<I, J, S, T>(mut self, ingredients: I, steps: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        self.source = Some(InputSource::Lists {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            steps: steps.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Header values; defaults to the scraped name and the URL as source.
    /// Without a name (e.g. with `.lists()`), the title line is left out.
    pub fn metadata(mut self, metadata: RecipeMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Use this configuration instead of loading `cookbook.toml` and the environment
    pub fn config(mut self, config: ImportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the HTTP fetcher, e.g. with a [`crate::FixtureFetcher`]
    pub fn fetcher(mut self, fetcher: impl PageFetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Set a timeout for HTTP requests made by the default fetcher
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Return the scraped sections without conversion
    pub fn extract_only(mut self) -> Self {
        self.mode = OutputMode::Components;
        self
    }

    /// Build and execute the recipe import operation
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - Configuration cannot be loaded
    /// - The page cannot be fetched
    /// - The page has neither an ingredient nor a step section
    pub async fn build(self) -> Result<ImportResult, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError(
                "No input source specified. Use .url() or .lists()".to_string(),
            )
        })?;

        let config = match self.config {
            Some(config) => config,
            None => ImportConfig::load()?,
        };

        let (recipe, url) = match source {
            InputSource::Url(url) => {
                let fetcher: Box<dyn PageFetcher> = match (self.fetcher, self.timeout) {
                    (Some(fetcher), timeout) => {
                        if timeout.is_some() {
                            debug!("Timeout ignored: a custom fetcher is in use");
                        }
                        fetcher
                    }
                    (None, Some(timeout)) => Box::new(RequestFetcher::new(
                        Some(timeout),
                        &config.scraping.user_agent,
                    )?),
                    (None, None) => Box::new(RequestFetcher::from_config(&config.scraping)?),
                };
                let html = fetcher.fetch(&url).await?;
                let document = Html::parse_document(&html);
                let recipe = SectionExtractor::from_config(&config.scraping).extract(&document)?;
                (recipe, Some(url))
            }
            InputSource::Lists { ingredients, steps } => (
                ScrapedRecipe {
                    name: String::new(),
                    ingredients,
                    steps,
                },
                None,
            ),
        };

        if let OutputMode::Components = self.mode {
            return Ok(ImportResult::Components(recipe));
        }

        let metadata = self.metadata.unwrap_or_else(|| RecipeMetadata {
            title: recipe.name.clone(),
            time: None,
            servings: config.default_servings,
            source: url.clone(),
        });

        let mapping = IngredientParser::new(config.vocabulary).parse(&recipe.ingredients);
        let body = annotate(&recipe.steps, &mapping);
        info!(
            "Imported '{}' with {} ingredients and {} steps",
            metadata.title,
            mapping.len(),
            recipe.steps.len()
        );

        Ok(ImportResult::Cooklang(render_document(&metadata, &body)))
    }
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
