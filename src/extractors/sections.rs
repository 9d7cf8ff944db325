use log::debug;
use scraper::{Html, Selector};

use crate::config::ScrapingConfig;
use crate::error::ImportError;
use crate::model::ScrapedRecipe;

/// Elements whose text is never shown on the page
const HIDDEN_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Finds the ingredient list and numbered steps by their headings.
///
/// The page is read as the sequence of its visible text nodes. Ingredient lines
/// are the nodes between the ingredients heading and the first step heading.
/// A step is everything between its heading and the next one; the last step
/// only takes the node right after its heading, since the rest of the page
/// follows it.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    ingredients_header: String,
    step_header: String,
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::from_config(&ScrapingConfig::default())
    }
}

impl SectionExtractor {
    pub fn new(ingredients_header: impl Into<String>, step_header: impl Into<String>) -> Self {
        Self {
            ingredients_header: ingredients_header.into().to_lowercase(),
            step_header: step_header.into().to_lowercase(),
        }
    }

    pub fn from_config(config: &ScrapingConfig) -> Self {
        Self::new(&config.ingredients_header, &config.step_header)
    }

    pub fn extract(&self, document: &Html) -> Result<ScrapedRecipe, ImportError> {
        let lines = visible_lines(document);

        let ingredients_at = lines
            .iter()
            .position(|line| line.to_lowercase() == self.ingredients_header);
        let step_headers: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.is_step_header(line))
            .map(|(i, _)| i)
            .collect();

        if ingredients_at.is_none() && step_headers.is_empty() {
            return Err(ImportError::SectionNotFound(format!(
                "neither '{}' nor '{} 1' appear on the page",
                self.ingredients_header, self.step_header
            )));
        }

        let ingredients = match ingredients_at {
            Some(start) => {
                let end = step_headers
                    .iter()
                    .copied()
                    .find(|&i| i > start)
                    .unwrap_or(lines.len());
                lines[start + 1..end].to_vec()
            }
            None => Vec::new(),
        };

        let mut steps = Vec::with_capacity(step_headers.len());
        for (n, &at) in step_headers.iter().enumerate() {
            let body = match step_headers.get(n + 1) {
                Some(&next) => lines[at + 1..next].join(" "),
                None => lines.get(at + 1).cloned().unwrap_or_default(),
            };
            if !body.is_empty() {
                steps.push(body);
            }
        }

        let name = recipe_name(document);
        debug!(
            "Extracted '{}': {} ingredient lines, {} steps",
            name,
            ingredients.len(),
            steps.len()
        );

        Ok(ScrapedRecipe {
            name,
            ingredients,
            steps,
        })
    }

    /// `"Étape 3"`, matched case-insensitively
    fn is_step_header(&self, line: &str) -> bool {
        let line = line.to_lowercase();
        match line.strip_prefix(self.step_header.as_str()) {
            Some(rest) => {
                let number = rest.trim();
                !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        }
    }
}

/// Visible text nodes in document order, whitespace collapsed, blanks dropped.
fn visible_lines(document: &Html) -> Vec<String> {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
            });
            if hidden {
                return None;
            }
            let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
            (!line.is_empty()).then_some(line)
        })
        .collect()
}

fn recipe_name(document: &Html) -> String {
    ["h1", "title"]
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .find_map(|selector| {
            document
                .select(&selector)
                .next()
                .map(|el| el.text().collect::<Vec<_>>().join(" "))
                .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|text| !text.is_empty())
        })
        .unwrap_or_default()
}
