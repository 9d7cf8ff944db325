use std::collections::HashSet;

use log::debug;

use crate::ingredients::{strip_bullet, IngredientMapping};

/// Steps with inline ingredient tokens, plus the ingredients no step mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedRecipe {
    pub steps: Vec<String>,
    /// Tokens of ingredients never found in any step, in mapping order
    pub unmatched: Vec<String>,
}

impl AnnotatedRecipe {
    /// One line per step followed by one line per unmatched ingredient.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for line in self.steps.iter().chain(self.unmatched.iter()) {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}

/// Replace the first mention of every ingredient across `steps` with its token.
///
/// Ingredients are tried in mapping order against the step text as already
/// rewritten, and each one is substituted at most once over the whole recipe.
/// Blank steps are dropped.
pub fn annotate_steps<S: AsRef<str>>(steps: &[S], mapping: &IngredientMapping) -> AnnotatedRecipe {
    let mut matched: HashSet<&str> = HashSet::new();
    let mut annotated = Vec::with_capacity(steps.len());

    for raw in steps {
        let mut step = strip_bullet(raw.as_ref()).to_string();
        if step.is_empty() {
            continue;
        }

        for (name, token) in mapping.iter() {
            // Unlike a plain substring test, an empty name is never inserted at offset 0;
            // it is left for the trailing block.
            if name.is_empty() || matched.contains(name) || !step.contains(name) {
                continue;
            }
            step = step.replacen(name, token, 1);
            matched.insert(name);
        }

        annotated.push(step);
    }

    let unmatched: Vec<String> = mapping
        .iter()
        .filter(|(name, _)| !matched.contains(name))
        .map(|(_, token)| token.to_string())
        .collect();

    debug!(
        "Annotated {} steps, {} of {} ingredients left unreferenced",
        annotated.len(),
        unmatched.len(),
        mapping.len()
    );

    AnnotatedRecipe {
        steps: annotated,
        unmatched,
    }
}

/// Rendered form of [`annotate_steps`].
pub fn annotate<S: AsRef<str>>(steps: &[S], mapping: &IngredientMapping) -> String {
    annotate_steps(steps, mapping).render()
}
