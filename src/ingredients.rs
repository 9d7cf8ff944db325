//! Conversion of human-written ingredient lines into Cooklang ingredient tokens.
//!
//! Lines such as `"200g de farine"`, `"2 oeufs"` or `"huile d'olive"` are matched
//! against a fixed rule precedence, the first matching rule wins:
//!
//! 1. a line without any space is kept as is (`"sel"`),
//! 2. a line starting with digits carries a quantity and maybe a unit
//!    (`"200g de farine"` -> `@farine{200%g}`),
//! 3. a line containing a known multi-word phrase keeps that phrase as the name
//!    (`"une cuillère huile d'olive"` -> `@huile d'olive{une cuillère}`),
//! 4. a line containing a split marker (`" de "`, `" d'"`) is split on it
//!    (`"une pincée de sel"` -> `@sel{une pincée}`),
//! 5. anything else becomes a bare reference (`"poivre noir"` -> `@poivre noir`).

use log::debug;
use serde::{Deserialize, Serialize};

const BULLET: &str = "* ";

/// Words and phrases the parser relies on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Vocabulary {
    /// Unit keywords recognized when written as a separate word after the quantity
    #[serde(default = "default_units")]
    pub units: Vec<String>,
    /// Multi-word ingredient names that must never be split
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
    /// Markers separating a free-text quantity from the ingredient name
    #[serde(default = "default_split_markers")]
    pub split_markers: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            units: default_units(),
            phrases: default_phrases(),
            split_markers: default_split_markers(),
        }
    }
}

fn default_units() -> Vec<String> {
    ["g", "kg", "mg", "cl", "dl", "ml", "l"]
        .iter()
        .map(|u| u.to_string())
        .collect()
}

fn default_phrases() -> Vec<String> {
    [
        "huile d'olive",
        "herbes de provence",
        "noix de coco",
        "pommes de terre",
        "crème fraîche",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_split_markers() -> Vec<String> {
    vec![" de ".to_string(), " d'".to_string()]
}

/// One parsed ingredient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRecord {
    pub name: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    /// Rendered markup, e.g. `@farine{200%g}`
    pub token: String,
}

impl IngredientRecord {
    fn bare(line: &str) -> Self {
        Self {
            name: line.to_string(),
            quantity: None,
            unit: None,
            token: line.to_string(),
        }
    }

    fn measured(name: String, quantity: String, unit: Option<String>) -> Self {
        let token = match &unit {
            Some(unit) => format!("@{name}{{{quantity}%{unit}}}"),
            None => format!("@{name}{{{quantity}}}"),
        };
        Self {
            name,
            quantity: Some(quantity),
            unit,
            token,
        }
    }

    /// Free-text amount such as `"1 cuillère"`; the braces are rendered even when empty.
    fn described(name: String, amount: String) -> Self {
        let token = format!("@{name}{{{amount}}}");
        Self {
            name,
            quantity: (!amount.is_empty()).then_some(amount),
            unit: None,
            token,
        }
    }

    fn reference(name: String) -> Self {
        let token = format!("@{name}");
        Self {
            name,
            quantity: None,
            unit: None,
            token,
        }
    }
}

/// Ingredient name to token mapping, iterated in first-insertion order.
///
/// Inserting a name that is already present replaces its record but keeps its
/// position, so a recipe listing the same ingredient twice ends up with the last
/// line's quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientMapping {
    records: Vec<IngredientRecord>,
}

impl IngredientMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: IngredientRecord) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => {
                debug!("Overwriting ingredient '{}'", record.name);
                *existing = record;
            }
            None => self.records.push(record),
        }
    }

    /// Token for `name`, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.record(name).map(|r| r.token.as_str())
    }

    pub fn record(&self, name: &str) -> Option<&IngredientRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.record(name).is_some()
    }

    /// `(name, token)` pairs in mapping order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records
            .iter()
            .map(|r| (r.name.as_str(), r.token.as_str()))
    }

    pub fn records(&self) -> &[IngredientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<IngredientRecord> for IngredientMapping {
    fn from_iter<I: IntoIterator<Item = IngredientRecord>>(iter: I) -> Self {
        let mut mapping = IngredientMapping::new();
        for record in iter {
            mapping.insert(record);
        }
        mapping
    }
}

/// Parser for raw ingredient lines.
#[derive(Debug, Clone, Default)]
pub struct IngredientParser {
    vocabulary: Vocabulary,
}

impl IngredientParser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse every line; blank lines produce no entry.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> IngredientMapping {
        let mut mapping = IngredientMapping::new();
        for line in lines {
            if let Some(record) = self.parse_line(line.as_ref()) {
                mapping.insert(record);
            }
        }
        debug!("Parsed {} ingredients from {} lines", mapping.len(), lines.len());
        mapping
    }

    /// Parse a single line, `None` when it is blank after cleaning.
    pub fn parse_line(&self, raw: &str) -> Option<IngredientRecord> {
        let line = clean_line(raw);
        if line.is_empty() {
            return None;
        }

        if !line.contains(' ') {
            debug!("'{line}': single word");
            return Some(IngredientRecord::bare(&line));
        }

        if let Some(record) = self.leading_quantity(&line) {
            debug!("'{line}': leading quantity");
            return Some(record);
        }

        if let Some(phrase) = self
            .vocabulary
            .phrases
            .iter()
            .find(|p| !p.is_empty() && line.contains(p.as_str()))
        {
            debug!("'{line}': fixed phrase '{phrase}'");
            let amount = line.replace(phrase.as_str(), "").trim().to_string();
            return Some(IngredientRecord::described(phrase.clone(), amount));
        }

        if let Some((amount, name)) = self
            .vocabulary
            .split_markers
            .iter()
            .filter(|m| !m.is_empty())
            .find_map(|m| line.split_once(m.as_str()))
        {
            debug!("'{line}': split marker");
            return Some(IngredientRecord::described(
                name.trim().to_string(),
                amount.trim().to_string(),
            ));
        }

        debug!("'{line}': bare reference");
        Some(IngredientRecord::reference(line))
    }

    fn leading_quantity(&self, line: &str) -> Option<IngredientRecord> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let first = *words.first()?;
        let digits_end = first
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(first.len());
        if digits_end == 0 {
            return None;
        }

        // The glued suffix is taken as the unit without checking the vocabulary.
        let (quantity, unit, rest) = if digits_end < first.len() {
            let (digits, suffix) = first.split_at(digits_end);
            (digits, Some(suffix), &words[1..])
        } else {
            match words.get(1) {
                Some(word) if self.vocabulary.units.iter().any(|u| u == word) => {
                    (first, Some(*word), &words[2..])
                }
                _ => (first, None, &words[1..]),
            }
        };

        let name = rest.join(" ");
        let name = name
            .strip_prefix("de ")
            .or_else(|| name.strip_prefix("d'"))
            .unwrap_or(&name)
            .trim()
            .to_string();

        Some(IngredientRecord::measured(
            name,
            quantity.to_string(),
            unit.map(str::to_string),
        ))
    }
}

/// Remove a leading `"* "` bullet and surrounding whitespace, then lowercase.
fn clean_line(raw: &str) -> String {
    let line = raw.trim_start();
    line.strip_prefix(BULLET)
        .unwrap_or(line)
        .trim()
        .to_lowercase()
}

/// Strip a leading bullet and surrounding whitespace, keeping the original case.
pub(crate) fn strip_bullet(raw: &str) -> &str {
    let line = raw.trim_start();
    line.strip_prefix(BULLET).unwrap_or(line).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str]) -> IngredientMapping {
        IngredientParser::default().parse(lines)
    }

    #[test]
    fn test_glued_unit() {
        let mapping = parse(&["200g de farine"]);
        assert_eq!(mapping.get("farine"), Some("@farine{200%g}"));

        let record = mapping.record("farine").unwrap();
        assert_eq!(record.quantity.as_deref(), Some("200"));
        assert_eq!(record.unit.as_deref(), Some("g"));
    }

    #[test]
    fn test_glued_suffix_is_not_validated() {
        let mapping = parse(&["3gousses d'ail"]);
        assert_eq!(mapping.get("ail"), Some("@ail{3%gousses}"));
    }

    #[test]
    fn test_separate_known_unit() {
        let mapping = parse(&["50 cl de lait"]);
        assert_eq!(mapping.get("lait"), Some("@lait{50%cl}"));
    }

    #[test]
    fn test_separate_unknown_unit_is_part_of_name() {
        let mapping = parse(&["2 tranches de jambon"]);
        assert_eq!(mapping.get("tranches de jambon"), Some("@tranches de jambon{2}"));
    }

    #[test]
    fn test_quantity_without_unit() {
        let mapping = parse(&["2 oeufs"]);
        assert_eq!(mapping.get("oeufs"), Some("@oeufs{2}"));
        assert_eq!(mapping.record("oeufs").unwrap().unit, None);
    }

    #[test]
    fn test_elided_de_is_stripped() {
        let mapping = parse(&["100 g d'amandes"]);
        assert_eq!(mapping.get("amandes"), Some("@amandes{100%g}"));
    }

    #[test]
    fn test_single_word_kept_verbatim() {
        let mapping = parse(&["Sel"]);
        assert_eq!(mapping.get("sel"), Some("sel"));
    }

    #[test]
    fn test_fixed_phrase() {
        let mapping = parse(&["huile d'olive"]);
        assert_eq!(mapping.get("huile d'olive"), Some("@huile d'olive{}"));
        assert_eq!(mapping.record("huile d'olive").unwrap().quantity, None);

        let mapping = parse(&["1 filet huile d'olive"]);
        // Numeric rule takes precedence over the phrase rule.
        assert_eq!(mapping.get("filet huile d'olive"), Some("@filet huile d'olive{1}"));

        let mapping = parse(&["un filet huile d'olive"]);
        assert_eq!(mapping.get("huile d'olive"), Some("@huile d'olive{un filet}"));
    }

    #[test]
    fn test_phrase_wins_over_split_marker() {
        let mapping = parse(&["une pincée herbes de provence"]);
        assert_eq!(
            mapping.get("herbes de provence"),
            Some("@herbes de provence{une pincée}")
        );
    }

    #[test]
    fn test_split_marker() {
        let mapping = parse(&["une pincée de sel"]);
        assert_eq!(mapping.get("sel"), Some("@sel{une pincée}"));

        let mapping = parse(&["un peu d'eau"]);
        assert_eq!(mapping.get("eau"), Some("@eau{un peu}"));
    }

    #[test]
    fn test_split_marker_keeps_rest_of_line() {
        let mapping = parse(&["un zeste de citron de menton"]);
        assert_eq!(
            mapping.get("citron de menton"),
            Some("@citron de menton{un zeste}")
        );
    }

    #[test]
    fn test_fallback_reference() {
        let mapping = parse(&["poivre noir"]);
        assert_eq!(mapping.get("poivre noir"), Some("@poivre noir"));
    }

    #[test]
    fn test_bullet_and_blank_lines() {
        let mapping = parse(&["", "  ", "* ", "* 2 oeufs"]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("oeufs"), Some("@oeufs{2}"));
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let mapping = parse(&["100g de sucre", "2 oeufs", "50g de sucre"]);
        let entries: Vec<_> = mapping.iter().collect();
        assert_eq!(
            entries,
            vec![("sucre", "@sucre{50%g}"), ("oeufs", "@oeufs{2}")]
        );
    }

    #[test]
    fn test_custom_vocabulary() {
        let parser = IngredientParser::new(Vocabulary {
            units: vec!["tasse".to_string()],
            phrases: vec!["sauce soja".to_string()],
            split_markers: vec![" of ".to_string()],
        });

        let mapping = parser.parse(&["1 tasse riz", "un trait sauce soja", "a pinch of salt"]);
        assert_eq!(mapping.get("riz"), Some("@riz{1%tasse}"));
        assert_eq!(mapping.get("sauce soja"), Some("@sauce soja{un trait}"));
        assert_eq!(mapping.get("salt"), Some("@salt{a pinch}"));

        // " de " is no longer a marker.
        let mapping = parser.parse(&["une pincée de sel"]);
        assert_eq!(mapping.get("une pincée de sel"), Some("@une pincée de sel"));
    }

    #[test]
    fn test_from_iterator() {
        let mapping: IngredientMapping = vec![
            IngredientRecord::reference("sel".to_string()),
            IngredientRecord::reference("poivre".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(mapping.len(), 2);
        assert!(mapping.contains("poivre"));
    }
}
