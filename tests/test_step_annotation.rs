use cookbook_import::{
    annotate, annotate_steps, parse_ingredients, IngredientMapping, IngredientRecord,
};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn reference(name: &str) -> IngredientRecord {
    IngredientRecord {
        name: name.to_string(),
        quantity: None,
        unit: None,
        token: format!("@{name}"),
    }
}

#[test]
fn test_order_sensitive_substitution() {
    let mapping: IngredientMapping = [reference("sel"), reference("poivre")].into_iter().collect();

    let result = annotate_steps(&["ajouter sel et poivre"], &mapping);
    assert_eq!(result.steps, vec!["ajouter @sel et @poivre".to_string()]);
    assert!(result.unmatched.is_empty());
    assert_eq!(result.render(), "ajouter @sel et @poivre\n");
}

#[test]
fn test_later_name_scans_rewritten_step() {
    // "el" does not occur in the raw step, only inside the "@sel" token inserted before it.
    let mapping: IngredientMapping = [reference("sel"), reference("el")].into_iter().collect();

    let result = annotate_steps(&["saler avec du sel"], &mapping);
    assert_eq!(result.steps, vec!["saler avec du @s@el".to_string()]);
    assert!(result.unmatched.is_empty());
}

#[test]
fn test_earlier_token_changes_what_later_names_see() {
    // "@sel{une pincée}" is inserted first; "pincée" is then found inside it.
    let mapping = parse_ingredients(&["une pincée de sel", "pincée"]);
    let text = annotate(&["saler le plat"], &mapping);
    assert_eq!(text, "saler le plat\n@sel{une pincée}\npincée\n");

    let text = annotate(&["ajouter le sel"], &mapping);
    assert_eq!(text, "ajouter le @sel{une pincée}\n");
}

#[test]
fn test_every_ingredient_appears_exactly_once() {
    let mapping = parse_ingredients(&[
        "250g de farine",
        "4 oeufs",
        "50 cl de lait",
        "une pincée de sel",
        "huile d'olive",
    ]);
    let steps = [
        "Mettre la farine dans un saladier.",
        "Ajouter les oeufs, puis la farine restante.",
        "",
        "* Verser le lait petit à petit.",
    ];

    let result = annotate_steps(&steps, &mapping);
    let text = result.render();

    for (_, token) in mapping.iter() {
        assert_eq!(count(&text, token), 1, "token {token} in:\n{text}");
    }
    assert_eq!(
        result.unmatched,
        vec!["@sel{une pincée}".to_string(), "@huile d'olive{}".to_string()]
    );
    assert_eq!(
        text,
        "Mettre la @farine{250%g} dans un saladier.\n\
         Ajouter les @oeufs{4}, puis la farine restante.\n\
         Verser le @lait{50%cl} petit à petit.\n\
         @sel{une pincée}\n\
         @huile d'olive{}\n"
    );
}

#[test]
fn test_no_steps_only_trailing_block() {
    let mapping = parse_ingredients(&["2 oeufs", "poivre noir"]);
    let steps: [&str; 0] = [];
    assert_eq!(annotate(&steps, &mapping), "@oeufs{2}\n@poivre noir\n");
}

#[test]
fn test_empty_mapping_leaves_steps_untouched() {
    let text = annotate(&["Préchauffer le four.", "  "], &IngredientMapping::new());
    assert_eq!(text, "Préchauffer le four.\n");
}
