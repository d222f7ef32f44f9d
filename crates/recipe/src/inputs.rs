//! Input file sequence

use contracts::{FilePattern, RecipeBlueprint, SourceConfig, YEAR_PLACEHOLDER};

/// One url per year of the closed range, in ascending order
pub fn input_urls(source: &SourceConfig) -> Vec<String> {
    (source.start_year..=source.end_year)
        .map(|year| {
            source
                .url_template
                .replace(YEAR_PLACEHOLDER, &year.to_string())
        })
        .collect()
}

/// Input files keyed along the store's concat dimension
pub fn file_pattern(blueprint: &RecipeBlueprint) -> FilePattern {
    FilePattern::from_file_sequence(
        input_urls(&blueprint.source),
        blueprint.store.concat_dim.clone(),
    )
}
