//! "Did you mean" hints for unknown parameter names.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use rust_params_core::catalog::ParameterCatalog;

/// Finds the catalog name that best matches a mistyped `name`, either as an
/// abbreviation of it or as something it contains.
#[must_use]
pub fn closest_parameter<'a>(catalog: &'a ParameterCatalog, name: &str) -> Option<&'a str> {
    let matcher = SkimMatcherV2::default();

    catalog
        .names()
        .filter_map(|candidate| {
            let abbreviation = matcher.fuzzy_match(candidate, name);
            let contained = matcher.fuzzy_match(name, candidate);
            abbreviation.max(contained).map(|score| (score, candidate))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, candidate)| candidate)
}
