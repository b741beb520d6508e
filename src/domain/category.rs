//! Normalisation of the carrier's postal-service classification.

use crate::domain::payload::CarrierPostalType;
use crate::domain::text::capitalize_words;
use crate::domain::tracking::Category;

/// Category name used when the carrier omits classification.
pub const UNKNOWN_CATEGORY_NAME: &str = "Desconhecido";

/// Category description used when the carrier omits classification.
pub const UNKNOWN_CATEGORY_DESCRIPTION: &str = "Não identificado";

/// Normalise an optional postal classification into a display category.
///
/// Absent classification maps to the fixed unknown/unidentified sentinel
/// pair. Otherwise both fields are word-capitalised, and descriptions that
/// are neither the unidentified sentinel nor an international service get
/// their embedded two-letter service abbreviation upper-cased.
pub fn normalize_category(postal_type: Option<&CarrierPostalType>) -> Category {
    let Some(postal_type) = postal_type else {
        return Category {
            name: UNKNOWN_CATEGORY_NAME.to_owned(),
            description: UNKNOWN_CATEGORY_DESCRIPTION.to_owned(),
        };
    };

    let name = capitalize_words(
        postal_type
            .category
            .as_deref()
            .unwrap_or(UNKNOWN_CATEGORY_NAME),
    );
    let description = capitalize_words(
        postal_type
            .description
            .as_deref()
            .unwrap_or(UNKNOWN_CATEGORY_DESCRIPTION),
    );

    Category {
        name,
        description: uppercase_service_code(description),
    }
}

/// Upper-case the first standalone two-character token of `description`.
///
/// Unidentified and international descriptions carry no embedded service
/// abbreviation and pass through untouched, as do descriptions without any
/// two-character token.
fn uppercase_service_code(description: String) -> String {
    let lowered = description.to_lowercase();
    if lowered.contains("identificado") || lowered.contains("internacional") {
        return description;
    }

    let mut replaced = false;
    description
        .split(' ')
        .map(|word| {
            if !replaced && word.chars().count() == 2 {
                replaced = true;
                word.to_uppercase()
            } else {
                word.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    //! Unit tests for category normalisation.

    use rstest::rstest;

    use super::*;

    fn postal_type(category: Option<&str>, description: Option<&str>) -> CarrierPostalType {
        CarrierPostalType {
            category: category.map(str::to_owned),
            description: description.map(str::to_owned),
        }
    }

    #[test]
    fn absent_classification_maps_to_sentinel_pair() {
        let category = normalize_category(None);

        assert_eq!(category.name, UNKNOWN_CATEGORY_NAME);
        assert_eq!(category.description, UNKNOWN_CATEGORY_DESCRIPTION);
    }

    #[test]
    fn missing_fields_fall_back_to_sentinels_before_capitalisation() {
        let category = normalize_category(Some(&postal_type(None, None)));

        assert_eq!(category.name, "Desconhecido");
        assert_eq!(category.description, "Não Identificado");
    }

    #[rstest]
    #[case("etiqueta logica se", "Etiqueta Logica SE")]
    #[case("objeto registrado rg urgente", "Objeto Registrado RG Urgente")]
    fn standalone_two_letter_token_is_upper_cased(
        #[case] description: &str,
        #[case] expected: &str,
    ) {
        let category = normalize_category(Some(&postal_type(Some("sedex"), Some(description))));

        assert_eq!(category.name, "Sedex");
        assert_eq!(category.description, expected);
    }

    #[test]
    fn only_the_first_two_letter_token_changes() {
        let category = normalize_category(Some(&postal_type(Some("pac"), Some("malote fe do rn"))));

        assert_eq!(category.description, "Malote FE Do Rn");
    }

    #[rstest]
    #[case("não identificado", "Não Identificado")]
    #[case("encomenda internacional", "Encomenda Internacional")]
    fn sentinel_descriptions_pass_through_unchanged(
        #[case] description: &str,
        #[case] expected: &str,
    ) {
        let category = normalize_category(Some(&postal_type(Some("outros"), Some(description))));

        assert_eq!(category.description, expected);
    }

    #[test]
    fn description_without_two_letter_token_is_unchanged() {
        let category =
            normalize_category(Some(&postal_type(Some("pac"), Some("encomenda comum"))));

        assert_eq!(category.description, "Encomenda Comum");
    }
}
