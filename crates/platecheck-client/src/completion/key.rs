pub const COMPLETION_KEY_PREFIX: &str = "completion_";

/// Persisted key for one (partner, restaurant, method) triple.
///
/// The raw fields are joined with `_` and whitespace runs collapse to
/// `_`. Deliberately NOT the fuzzy normalizer used by the catalog
/// lookups: the key stays case- and ё-sensitive so visually distinct
/// catalog values never collide in the store.
pub fn completion_key(partner: &str, restaurant: &str, method: &str) -> String {
    let joined = format!("{partner}_{restaurant}_{method}");

    let mut collapsed = String::with_capacity(joined.len());
    let mut in_whitespace = false;
    for character in joined.chars() {
        if character.is_whitespace() {
            if !in_whitespace {
                collapsed.push('_');
                in_whitespace = true;
            }
        } else {
            collapsed.push(character);
            in_whitespace = false;
        }
    }

    format!("{COMPLETION_KEY_PREFIX}{collapsed}")
}

#[cfg(test)]
mod tests {
    use super::completion_key;

    #[test]
    fn joins_fields_and_collapses_whitespace_runs() {
        assert_eq!(
            completion_key("Вкусно и точка", "Точка  1", "Доставка"),
            "completion_Вкусно_и_точка_Точка_1_Доставка"
        );
    }

    #[test]
    fn key_is_case_sensitive_unlike_catalog_lookups() {
        assert_ne!(
            completion_key("Вкусно", "Точка", "Доставка"),
            completion_key("вкусно", "Точка", "Доставка")
        );
    }

    #[test]
    fn differently_spaced_inputs_converge_after_collapsing() {
        assert_eq!(
            completion_key("Вкусно", "Точка 1", "Доставка"),
            completion_key("Вкусно", "Точка\t 1", "Доставка")
        );
    }
}
