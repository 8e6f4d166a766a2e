use crate::catalog::AssignmentRow;
use crate::lookup::normalize::normalize;

// Only these two wave labels are in scope; every other wave value
// excludes the row outright.
const WAVE_ONE_LABEL: &str = "волна 1";
const WAVE_TWO_LABEL: &str = "волна 2";

#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: String,
    pub partner: String,
    pub restaurant: String,
    pub address: String,
    pub city: String,
    pub method: String,
    pub wave: String,
    pub display: String,
}

/// Scans the assignment sheet for rows whose normalized tester field
/// contains the normalized query. Substring containment, not equality,
/// so partial names work. Source row order is preserved; no dedup.
pub fn find_assignments(raw_name: &str, rows: &[AssignmentRow]) -> Vec<Assignment> {
    let normalized_query = normalize(raw_name);

    let mut results = Vec::new();
    for row in rows {
        let tester = normalize(&row.tester);
        let Some(wave) = wave_number(&row.wave) else {
            continue;
        };
        if !tester.contains(normalized_query.as_str()) {
            continue;
        }

        results.push(Assignment {
            id: row.id.clone(),
            partner: row.partner.clone(),
            restaurant: row.restaurant.clone(),
            address: row.address.clone(),
            city: row.city.clone(),
            method: row.method.clone(),
            wave: wave.to_string(),
            display: format!(
                "{} → {} → {} → {}",
                row.partner, row.restaurant, row.address, row.method
            ),
        });
    }

    results
}

fn wave_number(raw_wave: &str) -> Option<&'static str> {
    let wave = raw_wave.trim().to_lowercase();
    if wave == WAVE_ONE_LABEL {
        return Some("1");
    }
    if wave == WAVE_TWO_LABEL {
        return Some("2");
    }
    None
}
