use crate::catalog::{CatalogSnapshot, TextEntry};
use crate::lookup::normalize::normalize;

/// Outcome of the two-source instruction lookup. `Default` is the
/// legacy table's last-column catch-all; it renders exactly like
/// `Legacy` but callers report it separately.
#[derive(Debug, Clone)]
pub enum ResolvedText {
    Structured(TextEntry),
    Legacy(String),
    Default(String),
    Missing,
}

impl ResolvedText {
    pub const fn source(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::Legacy(_) => "legacy",
            Self::Default(_) => "default",
            Self::Missing => "missing",
        }
    }
}

/// Resolves the instruction text for a (partner, method) pair. The
/// structured catalog always wins; the legacy table is the fallback
/// kept alive for the duration of the catalog format migration.
pub fn resolve_text(partner: &str, method: &str, snapshot: &CatalogSnapshot) -> ResolvedText {
    let normalized_partner = normalize(partner);
    let normalized_method = normalize(method);

    if let Some(catalog) = &snapshot.texts {
        // Entry order is file insertion order; the first match wins.
        for entry in &catalog.entries {
            if normalize(&entry.partner) == normalized_partner
                && normalize(&entry.method) == normalized_method
            {
                return ResolvedText::Structured(entry.clone());
            }
        }
    }

    let table = &snapshot.legacy_texts;
    if table.rows.len() < 3 {
        return ResolvedText::Legacy(String::new());
    }

    let partners = table.partners();
    let methods = table.methods();
    let bodies = table.bodies();

    // Column 0 is the label column in the legacy sheet.
    for index in 1..partners.len() {
        let column_partner = partners.get(index).map(String::as_str).unwrap_or("");
        let column_method = methods.get(index).map(String::as_str).unwrap_or("");
        if normalize(column_partner) == normalized_partner
            && normalize(column_method) == normalized_method
        {
            let body = bodies.get(index).map(String::as_str).unwrap_or("");
            return ResolvedText::Legacy(body.to_string());
        }
    }

    // No column matched: the last body cell is the deliberate
    // catch-all default, not an error.
    match bodies.last() {
        Some(body) if !body.is_empty() => ResolvedText::Default(body.clone()),
        _ => ResolvedText::Missing,
    }
}
