/// Canonicalizes free text for fuzzy comparison: lowercase, every
/// whitespace character stripped, `ё` folded into `е`. Both sides of a
/// comparison must go through this.
pub fn normalize(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for character in text.chars() {
        if character.is_whitespace() {
            continue;
        }
        for lowered in character.to_lowercase() {
            output.push(if lowered == 'ё' { 'е' } else { lowered });
        }
    }
    output
}
