use crate::lookup::assignments::Assignment;
use crate::lookup::text::ResolvedText;

const TOKEN_NAME: &str = "Название";
const TOKEN_ADDRESS: &str = "Адрес";
const TOKEN_METHOD: &str = "Способ проверки";
const TOKEN_SERVICE: &str = "Сервис для оформления доставки";
const TOKEN_TESTER: &str = "ФИО";
const SPECIFIC_TEXT_MARKER: &str = "{SPECIFIC_TEXT}";

const SERVICE_NOT_FOUND: &str = "сервис доставки (ссылка не найдена)";
const INSTRUCTION_NOT_FOUND: &str =
    "Инструкция не найдена для данной комбинации партнера и способа проверки.";

/// Renders the instruction body for one assignment.
///
/// Legacy texts are pre-rendered and only get newline cleanup.
/// Structured entries go through two substitution tiers: the entry's
/// own content first, then the general template with the finished
/// entry content spliced into `{SPECIFIC_TEXT}`.
pub fn render_instruction(
    resolved: &ResolvedText,
    assignment: &Assignment,
    general_template: Option<&str>,
    delivery_service: &str,
    tester_name: &str,
) -> String {
    let entry = match resolved {
        ResolvedText::Legacy(text) | ResolvedText::Default(text) => {
            return render_legacy(text);
        }
        ResolvedText::Missing => return INSTRUCTION_NOT_FOUND.to_string(),
        ResolvedText::Structured(entry) => entry,
    };

    let service_value = if delivery_service.is_empty() {
        SERVICE_NOT_FOUND
    } else {
        delivery_service
    };

    let mut specific = entry.content.clone();
    specific = replace_token(&specific, TOKEN_NAME, &assignment.restaurant);
    specific = replace_token(&specific, TOKEN_ADDRESS, &assignment.address);
    specific = replace_token(&specific, TOKEN_METHOD, &assignment.method);
    specific = replace_token(&specific, TOKEN_SERVICE, service_value);

    let mut result = general_template.unwrap_or("").to_string();
    result = replace_token(&result, TOKEN_TESTER, tester_name);
    result = replace_token(&result, TOKEN_NAME, &assignment.restaurant);
    result = replace_token(&result, TOKEN_ADDRESS, &assignment.address);
    result = replace_token(&result, TOKEN_METHOD, &assignment.method);
    result = result.replace(SPECIFIC_TEXT_MARKER, &specific);

    result = linkify(&result);
    result = result.replace("\r\n", "\n");

    if has_html_tag(&result) {
        result
    } else {
        result.replace('\n', "<br>")
    }
}

fn render_legacy(text: &str) -> String {
    let cleaned = collapse_blank_runs(&text.replace("\r\n", "\n"));
    cleaned.trim().replace('\n', "<br>")
}

/// Replaces both the raw `<Token>` form and the HTML-escaped
/// `&lt;Token&gt;` form the structured catalog carries.
fn replace_token(text: &str, token: &str, value: &str) -> String {
    text.replace(&format!("&lt;{token}&gt;"), value)
        .replace(&format!("<{token}>"), value)
}

/// Collapses runs of three or more newlines down to exactly two.
fn collapse_blank_runs(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut newline_run = 0usize;
    for character in text.chars() {
        if character == '\n' {
            newline_run += 1;
            if newline_run <= 2 {
                output.push('\n');
            }
        } else {
            newline_run = 0;
            output.push(character);
        }
    }
    output
}

/// Wraps bare http(s) URLs in anchors opening a new context without an
/// opener reference. A URL runs until whitespace, quote, or an angle
/// bracket.
fn linkify(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = url_start(rest) {
        output.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail
            .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"'))
            .unwrap_or(tail.len());
        let url = &tail[..end];
        output.push_str("<a href=\"");
        output.push_str(url);
        output.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
        output.push_str(url);
        output.push_str("</a>");
        rest = &tail[end..];
    }
    output.push_str(rest);
    output
}

fn url_start(text: &str) -> Option<usize> {
    let http = text.find("http://");
    let https = text.find("https://");
    match (http, https) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// True when the text already carries an HTML tag: `<`, optional `/`,
/// an ASCII letter, and a closing `>` somewhere after.
fn has_html_tag(text: &str) -> bool {
    let bytes = text.as_bytes();
    for (index, &byte) in bytes.iter().enumerate() {
        if byte != b'<' {
            continue;
        }
        let mut cursor = index + 1;
        if cursor < bytes.len() && bytes[cursor] == b'/' {
            cursor += 1;
        }
        if cursor < bytes.len()
            && bytes[cursor].is_ascii_alphabetic()
            && bytes[cursor..].contains(&b'>')
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::catalog::TextEntry;
    use crate::lookup::assignments::Assignment;
    use crate::lookup::text::ResolvedText;

    use super::{INSTRUCTION_NOT_FOUND, has_html_tag, linkify, render_instruction};

    fn assignment() -> Assignment {
        Assignment {
            id: String::new(),
            partner: "Вкусно".to_string(),
            restaurant: "Cafe X".to_string(),
            address: "1 Main St".to_string(),
            city: "Москва".to_string(),
            method: "Доставка".to_string(),
            wave: "1".to_string(),
            display: String::new(),
        }
    }

    fn structured(content: &str) -> ResolvedText {
        ResolvedText::Structured(TextEntry {
            partner: "Вкусно".to_string(),
            method: "Доставка".to_string(),
            content: content.to_string(),
        })
    }

    #[test]
    fn substitutes_both_template_tiers_without_residual_tokens() {
        let rendered = render_instruction(
            &structured("visit <Название>"),
            &assignment(),
            Some("<Название> at <Адрес> {SPECIFIC_TEXT}"),
            "",
            "Иванов",
        );
        assert_eq!(rendered, "Cafe X at 1 Main St visit Cafe X");
    }

    #[test]
    fn substitutes_escaped_token_form_and_tester_name() {
        let rendered = render_instruction(
            &structured("&lt;Способ проверки&gt;"),
            &assignment(),
            Some("&lt;ФИО&gt;: {SPECIFIC_TEXT}"),
            "",
            "Иванов Иван",
        );
        assert_eq!(rendered, "Иванов Иван: Доставка");
    }

    #[test]
    fn missing_delivery_service_uses_fixed_placeholder() {
        let rendered = render_instruction(
            &structured("Оформите через <Сервис для оформления доставки>"),
            &assignment(),
            Some("{SPECIFIC_TEXT}"),
            "",
            "Иванов",
        );
        assert_eq!(rendered, "Оформите через сервис доставки (ссылка не найдена)");
    }

    #[test]
    fn resolved_delivery_service_is_linkified() {
        let rendered = render_instruction(
            &structured("Ссылка: <Сервис для оформления доставки>"),
            &assignment(),
            Some("{SPECIFIC_TEXT}"),
            "https://order.example/x",
            "Иванов",
        );
        assert!(rendered.contains(
            "<a href=\"https://order.example/x\" target=\"_blank\" rel=\"noopener noreferrer\">"
        ));
    }

    #[test]
    fn legacy_text_gets_newline_cleanup_but_no_substitution() {
        let rendered = render_instruction(
            &ResolvedText::Legacy("Первая\r\n\r\n\r\n\r\nВторая <Название>".to_string()),
            &assignment(),
            Some("ignored {SPECIFIC_TEXT}"),
            "",
            "Иванов",
        );
        assert_eq!(rendered, "Первая<br><br>Вторая <Название>");
    }

    #[test]
    fn absent_general_template_collapses_to_empty() {
        // Without a template there is no {SPECIFIC_TEXT} marker to
        // splice the entry content into, so nothing survives.
        let rendered = render_instruction(
            &structured("visit <Название>"),
            &assignment(),
            None,
            "",
            "Иванов",
        );
        assert_eq!(rendered, "");
    }

    #[test]
    fn missing_text_renders_fixed_message() {
        let rendered =
            render_instruction(&ResolvedText::Missing, &assignment(), None, "", "Иванов");
        assert_eq!(rendered, INSTRUCTION_NOT_FOUND);
    }

    #[test]
    fn plain_newlines_become_breaks_only_without_markup() {
        let plain = render_instruction(
            &structured("a\nb"),
            &assignment(),
            Some("{SPECIFIC_TEXT}"),
            "",
            "Иванов",
        );
        assert_eq!(plain, "a<br>b");

        let markup = render_instruction(
            &structured("<b>a</b>\nb"),
            &assignment(),
            Some("{SPECIFIC_TEXT}"),
            "",
            "Иванов",
        );
        assert_eq!(markup, "<b>a</b>\nb");
    }

    #[test]
    fn linkify_captures_glued_trailing_punctuation() {
        // A URL runs until whitespace or markup, so punctuation glued
        // to it (a sentence-final period) ends up inside the link.
        assert_eq!(
            linkify("см. https://a.example/x."),
            "см. <a href=\"https://a.example/x.\" target=\"_blank\" \
             rel=\"noopener noreferrer\">https://a.example/x.</a>"
        );
    }

    #[test]
    fn linkify_stops_at_whitespace_and_quotes() {
        assert_eq!(
            linkify("см. https://a.example/path дальше"),
            "см. <a href=\"https://a.example/path\" target=\"_blank\" \
             rel=\"noopener noreferrer\">https://a.example/path</a> дальше"
        );
        assert_eq!(linkify("без ссылок"), "без ссылок");
    }

    #[test]
    fn html_tag_detection_requires_letter_and_closing_bracket() {
        assert!(has_html_tag("<br>"));
        assert!(has_html_tag("text </div> text"));
        assert!(!has_html_tag("a < b и b > c"));
        assert!(!has_html_tag("нет тегов"));
    }
}
