//! One comparison table per situation

use super::template::{html_escape, render_document, ATTRIBUTE_HEADER, CHOICE_ROW_LABEL};
use crate::error::{IdentifierKind, SituationError, SituationResult};
use crate::models::{image_file_name, page_file_name, Record, RenderedPage, Schema, CHOICE_COLUMN};
use crate::validator::validate_identifier;

/// Render the page for `record`, found at 1-based data row `row`
///
/// `has_image` tells whether `<option>.png` was staged for an option.
pub fn render_page(
    record: &Record,
    row: usize,
    schema: &Schema,
    has_image: impl Fn(&str) -> bool,
) -> SituationResult<RenderedPage> {
    let choice = record
        .get(CHOICE_COLUMN)
        .map(|v| v.to_string())
        .ok_or_else(|| SituationError::MissingValue {
            choice: String::new(),
            row,
            key: CHOICE_COLUMN.to_string(),
        })?;
    validate_identifier(&choice, IdentifierKind::Choice)?;

    let mut body_rows = Vec::with_capacity(schema.attributes.len() + 1);
    for attribute in &schema.attributes {
        let mut cells = format!("<tr><td>{}</td>", html_escape(attribute));
        for option in &schema.options {
            let key = Schema::key(option, attribute);
            let value = record.get(&key).ok_or_else(|| SituationError::MissingValue {
                choice: choice.clone(),
                row,
                key: key.clone(),
            })?;
            cells.push_str(&format!("<td>{}</td>", html_escape(&value.to_string())));
        }
        cells.push_str("</tr>");
        body_rows.push(cells);
    }

    let mut choice_row = format!("<tr><td>{}</td>", CHOICE_ROW_LABEL);
    for _ in &schema.options {
        choice_row.push_str(r#"<td style="text-align: center;"><input type="checkbox"></td>"#);
    }
    choice_row.push_str("</tr>");
    body_rows.push(choice_row);

    let mut illustrated_options = Vec::new();
    let mut header = format!("<th>{}</th>", ATTRIBUTE_HEADER);
    for option in &schema.options {
        let caption = html_escape(option);
        if has_image(option) {
            header.push_str(&format!(
                r#"<th><img src="{}" alt="{}">{}</th>"#,
                html_escape(&image_file_name(option)),
                caption,
                caption
            ));
            illustrated_options.push(option.clone());
        } else {
            header.push_str(&format!("<th>{}</th>", caption));
        }
    }

    Ok(RenderedPage {
        file_name: page_file_name(&choice),
        html: render_document(&choice, &header, &body_rows),
        choice,
        row,
        illustrated_options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::schema::extract_schema;

    fn record() -> Record {
        Record::new()
            .with("Choice", "S1")
            .with("A.x", "1")
            .with("A.y", "2")
            .with("B.x", "3")
            .with("B.y", "4")
    }

    fn schema() -> Schema {
        extract_schema(&["Choice", "A.x", "A.y", "B.x", "B.y"], None)
    }

    #[test]
    fn test_rows_follow_attribute_then_option_order() {
        let page = render_page(&record(), 1, &schema(), |_| false).unwrap();

        assert_eq!(page.file_name, "situation_S1.html");
        assert!(page.html.contains("<tr><td>x</td><td>1</td><td>3</td></tr>"));
        assert!(page.html.contains("<tr><td>y</td><td>2</td><td>4</td></tr>"));
        assert!(page.html.contains("<tr><th>Attribut</th><th>A</th><th>B</th></tr>"));
    }

    #[test]
    fn test_choice_row_has_one_checkbox_per_option() {
        let page = render_page(&record(), 1, &schema(), |_| false).unwrap();
        assert!(page.html.contains("<td>Choix</td>"));
        assert_eq!(page.html.matches(r#"<input type="checkbox">"#).count(), 2);
    }

    #[test]
    fn test_image_only_for_staged_option() {
        let page = render_page(&record(), 1, &schema(), |option| option == "A").unwrap();

        assert!(page.html.contains(r#"<th><img src="A.png" alt="A">A</th>"#));
        assert!(page.html.contains("<th>B</th>"));
        assert_eq!(page.html.matches("<img").count(), 1);
        assert_eq!(page.illustrated_options, vec!["A".to_string()]);
    }

    #[test]
    fn test_missing_cell_is_reported_with_location() {
        let mut record = record();
        record.values.remove("B.y");

        let err = render_page(&record, 4, &schema(), |_| false).unwrap_err();
        match err {
            SituationError::MissingValue { choice, row, key } => {
                assert_eq!(choice, "S1");
                assert_eq!(row, 4);
                assert_eq!(key, "B.y");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_schema_keeps_attribute_header() {
        let page = render_page(&record(), 1, &Schema::default(), |_| false).unwrap();
        assert!(page.html.contains("<tr><th>Attribut</th></tr>"));
        assert_eq!(page.html.matches(r#"<input type="checkbox">"#).count(), 0);
    }

    #[test]
    fn test_values_are_escaped() {
        let record = record().with("A.x", "<script>");
        let page = render_page(&record, 1, &schema(), |_| false).unwrap();
        assert!(page.html.contains("<td>&lt;script&gt;</td>"));
    }

    #[test]
    fn test_unsafe_choice_is_rejected() {
        let record = record().with("Choice", "../S1");
        let err = render_page(&record, 1, &schema(), |_| false).unwrap_err();
        assert!(matches!(err, SituationError::UnsafeIdentifier { .. }));
    }
}
