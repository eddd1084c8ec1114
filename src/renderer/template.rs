//! Fixed HTML document the situation tables are poured into

/// Label of the first header cell and of the attribute column
pub const ATTRIBUTE_HEADER: &str = "Attribut";

/// Label of the row holding the checkboxes
pub const CHOICE_ROW_LABEL: &str = "Choix";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Assemble a page from already rendered header cells and body rows
pub fn render_document(choice: &str, header_cells: &str, body_rows: &[String]) -> String {
    let body = body_rows
        .iter()
        .map(|row| format!("                {}", row))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Situation {choice}</title>
    <style>
        table {{
            border-collapse: collapse;
            width: 80%;
            margin: 20px auto;
        }}
        th, td {{
            border: 1px solid #dddddd;
            text-align: left;
            padding: 8px;
        }}
        th {{
            background-color: #f2f2f2;
        }}
        th img {{
            display: block;
            max-width: 160px;
            max-height: 120px;
            margin: 0 auto 6px;
        }}
        input[type="checkbox"] {{
            transform: scale(1.5);
            margin: 0 auto;
        }}
    </style>
</head>
<body>
    <h1 style="text-align: center;">Situation {choice}</h1>
    <table>
        <thead>
            <tr>{header_cells}</tr>
        </thead>
        <tbody>
{body}
        </tbody>
    </table>
</body>
</html>
"#,
        choice = html_escape(choice),
        header_cells = header_cells,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            html_escape(r#"<b>"5 & 6"</b>"#),
            "&lt;b&gt;&quot;5 &amp; 6&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_document_has_title_and_heading() {
        let html = render_document("S1", "<th>Attribut</th>", &[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Situation S1</title>"));
        assert!(html.contains(r#"<h1 style="text-align: center;">Situation S1</h1>"#));
        assert!(html.contains("<tr><th>Attribut</th></tr>"));
    }
}
