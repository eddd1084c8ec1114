//! Report generation

use crate::models::GenerationResult;
use anyhow::Result;

pub fn generate_markdown_report(result: &GenerationResult) -> Result<String> {
    let mut report = String::new();

    report.push_str("# Situation Pages Generation Report\n\n");

    // Summary
    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Archive**: {}\n", result.archive_path.display()));
    report.push_str(&format!("- **Records**: {}\n", result.record_count));
    report.push_str(&format!("- **Pages**: {}\n", result.pages.len()));
    report.push_str(&format!("- **Images**: {}\n", result.images.len()));
    if let Some(dir) = &result.pages_dir {
        report.push_str(&format!("- **Pages Directory**: {}\n", dir.display()));
    }
    report.push('\n');

    // Schema
    report.push_str("## Schema\n\n");
    report.push_str(&format!("- **Options**: {}\n", join_or_none(result.schema.options.iter())));
    report.push_str(&format!(
        "- **Attributes**: {}\n\n",
        join_or_none(result.schema.attributes.iter())
    ));

    if !result.schema.ignored.is_empty() {
        report.push_str("## Ignored Columns\n\n");
        for column in &result.schema.ignored {
            report.push_str(&format!("- `{}`\n", column));
        }
        report.push('\n');
    }

    // Pages
    report.push_str("## Pages\n\n");
    for page in &result.pages {
        report.push_str(&format!("- {}\n", page));
    }
    report.push('\n');

    if !result.duplicate_choices.is_empty() {
        report.push_str("## ⚠️ Duplicate Choices\n\n");
        report.push_str("Only the last row of each of these situations was kept.\n\n");
        for choice in &result.duplicate_choices {
            report.push_str(&format!("- {}\n", choice));
        }
        report.push('\n');
    }

    if !result.warnings.is_empty() {
        report.push_str("## ℹ️ Warnings\n\n");
        for warning in &result.warnings {
            report.push_str(&format!("- {}\n", warning));
        }
        report.push('\n');
    }

    Ok(report)
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let items: Vec<&str> = items.map(String::as_str).collect();
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::schema::extract_schema;
    use std::path::PathBuf;

    #[test]
    fn test_report_lists_schema_and_pages() {
        let schema = extract_schema(&["Choice", "option1.prix", "remarque"], None);
        let mut result = GenerationResult::new(PathBuf::from("out/situations_html.zip"), schema);
        result.record_count = 2;
        result.pages = vec!["situation_S1.html".into(), "situation_S2.html".into()];
        result.duplicate_choices = vec!["S2".into()];

        let report = generate_markdown_report(&result).unwrap();

        assert!(report.contains("- **Options**: option1\n"));
        assert!(report.contains("- **Attributes**: prix\n"));
        assert!(report.contains("## Ignored Columns"));
        assert!(report.contains("- situation_S2.html\n"));
        assert!(report.contains("## ⚠️ Duplicate Choices"));
        assert!(!report.contains("## ℹ️ Warnings"));
    }

    #[test]
    fn test_empty_schema_says_none() {
        let result = GenerationResult::new(PathBuf::from("a.zip"), Default::default());
        let report = generate_markdown_report(&result).unwrap();
        assert!(report.contains("- **Options**: (none)\n"));
    }
}
