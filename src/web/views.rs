//! HTML rendering for the search pages.

use crate::queries::search::FieldSearchResult;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = html_escape(title),
        body = body,
    )
}

fn search_form(query: &str) -> String {
    format!(
        r#"<form action="/search/" method="get">
    <input type="search" name="q" value="{}" placeholder="Search fields">
    <button type="submit">Search</button>
</form>"#,
        html_escape(query)
    )
}

pub fn home_page() -> String {
    let body = format!(
        "<h1>Research directory</h1>\n<p>Find fields by name, domain, or area.</p>\n{}",
        search_form("")
    );
    page("Research directory", &body)
}

pub fn search_page(result: &FieldSearchResult) -> String {
    let query = html_escape(&result.query);
    let mut body = vec![
        "<h1>Field search</h1>".to_string(),
        search_form(&result.query),
    ];

    if result.query.is_empty() {
        body.push("<p>Enter a query to search fields.</p>".to_string());
    } else if result.is_empty() {
        body.push(format!("<p>No fields matched &quot;{}&quot;.</p>", query));
    } else {
        body.push(format!(
            "<h2>{} fields matching &quot;{}&quot;</h2>",
            result.fields.len(),
            query
        ));
        body.push("<ul class=\"fields\">".to_string());
        for field in &result.fields {
            body.push(format!(
                "  <li><strong>{}</strong> <span class=\"domain\">{}</span> / <span class=\"area\">{}</span>",
                html_escape(&field.name),
                html_escape(&field.domain),
                html_escape(&field.area)
            ));
            let subfields = result.subfields_for(&field.name);
            if subfields.is_empty() {
                body.push("    <p class=\"empty\">No subfields.</p>".to_string());
            } else {
                body.push("    <ul class=\"subfields\">".to_string());
                for subfield in subfields {
                    body.push(format!("      <li>{}</li>", html_escape(&subfield.name)));
                }
                body.push("    </ul>".to_string());
            }
            body.push("  </li>".to_string());
        }
        body.push("</ul>".to_string());
    }

    page(&format!("Search: {}", result.query), &body.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Subfield};
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("<b>&</b>", "&lt;b&gt;&amp;&lt;/b&gt;")]
    #[case(r#"say "hi" it's"#, "say &quot;hi&quot; it&#39;s")]
    fn test_html_escape(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(html_escape(input), expected);
    }

    #[test]
    fn test_search_page_lists_subfields_in_order() {
        let mut result = FieldSearchResult {
            query: "bio".to_string(),
            fields: vec![Field::new("Biology", "Life Sciences", "Biology", "Natural")],
            ..FieldSearchResult::default()
        };
        result.subfields.insert(
            "Biology".to_string(),
            vec![
                Subfield::new("Ecology", "Biology", "Natural", "Life Sciences"),
                Subfield::new("Genetics", "Biology", "Natural", "Life Sciences"),
            ],
        );

        let html = search_page(&result);
        let ecology = html.find("<li>Ecology</li>").unwrap();
        let genetics = html.find("<li>Genetics</li>").unwrap();
        assert!(ecology < genetics);
        assert!(html.contains("1 fields matching &quot;bio&quot;"));
        assert!(html.contains(r#"value="bio""#));
    }

    #[test]
    fn test_field_without_subfields() {
        let mut result = FieldSearchResult {
            query: "math".to_string(),
            fields: vec![Field::new("Mathematics", "Formal Sciences", "Mathematics", "Formal")],
            ..FieldSearchResult::default()
        };
        result.subfields.insert("Mathematics".to_string(), vec![]);
        assert!(search_page(&result).contains("No subfields."));
    }

    #[test]
    fn test_home_page_has_search_form() {
        let html = home_page();
        assert!(html.contains(r#"action="/search/""#));
        assert!(html.contains(r#"name="q""#));
    }
}
