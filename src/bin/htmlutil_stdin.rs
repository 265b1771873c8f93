//! Simple CLI that reads HTML from stdin and applies one tree operation.
//!
//! Usage: `htmlutil_stdin <find|remove|strip> '<criteria json>'`
//!
//! - `find` prints a JSON array with the markup of every match.
//! - `remove` prints the document with matching nodes removed.
//! - `strip` prints the document with `attr_key="attr_value"` pairs removed.

use rs_htmlutil::{dom, remove_attributes, remove_nodes, render, render_all, search, MatchCriteria};
use std::io::{self, Read};

fn run(op: &str, criteria: &MatchCriteria, html: &str) -> rs_htmlutil::Result<String> {
    let document = dom::parse(html);
    let root = document.root();

    match op {
        "find" => {
            let matches = render_all(&search(&root, criteria))?;
            Ok(serde_json::to_string(&matches)?)
        }
        "remove" => {
            remove_nodes(&root, criteria);
            render(&root)
        }
        "strip" => {
            let (Some(key), Some(value)) = (&criteria.attr_key, &criteria.attr_value) else {
                return Err(rs_htmlutil::Error::InvalidCriteria(
                    "strip needs both attr_key and attr_value".to_string(),
                ));
            };
            let tag = criteria.tag.as_deref().unwrap_or_default();
            remove_attributes(&root, tag, key, value, criteria.limit);
            render(&root)
        }
        other => Err(rs_htmlutil::Error::InvalidCriteria(format!("unknown operation '{other}'"))),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <find|remove|strip> [criteria json]", args[0]);
        std::process::exit(1);
    }

    let criteria = match args.get(2).map(|json| serde_json::from_str::<MatchCriteria>(json)) {
        None => MatchCriteria::default(),
        Some(Ok(criteria)) => criteria,
        Some(Err(err)) => {
            eprintln!("Invalid criteria: {err}");
            std::process::exit(1);
        }
    };

    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    match run(&args[1], &criteria, &html) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rs_htmlutil::Error;

    const PAGE: &str = r#"<div><p id="a" class="x">x</p><p id="b">y</p></div>"#;

    #[test]
    fn find_prints_json_array_of_markup() {
        let output = run("find", &MatchCriteria::new("p"), PAGE).unwrap();
        let matches: Vec<String> = serde_json::from_str(&output).unwrap();

        assert_eq!(matches, vec![r#"<p id="a" class="x">x</p>"#, r#"<p id="b">y</p>"#]);
    }

    #[test]
    fn find_without_matches_prints_empty_array() {
        let output = run("find", &MatchCriteria::new("table"), PAGE).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn remove_prints_document_without_matches() {
        let criteria = MatchCriteria::new("p").with_attr("id").with_value("a");
        let output = run("remove", &criteria, PAGE).unwrap();

        assert!(output.contains(r#"<div><p id="b">y</p></div>"#));
        assert!(!output.contains(r#"id="a""#));
    }

    #[test]
    fn strip_prints_document_without_pair() {
        let criteria = MatchCriteria::new("p").with_attr("class").with_value("x");
        let output = run("strip", &criteria, PAGE).unwrap();

        assert!(output.contains(r#"<p id="a">x</p>"#));
        assert!(!output.contains("class"));
    }

    #[test]
    fn strip_without_value_is_invalid_criteria() {
        let criteria = MatchCriteria::new("p").with_attr("class");
        let result = run("strip", &criteria, PAGE);

        assert!(matches!(result, Err(Error::InvalidCriteria(_))));
    }

    #[test]
    fn unknown_operation_is_invalid_criteria() {
        let result = run("bogus", &MatchCriteria::default(), PAGE);
        assert!(matches!(result, Err(Error::InvalidCriteria(_))));
    }
}
