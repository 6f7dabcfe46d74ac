//! Test utilities and helper functions for the pagefuse test suite

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Creates a minimal test HTML document with the given head and body markup
#[allow(dead_code)]
pub fn create_test_html(head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Test Page</title>
    {head}
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Builds an in-memory ZIP archive from (path, content) entries
#[allow(dead_code)]
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, content) in entries {
        writer
            .start_file(*name, options)
            .expect("Failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }

    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// Parses combined output and returns the text of every `<style>` in head order
#[allow(dead_code)]
pub fn head_style_texts(html: &str) -> Vec<String> {
    use kuchiki::traits::TendrilSink;

    let document = kuchiki::parse_html().one(html.to_string());
    document
        .select("head style")
        .expect("valid selector")
        .map(|n| n.text_contents())
        .collect()
}

/// Parses combined output and returns the text of every inline `<script>` in body order
#[allow(dead_code)]
pub fn body_script_texts(html: &str) -> Vec<String> {
    use kuchiki::traits::TendrilSink;

    let document = kuchiki::parse_html().one(html.to_string());
    document
        .select("body script:not([src])")
        .expect("valid selector")
        .map(|n| n.text_contents())
        .collect()
}

/// Counts surviving external reference nodes in combined output
#[allow(dead_code)]
pub fn count_reference_nodes(html: &str) -> (usize, usize) {
    use kuchiki::traits::TendrilSink;

    let document = kuchiki::parse_html().one(html.to_string());
    let links = document
        .select("link[rel~=\"stylesheet\"]")
        .expect("valid selector")
        .count();
    let scripts = document
        .select("script[src]")
        .expect("valid selector")
        .count();
    (links, scripts)
}
