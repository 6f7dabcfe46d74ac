//! DOM rewriting for asset inlining
//!
//! Both pipelines end here: a parsed document is mutated in a single
//! sequential pass, then serialized once. The bundle pipeline appends
//! inline nodes to the document's head/body; the remote pipeline replaces
//! each originating reference node in place.

use anyhow::{Context, Result};
use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;
use std::collections::HashMap;

use super::types::{AssetKind, FetchedAsset};

/// Selector for stylesheet reference nodes (`rel` contains `stylesheet`)
pub const STYLESHEET_REF_SELECTOR: &str = "link[rel~=\"stylesheet\"]";

/// Selector for external script reference nodes
pub const SCRIPT_REF_SELECTOR: &str = "script[src]";

/// Build a detached inline node (`<style>` or `<script>`) holding raw content
///
/// The element is parsed out of a minimal shell document rather than built
/// from a qualified name by hand, so its namespace data matches what the
/// serializer expects. Text inside `style`/`script` elements is serialized
/// raw, which keeps the asset content byte-for-byte intact.
fn build_inline_node(kind: AssetKind, content: &str) -> Result<NodeRef> {
    let tag = kind.inline_tag();
    let shell = match kind {
        AssetKind::Stylesheet => kuchiki::parse_html().one("<style type=\"text/css\"></style>"),
        AssetKind::Script => kuchiki::parse_html().one("<script></script>"),
    };

    let node = shell
        .select_first(tag)
        .map_err(|()| anyhow::anyhow!("failed to build inline <{tag}> node"))?
        .as_node()
        .clone();
    node.detach();
    node.append(NodeRef::new_text(content));

    Ok(node)
}

/// Serialize a document tree back to UTF-8 markup
fn serialize_document(document: &NodeRef) -> Result<String> {
    let mut html_output = Vec::new();
    document
        .serialize(&mut html_output)
        .context("Failed to serialize HTML document")?;

    String::from_utf8(html_output).context("Failed to convert HTML bytes to UTF-8 string")
}

/// Replace reference nodes with inline nodes carrying fetched content
///
/// Used by the remote pipeline at fan-in time: every successfully fetched
/// asset replaces its originating `<link>`/`<script src>` node in place.
/// Reference nodes whose asset failed are not in `assets` and are left
/// untouched, so the output still points at the unreachable resource.
///
/// Lookup is keyed by the literal attribute value; duplicate locators in
/// the document each get their own inline copy.
pub fn replace_reference_nodes(html: String, assets: &[FetchedAsset]) -> Result<String> {
    if assets.is_empty() {
        return Ok(html);
    }

    // Parse HTML once
    let document = kuchiki::parse_html().one(html);

    let mut style_map: HashMap<&str, &str> = HashMap::new();
    let mut script_map: HashMap<&str, &str> = HashMap::new();
    for asset in assets {
        match asset.reference.kind {
            AssetKind::Stylesheet => {
                style_map.insert(asset.reference.href.as_str(), asset.body.as_str());
            }
            AssetKind::Script => {
                script_map.insert(asset.reference.href.as_str(), asset.body.as_str());
            }
        }
    }

    if !style_map.is_empty() {
        // Must collect nodes before iteration because we call node.detach()
        // during iteration, which invalidates the iterator.
        let matches: Vec<_> = document
            .select(STYLESHEET_REF_SELECTOR)
            .map_err(|()| anyhow::anyhow!("Invalid stylesheet selector"))?
            .collect();

        for node_ref in matches {
            let node = node_ref.as_node();
            let href = {
                let attrs = node_ref.attributes.borrow();
                attrs.get("href").map(std::string::ToString::to_string)
            };

            if let Some(href) = href
                && let Some(css_content) = style_map.get(href.as_str())
            {
                let style = build_inline_node(AssetKind::Stylesheet, css_content)?;
                node.insert_before(style);
                node.detach();

                log::debug!("Replaced stylesheet link with inline style: {href}");
            }
        }
    }

    if !script_map.is_empty() {
        let matches: Vec<_> = document
            .select(SCRIPT_REF_SELECTOR)
            .map_err(|()| anyhow::anyhow!("Invalid script selector"))?
            .collect();

        for node_ref in matches {
            let node = node_ref.as_node();
            let src = {
                let attrs = node_ref.attributes.borrow();
                attrs.get("src").map(std::string::ToString::to_string)
            };

            if let Some(src) = src
                && let Some(js_content) = script_map.get(src.as_str())
            {
                let script = build_inline_node(AssetKind::Script, js_content)?;
                node.insert_before(script);
                node.detach();

                log::debug!("Replaced external script with inline script: {src}");
            }
        }
    }

    serialize_document(&document)
}

/// Append bundle-discovered asset content to the document's head and body
///
/// Used by the bundle pipeline: discovered stylesheets become `<style>`
/// nodes appended as the last children of `head`, scripts become
/// `<script>` nodes appended as the last children of `body`, both in
/// discovery order. Nothing is replaced — bundle assets are not tied to
/// reference nodes in the document.
pub fn append_bundle_assets(
    html: String,
    stylesheets: &[String],
    scripts: &[String],
) -> Result<String> {
    let document = kuchiki::parse_html().one(html);

    let head = document
        .select_first("head")
        .map_err(|()| anyhow::anyhow!("document has no head section"))?;
    for css_content in stylesheets {
        head.as_node()
            .append(build_inline_node(AssetKind::Stylesheet, css_content)?);
    }

    let body = document
        .select_first("body")
        .map_err(|()| anyhow::anyhow!("document has no body section"))?;
    for js_content in scripts {
        body.as_node()
            .append(build_inline_node(AssetKind::Script, js_content)?);
    }

    serialize_document(&document)
}
