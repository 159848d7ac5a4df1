//! HTML to markdown rendering.
//!
//! A deliberately flat, rule-table renderer: one top-down walk over the
//! body's direct child nodes, dispatching each element through a fixed
//! per-tag rule. Nested inline styling inside list items, tables, and other
//! structures is not specially handled beyond the generic text fallback.
//! That lossy behavior is contractual - downstream consumers depend on the
//! exact output shape.

use dom_query::Document;

use crate::dom::{self, Selection};
use crate::patterns::MULTIPLE_NEWLINES;

/// How one block-level child is rendered.
///
/// The table is closed: every tag maps to exactly one rule, with a text
/// fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagRule {
    Heading(usize),
    Paragraph,
    Anchor,
    Image,
    List,
    Blockquote,
    InlineCode,
    CodeBlock,
    Strong,
    Emphasis,
    Fallback,
}

impl TagRule {
    fn for_tag(tag: &str) -> Self {
        match tag {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "a" => Self::Anchor,
            "img" => Self::Image,
            "ul" | "ol" => Self::List,
            "blockquote" => Self::Blockquote,
            "code" => Self::InlineCode,
            "pre" => Self::CodeBlock,
            "strong" | "b" => Self::Strong,
            "em" | "i" => Self::Emphasis,
            _ => Self::Fallback,
        }
    }
}

/// Render an HTML fragment to markdown-flavored plain text.
///
/// Empty or blank input renders to an empty string. Malformed HTML is
/// parsed leniently and whatever partial tree results is rendered
/// best-effort; this function never fails.
///
/// The final output collapses any run of three or more newlines down to
/// exactly two and is trimmed of leading/trailing whitespace.
#[must_use]
pub fn render(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let doc = Document::from(html);
    let body = doc.select("body");
    let Some(body_node) = body.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for child in body_node.children() {
        if child.is_text() {
            let text = child.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push_str(trimmed);
                out.push_str("\n\n");
            }
            continue;
        }
        if !child.is_element() {
            continue;
        }

        let element = Selection::from(child);
        if let Some(tag) = dom::tag_name(&element) {
            render_element(&element, &tag, &mut out);
        }
    }

    let collapsed = MULTIPLE_NEWLINES.replace_all(&out, "\n\n");
    collapsed.trim().to_string()
}

fn render_element(element: &Selection, tag: &str, out: &mut String) {
    let raw_text = dom::text_content(element);
    let text = raw_text.trim();

    match TagRule::for_tag(tag) {
        TagRule::Heading(level) => {
            out.push_str(&"#".repeat(level));
            out.push(' ');
            out.push_str(text);
            out.push_str("\n\n");
        }
        TagRule::Paragraph => {
            out.push_str(text);
            out.push_str("\n\n");
        }
        TagRule::Anchor => {
            match dom::get_attribute(element, "href") {
                Some(href) => {
                    out.push('[');
                    out.push_str(text);
                    out.push_str("](");
                    out.push_str(&href);
                    out.push(')');
                }
                None => out.push_str(text),
            }
            out.push_str("\n\n");
        }
        TagRule::Image => {
            if let Some(src) = dom::get_attribute(element, "src") {
                let alt = dom::get_attribute(element, "alt").unwrap_or_default();
                out.push_str("![");
                out.push_str(&alt);
                out.push_str("](");
                out.push_str(&src);
                out.push(')');
                out.push_str("\n\n");
            }
        }
        TagRule::List => {
            // Both list kinds flatten to `-` bullets.
            let items = element.select("li");
            let mut rendered_any = false;
            for item in items.iter() {
                let item_text = item.text();
                out.push_str("- ");
                out.push_str(item_text.trim());
                out.push('\n');
                rendered_any = true;
            }
            if rendered_any {
                out.push('\n');
            }
        }
        TagRule::Blockquote => {
            out.push_str("> ");
            out.push_str(text);
            out.push_str("\n\n");
        }
        TagRule::InlineCode => {
            // Inline element: no trailing blank line.
            out.push('`');
            out.push_str(text);
            out.push('`');
        }
        TagRule::CodeBlock => {
            out.push_str("```\n");
            out.push_str(text);
            out.push_str("\n```\n\n");
        }
        TagRule::Strong => {
            out.push_str("**");
            out.push_str(text);
            out.push_str("**");
        }
        TagRule::Emphasis => {
            out.push('*');
            out.push_str(text);
            out.push('*');
        }
        TagRule::Fallback => {
            if !text.is_empty() {
                out.push_str(text);
                out.push_str("\n\n");
            }
        }
    }
}
