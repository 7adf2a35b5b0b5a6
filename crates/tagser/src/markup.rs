//! Renders node trees back to markup.
//!
//! The output always uses the block form: a tag parsed from `<br/>` is written
//! as `<br></br>`. Text is escaped so that re-parsing the output yields the
//! same bodies.
//!
//! ```
//! let nodes = tagser::parse(r#"  a \< b <tag A > body </tag>"#).unwrap();
//! assert_eq!(tagser::to_markup(&nodes), r#"a \< b<tag A="true">body</tag>"#);
//! ```

use core::fmt::{self, Write};

use crate::node::{Attribute, Node, NodeKind};

/// Renders `nodes` to a new string.
#[must_use]
pub fn to_markup(nodes: &[Node]) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_markup(nodes, &mut out);
    out
}

/// Renders `nodes` into any [`fmt::Write`] sink.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_markup<W: Write + ?Sized>(nodes: &[Node], out: &mut W) -> fmt::Result {
    nodes.iter().try_for_each(|node| write_node(node, out))
}

fn write_node<W: Write + ?Sized>(node: &Node, out: &mut W) -> fmt::Result {
    match node.kind() {
        NodeKind::Text => write_text(node.body(), out),
        NodeKind::Tag => {
            out.write_char('<')?;
            out.write_str(node.name())?;
            for attribute in node.attributes().values() {
                out.write_char(' ')?;
                write_attribute(attribute, out)?;
            }
            out.write_char('>')?;
            write_markup(node.children(), out)?;
            write!(out, "</{}>", node.name())
        }
    }
}

fn write_text<W: Write + ?Sized>(body: &str, out: &mut W) -> fmt::Result {
    let mut rest = body;
    while let Some(at) = rest.find(['\\', '<']) {
        out.write_str(&rest[..at])?;
        out.write_char('\\')?;
        // Both escaped characters are one byte long.
        out.write_str(&rest[at..=at])?;
        rest = &rest[at + 1..];
    }
    out.write_str(rest)
}

fn write_attribute<W: Write + ?Sized>(attribute: &Attribute, out: &mut W) -> fmt::Result {
    let value = attribute.value();
    let quote = if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    };
    write!(out, "{}={quote}{value}{quote}", attribute.name())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::parse;

    #[rstest]
    #[case::self_closed("<br/>", "<br></br>")]
    #[case::boolean_attribute("<tag A/>", r#"<tag A="true"></tag>"#)]
    #[case::attribute_order(
        r#"<tag A B="" C="12" D="false"/>"#,
        r#"<tag A="true" B="" C="12" D="false"></tag>"#
    )]
    #[case::empty_body("<tag A ></tag>", r#"<tag A="true"></tag>"#)]
    #[case::trimmed_body("<tag A > some body </tag>", r#"<tag A="true">some body</tag>"#)]
    #[case::surrounding_text(
        "some text <tag A > some body </tag> another text",
        r#"some text<tag A="true">some body</tag>another text"#
    )]
    #[case::nested("<tag> some<br/>body </tag>", "<tag>some<br></br>body</tag>")]
    #[case::multiline(
        "\n    <tag>\n    some\n    <br/>\n    body\n    </tag>",
        "<tag>some<br></br>body</tag>"
    )]
    #[case::single_quoted_source("<a v='x'/>", r#"<a v="x"></a>"#)]
    fn renders_block_form(#[case] source: &str, #[case] expected: &str) {
        let nodes = parse(source).unwrap();
        assert_eq!(to_markup(&nodes), expected);
    }

    #[test]
    fn escapes_text_that_would_reopen_markup() {
        let nodes = parse(r"  Simple text \<").unwrap();
        assert_eq!(nodes[0].body(), "Simple text <");
        assert_eq!(to_markup(&nodes), r"Simple text \<");

        let nodes = parse(r"a\\b").unwrap();
        assert_eq!(nodes[0].body(), r"a\b");
        assert_eq!(to_markup(&nodes), r"a\\b");
    }

    #[test]
    fn switches_quotes_for_values_with_double_quotes() {
        let nodes = parse(r#"<a v='say "hi"' w="it's"/>"#).unwrap();
        assert_eq!(to_markup(&nodes), r#"<a v='say "hi"' w="it's"></a>"#);
    }

    #[test]
    fn display_matches_to_markup() {
        let nodes = parse("<u><row><cell>x</cell></row></u>").unwrap();
        assert_eq!(nodes[0].to_string(), to_markup(&nodes));
    }

    #[test]
    fn write_markup_appends_to_existing_output() {
        let nodes = parse("<b/>").unwrap();
        let mut out = String::from("prefix:");
        write_markup(&nodes, &mut out).unwrap();
        assert_eq!(out, "prefix:<b></b>");
    }
}
