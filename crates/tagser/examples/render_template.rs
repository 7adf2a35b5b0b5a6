//! Walks a receipt template the way a renderer would: every tag becomes a
//! layout instruction, every text node a string with `{{placeholders}}` to
//! fill in.
//!
//! The tree is printed with the position of each node, then re-serialized.
//! A broken variant of the same template shows what an error report looks
//! like.
//!
//! Run with
//!
//! ```bash
//! cargo run -p tagser --example render_template
//! ```

use tagser::{Node, NodeKind, ParseError, parse, to_markup};

const TEMPLATE: &str = r#"
<u>
    <row>
        <cell>{{name}}</cell>
        <cell width="3">{{quantity}}</cell>
    </row>
    <row>
        <cell align="right">Total:</cell>
        <cell width="3" bold>{{sum}} \<incl. tax\></cell>
    </row>
</u>
"#;

fn print_tree(nodes: &[Node], depth: usize) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        match node.kind() {
            NodeKind::Text => println!("{indent}{:?} @ {}", node.body(), node.position()),
            NodeKind::Tag => {
                let attributes: Vec<String> = node
                    .attributes()
                    .values()
                    .map(|a| format!("{}={}", a.name(), a.value()))
                    .collect();
                println!(
                    "{indent}<{}> [{}] @ {}",
                    node.name(),
                    attributes.join(", "),
                    node.position()
                );
                print_tree(node.children(), depth + 1);
            }
        }
    }
}

fn report(source: &str, err: &ParseError) {
    println!("{err}");
    if let Some(line) = source.lines().nth(err.line() - 1) {
        println!("    {line}");
        println!("    {}^", " ".repeat(err.column() - 1));
    }
}

fn main() {
    match parse(TEMPLATE) {
        Ok(nodes) => {
            print_tree(&nodes, 0);
            println!();
            println!("{}", to_markup(&nodes));
        }
        Err(err) => report(TEMPLATE, &err),
    }

    println!();
    let broken = TEMPLATE.replace("</row>\n</u>", "</rows>\n</u>");
    if let Err(err) = parse(&broken) {
        report(&broken, &err);
    }
}
