use quickcheck::{Arbitrary, Gen};

use super::Shape;

const NAME_CHARS: &[char] = &['a', 'b', 'Z', 'q', '_', '0', '7'];
const TEXT_CHARS: &[char] = &[
    'a', 'b', 'c', ' ', ' ', '\n', '\t', '<', '>', '/', '=', '\\', '"', '\'', '{', '}', 'é', '✓',
];
const VALUE_CHARS: &[char] = &['x', 'y', ' ', '<', '>', '/', '=', '\\', '"', '\'', '\n'];
const SEPARATORS: &[&str] = &[" ", "  ", "\n", " \n "];

/// A well-formed document together with the tree it must parse to.
///
/// The source is rendered independently from the crate's serializer, with
/// random separators, quote styles and optional escapes.
#[derive(Debug, Clone)]
pub(crate) struct Document {
    pub(crate) source: String,
    pub(crate) expected: Vec<Shape>,
}

impl Arbitrary for Document {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 4;
        let expected = gen_children(g, depth);
        let mut source = String::new();
        for shape in &expected {
            render(g, shape, &mut source);
        }
        Self { source, expected }
    }
}

/// Any short string over the characters that matter to the grammar.
#[derive(Debug, Clone)]
pub(crate) struct Soup(pub(crate) String);

impl Arbitrary for Soup {
    fn arbitrary(g: &mut Gen) -> Self {
        const SOUP: &[char] = &['<', '>', '/', '=', '"', '\'', '\\', ' ', '\n', 'a', 'b', '#'];
        let len = usize::arbitrary(g) % 24;
        Self((0..len).map(|_| pick(g, SOUP)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Soup))
    }
}

fn pick<T: Copy>(g: &mut Gen, items: &[T]) -> T {
    items[usize::arbitrary(g) % items.len()]
}

fn gen_string(g: &mut Gen, alphabet: &[char], min: usize, max: usize) -> String {
    let len = min + usize::arbitrary(g) % (max - min + 1);
    (0..len).map(|_| pick(g, alphabet)).collect()
}

fn gen_text(g: &mut Gen) -> String {
    let body = gen_string(g, TEXT_CHARS, 1, 12);
    let body = body.trim();
    if body.is_empty() {
        "t".to_owned()
    } else {
        body.to_owned()
    }
}

fn gen_children(g: &mut Gen, depth: usize) -> Vec<Shape> {
    let len = usize::arbitrary(g) % 4;
    let mut children: Vec<Shape> = Vec::with_capacity(len);
    for _ in 0..len {
        let previous_is_text = matches!(children.last(), Some(Shape::Text(_)));
        // Adjacent text runs would merge into one node.
        if depth == 0 || (!previous_is_text && bool::arbitrary(g)) {
            if previous_is_text {
                continue;
            }
            children.push(Shape::Text(gen_text(g)));
        } else {
            children.push(gen_tag(g, depth - 1));
        }
    }
    children
}

fn gen_tag(g: &mut Gen, depth: usize) -> Shape {
    let name = gen_string(g, NAME_CHARS, 1, 6);
    let mut attributes: Vec<(String, String)> = Vec::new();
    for _ in 0..usize::arbitrary(g) % 4 {
        let attr = gen_string(g, NAME_CHARS, 1, 4);
        if attributes.iter().any(|(n, _)| *n == attr) {
            continue;
        }
        let mut value = gen_string(g, VALUE_CHARS, 0, 8);
        // No escaping inside values: one of the two quotes must be unused.
        if value.contains('"') && value.contains('\'') {
            value.retain(|c| c != '\'');
        }
        attributes.push((attr, value));
    }
    let children = if bool::arbitrary(g) {
        gen_children(g, depth)
    } else {
        Vec::new()
    };
    Shape::Tag {
        name,
        attributes,
        children,
    }
}

fn render(g: &mut Gen, shape: &Shape, out: &mut String) {
    if bool::arbitrary(g) {
        out.push_str(pick(g, SEPARATORS));
    }
    match shape {
        Shape::Text(body) => {
            for ch in body.chars() {
                if ch == '<' || ch == '\\' || (!ch.is_whitespace() && usize::arbitrary(g) % 8 == 0) {
                    out.push('\\');
                }
                out.push(ch);
            }
        }
        Shape::Tag {
            name,
            attributes,
            children,
        } => {
            out.push('<');
            out.push_str(name);
            for (attr, value) in attributes {
                out.push_str(pick(g, SEPARATORS));
                out.push_str(attr);
                if value == "true" && bool::arbitrary(g) {
                    continue;
                }
                let quote = if value.contains('"') {
                    '\''
                } else if value.contains('\'') {
                    '"'
                } else {
                    pick(g, &['"', '\''])
                };
                out.push('=');
                out.push(quote);
                out.push_str(value);
                out.push(quote);
            }
            if children.is_empty() && bool::arbitrary(g) {
                if bool::arbitrary(g) {
                    out.push_str(pick(g, SEPARATORS));
                }
                out.push_str("/>");
                return;
            }
            if bool::arbitrary(g) {
                out.push_str(pick(g, SEPARATORS));
            }
            out.push('>');
            for child in children {
                render(g, child, out);
            }
            if bool::arbitrary(g) {
                out.push_str(pick(g, SEPARATORS));
            }
            out.push_str("</");
            out.push_str(name);
            if bool::arbitrary(g) {
                out.push_str(pick(g, SEPARATORS));
            }
            out.push('>');
        }
    }
}
