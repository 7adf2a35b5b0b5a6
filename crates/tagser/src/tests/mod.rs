mod arbitrary;


use crate::{Node, NodeKind};

/// Position-free view of a node tree, for comparing parse results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shape {
    Text(String),
    Tag {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Shape>,
    },
}

pub(crate) fn shape(nodes: &[Node]) -> Vec<Shape> {
    nodes
        .iter()
        .map(|node| match node.kind() {
            NodeKind::Text => Shape::Text(node.body().to_owned()),
            NodeKind::Tag => Shape::Tag {
                name: node.name().to_owned(),
                attributes: node
                    .attributes()
                    .values()
                    .map(|a| (a.name().to_owned(), a.value().to_owned()))
                    .collect(),
                children: shape(node.children()),
            },
        })
        .collect()
}

pub(crate) fn text(body: &str) -> Shape {
    Shape::Text(body.to_owned())
}

pub(crate) fn tag(name: &str, attributes: &[(&str, &str)], children: Vec<Shape>) -> Shape {
    Shape::Tag {
        name: name.to_owned(),
        attributes: attributes
            .iter()
            .map(|&(n, v)| (n.to_owned(), v.to_owned()))
            .collect(),
        children,
    }
}

/// Number of quickcheck cases per property.
pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
