#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tagser::{ErrorCode, Node, Parser, ParserOptions, to_markup};

#[derive(Debug, Arbitrary)]
struct Input {
    ignore_case: bool,
    source: String,
}

/// Attribute values holding both quote characters have no markup form.
fn representable(nodes: &[Node]) -> bool {
    nodes.iter().all(|node| {
        node.attributes()
            .values()
            .all(|a| !(a.value().contains('"') && a.value().contains('\'')))
            && representable(node.children())
    })
}

fuzz_target!(|input: Input| {
    let parser = Parser::new(ParserOptions {
        ignore_case: input.ignore_case,
        panic_on_error: false,
    });

    match parser.parse(&input.source) {
        Ok(nodes) => {
            if !representable(&nodes) {
                return;
            }
            let markup = to_markup(&nodes);
            let again = parser
                .parse(&markup)
                .unwrap_or_else(|err| panic!("{err} re-parsing {markup:?}"));
            assert_eq!(to_markup(&again), markup);
        }
        Err(err) => {
            assert!(!matches!(
                err.code(),
                ErrorCode::AttributeNameEmpty | ErrorCode::AttributeValueEmpty
            ));
            assert!(err.line() >= 1 && err.column() >= 1);
        }
    }
});
