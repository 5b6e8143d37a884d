#![cfg(feature = "markdown")]

use markdown::ParseOptions;
use markdown::mdast::{Heading, Node, Text};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn parse(source: &str, options: &ParseOptions) -> Node {
    markdown::to_mdast(source, options).unwrap()
}

#[rstest]
#[case::empty("")]
#[case::heading("# Title\n")]
#[case::inline("Some *emphasis*, **strong**, and `code`.\n")]
#[case::list("- one\n- two\n\n1. first\n2. second\n")]
#[case::blockquote("> quoted\n> text\n")]
#[case::code("```rust title=main.rs\nfn main() {}\n```\n")]
#[case::thematic_break("a\n\n***\n\nb\n")]
#[case::html("<div>\nhi\n</div>\n")]
#[case::image("![alt](image.png \"Title\")\n")]
fn test_parsed_documents_are_valid(#[case] source: &str) {
    assert!(mdast_assert::assert_mdast(&parse(source, &ParseOptions::default())).is_ok());
}

#[rstest]
#[case::table("| a | b |\n| - | :-: |\n| 1 | 2 |\n")]
#[case::link_reference("[text][ref]\n\n[ref]: https://example.com \"Title\"\n")]
#[case::collapsed_reference("[ref][]\n\n[ref]: https://example.com\n")]
#[case::image_reference("![alt][ref]\n\n[ref]: image.png\n")]
#[case::footnote("Note[^1].\n\n[^1]: The footnote.\n")]
#[case::task_list("- [x] done\n- [ ] todo\n")]
#[case::delete("~~gone~~\n")]
#[case::autolink("See https://example.com.\n")]
fn test_parsed_gfm_documents_are_valid(#[case] source: &str) {
    assert!(mdast_assert::assert_mdast(&parse(source, &ParseOptions::gfm())).is_ok());
}

#[test]
fn test_unaligned_table_columns_serialize_as_null() {
    let tree = parse("| a | b |\n| - | :-: |\n", &ParseOptions::gfm());
    let value = serde_json::to_value(&tree).unwrap();

    assert_eq!(value["children"][0]["align"], json!([null, "center"]));
    assert!(mdast_assert::assert_mdast(&tree).is_ok());
}

#[test]
fn test_constructed_tree_is_checked() {
    let tree = Node::Heading(Heading {
        children: vec![Node::Text(Text {
            value: "Title".to_string(),
            position: None,
        })],
        position: None,
        depth: 7,
    });

    let error = mdast_assert::assert_mdast(&tree).unwrap_err();
    assert_eq!(error.message(), "`depth` should be lte `6`");
}
