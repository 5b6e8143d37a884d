mod common;

use common::{accepts, failure, message};
use mdast_assert::ErrorKind;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_root_must_be_a_parent() {
    assert_eq!(
        message(json!({"type": "root"})),
        r#"parent should have `children`: `{"type":"root"}`"#
    );
}

#[test]
fn test_standalone_root_is_valid() {
    accepts(json!({"type": "root", "children": []}));
    accepts(json!({
        "type": "root",
        "children": [
            {"type": "paragraph", "children": [{"type": "text", "value": "a"}]},
            {"type": "thematicBreak"}
        ]
    }));
}

#[test]
fn test_nested_root_is_rejected() {
    let error = failure(json!({"children": [{"children": [], "type": "root"}], "type": "paragraph"}));

    assert_eq!(error.kind(), ErrorKind::Context);
    insta::assert_snapshot!(
        error.to_string(),
        @r#"`root` should not have a parent: `{"children":[],"type":"root"}` in `{"children":[{"children":[],"type":"root"}],"type":"paragraph"}`"#
    );
}

#[test]
fn test_root_with_explicit_parent_is_rejected() {
    let ancestor = json!({"children": [], "type": "blockquote"});
    let error = mdast_assert::assert(&json!({"children": [], "type": "root"}), Some(&ancestor))
        .unwrap_err();

    assert_eq!(error.message(), "`root` should not have a parent");
    assert_eq!(error.parent(), Some(r#"{"children":[],"type":"blockquote"}"#));
}

#[test]
fn test_root_children_are_checked_before_ancestry() {
    let tree = json!({
        "type": "paragraph",
        "children": [{"type": "root", "children": [{"type": "text"}]}]
    });

    assert_eq!(failure(tree).message(), "literal should have `value`");
}
