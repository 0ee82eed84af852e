//! Record documents and the rendered projection.

use arbor::{Expansion, LoadError, NodeId, Record, Tree};
use arbor_dom::{closest, find_element, to_markup, ClassNames};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_null_children_is_leaf() {
    let records =
        Record::parse_document(r#"[{"content": "A", "children": null}]"#).unwrap();
    assert_eq!(records, vec![Record::leaf("A")]);

    let mut tree = Tree::default();
    tree.set_data_from_json(r#"[{"content": "A", "children": null}, {"content": "B"}]"#)
        .unwrap();
    assert_eq!(tree.len(), 2);
    let a = tree.roots()[0];
    assert!(tree.children(a).is_empty());
    assert_eq!(tree.expansion(a), Some(Expansion::Leaf));
}

#[test]
fn test_children_key_is_optional() {
    let records = Record::parse_document(
        r#"[{"content": "A", "children": [{"content": "B"}]}, {"content": "C", "children": []}]"#,
    )
    .unwrap();

    assert_eq!(
        records,
        vec![
            Record::branch("A", vec![Record::leaf("B")]),
            Record::leaf("C"),
        ]
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let records = Record::parse_document(r#"[{"content": "A", "id": 4}]"#).unwrap();
    assert_eq!(records, vec![Record::leaf("A")]);
}

#[test]
fn test_invalid_document_leaves_tree_untouched() {
    let mut tree = Tree::default();
    tree.add("keep").unwrap();

    let err = tree.set_data_from_json(r#"{"content": "not a list"}"#).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
    assert_eq!(tree.len(), 1);
}

// ============================================================================
// Building
// ============================================================================

#[test]
fn test_set_data_from_json() {
    let mut tree = Tree::default();
    tree.set_data_from_json(r#"[{"content": "A", "children": [{"content": "B"}]}]"#)
        .unwrap();

    let a = tree.roots()[0];
    assert_eq!(tree.expansion(a), Some(Expansion::Closed));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_set_data_replaces_existing_items() {
    let mut tree = Tree::default();
    tree.set_data(&[Record::leaf("old")]).unwrap();
    tree.set_data(&[Record::leaf("new1"), Record::leaf("new2")])
        .unwrap();

    let contents: Vec<&str> = tree.iter().filter_map(|id| tree.content(id)).collect();
    assert_eq!(contents, vec!["new1", "new2"]);
}

#[test]
fn test_build_under_existing_node_appends() {
    let mut tree = Tree::default();
    let a = tree.add("A").unwrap();
    tree.build_from_records(a, &[Record::leaf("x"), Record::leaf("y")])
        .unwrap();

    let children = tree.children(a).to_vec();
    assert_eq!(children.len(), 2);
    assert!(!tree.is_last(children[0]));
    assert!(tree.is_last(children[1]));
    assert_eq!(tree.expansion(a), Some(Expansion::Closed));
}

#[test]
fn test_to_records_round_trips_structure() {
    let records = vec![
        Record::branch("A", vec![Record::leaf("B"), Record::branch("C", vec![Record::leaf("D")])]),
        Record::leaf("E"),
    ];
    let mut tree = Tree::default();
    tree.set_data(&records).unwrap();
    assert_eq!(tree.to_records(), records);
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_render_marks_state_classes() {
    let mut tree = Tree::default();
    tree.set_data(&[Record::branch("A", vec![Record::leaf("B")]), Record::leaf("C")])
        .unwrap();
    let a = tree.roots()[0];
    let b = tree.children(a)[0];
    let c = tree.roots()[1];
    tree.open(a).unwrap();

    let view = tree.render();

    let row_a = find_element(&view, &tree.element_id(a)).unwrap();
    assert!(row_a.has_class(ClassNames::NODE));
    assert!(row_a.has_class(ClassNames::EXPAND_OPEN));
    assert!(row_a.has_class(ClassNames::IS_ROOT));
    assert!(!row_a.has_class(ClassNames::IS_LAST));

    let row_b = find_element(&view, &tree.element_id(b)).unwrap();
    assert!(row_b.has_class(ClassNames::EXPAND_LEAF));
    assert!(row_b.has_class(ClassNames::IS_LAST));
    assert!(!row_b.has_class(ClassNames::IS_ROOT));

    let row_c = find_element(&view, &tree.element_id(c)).unwrap();
    assert!(row_c.has_class(ClassNames::IS_LAST));
    assert!(row_c.has_class(ClassNames::EXPAND_LEAF));
}

#[test]
fn test_render_row_structure() {
    let mut tree = Tree::default();
    let a = tree.add("<b>A</b>").unwrap();
    let view = tree.render();

    let row = find_element(&view, &tree.element_id(a)).unwrap();
    let kinds: Vec<&str> = row
        .child_elements()
        .iter()
        .map(|el| el.classes[0].as_str())
        .collect();
    assert_eq!(kinds, vec!["Expand", "Content", "Container"]);
    assert_eq!(row.get_data("node"), Some(a.index().to_string().as_str()));
    assert_eq!(
        row.get_data("generation"),
        Some(a.generation().to_string().as_str())
    );

    let content = find_element(&view, &tree.content_element_id(a)).unwrap();
    assert_eq!(to_markup(content), format!("<div id=\"{}\" class=\"Content\"><b>A</b></div>", tree.content_element_id(a)));
    assert_eq!(
        closest(&view, &tree.content_element_id(a), ClassNames::NODE).map(|el| el.id.as_str()),
        Some(tree.element_id(a).as_str())
    );
}

#[test]
fn test_render_closed_branch_keeps_children() {
    let mut tree = Tree::default();
    tree.set_data(&[Record::branch("A", vec![Record::leaf("B")])])
        .unwrap();
    let b = tree.children(tree.roots()[0])[0];
    assert!(find_element(&tree.render(), &tree.element_id(b)).is_some());
}

#[test]
fn test_render_includes_hidden_menu() {
    let tree = Tree::default();
    let view = tree.render();
    let menu = find_element(&view, &tree.menu_owner()).unwrap();
    assert!(menu.has_class(ClassNames::CONTEXT_MENU));
    assert_eq!(menu.get_style("display"), Some("none"));
}

#[test]
fn test_root_is_never_rendered() {
    let tree = Tree::default();
    assert!(find_element(&tree.render(), &tree.element_id(NodeId::ROOT)).is_none());
}

#[test]
fn test_outline() {
    let mut tree = Tree::default();
    tree.set_data(&[
        Record::branch("A", vec![Record::leaf("B")]),
        Record::branch("C", vec![Record::leaf("D")]),
    ])
    .unwrap();
    let a = tree.roots()[0];
    tree.open(a).unwrap();

    assert_eq!(tree.outline(), "- A\n    B\n+ C\n");
}
