//! Structural invariants: sibling markers, expansion state, removal.

use arbor::{Expansion, NodeId, Record, ScriptedPrompt, Tree, TreeError};

/// `[{A, children: [B]}]`, returning (tree, a, b).
fn tree_a_b() -> (Tree, NodeId, NodeId) {
    let mut tree = Tree::default();
    tree.set_data(&[Record::branch("A", vec![Record::leaf("B")])])
        .unwrap();
    let a = tree.roots()[0];
    let b = tree.children(a)[0];
    (tree, a, b)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_build_single_branch() {
    let (tree, a, b) = tree_a_b();

    assert_eq!(tree.content(a), Some("A"));
    assert_eq!(tree.expansion(a), Some(Expansion::Closed));
    assert_eq!(tree.expansion(b), Some(Expansion::Leaf));
    assert!(tree.is_last(a));
    assert!(tree.is_last(b));
    assert!(tree.is_root_level(a));
    assert!(!tree.is_root_level(b));
}

#[test]
fn test_attach_second_child_moves_last_marker() {
    let (mut tree, a, b) = tree_a_b();
    let c = tree.create_item("C");
    tree.attach(a, c).unwrap();

    assert!(!tree.is_last(b));
    assert!(tree.is_last(c));
    assert_eq!(tree.expansion(a), Some(Expansion::Closed));
    assert_eq!(tree.children(a), &[b, c]);
}

#[test]
fn test_remove_last_child_restores_marker() {
    let (mut tree, a, b) = tree_a_b();
    let c = tree.create_item("C");
    tree.attach(a, c).unwrap();

    assert_eq!(tree.remove(c).unwrap(), Some(a));
    assert!(tree.is_last(b));
    assert_eq!(tree.expansion(a), Some(Expansion::Closed));
    assert!(!tree.contains(c));
}

#[test]
fn test_remove_only_child_reverts_parent_to_leaf() {
    let (mut tree, a, b) = tree_a_b();
    tree.remove(b).unwrap();

    assert_eq!(tree.expansion(a), Some(Expansion::Leaf));
    assert!(tree.children(a).is_empty());
}

#[test]
fn test_remove_only_child_of_open_parent_reverts_to_leaf() {
    let (mut tree, a, b) = tree_a_b();
    tree.open(a).unwrap();
    tree.remove(b).unwrap();
    assert_eq!(tree.expansion(a), Some(Expansion::Leaf));
}

#[test]
fn test_remove_middle_child_keeps_last_marker() {
    let mut tree = Tree::default();
    let a = tree.add("A").unwrap();
    let b = tree.add("B").unwrap();
    let c = tree.add("C").unwrap();

    tree.remove(b).unwrap();
    assert!(!tree.is_last(a));
    assert!(tree.is_last(c));
    assert_eq!(tree.roots(), &[a, c]);
}

// ============================================================================
// Attach / Remove
// ============================================================================

#[test]
fn test_create_item_is_detached_leaf() {
    let mut tree = Tree::default();
    let item = tree.create_item("X");
    let node = tree.node(item).unwrap();

    assert_eq!(node.expansion(), Expansion::Leaf);
    assert!(node.is_last());
    assert_eq!(node.parent(), None);
    assert!(tree.is_empty());
}

#[test]
fn test_attach_to_open_parent_keeps_it_open() {
    let (mut tree, a, _) = tree_a_b();
    tree.open(a).unwrap();
    let c = tree.create_item("C");
    tree.attach(a, c).unwrap();
    assert_eq!(tree.expansion(a), Some(Expansion::Open));
}

#[test]
fn test_attach_twice_is_rejected() {
    let (mut tree, a, b) = tree_a_b();
    assert_eq!(tree.attach(a, b), Err(TreeError::AlreadyAttached(b)));
}

#[test]
fn test_attach_root_is_rejected() {
    let mut tree = Tree::default();
    let item = tree.create_item("X");
    assert_eq!(tree.attach(item, NodeId::ROOT), Err(TreeError::RootNotAllowed));
}

#[test]
fn test_attach_under_own_descendant_is_rejected() {
    let mut tree = Tree::default();
    let outer = tree.create_item("outer");
    let inner = tree.create_item("inner");
    tree.attach(outer, inner).unwrap();

    assert_eq!(
        tree.attach(inner, outer),
        Err(TreeError::Cycle {
            parent: inner,
            child: outer
        })
    );
    assert_eq!(
        tree.attach(outer, outer),
        Err(TreeError::Cycle {
            parent: outer,
            child: outer
        })
    );
}

#[test]
fn test_remove_root_is_rejected() {
    let mut tree = Tree::default();
    assert_eq!(tree.remove(NodeId::ROOT), Err(TreeError::RootNotAllowed));
}

#[test]
fn test_remove_frees_subtree() {
    let (mut tree, a, b) = tree_a_b();
    tree.remove(a).unwrap();

    assert!(!tree.contains(a));
    assert!(!tree.contains(b));
    assert!(tree.is_empty());
    assert_eq!(tree.remove(b), Err(TreeError::UnknownNode(b)));
}

#[test]
fn test_remove_detached_node_has_no_parent() {
    let mut tree = Tree::default();
    let item = tree.create_item("X");
    assert_eq!(tree.remove(item).unwrap(), None);
    assert!(!tree.contains(item));
}

#[test]
fn test_removed_slot_is_reused_but_stale_id_stays_dead() {
    let (mut tree, a, b) = tree_a_b();
    tree.remove(b).unwrap();

    let c = tree.create_item("C");
    assert_eq!(c.index(), b.index());
    assert_ne!(c, b);
    assert!(tree.contains(c));
    assert!(!tree.contains(b));
    assert_eq!(tree.content(b), None);
    assert_eq!(tree.attach(a, b), Err(TreeError::UnknownNode(b)));
    assert_eq!(tree.remove(b), Err(TreeError::UnknownNode(b)));
    assert!(tree.contains(c));
}

#[test]
fn test_repeated_set_data_reuses_slots() {
    let data = [Record::branch("A", vec![Record::leaf("B")]), Record::leaf("C")];
    let mut tree = Tree::default();
    tree.set_data(&data).unwrap();
    let mut first: Vec<usize> = tree.iter().map(NodeId::index).collect();
    let old = tree.roots()[0];

    for _ in 0..5 {
        tree.set_data(&data).unwrap();
    }
    let mut last: Vec<usize> = tree.iter().map(NodeId::index).collect();
    first.sort_unstable();
    last.sort_unstable();

    assert_eq!(first, last);
    assert_eq!(tree.len(), 3);
    assert!(!tree.contains(old));
}

#[test]
fn test_node_at_path() {
    let (mut tree, a, b) = tree_a_b();
    let c = tree.add("C").unwrap();

    assert_eq!(tree.node_at_path(&[]), Some(NodeId::ROOT));
    assert_eq!(tree.node_at_path(&[0]), Some(a));
    assert_eq!(tree.node_at_path(&[0, 0]), Some(b));
    assert_eq!(tree.node_at_path(&[1]), Some(c));
    assert_eq!(tree.node_at_path(&[2]), None);
    assert_eq!(tree.node_at_path(&[0, 0, 0]), None);
}

#[test]
fn test_clear_removes_every_item() {
    let (mut tree, a, b) = tree_a_b();
    tree.add("Z").unwrap();
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(!tree.contains(a));
    assert!(!tree.contains(b));
}

#[test]
fn test_iter_is_depth_first() {
    let mut tree = Tree::default();
    tree.set_data(&[
        Record::branch("A", vec![Record::leaf("A1"), Record::leaf("A2")]),
        Record::leaf("B"),
    ])
    .unwrap();

    let order: Vec<&str> = tree.iter().filter_map(|id| tree.content(id)).collect();
    assert_eq!(order, vec!["A", "A1", "A2", "B"]);
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_depth() {
    let (tree, a, b) = tree_a_b();
    assert_eq!(tree.depth(NodeId::ROOT), 0);
    assert_eq!(tree.depth(a), 1);
    assert_eq!(tree.depth(b), 2);
}

// ============================================================================
// Expand/Collapse
// ============================================================================

#[test]
fn test_toggle_flips_open_and_closed() {
    let (mut tree, a, _) = tree_a_b();
    assert_eq!(tree.toggle_expansion(a).unwrap(), Expansion::Open);
    assert_eq!(tree.toggle_expansion(a).unwrap(), Expansion::Closed);
}

#[test]
fn test_toggle_on_leaf_is_noop() {
    let (mut tree, _, b) = tree_a_b();
    assert_eq!(tree.toggle_expansion(b).unwrap(), Expansion::Leaf);
    assert_eq!(tree.expansion(b), Some(Expansion::Leaf));
}

#[test]
fn test_open_and_close_skip_leaves() {
    let (mut tree, a, b) = tree_a_b();
    tree.open(b).unwrap();
    assert_eq!(tree.expansion(b), Some(Expansion::Leaf));

    tree.open(a).unwrap();
    assert_eq!(tree.expansion(a), Some(Expansion::Open));
    tree.close(a).unwrap();
    assert_eq!(tree.expansion(a), Some(Expansion::Closed));
}

#[test]
fn test_expand_all_and_collapse_all() {
    let mut tree = Tree::default();
    tree.set_data(&[Record::branch(
        "A",
        vec![Record::branch("B", vec![Record::leaf("C")])],
    )])
    .unwrap();
    let a = tree.roots()[0];
    let b = tree.children(a)[0];
    let c = tree.children(b)[0];

    tree.expand_all();
    assert_eq!(tree.expansion(a), Some(Expansion::Open));
    assert_eq!(tree.expansion(b), Some(Expansion::Open));
    assert_eq!(tree.expansion(c), Some(Expansion::Leaf));

    tree.collapse_all();
    assert_eq!(tree.expansion(a), Some(Expansion::Closed));
    assert_eq!(tree.expansion(b), Some(Expansion::Closed));
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_whitespace_edit_is_discarded() {
    let (mut tree, a, _) = tree_a_b();
    assert!(!tree.apply_edit(a, Some("   ".to_string())).unwrap());
    assert_eq!(tree.content(a), Some("A"));
}

#[test]
fn test_cancelled_edit_is_discarded() {
    let (mut tree, a, _) = tree_a_b();
    assert!(!tree.apply_edit(a, None).unwrap());
    assert_eq!(tree.content(a), Some("A"));
}

#[test]
fn test_edit_replaces_content_verbatim() {
    let (mut tree, a, _) = tree_a_b();
    assert!(tree.apply_edit(a, Some("Hello".to_string())).unwrap());
    assert_eq!(tree.content(a), Some("Hello"));

    assert!(tree.apply_edit(a, Some(" <b>x</b> ".to_string())).unwrap());
    assert_eq!(tree.content(a), Some(" <b>x</b> "));
}

#[test]
fn test_edit_root_is_rejected() {
    let mut tree = Tree::default();
    assert_eq!(
        tree.apply_edit(NodeId::ROOT, Some("x".to_string())),
        Err(TreeError::RootNotAllowed)
    );
}

#[test]
fn test_edit_content_of_root_never_prompts() {
    let mut tree = Tree::default();
    let mut prompt = ScriptedPrompt::new().answer("x");
    assert_eq!(
        tree.edit_content(NodeId::ROOT, &mut prompt),
        Err(TreeError::RootNotAllowed)
    );
    assert!(prompt.asked().is_empty());
}

#[test]
fn test_edit_content_of_removed_node_never_prompts() {
    let (mut tree, _, b) = tree_a_b();
    tree.remove(b).unwrap();
    let mut prompt = ScriptedPrompt::new().answer("x");
    assert_eq!(
        tree.edit_content(b, &mut prompt),
        Err(TreeError::UnknownNode(b))
    );
    assert!(prompt.asked().is_empty());
}
