//! IR Query Tests

use component_compiler::ir::{find_descendants, FileKind, Node, NodeKinds, TagHelperDescriptor};

fn sample() -> Node {
    Node::document(
        FileKind::Component,
        vec![
            Node::tag_helper(
                "Outer",
                vec![TagHelperDescriptor::component("Outer")],
                vec![
                    Node::html_attribute("a", vec![Node::expression(vec![Node::token("x")])]),
                    Node::tag_helper_body(vec![Node::tag_helper(
                        "Inner",
                        vec![],
                        vec![Node::property_binding("B", vec![Node::token("y")])],
                    )]),
                ],
            ),
            Node::template(vec![Node::expression(vec![Node::token("@"), Node::token("z")])]),
        ],
    )
}

#[test]
fn should_return_paths_in_pre_order() {
    let root = sample();
    let paths: Vec<Vec<usize>> = find_descendants(&root, NodeKinds::TAG_HELPER)
        .into_iter()
        .map(|path| path.to_vec())
        .collect();

    assert_eq!(paths, vec![vec![0], vec![0, 1, 0]]);
}

#[test]
fn should_match_any_kind_in_the_mask() {
    let root = sample();
    let paths = find_descendants(&root, NodeKinds::ATTRIBUTE_BINDING | NodeKinds::EXPRESSION);
    let kinds: Vec<&str> = paths
        .iter()
        .filter_map(|path| root.node_at(path))
        .map(|node| node.kind.name())
        .collect();

    assert_eq!(
        kinds,
        vec!["HtmlAttribute", "Expression", "PropertyBinding", "Expression"]
    );
}

#[test]
fn should_exclude_the_query_root() {
    let template = Node::template(vec![Node::template(vec![])]);
    let paths = find_descendants(&template, NodeKinds::TEMPLATE);

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].as_slice(), &[0]);
}

#[test]
fn should_return_nothing_for_an_empty_mask() {
    assert!(find_descendants(&sample(), NodeKinds::empty()).is_empty());
}

#[test]
fn every_path_resolves_to_a_matching_node() {
    let root = sample();
    for path in find_descendants(&root, NodeKinds::all()) {
        assert!(root.node_at(&path).is_some());
    }
    assert_eq!(find_descendants(&root, NodeKinds::TOKEN).len(), 4);
}
