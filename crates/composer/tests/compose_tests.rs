use pretty_assertions::assert_eq;
use tree_composer::prelude::*;

fn x_of(layout: &Layout, id: &str) -> f64 {
    layout.node(id).unwrap().position.x
}

fn names_left_to_right(layout: &Layout, parent: &str) -> Vec<String> {
    layout
        .children_of(parent)
        .map(|node| node.data.name.clone())
        .collect()
}

fn scenario_tree() -> SourceNode {
    SourceNode::folder("R")
        .with_child(SourceNode::file("b.txt"))
        .with_child(SourceNode::folder("A").with_child(SourceNode::file("x.txt")))
        .with_child(SourceNode::file("a.txt"))
}

#[test]
fn test_mixed_children_order_rows_and_edges() {
    let layout = compose(&scenario_tree(), &ComposeOptions::new().node_size(200.0));

    assert!(layout.warnings.is_empty());
    assert_eq!(names_left_to_right(&layout, "00"), vec!["a.txt", "b.txt", "A"]);

    let a = "00_child_2_a_txt";
    let b = "00_child_0_b_txt";
    let folder = "00_child_1_a";
    let x = "00_child_1_a_child_0_x_txt";

    let mut rows: Vec<f64> = layout.nodes.iter().map(|n| n.position.y).collect();
    rows.sort_by(|l, r| l.partial_cmp(r).unwrap());
    rows.dedup();
    assert_eq!(rows.len(), 3);

    let mut edge_ids: Vec<&str> = layout.edges.iter().map(|e| e.id.as_str()).collect();
    edge_ids.sort_unstable();
    let mut expected = vec![
        format!("e_00_{a}"),
        format!("e_00_{b}"),
        format!("e_00_{folder}"),
        format!("e_{folder}_{x}"),
    ];
    expected.sort_unstable();
    assert_eq!(edge_ids, expected);

    assert!(x_of(&layout, a) < x_of(&layout, b));
    assert!(x_of(&layout, b) < x_of(&layout, folder));
}

#[test]
fn test_scenario_layout_snapshot() {
    let layout = compose(&scenario_tree(), &ComposeOptions::default());

    let mut lines: Vec<String> = layout
        .nodes
        .iter()
        .map(|n| {
            format!(
                "{} {} ({}, {})",
                n.id, n.render_variant, n.position.x, n.position.y
            )
        })
        .collect();
    lines.extend(layout.edges.iter().map(|e| e.id.clone()));
    let rendered = lines.join("\n");

    insta::assert_snapshot!(rendered, @r"
    00 folder (0, 0)
    00_child_2_a_txt plain-file (-480, 320)
    00_child_0_b_txt plain-file (0, 320)
    00_child_1_a folder (480, 320)
    00_child_1_a_child_0_x_txt plain-file (480, 640)
    e_00_00_child_2_a_txt
    e_00_00_child_0_b_txt
    e_00_00_child_1_a
    e_00_child_1_a_00_child_1_a_child_0_x_txt
    ");
}

#[test]
fn test_unclassifiable_node_is_skipped_with_its_children() {
    let tree = SourceNode::folder("R")
        .with_child(
            SourceNode::new("widget", "Gadget")
                .with_child(SourceNode::file("one.txt"))
                .with_child(SourceNode::folder("two")),
        )
        .with_child(SourceNode::file("kept.txt"));

    let layout = compose(&tree, &ComposeOptions::default());

    assert_eq!(layout.warnings.len(), 1);
    assert!(layout.warning_messages()[0].contains("Gadget"));

    let names: Vec<&str> = layout.nodes.iter().map(|n| n.data.name.as_str()).collect();
    assert_eq!(names, vec!["R", "kept.txt"]);
    assert!(layout
        .edges
        .iter()
        .all(|e| !e.target.starts_with("00_child_0_gadget")));
}

#[test]
fn test_duplicate_sibling_ids_keep_first() {
    let tree = SourceNode::folder("R")
        .with_child(
            SourceNode::folder("first")
                .with_id("shared")
                .with_child(SourceNode::file("kept.txt")),
        )
        .with_child(
            SourceNode::folder("second")
                .with_id("shared")
                .with_child(SourceNode::file("lost.txt"))
                .with_child(SourceNode::file("also-lost.txt")),
        );

    let layout = compose(&tree, &ComposeOptions::default());

    assert_eq!(layout.nodes.iter().filter(|n| n.id == "shared").count(), 1);
    assert_eq!(layout.node("shared").unwrap().data.name, "first");
    assert!(!layout.warnings.is_empty());
    assert!(layout
        .nodes
        .iter()
        .all(|n| n.data.name != "lost.txt" && n.data.name != "also-lost.txt"));
    assert_eq!(layout.edges.len(), 2);
}

#[test]
fn test_leaf_row_uses_leaf_gap() {
    let tree = SourceNode::folder("R").with_children(["c", "a", "b"].map(SourceNode::file));
    let options = ComposeOptions::new().sibling_spacing(100.0);

    let layout = compose(&tree, &options);
    let xs: Vec<f64> = layout.children_of("00").map(|n| n.position.x).collect();

    assert_eq!(xs.len(), 3);
    // Centres are one node plus the 30-unit leaf gap apart
    assert_eq!(xs[1] - xs[0], 230.0);
    assert_eq!(xs[2] - xs[1], 230.0);
}

#[test]
fn test_leaf_width_equals_node_size() {
    let layout = compose(&SourceNode::file("solo.txt"), &ComposeOptions::new().node_size(90.0));

    assert_eq!(layout.nodes.len(), 1);
    assert_eq!(layout.nodes[0].position, Position::new(0.0, 0.0));
    assert!(layout.edges.is_empty());
}

#[test]
fn test_last_but_one_gap_with_level_override() {
    let cluster =
        |name: &str| SourceNode::folder(name).with_children(["1", "2"].map(SourceNode::file));
    let tree = SourceNode::folder("R").with_child(cluster("P")).with_child(cluster("Q"));

    let layout = compose(&tree, &ComposeOptions::new().level_horizontal_gaps([50.0]));
    // Each cluster is 2 * 200 + 30 wide; clusters are pulled to the 30 floor
    assert_eq!(x_of(&layout, "00_child_1_q") - x_of(&layout, "00_child_0_p"), 460.0);

    let layout = compose(
        &tree,
        &ComposeOptions::new()
            .level_horizontal_gaps([50.0])
            .min_sibling_gap(33.0),
    );
    // Clusters are 433 wide; 50 steps down to 35, the last value not below 33
    assert_eq!(x_of(&layout, "00_child_1_q") - x_of(&layout, "00_child_0_p"), 468.0);
}

#[test]
fn test_last_but_one_gap_below_first_level() {
    let cluster =
        |name: &str| SourceNode::folder(name).with_children(["1", "2"].map(SourceNode::file));
    let tree = SourceNode::folder("R")
        .with_child(SourceNode::folder("P").with_child(cluster("Q")).with_child(cluster("S")));

    let layout = compose(&tree, &ComposeOptions::new().sibling_spacing(50.0));
    let q = x_of(&layout, "00_child_0_p_child_0_q");
    let s = x_of(&layout, "00_child_0_p_child_1_s");

    assert_eq!(s - q, 460.0);
}

#[test]
fn test_mixed_children_use_baseline_gap() {
    let tree = SourceNode::folder("R")
        .with_child(SourceNode::file("a"))
        .with_child(SourceNode::folder("B").with_child(SourceNode::file("b1")));

    let layout = compose(&tree, &ComposeOptions::new().sibling_spacing(100.0));
    let xs: Vec<f64> = layout.children_of("00").map(|n| n.position.x).collect();

    assert_eq!(xs[1] - xs[0], 300.0);
}

#[test]
fn test_root_override_and_anchor() {
    let tree = SourceNode::folder("R")
        .with_id("ignored")
        .with_child(SourceNode::file("a"));
    let options = ComposeOptions::new().root_id("top").root_position(40.0, 25.0);

    let layout = compose(&tree, &options);

    assert_eq!(layout.nodes[0].id, "top");
    assert_eq!(layout.nodes[0].position, Position::new(40.0, 25.0));
    assert_eq!(layout.edges[0].id, "e_top_top_child_0_a");
}

#[test]
fn test_render_variants_and_metadata() {
    let tree = SourceNode::folder("assets")
        .with_child(SourceNode::file("logo.svg").with_purpose("brand mark"))
        .with_child(SourceNode::file("notes.txt").with_variant("document"))
        .with_child(SourceNode::new("imageFile", "banner").with_description("hero"));

    let layout = compose(&tree, &ComposeOptions::default());
    let variant = |name: &str| {
        layout
            .nodes
            .iter()
            .find(|n| n.data.name == name)
            .map(|n| n.render_variant)
            .unwrap()
    };

    assert_eq!(variant("assets"), RenderVariant::Folder);
    assert_eq!(variant("logo.svg"), RenderVariant::Image);
    assert_eq!(variant("notes.txt"), RenderVariant::Document);
    assert_eq!(variant("banner"), RenderVariant::File);

    let logo = layout.nodes.iter().find(|n| n.data.name == "logo.svg").unwrap();
    assert_eq!(logo.data.kind, NodeKind::File);
    assert_eq!(logo.data.purpose.as_deref(), Some("brand mark"));
    assert_eq!(logo.data.depth, 1);
    assert_eq!(logo.data.parent_id.as_deref(), Some("00"));
}

#[test]
fn test_file_with_children_still_laid_out() {
    let tree = SourceNode::folder("R").with_child(
        SourceNode::file("bundle.zip")
            .with_id("zip")
            .with_child(SourceNode::file("inner.txt")),
    );

    let layout = compose(&tree, &ComposeOptions::default());

    assert_eq!(layout.nodes.len(), 3);
    assert_eq!(layout.warnings.len(), 1);
    assert!(!layout.warnings[0].is_data_loss());
    assert!(layout.edge("e_zip_zip_child_0_inner_txt").is_some());
}

#[test]
fn test_json_round_trip_through_serde() {
    let json = r#"{
        "type": "folder",
        "name": "root",
        "children": [
            { "type": "file", "name": "a.png" },
            { "type": "Folder", "name": "docs", "children": [{ "type": "file", "name": "guide.md" }] }
        ]
    }"#;
    let tree: SourceNode = serde_json::from_str(json).unwrap();

    let layout = compose(&tree, &ComposeOptions::default());
    let value = serde_json::to_value(&layout).unwrap();

    assert_eq!(value["nodes"][1]["renderVariant"], "image-file");
    assert_eq!(value["nodes"][0]["data"]["kind"], "folder");
    assert_eq!(value["nodes"][0]["data"]["parentId"], serde_json::Value::Null);
    assert_eq!(value["edges"].as_array().unwrap().len(), 3);
    assert_eq!(value["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_warnings_follow_traversal_order() {
    let zip = |name: &str| SourceNode::file(name).with_child(SourceNode::file("inner.txt"));
    let tree = SourceNode::folder("R")
        .with_child(SourceNode::new("widget", "Gadget"))
        .with_child(SourceNode::folder("first").with_id("dup").with_child(zip("bundle.zip")))
        .with_child(SourceNode::folder("second").with_id("dup"))
        .with_child(zip("late.zip"));

    let layout = compose(&tree, &ComposeOptions::default());

    let order: Vec<(&str, String)> = layout
        .warnings
        .iter()
        .map(|warning| match warning {
            ComposeWarning::UnknownKind { name, .. } => ("unknown", name.clone()),
            ComposeWarning::DuplicateId { name, .. } => ("duplicate", name.clone()),
            ComposeWarning::FileWithChildren { name, .. } => ("file-children", name.clone()),
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("unknown", "Gadget".to_string()),
            ("file-children", "bundle.zip".to_string()),
            ("duplicate", "second".to_string()),
            ("file-children", "late.zip".to_string()),
        ]
    );
}

#[test]
fn test_malformed_records_load_and_compose() {
    let json = r#"{
        "type": "folder",
        "name": "root",
        "id": 1,
        "children": [
            { "type": null, "name": "mystery" },
            { "type": "file", "name": null },
            { "type": "folder", "name": "empty", "children": null }
        ]
    }"#;
    let tree: SourceNode = serde_json::from_str(json).unwrap();

    let layout = compose(&tree, &ComposeOptions::default());

    assert_eq!(layout.nodes[0].id, "1");
    assert_eq!(layout.nodes.len(), 3);
    assert_eq!(layout.warnings.len(), 1);
    assert!(matches!(
        &layout.warnings[0],
        ComposeWarning::UnknownKind { name, .. } if name == "mystery"
    ));
    assert!(layout.node("1_child_1_node").is_some());
}

#[test]
fn test_composer_is_stateless() {
    let composer = Composer::new(ComposeOptions::new().node_size(120.0));
    let first = composer.compose(&scenario_tree());
    let other = composer.compose(&SourceNode::folder("unrelated"));
    let second = composer.compose(&scenario_tree());

    assert_eq!(first, second);
    assert_eq!(other.nodes.len(), 1);
}

#[test]
fn test_deep_tree_is_laid_out() {
    let mut tree = SourceNode::file("bottom.txt");
    for level in 0..1_500 {
        tree = SourceNode::folder(format!("level {level}"))
            .with_id(format!("n{level}"))
            .with_child(tree);
    }

    let layout = compose(&tree, &ComposeOptions::default());

    assert_eq!(layout.nodes.len(), 1_501);
    assert_eq!(layout.edges.len(), 1_500);
    assert!(layout.nodes.iter().all(|n| n.position.x == 0.0));
}
