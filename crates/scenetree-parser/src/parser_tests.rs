//! Pipeline tests for the scene parser.
//!
//! These tests run complete scene sources through [`parse`] and check the
//! resulting tree or the error kind.

use proptest::prelude::*;

use scenetree_core::node::{ContainerNode, Node, SceneReferenceNode};

use crate::{ParseError, parse};

fn resource_line(path: &str, id: &str) -> String {
    format!("[ext_resource type=\"PackedScene\" path=\"{path}\" id=\"{id}\"]")
}

fn assert_parse_fails_with(source: &str, expected: fn(&ParseError) -> bool) {
    match parse(source) {
        Ok(tree) => panic!("Expected parsing to fail, but got {tree:?}"),
        Err(err) => assert!(expected(&err), "Unexpected error: {err:?}"),
    }
}

#[test]
fn test_root_with_typed_child() {
    let source = "[node name=\"Root\" type=\"Node2D\"]\n\
                  [node name=\"Child\" type=\"Sprite2D\" parent=\".\"]";

    let tree = parse(source).unwrap();

    assert_eq!(
        tree,
        Node::from(ContainerNode::new(
            "Root",
            "Node2D",
            vec![Node::from(ContainerNode::new("Child", "Sprite2D", vec![]))],
        ))
    );
}

#[test]
fn test_duplicated_resource_ids() {
    let source = format!(
        "{}\n{}\n[node name=\"Root\" type=\"Node\"]",
        resource_line("res://a.tscn", "1"),
        resource_line("res://b.tscn", "1"),
    );

    match parse(&source) {
        Err(ParseError::DuplicatedSceneResources { duplicates }) => {
            assert_eq!(duplicates.len(), 1);
            assert_eq!(duplicates[0].id(), "1");
            assert_eq!(duplicates[0].paths(), vec!["res://a.tscn", "res://b.tscn"]);
        }
        other => panic!("Expected duplicated resources, got {other:?}"),
    }
}

#[test]
fn test_instanced_child() {
    let source = format!(
        "{}\n[node name=\"Root\" type=\"Node2D\"]\n\
         [node name=\"Enemy\" parent=\".\" instance=Wrapper(\"3\")]",
        resource_line("res://enemy.tscn", "3"),
    );

    let tree = parse(&source).unwrap();

    assert_eq!(
        tree,
        Node::from(ContainerNode::new(
            "Root",
            "Node2D",
            vec![Node::from(SceneReferenceNode::new("Enemy", "Enemy"))],
        ))
    );
}

#[test]
fn test_missing_root() {
    let source = "[node name=\"A\" type=\"Node\" parent=\".\"]\n\
                  [node name=\"B\" type=\"Node\" parent=\"A\"]";

    assert_parse_fails_with(source, |err| matches!(err, ParseError::MissingRootNode));
}

#[test]
fn test_empty_source_has_no_root() {
    assert_parse_fails_with("", |err| matches!(err, ParseError::MissingRootNode));
}

#[test]
fn test_nameless_node_is_ignored() {
    let source = "[node name=\"Root\" type=\"Node\"]\n\
                  [node type=\"Sprite2D\" parent=\".\"]\n\
                  [node name=\"Label\" type=\"Label\" parent=\".\"]";

    let tree = parse(source).unwrap();

    assert_eq!(tree.node_count(), 2);
    assert_eq!(tree.children()[0].name(), "Label");
}

#[test]
fn test_resource_errors_come_first() {
    let source = format!(
        "[node]\n{}\n{}",
        resource_line("res://a.tscn", "1"),
        resource_line("res://b.tscn", "1"),
    );

    assert_parse_fails_with(&source, |err| {
        matches!(err, ParseError::DuplicatedSceneResources { .. })
    });
}

#[test]
fn test_malformed_node_line() {
    assert_parse_fails_with("[node name=\"Root\" type=\"Node\"]\n[node]", |err| {
        matches!(err, ParseError::UnexpectedNodeFormat { .. })
    });
}

#[test]
fn test_godot_scene() {
    let source = r#"[gd_scene load_steps=4 format=3 uid="uid://c8y1q2"]

[ext_resource type="Script" path="res://main.gd" id="1_k3j"]
[ext_resource type="PackedScene" uid="uid://b4" path="res://player.tscn" id="2_p1"]
[ext_resource type="PackedScene" uid="uid://b5" path="res://enemy.tscn" id="3_e1"]

[sub_resource type="RectangleShape2D" id="RectangleShape2D_x"]
size = Vector2(64, 64)

[node name="Main" type="Node2D"]
script = ExtResource("1_k3j")

[node name="Player" parent="." instance=ExtResource("2_p1")]
position = Vector2(100, 200)

[node name="Enemies" type="Node2D" parent="."]

[node name="Enemy1" parent="Enemies" instance=ExtResource("3_e1")]

[node name="Enemy2" parent="Enemies" instance=ExtResource("3_e1")]

[node name="Walls" type="StaticBody2D" parent="."]

[node name="Shape" type="CollisionShape2D" parent="Walls"]
shape = SubResource("RectangleShape2D_x")

[connection signal="died" from="Enemies/Enemy1" to="." method="_on_enemy_died"]
"#;

    let tree = parse(source).unwrap();

    assert_eq!(tree.name(), "Main");
    let names: Vec<_> = tree.children().iter().map(Node::name).collect();
    assert_eq!(names, vec!["Player", "Enemies", "Walls"]);
    assert_eq!(
        tree.get("Player"),
        Some(&Node::from(SceneReferenceNode::new("Player", "Player")))
    );
    assert_eq!(tree.get("Enemies").map(|n| n.children().len()), Some(2));
    assert!(tree.get("Walls/Shape").is_some_and(Node::is_container));
    assert_eq!(tree.node_count(), 7);
}

#[test]
fn test_scene_path_without_name() {
    let source = format!(
        "{}\n[node name=\"Root\" type=\"Node\"]\n\
         [node name=\"Ghost\" parent=\".\" instance=ExtResource(\"1\")]",
        resource_line("res://.tscn", "1"),
    );

    assert_parse_fails_with(&source, |err| {
        matches!(err, ParseError::UnexpectedSceneFormat { path, .. } if path == "res://.tscn")
    });
}

#[test]
fn test_crlf_scene() {
    let source = "[node name=\"Root\" type=\"Node\"]\r\n[node name=\"Child\" type=\"Node\" parent=\".\"]\r\n";

    let tree = parse(source).unwrap();

    assert_eq!(tree.node_count(), 2);
}

mod proptest_tests {
    use super::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Z][A-Za-z0-9_]{0,8}"
    }

    /// Children keep declaration order.
    fn check_children_order(names: &[String]) -> Result<(), TestCaseError> {
        let mut source = String::from("[node name=\"Root\" type=\"Node\"]\n");
        for name in names {
            source.push_str(&format!("[node name=\"{name}\" type=\"Node\" parent=\".\"]\n"));
        }

        let tree = parse(&source).map_err(|err| TestCaseError::fail(err.to_string()))?;

        let children: Vec<_> = tree.children().iter().map(Node::name).collect();
        prop_assert_eq!(children, names.iter().map(String::as_str).collect::<Vec<_>>());
        Ok(())
    }

    /// A shared id is rejected with both paths whichever comes first.
    fn check_duplicates_detected(first: &str, second: &str, swap: bool) -> Result<(), TestCaseError> {
        let (a, b) = if swap { (second, first) } else { (first, second) };
        let source = format!(
            "{}\n{}\n[node name=\"Root\" type=\"Node\"]",
            resource_line(&format!("res://{a}.tscn"), "7"),
            resource_line(&format!("res://{b}.tscn"), "7"),
        );

        let first_path = format!("res://{first}.tscn");
        let second_path = format!("res://{second}.tscn");

        match parse(&source) {
            Err(ParseError::DuplicatedSceneResources { duplicates }) => {
                prop_assert_eq!(duplicates.len(), 1);
                let paths = duplicates[0].paths();
                prop_assert_eq!(paths.len(), 2);
                prop_assert!(paths.contains(&first_path.as_str()));
                prop_assert!(paths.contains(&second_path.as_str()));
            }
            other => prop_assert!(false, "Expected duplicated resources, got {:?}", other),
        }
        Ok(())
    }

    /// An instance of an undeclared id always fails.
    fn check_unknown_reference(id: &str) -> Result<(), TestCaseError> {
        let source = format!(
            "{}\n[node name=\"Root\" type=\"Node\"]\n\
             [node name=\"Child\" parent=\".\" instance=ExtResource(\"{id}\")]",
            resource_line("res://known.tscn", "known"),
        );

        let result = parse(&source);
        prop_assert!(
            matches!(result, Err(ParseError::UnexpectedSceneResource { .. })),
            "Expected unknown resource, got {:?}",
            result
        );
        Ok(())
    }

    /// Parsing the same source twice yields the same tree.
    fn check_idempotent(names: &[String]) -> Result<(), TestCaseError> {
        let mut source = String::from("[node name=\"Root\" type=\"Node\"]\n");
        let mut parent = String::from(".");
        for name in names {
            source.push_str(&format!(
                "[node name=\"{name}\" type=\"Node\" parent=\"{parent}\"]\n"
            ));
            parent = if parent == "." {
                name.clone()
            } else {
                format!("{parent}/{name}")
            };
        }

        let first = parse(&source).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let second = parse(&source).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(first.node_count(), names.len() + 1);
        prop_assert_eq!(first, second);
        Ok(())
    }

    proptest! {
        #[test]
        fn children_order(names in prop::collection::vec(name_strategy(), 0..10)) {
            check_children_order(&names)?;
        }

        #[test]
        fn duplicates_detected(
            first in "[a-z]{1,8}",
            second in "[a-z]{1,8}",
            swap in any::<bool>(),
        ) {
            check_duplicates_detected(&first, &second, swap)?;
        }

        #[test]
        fn unknown_reference(id in "[0-9]{1,3}_[a-z]{1,4}") {
            check_unknown_reference(&id)?;
        }

        #[test]
        fn idempotent(names in prop::collection::vec(name_strategy(), 0..6)) {
            check_idempotent(&names)?;
        }
    }
}
