//! Unit tests for rn-output.

#[cfg(test)]
mod helpers {
    use rn_core::{EdgeId, GeoPoint, NodeId};
    use rn_graph::{Edge, Node, RoadGraph};

    pub fn sample_graph() -> RoadGraph {
        RoadGraph {
            nodes: vec![
                Node { id: NodeId(1), pos: GeoPoint::new(34.90, 32.00) },
                Node { id: NodeId(2), pos: GeoPoint::new(34.91, 32.00) },
            ],
            edges: vec![
                Edge { id: EdgeId(1), from: NodeId(1), to: NodeId(2), length_km: 0.94, speed_kmh: 50.0 },
                Edge { id: EdgeId(2), from: NodeId(2), to: NodeId(1), length_km: 0.94, speed_kmh: 50.0 },
            ],
        }
    }
}

#[cfg(test)]
mod writing {
    use crate::{FieldNaming, JsonWriter};

    use super::helpers::sample_graph;

    #[test]
    fn camel_case_speed_key() {
        let text = JsonWriter::new(FieldNaming::CamelCase)
            .to_json(&sample_graph())
            .unwrap();
        assert!(text.contains("\"speedLimit\""), "{text}");
        assert!(!text.contains("\"speed_limit\""));
    }

    #[test]
    fn snake_case_speed_key() {
        let text = JsonWriter::new(FieldNaming::SnakeCase)
            .to_json(&sample_graph())
            .unwrap();
        assert!(text.contains("\"speed_limit\""), "{text}");
        assert!(!text.contains("\"speedLimit\""));
    }

    #[test]
    fn document_shape_and_order() {
        let text = JsonWriter::new(FieldNaming::CamelCase)
            .to_json(&sample_graph())
            .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(doc["edges"].as_array().unwrap().len(), 2);
        // Construction order preserved.
        assert_eq!(doc["nodes"][0]["id"], 1);
        assert_eq!(doc["nodes"][1]["id"], 2);
        assert_eq!(doc["edges"][0]["id"], 1);
        // Node rows flatten position into x/y.
        assert_eq!(doc["nodes"][0]["x"], 34.90);
        assert_eq!(doc["nodes"][0]["y"], 32.00);
        assert_eq!(doc["edges"][0]["length"], 0.94);
    }

    #[test]
    fn byte_for_byte_deterministic() {
        let w = JsonWriter::new(FieldNaming::CamelCase);
        let g = sample_graph();
        assert_eq!(w.to_json(&g).unwrap(), w.to_json(&g).unwrap());
    }

    #[test]
    fn write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let g = sample_graph();

        JsonWriter::new(FieldNaming::CamelCase).write(&g, &path).unwrap();
        let (loaded, stats) = crate::read_graph(&path).unwrap();

        assert_eq!(stats.edges_skipped, 0);
        assert_eq!(loaded.nodes, g.nodes);
        assert_eq!(loaded.edges, g.edges);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        JsonWriter::new(FieldNaming::SnakeCase)
            .write(&sample_graph(), &path)
            .unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("graph.json")]);
    }
}

#[cfg(test)]
mod reading {
    use std::io::Write;

    use rn_core::NodeId;

    use crate::read_graph;

    fn write_fixture(text: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(text.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn accepts_lowercase_legacy_key() {
        let (_dir, path) = write_fixture(
            r#"{ "nodes": [ { "id": 1, "x": 0.0, "y": 0.0 },
                            { "id": 2, "x": 1.0, "y": 0.0 } ],
                 "edges": [ { "id": 1, "from": 1, "to": 2,
                              "length": 1.0, "speedlimit": 30.0 } ] }"#,
        );
        let (g, _) = read_graph(&path).unwrap();
        assert_eq!(g.edges[0].speed_kmh, 30.0);
    }

    #[test]
    fn accepts_snake_case_key() {
        let (_dir, path) = write_fixture(
            r#"{ "nodes": [ { "id": 0, "x": 0.0, "y": 0.0 },
                            { "id": 1, "x": 0.0, "y": 0.01 } ],
                 "edges": [ { "id": 0, "from": 0, "to": 1,
                              "length": 1.0, "speed_limit": 50.0 } ] }"#,
        );
        let (g, _) = read_graph(&path).unwrap();
        assert_eq!(g.edges[0].speed_kmh, 50.0);
    }

    #[test]
    fn ignores_unknown_node_fields() {
        // Older documents carry a descriptive node "name" field.
        let (_dir, path) = write_fixture(
            r#"{ "nodes": [ { "id": 1, "name": "junction", "x": 0.0, "y": 0.0 } ],
                 "edges": [] }"#,
        );
        let (g, _) = read_graph(&path).unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.nodes[0].id, NodeId(1));
    }

    #[test]
    fn skips_edges_with_unknown_endpoints() {
        let (_dir, path) = write_fixture(
            r#"{ "nodes": [ { "id": 1, "x": 0.0, "y": 0.0 },
                            { "id": 2, "x": 1.0, "y": 0.0 } ],
                 "edges": [ { "id": 1, "from": 1, "to": 2, "length": 1.0, "speedLimit": 50.0 },
                            { "id": 2, "from": 2, "to": 777, "length": 1.0, "speedLimit": 50.0 } ] }"#,
        );
        let (g, stats) = read_graph(&path).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(stats.edges_skipped, 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_graph(std::path::Path::new("no/such/graph.json")).unwrap_err();
        assert!(matches!(err, crate::OutputError::Io(_)));
    }

    #[test]
    fn not_a_document_is_json_error() {
        let (_dir, path) = write_fixture("[1, 2, 3]");
        let err = read_graph(&path).unwrap_err();
        assert!(matches!(err, crate::OutputError::Json(_)));
    }
}
