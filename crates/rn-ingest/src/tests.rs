//! Unit tests for rn-ingest.
//!
//! OSM tests parse small embedded XML documents so no fixture files are
//! needed.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use crate::{parse_osm_reader, OsmStats, RawModel};

    pub fn parse(xml: &str) -> (RawModel, OsmStats) {
        parse_osm_reader(Cursor::new(xml.as_bytes())).expect("well-formed test document")
    }

    /// Three nodes on a residential street plus one unused isolated node.
    pub const RESIDENTIAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="10" lat="32.000" lon="34.900"/>
  <node id="11" lat="32.000" lon="34.910"/>
  <node id="12" lat="32.010" lon="34.910"/>
  <node id="99" lat="31.900" lon="34.800"/>
  <way id="100">
    <nd ref="10"/>
    <nd ref="11"/>
    <nd ref="12"/>
    <tag k="highway" v="residential"/>
  </way>
</osm>
"#;
}

// ── OSM producer ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod osm {
    use std::path::Path;

    use crate::{parse_osm, IngestError, DEFAULT_SPEED_KMH, MIN_EDGE_KM};

    use super::helpers::{parse, RESIDENTIAL};

    #[test]
    fn missing_file_is_fatal() {
        let err = parse_osm(Path::new("no/such/export.osm")).unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }

    #[test]
    fn two_way_street_emits_both_directions() {
        let (raw, stats) = parse(RESIDENTIAL);
        assert_eq!(stats.nodes_read, 4);
        assert_eq!(stats.ways_kept, 1);
        // Two consecutive pairs, forward + reverse each.
        assert_eq!(raw.links.len(), 4);
        assert_eq!((raw.links[0].from_ext, raw.links[0].to_ext), (10, 11));
        assert_eq!((raw.links[1].from_ext, raw.links[1].to_ext), (11, 10));
        assert_eq!((raw.links[2].from_ext, raw.links[2].to_ext), (11, 12));
        assert_eq!((raw.links[3].from_ext, raw.links[3].to_ext), (12, 11));
    }

    #[test]
    fn oneway_yes_suppresses_reverse() {
        let (raw, _) = parse(
            r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.91"/>
  <node id="3" lat="32.0" lon="34.92"/>
  <way id="5">
    <nd ref="1"/><nd ref="2"/><nd ref="3"/>
    <tag k="highway" v="primary"/>
    <tag k="oneway" v="yes"/>
  </way>
</osm>"#,
        );
        assert_eq!(raw.links.len(), 2);
        assert!(raw.links.iter().all(|l| l.from_ext < l.to_ext));
    }

    #[test]
    fn oneway_other_values_stay_bidirectional() {
        let (raw, _) = parse(
            r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.91"/>
  <way id="5">
    <nd ref="1"/><nd ref="2"/>
    <tag k="highway" v="primary"/>
    <tag k="oneway" v="no"/>
  </way>
</osm>"#,
        );
        assert_eq!(raw.links.len(), 2);
    }

    #[test]
    fn excluded_highway_contributes_nothing() {
        for class in ["footway", "cycleway", "path", "steps", "pedestrian", "track", "service"] {
            let xml = format!(
                r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.91"/>
  <way id="5">
    <nd ref="1"/><nd ref="2"/>
    <tag k="highway" v="{class}"/>
    <tag k="maxspeed" v="30"/>
  </way>
</osm>"#
            );
            let (raw, stats) = parse(&xml);
            assert_eq!(raw.links.len(), 0, "highway={class} must be excluded");
            assert_eq!(stats.ways_dropped, 1);
        }
    }

    #[test]
    fn way_without_highway_tag_dropped() {
        let (raw, stats) = parse(
            r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.91"/>
  <way id="5"><nd ref="1"/><nd ref="2"/><tag k="waterway" v="river"/></way>
</osm>"#,
        );
        assert_eq!(raw.links.len(), 0);
        assert_eq!(stats.ways_dropped, 1);
    }

    #[test]
    fn maxspeed_plain_number() {
        let (raw, stats) = parse(
            r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.91"/>
  <way id="5">
    <nd ref="1"/><nd ref="2"/>
    <tag k="highway" v="primary"/>
    <tag k="maxspeed" v="30"/>
  </way>
</osm>"#,
        );
        assert_eq!(raw.links[0].speed_kmh, 30.0);
        assert_eq!(stats.maxspeed_fallbacks, 0);
    }

    #[test]
    fn maxspeed_leading_token() {
        let (raw, stats) = parse(
            r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.91"/>
  <way id="5">
    <nd ref="1"/><nd ref="2"/>
    <tag k="highway" v="primary"/>
    <tag k="maxspeed" v="50 mph"/>
  </way>
</osm>"#,
        );
        assert_eq!(raw.links[0].speed_kmh, 50.0);
        assert_eq!(stats.maxspeed_fallbacks, 0);
    }

    #[test]
    fn unparseable_maxspeed_falls_back() {
        let (raw, stats) = parse(
            r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.91"/>
  <way id="5">
    <nd ref="1"/><nd ref="2"/>
    <tag k="highway" v="primary"/>
    <tag k="maxspeed" v="walk"/>
  </way>
</osm>"#,
        );
        assert_eq!(raw.links[0].speed_kmh, DEFAULT_SPEED_KMH);
        assert_eq!(stats.maxspeed_fallbacks, 1);
    }

    #[test]
    fn missing_maxspeed_defaults_without_counting() {
        let (raw, stats) = parse(RESIDENTIAL);
        assert!(raw.links.iter().all(|l| l.speed_kmh == DEFAULT_SPEED_KMH));
        assert_eq!(stats.maxspeed_fallbacks, 0);
    }

    #[test]
    fn unknown_node_ref_skips_pair_only() {
        let (raw, stats) = parse(
            r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.91"/>
  <way id="5">
    <nd ref="1"/><nd ref="777"/><nd ref="2"/>
    <tag k="highway" v="primary"/>
  </way>
</osm>"#,
        );
        // Both pairs touch the unknown ref 777; nothing survives.
        assert_eq!(raw.links.len(), 0);
        assert_eq!(stats.missing_node_refs, 2);
    }

    #[test]
    fn coincident_nodes_clamp_to_floor() {
        let (raw, _) = parse(
            r#"<osm>
  <node id="1" lat="32.0" lon="34.9"/>
  <node id="2" lat="32.0" lon="34.9"/>
  <way id="5">
    <nd ref="1"/><nd ref="2"/>
    <tag k="highway" v="primary"/>
  </way>
</osm>"#,
        );
        assert_eq!(raw.links[0].length_km, MIN_EDGE_KM);
    }

    #[test]
    fn lengths_are_haversine_km() {
        let (raw, _) = parse(RESIDENTIAL);
        // 0.01° of longitude at lat 32 ≈ 0.94 km.
        let first = raw.links[0].length_km;
        assert!((0.8..1.1).contains(&first), "got {first}");
        // Forward and reverse carry the same length.
        assert_eq!(raw.links[0].length_km, raw.links[1].length_km);
    }

    #[test]
    fn malformed_xml_is_fatal() {
        use std::io::Cursor;
        let broken = "<osm><way id=\"1\"><nd ref=\"1\"/></osm>";
        assert!(crate::parse_osm_reader(Cursor::new(broken.as_bytes())).is_err());
    }
}

// ── Grid producer ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use crate::{generate_grid, GridSpec};

    #[test]
    fn three_by_two_counts() {
        let raw = generate_grid(&GridSpec { width: 3, height: 2, speed_kmh: 50.0 });
        assert_eq!(raw.node_count(), 6);
        // 2 * (3*1 + 2*2) = 14 directed links.
        assert_eq!(raw.link_count(), 14);
        assert!(raw.links.iter().all(|l| l.length_km == 1.0));
        assert!(raw.links.iter().all(|l| l.speed_kmh == 50.0));
    }

    #[test]
    fn addressing_and_coordinates() {
        let raw = generate_grid(&GridSpec { width: 3, height: 2, speed_kmh: 50.0 });
        // Node at row 1, col 2 has external id 1*3+2 = 5 and coords (0.01, 0.02).
        let pos = raw.nodes[&5];
        assert_eq!((pos.x, pos.y), (0.01, 0.02));
    }

    #[test]
    fn right_then_down_link_order() {
        let raw = generate_grid(&GridSpec { width: 2, height: 2, speed_kmh: 50.0 });
        let pairs: Vec<_> = raw.links.iter().map(|l| (l.from_ext, l.to_ext)).collect();
        assert_eq!(
            pairs,
            vec![(0, 1), (1, 0), (0, 2), (2, 0), (1, 3), (3, 1), (2, 3), (3, 2)]
        );
    }

    #[test]
    fn single_node_grid_has_no_links() {
        let raw = generate_grid(&GridSpec { width: 1, height: 1, speed_kmh: 50.0 });
        assert_eq!(raw.node_count(), 1);
        assert_eq!(raw.link_count(), 0);
    }
}

// ── Id remapping ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod remap {
    use rn_core::NodeId;

    use crate::IdRemapper;

    #[test]
    fn first_seen_order_from_base() {
        let mut r = IdRemapper::with_base(1);
        assert_eq!(r.get_or_assign(5000), NodeId(1));
        assert_eq!(r.get_or_assign(17), NodeId(2));
        assert_eq!(r.get_or_assign(404), NodeId(3));
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn idempotent() {
        let mut r = IdRemapper::with_base(0);
        let a = r.get_or_assign(42);
        let b = r.get_or_assign(42);
        assert_eq!(a, b);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn get_without_assign() {
        let mut r = IdRemapper::with_base(0);
        assert_eq!(r.get(7), None);
        r.get_or_assign(7);
        assert_eq!(r.get(7), Some(NodeId(0)));
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assemble {
    use rn_core::NodeId;

    use crate::{assemble, generate_grid, GridSpec};

    use super::helpers::parse;

    #[test]
    fn osm_ids_dense_from_one() {
        let (raw, _) = parse(super::helpers::RESIDENTIAL);
        let (graph, stats) = assemble(&raw, 1);
        assert_eq!(stats.links_skipped, 0);

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NodeId(1), NodeId(2), NodeId(3)]);
        let eids: Vec<_> = graph.edges.iter().map(|e| e.id.0).collect();
        assert_eq!(eids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn unreferenced_nodes_dropped() {
        // RESIDENTIAL declares isolated node 99; no link references it.
        let (raw, _) = parse(super::helpers::RESIDENTIAL);
        assert_eq!(raw.node_count(), 4);
        let (graph, _) = assemble(&raw, 1);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn grid_assembles_from_zero() {
        let raw = generate_grid(&GridSpec { width: 3, height: 2, speed_kmh: 50.0 });
        let (graph, _) = assemble(&raw, 0);
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 14);
        assert_eq!(graph.nodes[0].id, NodeId(0));
        assert_eq!(graph.edges[0].id.0, 0);
        // Dense: ids cover 0..6 with no holes.
        let mut ids: Vec<_> = graph.nodes.iter().map(|n| n.id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn deterministic() {
        let (raw, _) = parse(super::helpers::RESIDENTIAL);
        let (a, _) = assemble(&raw, 1);
        let (b, _) = assemble(&raw, 1);
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.edges, b.edges);
    }

    #[test]
    fn node_positions_carried_through() {
        let (raw, _) = parse(super::helpers::RESIDENTIAL);
        let (graph, _) = assemble(&raw, 1);
        // First-seen node is external 10 at lon 34.900, lat 32.000.
        assert_eq!(graph.nodes[0].pos.x, 34.900);
        assert_eq!(graph.nodes[0].pos.y, 32.000);
    }
}
