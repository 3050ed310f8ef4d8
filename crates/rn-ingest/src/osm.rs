//! OSM XML producer.
//!
//! Reads an OpenStreetMap XML extract in one streaming pass: `node` elements
//! fill the external-id node table, `way` elements are buffered as they
//! close, and links are emitted afterwards from each kept way's consecutive
//! node-reference pairs (ways may reference nodes declared later in the
//! document, so emission cannot be inline).
//!
//! # What is kept
//!
//! A way is kept iff it carries a `highway` tag whose value is not in the
//! non-vehicular exclusion set.  A `oneway=yes` tag suppresses the reverse
//! link; any other value (or none) yields both directions.  Speed comes from
//! the leading numeric token of `maxspeed`, falling back to
//! [`DEFAULT_SPEED_KMH`] when missing or unparseable — a tolerated
//! data-quality case, counted in [`OsmStats`] but never fatal.  The same
//! goes for a pair referencing a node id absent from the table: the pair is
//! skipped and counted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rustc_hash::FxHashMap;

use rn_core::GeoPoint;

use crate::model::{RawLink, RawModel};
use crate::{IngestError, IngestResult};

/// Assumed speed (km/h) for ways without a parseable `maxspeed`.
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Floor for edge lengths, in km.  Coincident or near-coincident survey
/// points would otherwise produce zero-length edges, which downstream cost
/// functions cannot tolerate.
pub const MIN_EDGE_KM: f64 = 0.001;

/// `highway` values that denote non-vehicular ways.
const EXCLUDED_HIGHWAY: [&str; 7] = [
    "footway",
    "cycleway",
    "path",
    "steps",
    "pedestrian",
    "track",
    "service",
];

/// Counters for tolerated anomalies and general volume, reported by the
/// pipeline's console summary.  None of these affect the emitted links
/// beyond what they count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OsmStats {
    /// `node` elements successfully read into the table.
    pub nodes_read: usize,
    /// Ways kept after the highway filter.
    pub ways_kept: usize,
    /// Ways dropped: no `highway` tag, or an excluded value.
    pub ways_dropped: usize,
    /// Consecutive-reference pairs skipped because an endpoint id was not
    /// in the node table.
    pub missing_node_refs: usize,
    /// `maxspeed` tags present but not parseable as a leading number.
    pub maxspeed_fallbacks: usize,
}

/// A kept way, buffered until the whole document has been scanned.
struct RoadWay {
    refs: Vec<i64>,
    oneway: bool,
    speed_kmh: f64,
}

/// Tag state accumulated while inside a `<way>` element.
#[derive(Default)]
struct WayScan {
    refs: Vec<i64>,
    highway: Option<String>,
    oneway: Option<String>,
    maxspeed: Option<String>,
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Parse an OSM XML extract from disk.
///
/// # Errors
///
/// [`IngestError::Io`] if the file cannot be opened or read — a missing
/// input is fatal, no graph can be produced.  [`IngestError::Xml`] if the
/// document is not well-formed XML.
pub fn parse_osm(path: &Path) -> IngestResult<(RawModel, OsmStats)> {
    let file = File::open(path)?;
    parse_osm_reader(BufReader::new(file))
}

/// Parse an OSM XML extract from any buffered reader.
pub fn parse_osm_reader<R: BufRead>(input: R) -> IngestResult<(RawModel, OsmStats)> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut nodes: FxHashMap<i64, GeoPoint> = FxHashMap::default();
    let mut ways: Vec<RoadWay> = Vec::new();
    let mut stats = OsmStats::default();

    // ── Phase 1: one pass over the document ───────────────────────────────
    let mut scan: Option<WayScan> = None;
    let mut buf = Vec::new();
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| IngestError::Xml(e.to_string()))?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => match e.name().as_ref() {
                b"node" => {
                    if let Some((id, pos)) = read_node(e)? {
                        nodes.insert(id, pos);
                        stats.nodes_read += 1;
                    }
                }
                b"way" => {
                    // A self-closing way has no children and closes here.
                    if matches!(event, Event::Empty(_)) {
                        finish_way(WayScan::default(), &mut ways, &mut stats);
                    } else {
                        scan = Some(WayScan::default());
                    }
                }
                b"nd" => {
                    if let Some(scan) = scan.as_mut() {
                        if let Some(r) = attr(e, b"ref")?.and_then(|v| v.parse().ok()) {
                            scan.refs.push(r);
                        }
                    }
                }
                b"tag" => {
                    if let Some(scan) = scan.as_mut() {
                        read_tag(e, scan)?;
                    }
                }
                _ => {}
            },
            Event::End(ref e) if e.name().as_ref() == b"way" => {
                if let Some(done) = scan.take() {
                    finish_way(done, &mut ways, &mut stats);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    // ── Phase 2: emit links from consecutive reference pairs ──────────────
    let mut links = Vec::new();
    for way in &ways {
        for pair in way.refs.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let (Some(&pu), Some(&pv)) = (nodes.get(&u), nodes.get(&v)) else {
                stats.missing_node_refs += 1;
                continue;
            };
            let length_km = pu.distance_km(pv).max(MIN_EDGE_KM);
            links.push(RawLink {
                from_ext: u,
                to_ext: v,
                length_km,
                speed_kmh: way.speed_kmh,
            });
            if !way.oneway {
                links.push(RawLink {
                    from_ext: v,
                    to_ext: u,
                    length_km,
                    speed_kmh: way.speed_kmh,
                });
            }
        }
    }

    Ok((RawModel { nodes, links }, stats))
}

// ── Element readers ───────────────────────────────────────────────────────────

/// Extract `(id, position)` from a `<node>` element, or `None` if any of
/// `id`/`lat`/`lon` is missing or malformed (the node is then unusable and
/// any way referencing it will be counted as a missing ref).
fn read_node(e: &BytesStart<'_>) -> IngestResult<Option<(i64, GeoPoint)>> {
    let id = attr(e, b"id")?.and_then(|v| v.parse::<i64>().ok());
    let lat = attr(e, b"lat")?.and_then(|v| v.parse::<f64>().ok());
    let lon = attr(e, b"lon")?.and_then(|v| v.parse::<f64>().ok());
    match (id, lat, lon) {
        // x = longitude, y = latitude in the document model.
        (Some(id), Some(lat), Some(lon)) => Ok(Some((id, GeoPoint::new(lon, lat)))),
        _ => Ok(None),
    }
}

/// Record a way-level `<tag k= v=>` pair into the scan state.
fn read_tag(e: &BytesStart<'_>, scan: &mut WayScan) -> IngestResult<()> {
    let (Some(k), Some(v)) = (attr(e, b"k")?, attr(e, b"v")?) else {
        return Ok(());
    };
    match k.as_str() {
        "highway" => scan.highway = Some(v),
        "oneway" => scan.oneway = Some(v),
        "maxspeed" => scan.maxspeed = Some(v),
        _ => {}
    }
    Ok(())
}

/// Apply the highway filter and tag semantics to a completed way scan.
fn finish_way(scan: WayScan, ways: &mut Vec<RoadWay>, stats: &mut OsmStats) {
    let keep = scan
        .highway
        .as_deref()
        .is_some_and(|h| !EXCLUDED_HIGHWAY.contains(&h));
    if !keep {
        stats.ways_dropped += 1;
        return;
    }
    stats.ways_kept += 1;

    let speed_kmh = match scan.maxspeed.as_deref() {
        None => DEFAULT_SPEED_KMH,
        Some(raw) => parse_maxspeed(raw).unwrap_or_else(|| {
            stats.maxspeed_fallbacks += 1;
            DEFAULT_SPEED_KMH
        }),
    };

    ways.push(RoadWay {
        refs: scan.refs,
        oneway: scan.oneway.as_deref() == Some("yes"),
        speed_kmh,
    });
}

/// Leading numeric token of a `maxspeed` value: `"50"` and `"50 mph"`
/// parse, `"walk"` and `"50km/h"` do not.
fn parse_maxspeed(raw: &str) -> Option<f64> {
    raw.split_whitespace().next()?.parse().ok()
}

/// Look up one attribute by name, unescaping its value.
fn attr(e: &BytesStart<'_>, name: &[u8]) -> IngestResult<Option<String>> {
    for a in e.attributes() {
        let a = a.map_err(|err| IngestError::Xml(err.to_string()))?;
        if a.key.as_ref() == name {
            let v = a
                .unescape_value()
                .map_err(|err| IngestError::Xml(err.to_string()))?;
            return Ok(Some(v.into_owned()));
        }
    }
    Ok(None)
}
