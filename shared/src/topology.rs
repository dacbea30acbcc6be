use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::country;
use crate::stats::CountryStatistic;

/// Name of the geometry collection holding country shapes in the world atlas.
pub const COUNTRIES_OBJECT: &str = "countries";

/// `[longitude, latitude]` in degrees.
pub type Position = [f64; 2];
pub type Ring = Vec<Position>;
/// Exterior ring first, then holes.
pub type Polygon = Vec<Ring>;

/// One country shape extracted from the topology.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    /// Display name from the feature's `name` property; the join key source.
    pub name: String,
    pub id: Option<String>,
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Deserialize)]
struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    #[serde(default)]
    arcs: Vec<Vec<Vec<f64>>>,
    objects: HashMap<String, TopoObject>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum TopoObject {
    GeometryCollection {
        #[serde(default)]
        geometries: Vec<TopoObject>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<serde_json::Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<serde_json::Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

/// Decode a TopoJSON document and flatten the named geometry collection
/// into standalone polygon features.
///
/// Point and line geometries are skipped. Fails on malformed JSON, a
/// missing object, or arc references outside the arc table.
pub fn decode_features(json: &str, object: &str) -> Result<Vec<GeoFeature>, String> {
    let topology: Topology =
        serde_json::from_str(json).map_err(|e| format!("parse error: {e}"))?;
    let root = topology
        .objects
        .get(object)
        .ok_or_else(|| format!("topology has no `{object}` object"))?;

    let arcs = decode_arcs(&topology.arcs, topology.transform);
    let mut features = Vec::new();
    collect_features(root, &arcs, &mut features)?;
    Ok(features)
}

/// Absolute positions for every arc, undoing quantization and delta encoding.
fn decode_arcs(raw: &[Vec<Vec<f64>>], transform: Option<Transform>) -> Vec<Vec<Position>> {
    raw.iter()
        .map(|arc| {
            let mut x = 0.0;
            let mut y = 0.0;
            arc.iter()
                .filter(|point| point.len() >= 2)
                .map(|point| match transform {
                    Some(t) => {
                        x += point[0];
                        y += point[1];
                        [x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1]]
                    }
                    None => [point[0], point[1]],
                })
                .collect()
        })
        .collect()
}

fn collect_features(
    object: &TopoObject,
    arcs: &[Vec<Position>],
    out: &mut Vec<GeoFeature>,
) -> Result<(), String> {
    match object {
        TopoObject::GeometryCollection { geometries } => {
            for geometry in geometries {
                collect_features(geometry, arcs, out)?;
            }
        }
        TopoObject::Polygon {
            arcs: rings,
            id,
            properties,
        } => {
            out.push(GeoFeature {
                name: feature_name(properties),
                id: id.as_ref().map(id_string),
                polygons: vec![stitch_polygon(rings, arcs)?],
            });
        }
        TopoObject::MultiPolygon {
            arcs: polygons,
            id,
            properties,
        } => {
            let polygons = polygons
                .iter()
                .map(|rings| stitch_polygon(rings, arcs))
                .collect::<Result<Vec<_>, _>>()?;
            out.push(GeoFeature {
                name: feature_name(properties),
                id: id.as_ref().map(id_string),
                polygons,
            });
        }
        TopoObject::Unsupported => {}
    }
    Ok(())
}

fn feature_name(properties: &Option<Properties>) -> String {
    properties
        .as_ref()
        .and_then(|p| p.name.clone())
        .unwrap_or_default()
}

fn id_string(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn stitch_polygon(rings: &[Vec<i64>], arcs: &[Vec<Position>]) -> Result<Polygon, String> {
    rings.iter().map(|ring| stitch_ring(ring, arcs)).collect()
}

/// Concatenate arcs into one closed ring. Negative indices (`!i`) reference
/// arc `i` traversed backwards; consecutive arcs share an endpoint that is
/// emitted once.
fn stitch_ring(indices: &[i64], arcs: &[Vec<Position>]) -> Result<Ring, String> {
    let mut ring: Ring = Vec::new();
    for &index in indices {
        let (arc_index, reversed) = if index < 0 {
            (!index, true)
        } else {
            (index, false)
        };
        let arc = usize::try_from(arc_index)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or_else(|| format!("arc index {index} out of range"))?;

        ring.pop();
        if reversed {
            ring.extend(arc.iter().rev().copied());
        } else {
            ring.extend(arc.iter().copied());
        }
    }
    // Degenerate rings are padded so every ring stays closed and drawable.
    if let Some(&first) = ring.first() {
        while ring.len() < 4 {
            ring.push(first);
        }
    }
    Ok(ring)
}

/// Display names from `country_data` that no feature can render.
///
/// Both sides are compared by canonical key. Deduplicated, in first-seen
/// order.
pub fn detect_unmapped<'a>(
    feature_names: impl IntoIterator<Item = &'a str>,
    country_data: &[CountryStatistic],
) -> Vec<String> {
    let mapped: HashSet<String> = feature_names.into_iter().map(country::normalize).collect();
    let mut seen = HashSet::new();
    country_data
        .iter()
        .filter(|stat| !mapped.contains(&country::normalize(&stat.country)))
        .filter(|stat| seen.insert(stat.country.clone()))
        .map(|stat| stat.country.clone())
        .collect()
}
