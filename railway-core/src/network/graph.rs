//! Stations and the network that owns them.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::domain::{Coordinates, NetworkError, StationName};

use super::records::{EdgeRecord, StationRecord};

/// A station in the network.
///
/// Holds the station's position, its adjacency (neighbor name to edge
/// length in kilometers, symmetric across the network), and the set of
/// lines that call at it. Adjacency and lines are keyed with `BTree`
/// collections so iteration order is always name order.
#[derive(Debug, Clone)]
pub struct Station {
    name: StationName,
    coordinates: Coordinates,
    edges: BTreeMap<StationName, f64>,
    lines: BTreeSet<String>,
}

impl Station {
    fn new(name: StationName, coordinates: Coordinates) -> Self {
        Self {
            name,
            coordinates,
            edges: BTreeMap::new(),
            lines: BTreeSet::new(),
        }
    }

    /// The station's name.
    pub fn name(&self) -> &StationName {
        &self.name
    }

    /// The station's position.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Neighbors and edge lengths in kilometers, in name order.
    pub fn edges(&self) -> impl Iterator<Item = (&StationName, f64)> {
        self.edges.iter().map(|(name, &km)| (name, km))
    }

    /// The stored edge length to a neighbor, if directly connected.
    pub fn edge_to(&self, neighbor: &StationName) -> Option<f64> {
        self.edges.get(neighbor).copied()
    }

    /// Whether another station is directly connected to this one.
    pub fn is_adjacent(&self, other: &StationName) -> bool {
        self.edges.contains_key(other)
    }

    /// Lines that call at this station, in name order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Whether the given line calls at this station.
    pub fn serves_line(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Great-circle distance to another station in kilometers,
    /// regardless of adjacency.
    pub fn distance_to(&self, other: &Station) -> f64 {
        self.coordinates.distance_km(&other.coordinates)
    }
}

/// The railway network: a name-indexed set of stations.
///
/// The only constructor is [`Network::build`]; nothing mutates the
/// network afterwards, so `&Network` is safe to share across threads
/// for concurrent queries.
#[derive(Debug, Clone)]
pub struct Network {
    stations: BTreeMap<StationName, Station>,
}

impl Network {
    /// Build a network from station and edge records.
    ///
    /// Duplicate station rows are no-ops (the first occurrence wins).
    /// Each edge stores its great-circle length symmetrically on both
    /// endpoints; the first edge inserted for a pair is authoritative
    /// and later duplicates do not overwrite it. The edge's line label
    /// joins both endpoints' line sets either way. An edge naming an
    /// unknown station aborts the build with
    /// [`NetworkError::UnknownStation`]: no partially built network is
    /// returned.
    pub fn build(
        stations: impl IntoIterator<Item = StationRecord>,
        edges: impl IntoIterator<Item = EdgeRecord>,
    ) -> Result<Self, NetworkError> {
        let mut map: BTreeMap<StationName, Station> = BTreeMap::new();

        for record in stations {
            let name = StationName::parse(&record.name)?;
            let coordinates = Coordinates::new(record.latitude, record.longitude);
            map.entry(name.clone())
                .or_insert_with(|| Station::new(name, coordinates));
        }

        let mut edge_count = 0usize;
        for record in edges {
            let from = StationName::parse(&record.from)?;
            let to = StationName::parse(&record.to)?;

            let length_km = match (map.get(&from), map.get(&to)) {
                (Some(a), Some(b)) => a.distance_to(b),
                (None, _) => return Err(NetworkError::UnknownStation(from)),
                (_, None) => return Err(NetworkError::UnknownStation(to)),
            };

            // A self-loop carries line membership but no adjacency.
            if from != to {
                if let Some(station) = map.get_mut(&from) {
                    station.edges.entry(to.clone()).or_insert(length_km);
                }
                if let Some(station) = map.get_mut(&to) {
                    station.edges.entry(from.clone()).or_insert(length_km);
                }
                edge_count += 1;
            }

            if let Some(station) = map.get_mut(&from) {
                station.lines.insert(record.line.clone());
            }
            if let Some(station) = map.get_mut(&to) {
                station.lines.insert(record.line);
            }
        }

        debug!(
            stations = map.len(),
            edges = edge_count,
            "network built"
        );

        Ok(Self { stations: map })
    }

    /// Look up a station by name.
    pub fn station(&self, name: &StationName) -> Result<&Station, NetworkError> {
        self.stations
            .get(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.clone()))
    }

    /// Whether the network contains a station with the given name.
    pub fn contains(&self, name: &StationName) -> bool {
        self.stations.contains_key(name)
    }

    /// All stations, in name order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// All station names, in name order.
    pub fn station_names(&self) -> impl Iterator<Item = &StationName> {
        self.stations.keys()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
