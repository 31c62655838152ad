//! Coordinate resolution for delivery stops.
//!
//! Explicit coordinates win; otherwise the recipient city is looked up in a
//! static table supplied by the host. Stops that resolve to neither are
//! reported back as unrouted instead of failing the run.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::traits::Delivery;

/// Immutable city name to coordinate lookup.
///
/// Keys are matched exactly. Built once at startup and shared by reference
/// between planning runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityTable {
    entries: HashMap<String, Coordinate>,
}

impl CityTable {
    /// Builds a table from `(city, coordinate)` pairs. Later duplicates win.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Coordinate)>,
        K: Into<String>,
    {
        entries.into_iter().collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, city: &str) -> Option<Coordinate> {
        self.entries.get(city).copied()
    }

    /// Whether `city` has an entry.
    pub fn contains(&self, city: &str) -> bool {
        self.entries.contains_key(city)
    }

    /// Number of known cities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table knows no city at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Coordinate)> for CityTable {
    fn from_iter<T: IntoIterator<Item = (K, Coordinate)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, coordinate)| (name.into(), coordinate))
                .collect(),
        }
    }
}

/// Why a stop was left out of every route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnroutedReason {
    /// A city name was given but the lookup table does not know it.
    UnknownCity,
    /// Neither usable coordinates nor a city name were given.
    MissingLocation,
}

/// Outcome of resolving one stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Explicit(Coordinate),
    City(Coordinate),
    Unresolved(UnroutedReason),
}

impl Resolution {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Resolution::Explicit(c) | Resolution::City(c) => Some(*c),
            Resolution::Unresolved(_) => None,
        }
    }
}

/// A stop paired with the coordinate it resolved to.
#[derive(Debug)]
pub struct RoutedStop<'a, S> {
    pub stop: &'a S,
    pub coordinate: Coordinate,
}

impl<S> Clone for RoutedStop<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for RoutedStop<'_, S> {}

impl<'a, S: Delivery> RoutedStop<'a, S> {
    pub fn id(&self) -> &'a S::Id {
        self.stop.id()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnroutedStop<StopId> {
    pub stop_id: StopId,
    pub reason: UnroutedReason,
}

pub fn resolve<S: Delivery>(stop: &S, table: &CityTable) -> Resolution {
    if let (Some(lat), Some(lng)) = (stop.latitude(), stop.longitude()) {
        let explicit = Coordinate::new(lat, lng);
        if explicit.is_finite() {
            return Resolution::Explicit(explicit);
        }
    }

    match stop.city() {
        Some(city) => match table.get(city) {
            Some(coordinate) => Resolution::City(coordinate),
            None => Resolution::Unresolved(UnroutedReason::UnknownCity),
        },
        None => Resolution::Unresolved(UnroutedReason::MissingLocation),
    }
}

/// Split stops into resolved and unrouted, both in input order.
pub fn resolve_all<'a, S: Delivery>(
    stops: &'a [S],
    table: &CityTable,
) -> (Vec<RoutedStop<'a, S>>, Vec<UnroutedStop<S::Id>>) {
    let mut resolved = Vec::with_capacity(stops.len());
    let mut unrouted = Vec::new();

    for stop in stops {
        match resolve(stop, table) {
            Resolution::Explicit(coordinate) | Resolution::City(coordinate) => {
                resolved.push(RoutedStop { stop, coordinate });
            }
            Resolution::Unresolved(reason) => unrouted.push(UnroutedStop {
                stop_id: stop.id().clone(),
                reason,
            }),
        }
    }

    (resolved, unrouted)
}

/// Plain delivery stop for hosts that do not bring their own package type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    #[serde(default)]
    pub city: Option<String>,
    /// Display payload, carried through unchanged.
    #[serde(default)]
    pub address: String,
}

impl Stop {
    pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coordinate: None,
            city: None,
            address: address.into(),
        }
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.coordinate = Some(Coordinate::new(lat, lng));
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

impl Delivery for Stop {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn latitude(&self) -> Option<f64> {
        self.coordinate.map(|c| c.lat)
    }

    fn longitude(&self) -> Option<f64> {
        self.coordinate.map(|c| c.lng)
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.address)
    }
}
