//! Real Madrid-region locations for realistic test fixtures.
//!
//! Coordinates are approximate town centers and street addresses.

#![allow(dead_code)]

use delivery_planner::{CityTable, Coordinate};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Distribution center
// ============================================================================

/// Warehouse near Puerta del Sol, used as the origin in most tests.
pub const DISTRIBUTION_CENTER: Location =
    Location::new("Centro de Distribución", 40.4168, -3.7038);

pub fn origin() -> Coordinate {
    DISTRIBUTION_CENTER.coordinate()
}

// ============================================================================
// Towns around Madrid (city lookup table entries)
// ============================================================================

pub const TOWNS: &[Location] = &[
    Location::new("Alcalá de Henares", 40.4818, -3.3645),
    Location::new("Getafe", 40.3083, -3.7327),
    Location::new("Leganés", 40.3272, -3.7635),
    Location::new("Móstoles", 40.3223, -3.8649),
    Location::new("Alcobendas", 40.5475, -3.6420),
    Location::new("Pozuelo de Alarcón", 40.4350, -3.8138),
    Location::new("Las Rozas", 40.4929, -3.8737),
    Location::new("Torrejón de Ardoz", 40.4590, -3.4797),
    Location::new("Fuenlabrada", 40.2842, -3.7942),
    Location::new("Rivas-Vaciamadrid", 40.3260, -3.5180),
];

pub fn city_table() -> CityTable {
    TOWNS.iter().map(|town| (town.name, town.coordinate())).collect()
}

// ============================================================================
// Central Madrid addresses
// ============================================================================

pub const NORTH_ADDRESSES: &[Location] = &[
    Location::new("Paseo de la Castellana 200", 40.4620, -3.6890),
    Location::new("Calle de Bravo Murillo 300", 40.4590, -3.7030),
    Location::new("Plaza de Castilla 1", 40.4666, -3.6889),
    Location::new("Calle de Sinesio Delgado 10", 40.4780, -3.7080),
];

pub const SOUTH_ADDRESSES: &[Location] = &[
    Location::new("Calle del General Ricardos 100", 40.3900, -3.7300),
    Location::new("Avenida de Oporto 50", 40.3880, -3.7310),
    Location::new("Calle de Antonio López 150", 40.3800, -3.7130),
    Location::new("Plaza Elíptica 2", 40.3850, -3.7180),
];

pub const EAST_ADDRESSES: &[Location] = &[
    Location::new("Calle de Alcalá 400", 40.4320, -3.6400),
    Location::new("Avenida de Daroca 20", 40.4250, -3.6350),
    Location::new("Calle de Arturo Soria 100", 40.4400, -3.6450),
];

/// Returns addresses spread around the city (good for multi-route tests).
pub fn geographically_diverse_locations() -> Vec<Location> {
    NORTH_ADDRESSES
        .iter()
        .chain(SOUTH_ADDRESSES)
        .chain(EAST_ADDRESSES)
        .cloned()
        .collect()
}
