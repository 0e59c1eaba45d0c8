//! Real Santo Domingo locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. All points sit within the
//! metropolitan area, a few kilometers apart, matching typical courier
//! delivery geography.

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

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// City-center default courier start, same as the production fallback.
pub const CITY_CENTER: Location = Location::new("Santo Domingo centro", 18.4861, -69.9312);

// ============================================================================
// Zona Colonial landmarks (dense, close together)
// ============================================================================

pub const ZONA_COLONIAL: &[Location] = &[
    Location::new("Catedral Primada", 18.4727, -69.8837),
    Location::new("Alcazar de Colon", 18.4775, -69.8819),
    Location::new("Parque Independencia", 18.4707, -69.8923),
    Location::new("Palacio Nacional", 18.4768, -69.8963),
    Location::new("Fortaleza Ozama", 18.4702, -69.8824),
];

// ============================================================================
// Shopping malls (spread across the city, good delivery anchors)
// ============================================================================

pub const MALLS: &[Location] = &[
    Location::new("Agora Mall", 18.4833, -69.9395),
    Location::new("Blue Mall", 18.4722, -69.9406),
    Location::new("Sambil Santo Domingo", 18.4917, -69.9271),
    Location::new("Galeria 360", 18.4901, -69.9442),
    Location::new("Megacentro", 18.5056, -69.8569),
    Location::new("Plaza de la Bandera", 18.4656, -69.9668),
];

// ============================================================================
// Residential neighborhoods
// ============================================================================

pub const NEIGHBORHOODS: &[Location] = &[
    Location::new("Piantini", 18.4745, -69.9297),
    Location::new("Naco", 18.4825, -69.9245),
    Location::new("Gazcue", 18.4672, -69.9053),
    Location::new("Los Prados", 18.4890, -69.9605),
    Location::new("Mirador Sur", 18.4506, -69.9640),
];
