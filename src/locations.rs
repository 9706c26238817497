//! Named locations and their coordinates.

use crate::error::{Error, Result};
use crate::types::{GeoCoordinate, LocationEntry};

pub const BUSAN: (f64, f64) = (35.1796, 129.0756);

/// Default port table. Busan's harbours and Haeundae share the city coordinate.
pub const DEFAULT_LOCATIONS: &[(&str, (f64, f64))] = &[
    ("Busan", BUSAN),
    ("Incheon", (37.3680, 126.6540)),
    ("Ulsan", (35.4460, 129.2700)),
    ("Mokpo", (34.7320, 126.3440)),
    ("Pohang", (35.9560, 129.3100)),
    ("Gunsan", (35.9040, 126.7040)),
    ("Daesan", (36.6600, 126.2520)),
    ("Ptdj", (37.2300, 126.7800)),
    ("Yeosu", (34.6700, 127.6200)),
    ("부산항(북항)", BUSAN),
    ("부산항(신항)", BUSAN),
    ("해운대", BUSAN),
];

/// Name -> coordinate lookup, exact first and then case-insensitive.
///
/// Entries keep their insertion order; inserting an existing canonical name
/// replaces its coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRegistry {
    entries: Vec<LocationEntry>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, coordinate: GeoCoordinate) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.coordinate = coordinate,
            None => self.entries.push(LocationEntry { name, coordinate }),
        }
    }

    pub fn resolve_entry(&self, name: &str) -> Result<&LocationEntry> {
        let wanted = name.trim();
        self.entries
            .iter()
            .find(|e| e.name == wanted)
            .or_else(|| {
                let lower = wanted.to_lowercase();
                self.entries.iter().find(|e| e.name.to_lowercase() == lower)
            })
            .ok_or_else(|| Error::LocationNotFound(wanted.to_string()))
    }

    pub fn resolve(&self, name: &str) -> Result<GeoCoordinate> {
        self.resolve_entry(name).map(|e| e.coordinate)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for &(name, (lat, lon)) in DEFAULT_LOCATIONS {
            registry.entries.push(LocationEntry {
                name: name.to_string(),
                coordinate: GeoCoordinate::new_unchecked(lat, lon),
            });
        }
        registry
    }
}

impl Extend<LocationEntry> for LocationRegistry {
    fn extend<I: IntoIterator<Item = LocationEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry.name, entry.coordinate);
        }
    }
}
