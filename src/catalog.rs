//! Star catalog ingestion from CSV files.
//!
//! Catalogs carry galactic coordinates in degrees plus an instrument
//! magnitude; the loader keeps the records as read and builds unit-vector
//! target batches on demand.

use camino::Utf8Path;
use serde::Deserialize;

use crate::direction::Direction;
use crate::skycover_errors::SkycoverError;
use crate::targets::TargetList;

/// One catalog row: galactic longitude and latitude in degrees, plus the
/// Hw-band magnitude.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct StarRecord {
    pub l_deg: f64,
    pub b_deg: f64,
    pub hw_mag: f64,
}

impl StarRecord {
    fn direction(&self) -> Result<Direction, SkycoverError> {
        Direction::from_galactic(self.l_deg, self.b_deg)
    }
}

/// An in-memory star catalog, in file order.
#[derive(Debug, Clone)]
pub struct StarCatalog {
    stars: Vec<StarRecord>,
}

impl StarCatalog {
    /// Read a catalog from a headered CSV file with columns
    /// `l_deg`, `b_deg`, `hw_mag`.
    pub fn from_csv(path: &Utf8Path) -> Result<Self, SkycoverError> {
        Self::from_reader(csv::Reader::from_path(path)?)
    }

    fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self, SkycoverError> {
        let stars = reader
            .deserialize()
            .collect::<Result<Vec<StarRecord>, _>>()?;
        Ok(StarCatalog { stars })
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    /// Unit-vector target batch for the whole catalog, in file order.
    ///
    /// Fails if any row carries a galactic latitude outside ±90°.
    pub fn targets(&self) -> Result<TargetList, SkycoverError> {
        let directions = self
            .stars
            .iter()
            .map(StarRecord::direction)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TargetList::new(&directions))
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.stars.iter().map(|s| s.hw_mag).collect()
    }
}
