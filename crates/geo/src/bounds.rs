use serde::{Deserialize, Serialize};

/// Inclusive latitude/longitude box in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Both ranges are ordered and inside valid geographic limits.
    pub fn is_well_formed(&self) -> bool {
        self.min_lat <= self.max_lat
            && self.min_lon <= self.max_lon
            && (-90.0..=90.0).contains(&self.min_lat)
            && (-90.0..=90.0).contains(&self.max_lat)
            && (-180.0..=180.0).contains(&self.min_lon)
            && (-180.0..=180.0).contains(&self.max_lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn india() -> BoundingBox {
        BoundingBox::new(6.0, 37.0, 68.0, 97.0)
    }

    #[test]
    fn test_india_contains() {
        assert!(india().contains(20.0, 80.0));
        assert!(!india().contains(40.0, 100.0));
        // Edges are inside.
        assert!(india().contains(6.0, 97.0));
        assert!(!india().contains(5.99, 80.0));
    }

    #[test]
    fn test_well_formed() {
        assert!(india().is_well_formed());
        assert!(!BoundingBox::new(37.0, 6.0, 68.0, 97.0).is_well_formed());
        assert!(!BoundingBox::new(6.0, 95.0, 68.0, 97.0).is_well_formed());
    }
}
