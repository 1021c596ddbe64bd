//! Store settings

use serde::{Deserialize, Serialize};

pub const DEFAULT_DHAKA_INSIDE: f64 = 60.0;
pub const DEFAULT_DHAKA_OUTSIDE: f64 = 120.0;

/// Flat delivery fees, selected by [`DeliveryRegion`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCosts {
    #[serde(default = "default_inside")]
    pub dhaka_inside: f64,
    #[serde(default = "default_outside")]
    pub dhaka_outside: f64,
}

fn default_inside() -> f64 {
    DEFAULT_DHAKA_INSIDE
}

fn default_outside() -> f64 {
    DEFAULT_DHAKA_OUTSIDE
}

impl Default for DeliveryCosts {
    fn default() -> Self {
        Self {
            dhaka_inside: DEFAULT_DHAKA_INSIDE,
            dhaka_outside: DEFAULT_DHAKA_OUTSIDE,
        }
    }
}

impl DeliveryCosts {
    pub fn cost_for(&self, region: DeliveryRegion) -> f64 {
        match region {
            DeliveryRegion::InsideDhaka => self.dhaka_inside,
            DeliveryRegion::OutsideDhaka => self.dhaka_outside,
        }
    }

    pub fn cost_for_city(&self, city: &str) -> f64 {
        self.cost_for(DeliveryRegion::for_city(city))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryRegion {
    InsideDhaka,
    OutsideDhaka,
}

impl DeliveryRegion {
    /// Dhaka (any casing, surrounding whitespace ignored) is inside; every
    /// other city, including an empty one, is outside.
    pub fn for_city(city: &str) -> Self {
        if city.trim().eq_ignore_ascii_case("dhaka") {
            DeliveryRegion::InsideDhaka
        } else {
            DeliveryRegion::OutsideDhaka
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_rule() {
        assert_eq!(DeliveryRegion::for_city(" dhaka "), DeliveryRegion::InsideDhaka);
        assert_eq!(DeliveryRegion::for_city("Chattogram"), DeliveryRegion::OutsideDhaka);
        assert_eq!(DeliveryRegion::for_city(""), DeliveryRegion::OutsideDhaka);

        let costs = DeliveryCosts::default();
        assert_eq!(costs.cost_for_city("Dhaka"), 60.0);
        assert_eq!(costs.cost_for_city("Sylhet"), 120.0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let costs: DeliveryCosts = serde_json::from_str(r#"{"dhakaInside": 80}"#).unwrap();
        assert_eq!(costs.dhaka_inside, 80.0);
        assert_eq!(costs.dhaka_outside, DEFAULT_DHAKA_OUTSIDE);
    }
}
