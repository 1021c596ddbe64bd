use crate::models::DeliveryCosts;
use crate::validation::{self, FormError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryCostForm {
    pub dhaka_inside: String,
    pub dhaka_outside: String,
}

impl DeliveryCostForm {
    pub fn new(dhaka_inside: impl Into<String>, dhaka_outside: impl Into<String>) -> Self {
        Self {
            dhaka_inside: dhaka_inside.into(),
            dhaka_outside: dhaka_outside.into(),
        }
    }

    pub fn from_costs(costs: &DeliveryCosts) -> Self {
        Self::new(costs.dhaka_inside.to_string(), costs.dhaka_outside.to_string())
    }

    pub fn validate(&self) -> Result<DeliveryCosts, FormError> {
        Ok(DeliveryCosts {
            dhaka_inside: validation::non_negative(&self.dhaka_inside, "inside Dhaka cost")?,
            dhaka_outside: validation::non_negative(&self.dhaka_outside, "outside Dhaka cost")?,
        })
    }
}
