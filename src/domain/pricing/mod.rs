//! Pricing domain — current client prices.

#[cfg(feature = "http")]
pub mod client;
pub mod endpoints;
pub mod wire;

use crate::domain::wire_enum;

wire_enum! {
    /// Which price components to include: mid, bid, ask, or combinations.
    PricingComponent ["M, B, A, BA, MBA"] {
        Mid => "M",
        Bid => "B",
        Ask => "A",
        BidAsk => "BA",
        MidBidAsk => "MBA",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pricing_component_closed_set() {
        assert_eq!(PricingComponent::from_str("MBA").unwrap(), PricingComponent::MidBidAsk);
        assert!(PricingComponent::from_str("AB").is_err());
        assert!(PricingComponent::from_str("m").is_err());
    }
}
