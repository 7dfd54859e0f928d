//! Pricing endpoints: `/v3/accounts/{accountID}/pricing`.

use crate::endpoint::{Endpoint, Method};
use crate::shared::{AccountId, DateTimeValue, InstrumentName};

/// Query parameters for [`PricingInfo`]. `instruments` is mandatory — the
/// endpoint refuses to price the whole universe at once.
#[derive(Debug, Clone)]
pub struct PricingInfoParams {
    pub instruments: Vec<InstrumentName>,
    /// Only return prices newer than this time.
    pub since: Option<DateTimeValue>,
}

impl PricingInfoParams {
    pub fn new(instruments: Vec<InstrumentName>) -> Self {
        Self {
            instruments,
            since: None,
        }
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let names: Vec<&str> = self.instruments.iter().map(|i| i.as_str()).collect();
        let mut q = vec![("instruments", names.join(","))];
        if let Some(since) = &self.since {
            q.push(("since", since.as_str().to_string()));
        }
        q
    }
}

/// `GET /v3/accounts/{accountID}/pricing` — current prices for a list of
/// instruments.
#[derive(Debug, Clone)]
pub struct PricingInfo {
    account_id: AccountId,
    params: PricingInfoParams,
}

impl PricingInfo {
    pub fn new(account_id: AccountId, params: PricingInfoParams) -> Self {
        Self { account_id, params }
    }
}

impl Endpoint for PricingInfo {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/pricing", self.account_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.params.to_query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_info_query() {
        let params = PricingInfoParams::new(vec![
            InstrumentName::new("EUR_USD").unwrap(),
            InstrumentName::new("USD_JPY").unwrap(),
        ]);
        let ep = PricingInfo::new(AccountId::new("101-004-1435156-001").unwrap(), params);
        assert_eq!(ep.method(), Method::Get);
        assert_eq!(ep.path(), "/v3/accounts/101-004-1435156-001/pricing");
        assert_eq!(
            ep.query(),
            vec![("instruments", "EUR_USD,USD_JPY".to_string())]
        );
    }

    #[test]
    fn test_pricing_info_since() {
        let mut params = PricingInfoParams::new(vec![InstrumentName::new("EUR_USD").unwrap()]);
        params.since = Some(DateTimeValue::new("2026-08-06T09:00:00Z").unwrap());
        let ep = PricingInfo::new(AccountId::new("101-004-1435156-001").unwrap(), params);
        assert_eq!(ep.query()[1], ("since", "2026-08-06T09:00:00Z".to_string()));
    }
}
