//! Pricing sub-client.

use crate::client::V20Client;
use crate::domain::pricing::endpoints::{PricingInfo, PricingInfoParams};
use crate::domain::pricing::wire::PricingResponse;
use crate::error::SdkError;
use crate::shared::AccountId;

pub struct Pricing<'a> {
    pub(crate) client: &'a V20Client,
}

impl<'a> Pricing<'a> {
    /// Current prices for a list of instruments, parsed into wire types.
    pub async fn info(
        &self,
        account_id: &AccountId,
        params: PricingInfoParams,
    ) -> Result<PricingResponse, SdkError> {
        let resp = self
            .client
            .request(&PricingInfo::new(account_id.clone(), params))
            .await?;
        Ok(resp.json()?)
    }
}
