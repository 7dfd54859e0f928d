//! Positions sub-client.

use crate::client::V20Client;
use crate::domain::position::endpoints::{
    OpenPositions, PositionClose, PositionDetails, PositionList,
};
use crate::domain::RequestBody;
use crate::error::SdkError;
use crate::http::ApiResponse;
use crate::shared::{AccountId, InstrumentName};

pub struct Positions<'a> {
    pub(crate) client: &'a V20Client,
}

impl<'a> Positions<'a> {
    pub async fn list(&self, account_id: &AccountId) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&PositionList::new(account_id.clone()))
            .await
    }

    pub async fn open(&self, account_id: &AccountId) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OpenPositions::new(account_id.clone()))
            .await
    }

    pub async fn get(
        &self,
        account_id: &AccountId,
        instrument: InstrumentName,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&PositionDetails::new(account_id.clone(), instrument))
            .await
    }

    /// Close out the net position for an instrument.
    pub async fn close(
        &self,
        account_id: &AccountId,
        instrument: InstrumentName,
        body: &impl RequestBody,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&PositionClose::new(
                account_id.clone(),
                instrument,
                body.data(),
            ))
            .await
    }
}
