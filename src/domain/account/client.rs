//! Accounts sub-client.

use crate::client::V20Client;
use crate::domain::account::endpoints::{
    AccountChanges, AccountConfiguration, AccountDetails, AccountInstruments, AccountList,
    AccountSummary,
};
use crate::domain::RequestBody;
use crate::error::SdkError;
use crate::http::ApiResponse;
use crate::shared::{AccountId, InstrumentName, TransactionId};

pub struct Accounts<'a> {
    pub(crate) client: &'a V20Client,
}

impl<'a> Accounts<'a> {
    pub async fn list(&self) -> Result<ApiResponse, SdkError> {
        self.client.request(&AccountList::new()).await
    }

    pub async fn get(&self, account_id: &AccountId) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&AccountDetails::new(account_id.clone()))
            .await
    }

    pub async fn summary(&self, account_id: &AccountId) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&AccountSummary::new(account_id.clone()))
            .await
    }

    /// Tradeable instruments; pass an empty list for all of them.
    pub async fn instruments(
        &self,
        account_id: &AccountId,
        instruments: Vec<InstrumentName>,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&AccountInstruments::new(account_id.clone(), instruments))
            .await
    }

    pub async fn configure(
        &self,
        account_id: &AccountId,
        config: &impl RequestBody,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&AccountConfiguration::new(account_id.clone(), config.data()))
            .await
    }

    pub async fn changes(
        &self,
        account_id: &AccountId,
        since: Option<TransactionId>,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&AccountChanges::new(account_id.clone(), since))
            .await
    }
}
