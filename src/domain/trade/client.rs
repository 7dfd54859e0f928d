//! Trades sub-client — list, inspect, close, manage dependent orders.

use crate::client::V20Client;
use crate::domain::trade::endpoints::{
    OpenTrades, TradeClientExtensions, TradeClose, TradeDependentOrders, TradeDetails, TradesList,
    TradesListParams,
};
use crate::domain::RequestBody;
use crate::error::SdkError;
use crate::http::ApiResponse;
use crate::shared::{AccountId, TradeSpecifier};

pub struct Trades<'a> {
    pub(crate) client: &'a V20Client,
}

impl<'a> Trades<'a> {
    pub async fn list(
        &self,
        account_id: &AccountId,
        params: TradesListParams,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&TradesList::new(account_id.clone(), params))
            .await
    }

    pub async fn open(&self, account_id: &AccountId) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OpenTrades::new(account_id.clone()))
            .await
    }

    pub async fn get(
        &self,
        account_id: &AccountId,
        specifier: TradeSpecifier,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&TradeDetails::new(account_id.clone(), specifier))
            .await
    }

    /// Close the trade, fully or partially per the request body.
    pub async fn close(
        &self,
        account_id: &AccountId,
        specifier: TradeSpecifier,
        body: &impl RequestBody,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&TradeClose::new(account_id.clone(), specifier, body.data()))
            .await
    }

    pub async fn set_client_extensions(
        &self,
        account_id: &AccountId,
        specifier: TradeSpecifier,
        update: &impl RequestBody,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&TradeClientExtensions::new(
                account_id.clone(),
                specifier,
                update.data(),
            ))
            .await
    }

    /// Create, replace or cancel the trade's dependent orders.
    pub async fn set_dependent_orders(
        &self,
        account_id: &AccountId,
        specifier: TradeSpecifier,
        update: &impl RequestBody,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&TradeDependentOrders::new(
                account_id.clone(),
                specifier,
                update.data(),
            ))
            .await
    }
}
