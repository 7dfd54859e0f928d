//! Orders sub-client — create, list, cancel, replace.

use crate::client::V20Client;
use crate::domain::order::endpoints::{
    OrderCancel, OrderClientExtensions, OrderCreate, OrderDetails, OrderList, OrderListParams,
    OrderReplace, OrdersPending,
};
use crate::domain::RequestBody;
use crate::error::SdkError;
use crate::http::ApiResponse;
use crate::shared::{AccountId, OrderSpecifier};

pub struct Orders<'a> {
    pub(crate) client: &'a V20Client,
}

impl<'a> Orders<'a> {
    /// Create an order from any order request builder.
    pub async fn create(
        &self,
        account_id: &AccountId,
        order: &impl RequestBody,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OrderCreate::new(account_id.clone(), order.data()))
            .await
    }

    pub async fn list(
        &self,
        account_id: &AccountId,
        params: OrderListParams,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OrderList::new(account_id.clone(), params))
            .await
    }

    pub async fn pending(&self, account_id: &AccountId) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OrdersPending::new(account_id.clone()))
            .await
    }

    pub async fn get(
        &self,
        account_id: &AccountId,
        specifier: OrderSpecifier,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OrderDetails::new(account_id.clone(), specifier))
            .await
    }

    /// Cancel `specifier` and atomically replace it with `order`.
    pub async fn replace(
        &self,
        account_id: &AccountId,
        specifier: OrderSpecifier,
        order: &impl RequestBody,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OrderReplace::new(
                account_id.clone(),
                specifier,
                order.data(),
            ))
            .await
    }

    pub async fn cancel(
        &self,
        account_id: &AccountId,
        specifier: OrderSpecifier,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OrderCancel::new(account_id.clone(), specifier))
            .await
    }

    pub async fn set_client_extensions(
        &self,
        account_id: &AccountId,
        specifier: OrderSpecifier,
        update: &impl RequestBody,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&OrderClientExtensions::new(
                account_id.clone(),
                specifier,
                update.data(),
            ))
            .await
    }
}
