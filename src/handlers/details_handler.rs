//! Read-side handlers
//!
//! Queries never save or publish; they load the customer and present a view.

use std::sync::Arc;

use crate::error::AppResult;
use crate::ports::{CustomerReadRepository, Presenter};

use super::support::{load_by_account, load_by_customer, present};
use super::{
    AccountDetails, AccountSummary, CustomerDetails, GetAccountDetailsQuery,
    GetCustomerDetailsQuery,
};

pub struct GetAccountDetailsHandler {
    reader: Arc<dyn CustomerReadRepository>,
    presenter: Arc<dyn Presenter<AccountDetails>>,
}

impl GetAccountDetailsHandler {
    pub fn new(
        reader: Arc<dyn CustomerReadRepository>,
        presenter: Arc<dyn Presenter<AccountDetails>>,
    ) -> Self {
        Self { reader, presenter }
    }

    #[tracing::instrument(skip_all, fields(account_id = %query.account_id))]
    pub async fn execute(&self, query: GetAccountDetailsQuery) -> AppResult<()> {
        let result = self.details(query).await;
        present(self.presenter.as_ref(), result)
    }

    async fn details(&self, query: GetAccountDetailsQuery) -> AppResult<AccountDetails> {
        let customer = load_by_account(self.reader.as_ref(), query.account_id).await?;
        let account = customer.find_account(query.account_id)?;

        Ok(AccountDetails {
            customer_id: customer.id(),
            account: AccountSummary::from(account),
        })
    }
}

pub struct GetCustomerDetailsHandler {
    reader: Arc<dyn CustomerReadRepository>,
    presenter: Arc<dyn Presenter<CustomerDetails>>,
}

impl GetCustomerDetailsHandler {
    pub fn new(
        reader: Arc<dyn CustomerReadRepository>,
        presenter: Arc<dyn Presenter<CustomerDetails>>,
    ) -> Self {
        Self { reader, presenter }
    }

    #[tracing::instrument(skip_all, fields(customer_id = %query.customer_id))]
    pub async fn execute(&self, query: GetCustomerDetailsQuery) -> AppResult<()> {
        let result = load_by_customer(self.reader.as_ref(), query.customer_id)
            .await
            .map(|customer| CustomerDetails::from(&customer));
        present(self.presenter.as_ref(), result)
    }
}
