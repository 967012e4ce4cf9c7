//! Open Account Handler
//!
//! Opens an additional account for an already registered customer.

use std::sync::Arc;

use crate::domain::{Amount, BankingEvent, DomainError};
use crate::error::AppResult;
use crate::ports::{CustomerReadRepository, CustomerWriteRepository, EventPublisher, Presenter};

use super::support::{load_by_customer, present};
use super::{AccountSummary, OpenAccountCommand, OpenAccountResponse};

/// Handler for opening further accounts
pub struct OpenAccountHandler {
    reader: Arc<dyn CustomerReadRepository>,
    writer: Arc<dyn CustomerWriteRepository>,
    publisher: Arc<dyn EventPublisher>,
    presenter: Arc<dyn Presenter<OpenAccountResponse>>,
}

impl OpenAccountHandler {
    pub fn new(
        reader: Arc<dyn CustomerReadRepository>,
        writer: Arc<dyn CustomerWriteRepository>,
        publisher: Arc<dyn EventPublisher>,
        presenter: Arc<dyn Presenter<OpenAccountResponse>>,
    ) -> Self {
        Self {
            reader,
            writer,
            publisher,
            presenter,
        }
    }

    #[tracing::instrument(skip_all, fields(customer_id = %command.customer_id))]
    pub async fn execute(&self, command: OpenAccountCommand) -> AppResult<()> {
        let result = self.open(command).await;
        present(self.presenter.as_ref(), result)
    }

    async fn open(&self, command: OpenAccountCommand) -> AppResult<OpenAccountResponse> {
        let initial = Amount::new(command.initial_amount).map_err(DomainError::from)?;

        let mut customer = load_by_customer(self.reader.as_ref(), command.customer_id).await?;
        let account_id = customer.open_account((!initial.is_zero()).then_some(initial))?;
        let account = customer.find_account(account_id)?;

        let response = OpenAccountResponse {
            customer_id: customer.id(),
            account: AccountSummary::from(account),
        };

        self.writer.save(&customer).await?;

        self.publisher
            .publish(BankingEvent::AccountOpened {
                customer_id: customer.id(),
                account_id,
                opened_at: account.opened_at(),
            })
            .await;

        Ok(response)
    }
}
