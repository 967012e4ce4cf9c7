//! Close Account Handler
//!
//! Moves an account with a zero balance to its terminal Closed state.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::BankingEvent;
use crate::error::AppResult;
use crate::ports::{CustomerReadRepository, CustomerWriteRepository, EventPublisher, Presenter};

use super::support::{load_by_account, present};
use super::{CloseAccountCommand, CloseAccountResponse};

/// Handler for account closure
pub struct CloseAccountHandler {
    reader: Arc<dyn CustomerReadRepository>,
    writer: Arc<dyn CustomerWriteRepository>,
    publisher: Arc<dyn EventPublisher>,
    presenter: Arc<dyn Presenter<CloseAccountResponse>>,
}

impl CloseAccountHandler {
    pub fn new(
        reader: Arc<dyn CustomerReadRepository>,
        writer: Arc<dyn CustomerWriteRepository>,
        publisher: Arc<dyn EventPublisher>,
        presenter: Arc<dyn Presenter<CloseAccountResponse>>,
    ) -> Self {
        Self {
            reader,
            writer,
            publisher,
            presenter,
        }
    }

    /// Execute the close command
    #[tracing::instrument(skip_all, fields(account_id = %command.account_id))]
    pub async fn execute(&self, command: CloseAccountCommand) -> AppResult<()> {
        let result = self.close(command).await;
        present(self.presenter.as_ref(), result)
    }

    async fn close(&self, command: CloseAccountCommand) -> AppResult<CloseAccountResponse> {
        let mut customer = load_by_account(self.reader.as_ref(), command.account_id).await?;
        let was_open = customer.find_account(command.account_id)?.is_open();

        customer.close_account(command.account_id)?;
        let account = customer.find_account(command.account_id)?;
        let response = CloseAccountResponse {
            account_id: account.id(),
            status: account.status(),
            closed_at: account.closed_at(),
        };

        // Closing twice is a no-op: nothing new to store or announce
        if was_open {
            self.writer.save(&customer).await?;
            self.publisher
                .publish(BankingEvent::AccountClosed {
                    customer_id: customer.id(),
                    account_id: command.account_id,
                    closed_at: response.closed_at.unwrap_or_else(Utc::now),
                })
                .await;
        }

        Ok(response)
    }
}
