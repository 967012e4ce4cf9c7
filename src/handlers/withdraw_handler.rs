//! Withdraw Handler
//!
//! Debits an account reached through its owning customer. Insufficient
//! funds are presented as a rejection; nothing is persisted or published.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Amount, BankingEvent, DomainError};
use crate::error::AppResult;
use crate::ports::{CustomerReadRepository, CustomerWriteRepository, EventPublisher, Presenter};

use super::support::{load_by_account, present};
use super::{TransactionSummary, WithdrawCommand, WithdrawResponse};

/// Handler for withdrawals
pub struct WithdrawHandler {
    reader: Arc<dyn CustomerReadRepository>,
    writer: Arc<dyn CustomerWriteRepository>,
    publisher: Arc<dyn EventPublisher>,
    presenter: Arc<dyn Presenter<WithdrawResponse>>,
}

impl WithdrawHandler {
    pub fn new(
        reader: Arc<dyn CustomerReadRepository>,
        writer: Arc<dyn CustomerWriteRepository>,
        publisher: Arc<dyn EventPublisher>,
        presenter: Arc<dyn Presenter<WithdrawResponse>>,
    ) -> Self {
        Self {
            reader,
            writer,
            publisher,
            presenter,
        }
    }

    /// Execute the withdraw command
    #[tracing::instrument(skip_all, fields(account_id = %command.account_id, amount = %command.amount))]
    pub async fn execute(&self, command: WithdrawCommand) -> AppResult<()> {
        let result = self.withdraw(command).await;
        present(self.presenter.as_ref(), result)
    }

    async fn withdraw(&self, command: WithdrawCommand) -> AppResult<WithdrawResponse> {
        let amount = Amount::new(command.amount).map_err(DomainError::from)?;

        let mut customer = load_by_account(self.reader.as_ref(), command.account_id).await?;
        let transaction = customer.withdraw(command.account_id, amount)?;
        let balance = customer.find_account(command.account_id)?.balance();

        self.writer.save(&customer).await?;

        self.publisher
            .publish(BankingEvent::FundsWithdrawn {
                customer_id: customer.id(),
                account_id: command.account_id,
                transaction_id: transaction.id(),
                amount: amount.value(),
                balance: balance.value(),
                withdrawn_at: Utc::now(),
            })
            .await;

        Ok(WithdrawResponse {
            account_id: command.account_id,
            transaction: TransactionSummary::from(&transaction),
            balance: balance.value(),
        })
    }
}
