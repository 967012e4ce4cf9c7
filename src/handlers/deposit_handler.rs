//! Deposit Handler
//!
//! Credits an account reached through its owning customer.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Amount, BankingEvent, DomainError};
use crate::error::AppResult;
use crate::ports::{CustomerReadRepository, CustomerWriteRepository, EventPublisher, Presenter};

use super::support::{load_by_account, present};
use super::{DepositCommand, DepositResponse, TransactionSummary};

/// Handler for deposits
pub struct DepositHandler {
    reader: Arc<dyn CustomerReadRepository>,
    writer: Arc<dyn CustomerWriteRepository>,
    publisher: Arc<dyn EventPublisher>,
    presenter: Arc<dyn Presenter<DepositResponse>>,
}

impl DepositHandler {
    pub fn new(
        reader: Arc<dyn CustomerReadRepository>,
        writer: Arc<dyn CustomerWriteRepository>,
        publisher: Arc<dyn EventPublisher>,
        presenter: Arc<dyn Presenter<DepositResponse>>,
    ) -> Self {
        Self {
            reader,
            writer,
            publisher,
            presenter,
        }
    }

    /// Execute the deposit command
    #[tracing::instrument(skip_all, fields(account_id = %command.account_id, amount = %command.amount))]
    pub async fn execute(&self, command: DepositCommand) -> AppResult<()> {
        let result = self.deposit(command).await;
        present(self.presenter.as_ref(), result)
    }

    async fn deposit(&self, command: DepositCommand) -> AppResult<DepositResponse> {
        let amount = Amount::new(command.amount).map_err(DomainError::from)?;

        let mut customer = load_by_account(self.reader.as_ref(), command.account_id).await?;
        let transaction = customer.deposit(command.account_id, amount)?;
        let balance = customer.find_account(command.account_id)?.balance();

        self.writer.save(&customer).await?;

        self.publisher
            .publish(BankingEvent::FundsDeposited {
                customer_id: customer.id(),
                account_id: command.account_id,
                transaction_id: transaction.id(),
                amount: amount.value(),
                balance: balance.value(),
                deposited_at: Utc::now(),
            })
            .await;

        Ok(DepositResponse {
            account_id: command.account_id,
            transaction: TransactionSummary::from(&transaction),
            balance: balance.value(),
        })
    }
}
