//! Registration Handler
//!
//! Registers a customer together with their first account.

use std::sync::Arc;

use chrono::Utc;

use crate::aggregate::Customer;
use crate::domain::{Amount, BankingEvent, DomainError};
use crate::error::{AppError, AppResult};
use crate::ports::{CustomerWriteRepository, EventPublisher, Presenter};

use super::support::present;
use super::{AccountSummary, CustomerSummary, RegisterCommand, RegisterResponse};

/// Handler for customer registration
pub struct RegisterHandler {
    repository: Arc<dyn CustomerWriteRepository>,
    publisher: Arc<dyn EventPublisher>,
    presenter: Arc<dyn Presenter<RegisterResponse>>,
}

impl RegisterHandler {
    pub fn new(
        repository: Arc<dyn CustomerWriteRepository>,
        publisher: Arc<dyn EventPublisher>,
        presenter: Arc<dyn Presenter<RegisterResponse>>,
    ) -> Self {
        Self {
            repository,
            publisher,
            presenter,
        }
    }

    /// Execute the register command
    #[tracing::instrument(skip_all, fields(personal_id = %command.personal_id))]
    pub async fn execute(&self, command: RegisterCommand) -> AppResult<()> {
        let result = self.register(command).await;
        present(self.presenter.as_ref(), result)
    }

    async fn register(&self, command: RegisterCommand) -> AppResult<RegisterResponse> {
        let opening = Amount::new(command.opening_amount).map_err(DomainError::from)?;
        let seed = (!opening.is_zero()).then_some(opening);

        let customer = Customer::register(&command.personal_id, &command.name, seed)?;
        let account = customer
            .accounts()
            .next()
            .ok_or_else(|| AppError::Internal("registered customer has no account".to_string()))?;

        let response = RegisterResponse {
            customer: CustomerSummary::from(&customer),
            account: AccountSummary::from(account),
        };

        self.repository.save(&customer).await?;

        self.publisher
            .publish(BankingEvent::CustomerRegistered {
                customer_id: customer.id(),
                account_id: account.id(),
                personal_id: customer.personal_id().to_string(),
                name: customer.name().to_string(),
                opening_amount: opening.value(),
                registered_at: Utc::now(),
            })
            .await;

        Ok(response)
    }
}
