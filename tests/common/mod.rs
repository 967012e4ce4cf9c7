//! Common test utilities

#![allow(dead_code)]

use std::sync::Arc;

use bank_ledger::adapters::{CapturingPresenter, InMemoryCustomerRepository, InMemoryEventBus};
use bank_ledger::handlers::*;
use bank_ledger::AppResult;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Handlers wired to one shared set of in-memory adapters
pub struct Bank {
    pub repository: Arc<InMemoryCustomerRepository>,
    pub bus: Arc<InMemoryEventBus>,
}

/// Unwrap the single outcome a handler must have presented
fn presented<R>(presenter: &CapturingPresenter<R>) -> AppResult<R> {
    assert_eq!(presenter.calls(), 1, "presenter must be populated exactly once");
    presenter.take().expect("presenter was populated")
}

impl Bank {
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryCustomerRepository::new()),
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    pub async fn register(&self, personal_id: &str, name: &str, opening: Decimal) -> AppResult<RegisterResponse> {
        let presenter = Arc::new(CapturingPresenter::<RegisterResponse>::new());
        let _ = RegisterHandler::new(self.repository.clone(), self.bus.clone(), presenter.clone())
            .execute(RegisterCommand::new(personal_id, name, opening))
            .await;
        presented(&presenter)
    }

    pub async fn deposit(&self, account_id: Uuid, amount: Decimal) -> AppResult<DepositResponse> {
        let presenter = Arc::new(CapturingPresenter::<DepositResponse>::new());
        let _ = self
            .deposit_handler(presenter.clone())
            .execute(DepositCommand::new(account_id, amount))
            .await;
        presented(&presenter)
    }

    pub fn deposit_handler(&self, presenter: Arc<CapturingPresenter<DepositResponse>>) -> DepositHandler {
        DepositHandler::new(
            self.repository.clone(),
            self.repository.clone(),
            self.bus.clone(),
            presenter,
        )
    }

    pub async fn withdraw(&self, account_id: Uuid, amount: Decimal) -> AppResult<WithdrawResponse> {
        let presenter = Arc::new(CapturingPresenter::<WithdrawResponse>::new());
        let _ = WithdrawHandler::new(
            self.repository.clone(),
            self.repository.clone(),
            self.bus.clone(),
            presenter.clone(),
        )
        .execute(WithdrawCommand::new(account_id, amount))
        .await;
        presented(&presenter)
    }

    pub async fn close(&self, account_id: Uuid) -> AppResult<CloseAccountResponse> {
        let presenter = Arc::new(CapturingPresenter::<CloseAccountResponse>::new());
        let _ = CloseAccountHandler::new(
            self.repository.clone(),
            self.repository.clone(),
            self.bus.clone(),
            presenter.clone(),
        )
        .execute(CloseAccountCommand::new(account_id))
        .await;
        presented(&presenter)
    }

    pub async fn account(&self, account_id: Uuid) -> AppResult<AccountDetails> {
        let presenter = Arc::new(CapturingPresenter::<AccountDetails>::new());
        let _ = GetAccountDetailsHandler::new(self.repository.clone(), presenter.clone())
            .execute(GetAccountDetailsQuery { account_id })
            .await;
        presented(&presenter)
    }
}
