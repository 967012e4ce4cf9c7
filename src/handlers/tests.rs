//! Handler tests
//!
//! Run every use case against the in-memory adapters.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::adapters::{CapturingPresenter, InMemoryCustomerRepository, InMemoryEventBus};
    use crate::aggregate::{AccountStatus, Customer, TransactionKind};
    use crate::domain::{AmountError, BankingEvent, DomainError, ValidationError};
    use crate::error::AppError;
    use crate::handlers::*;
    use crate::ports::{CustomerWriteRepository, RepositoryError};

    struct Fixture {
        repository: Arc<InMemoryCustomerRepository>,
        bus: Arc<InMemoryEventBus>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                repository: Arc::new(InMemoryCustomerRepository::new()),
                bus: Arc::new(InMemoryEventBus::new()),
            }
        }

        async fn register(&self, opening: Decimal) -> RegisterResponse {
            let presenter = Arc::new(CapturingPresenter::<RegisterResponse>::new());
            RegisterHandler::new(self.repository.clone(), self.bus.clone(), presenter.clone())
                .execute(RegisterCommand::new("08724050601", "Ivan Paulovich", opening))
                .await
                .unwrap();
            presenter.response().unwrap()
        }

        async fn deposit(&self, account_id: Uuid, amount: Decimal) -> Arc<CapturingPresenter<DepositResponse>> {
            let presenter = Arc::new(CapturingPresenter::<DepositResponse>::new());
            DepositHandler::new(
                self.repository.clone(),
                self.repository.clone(),
                self.bus.clone(),
                presenter.clone(),
            )
            .execute(DepositCommand::new(account_id, amount))
            .await
            .unwrap();
            presenter
        }

        async fn withdraw(&self, account_id: Uuid, amount: Decimal) -> Arc<CapturingPresenter<WithdrawResponse>> {
            let presenter = Arc::new(CapturingPresenter::<WithdrawResponse>::new());
            WithdrawHandler::new(
                self.repository.clone(),
                self.repository.clone(),
                self.bus.clone(),
                presenter.clone(),
            )
            .execute(WithdrawCommand::new(account_id, amount))
            .await
            .unwrap();
            presenter
        }

        async fn close(&self, account_id: Uuid) -> Arc<CapturingPresenter<CloseAccountResponse>> {
            let presenter = Arc::new(CapturingPresenter::<CloseAccountResponse>::new());
            CloseAccountHandler::new(
                self.repository.clone(),
                self.repository.clone(),
                self.bus.clone(),
                presenter.clone(),
            )
            .execute(CloseAccountCommand::new(account_id))
            .await
            .unwrap();
            presenter
        }

        async fn balance(&self, account_id: Uuid) -> Decimal {
            let presenter = Arc::new(CapturingPresenter::<AccountDetails>::new());
            GetAccountDetailsHandler::new(self.repository.clone(), presenter.clone())
                .execute(GetAccountDetailsQuery { account_id })
                .await
                .unwrap();
            presenter.response().unwrap().account.balance
        }
    }

    // =========================================================================
    // Register
    // =========================================================================

    #[tokio::test]
    async fn test_register_valid_customer() {
        let fixture = Fixture::new();

        let response = fixture.register(dec!(300)).await;

        assert_eq!(response.customer.personal_id, "08724050601");
        assert_eq!(response.customer.name, "Ivan Paulovich");
        assert!(!response.customer.customer_id.is_nil());
        assert!(!response.account.account_id.is_nil());
        assert_eq!(response.account.balance, dec!(300));
        assert_eq!(response.account.status, AccountStatus::Open);

        let events = fixture.bus.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            BankingEvent::CustomerRegistered { opening_amount, .. } if *opening_amount == dec!(300)
        ));
        assert_eq!(fixture.repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_register_zero_opening_amount_opens_empty_account() {
        let fixture = Fixture::new();

        let response = fixture.register(Decimal::ZERO).await;

        assert!(response.account.transactions.is_empty());
        assert_eq!(response.account.balance, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_identity() {
        let fixture = Fixture::new();
        let presenter = Arc::new(CapturingPresenter::<RegisterResponse>::new());
        let handler = RegisterHandler::new(fixture.repository.clone(), fixture.bus.clone(), presenter.clone());

        let result = handler
            .execute(RegisterCommand::new("a€bcd", "Ivan Paulovich", dec!(500)))
            .await;

        assert!(result.is_ok());
        assert_eq!(presenter.calls(), 1);
        let error = presenter.error().unwrap();
        assert!(error.is_business_error());
        assert!(matches!(
            error.domain(),
            Some(DomainError::Validation(ValidationError::InvalidPersonalId(_)))
        ));
        assert!(fixture.repository.is_empty().await);
        assert!(fixture.bus.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_negative_opening_amount() {
        let fixture = Fixture::new();
        let presenter = Arc::new(CapturingPresenter::<RegisterResponse>::new());
        let handler = RegisterHandler::new(fixture.repository.clone(), fixture.bus.clone(), presenter.clone());

        handler
            .execute(RegisterCommand::new("08724050601", "Ivan Paulovich", dec!(-1)))
            .await
            .unwrap();

        assert!(matches!(
            presenter.error(),
            Some(AppError::Domain(DomainError::InvalidAmount(AmountError::Negative(_))))
        ));
    }

    // =========================================================================
    // Deposit / Withdraw
    // =========================================================================

    #[tokio::test]
    async fn test_deposit_valid_amount() {
        let fixture = Fixture::new();
        let account_id = fixture.register(Decimal::ZERO).await.account.account_id;

        let presenter = fixture.deposit(account_id, dec!(100)).await;

        let response = presenter.response().unwrap();
        assert_eq!(response.transaction.amount, dec!(100));
        assert_eq!(response.transaction.kind, TransactionKind::Credit);
        assert_eq!(response.balance, dec!(100));
        assert_eq!(fixture.balance(account_id).await, dec!(100));
        assert!(matches!(
            fixture.bus.events().last(),
            Some(BankingEvent::FundsDeposited { amount, .. }) if *amount == dec!(100)
        ));
    }

    #[tokio::test]
    async fn test_deposit_unknown_account() {
        let fixture = Fixture::new();
        let missing = Uuid::new_v4();

        let presenter = fixture.deposit(missing, dec!(100)).await;

        assert!(matches!(
            presenter.error(),
            Some(AppError::Domain(DomainError::AccountNotFound(id))) if id == missing
        ));
        assert!(fixture.bus.is_empty());
    }

    #[tokio::test]
    async fn test_withdraw_valid_amount() {
        let fixture = Fixture::new();
        let account_id = fixture.register(dec!(100)).await.account.account_id;

        let presenter = fixture.withdraw(account_id, dec!(100)).await;

        let response = presenter.response().unwrap();
        assert_eq!(response.transaction.amount, dec!(100));
        assert_eq!(response.transaction.kind, TransactionKind::Debit);
        assert_eq!(response.balance, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_withdraw_insufficient_funds_is_presented() {
        let fixture = Fixture::new();
        let account_id = fixture.register(Decimal::ZERO).await.account.account_id;
        let events_before = fixture.bus.len();

        let presenter = fixture.withdraw(account_id, dec!(50)).await;

        assert_eq!(presenter.calls(), 1);
        assert!(matches!(
            presenter.error(),
            Some(AppError::Domain(DomainError::InsufficientFunds { .. }))
        ));
        assert_eq!(fixture.balance(account_id).await, Decimal::ZERO);
        assert_eq!(fixture.bus.len(), events_before);
    }

    // =========================================================================
    // Close
    // =========================================================================

    #[tokio::test]
    async fn test_account_with_credits_should_not_allow_close() {
        let fixture = Fixture::new();
        let account_id = fixture.register(dec!(100)).await.account.account_id;

        let presenter = fixture.close(account_id).await;

        assert!(matches!(
            presenter.error(),
            Some(AppError::Domain(DomainError::AccountCannotBeClosed { .. }))
        ));

        let customer = crate::ports::CustomerReadRepository::get_by_account(
            fixture.repository.as_ref(),
            account_id,
        )
        .await
        .unwrap();
        assert!(customer.find_account(account_id).unwrap().is_open());
    }

    #[tokio::test]
    async fn test_close_after_emptying_account() {
        let fixture = Fixture::new();
        let account_id = fixture.register(dec!(100)).await.account.account_id;
        fixture.withdraw(account_id, dec!(100)).await;

        let presenter = fixture.close(account_id).await;

        let response = presenter.response().unwrap();
        assert_eq!(response.status, AccountStatus::Closed);
        assert!(response.closed_at.is_some());
        assert!(matches!(
            fixture.bus.events().last(),
            Some(BankingEvent::AccountClosed { .. })
        ));

        // Terminal: a later deposit is rejected
        let deposit = fixture.deposit(account_id, dec!(1)).await;
        assert!(matches!(
            deposit.error(),
            Some(AppError::Domain(DomainError::AccountClosed(_)))
        ));
    }

    #[tokio::test]
    async fn test_close_twice_is_noop() {
        let fixture = Fixture::new();
        let account_id = fixture.register(Decimal::ZERO).await.account.account_id;
        fixture.close(account_id).await;
        let events_after_first = fixture.bus.len();

        let presenter = fixture.close(account_id).await;

        assert_eq!(presenter.response().unwrap().status, AccountStatus::Closed);
        assert_eq!(fixture.bus.len(), events_after_first);
    }

    // =========================================================================
    // Open account / details
    // =========================================================================

    #[tokio::test]
    async fn test_open_second_account_and_customer_details() {
        let fixture = Fixture::new();
        let registered = fixture.register(dec!(300)).await;
        let customer_id = registered.customer.customer_id;

        let opened = Arc::new(CapturingPresenter::<OpenAccountResponse>::new());
        OpenAccountHandler::new(
            fixture.repository.clone(),
            fixture.repository.clone(),
            fixture.bus.clone(),
            opened.clone(),
        )
        .execute(OpenAccountCommand::new(customer_id, dec!(20)))
        .await
        .unwrap();
        let second = opened.response().unwrap().account.account_id;
        assert_ne!(second, registered.account.account_id);

        let details = Arc::new(CapturingPresenter::<CustomerDetails>::new());
        GetCustomerDetailsHandler::new(fixture.repository.clone(), details.clone())
            .execute(GetCustomerDetailsQuery { customer_id })
            .await
            .unwrap();

        let details = details.response().unwrap();
        assert_eq!(details.accounts.len(), 2);
        assert_eq!(details.total_balance, dec!(320));
        assert!(matches!(
            fixture.bus.events().last(),
            Some(BankingEvent::AccountOpened { account_id, .. }) if *account_id == second
        ));
    }

    #[tokio::test]
    async fn test_customer_details_unknown_customer() {
        let fixture = Fixture::new();
        let presenter = Arc::new(CapturingPresenter::<CustomerDetails>::new());
        let missing = Uuid::new_v4();

        GetCustomerDetailsHandler::new(fixture.repository.clone(), presenter.clone())
            .execute(GetCustomerDetailsQuery { customer_id: missing })
            .await
            .unwrap();

        assert!(matches!(
            presenter.error(),
            Some(AppError::Domain(DomainError::CustomerNotFound(id))) if id == missing
        ));
    }

    // =========================================================================
    // Infrastructure failures
    // =========================================================================

    struct UnavailableRepository;

    #[async_trait]
    impl CustomerWriteRepository for UnavailableRepository {
        async fn save(&self, _customer: &Customer) -> Result<(), RepositoryError> {
            Err(RepositoryError::Unavailable("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_save_failure_is_presented_and_returned() {
        let fixture = Fixture::new();
        let account_id = fixture.register(Decimal::ZERO).await.account.account_id;
        let presenter = Arc::new(CapturingPresenter::<DepositResponse>::new());
        let handler = DepositHandler::new(
            fixture.repository.clone(),
            Arc::new(UnavailableRepository),
            fixture.bus.clone(),
            presenter.clone(),
        );

        let result = handler.execute(DepositCommand::new(account_id, dec!(10))).await;

        assert!(matches!(result, Err(AppError::Repository(RepositoryError::Unavailable(_)))));
        assert_eq!(presenter.calls(), 1);
        assert!(presenter.error().unwrap().is_retryable());
        // Nothing published, stored state unchanged
        assert_eq!(fixture.bus.len(), 1);
        assert_eq!(fixture.balance(account_id).await, Decimal::ZERO);
    }
}
