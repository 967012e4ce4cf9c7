//! Helpers shared by the handlers.

use uuid::Uuid;

use crate::aggregate::Customer;
use crate::domain::DomainError;
use crate::error::{AppError, AppResult};
use crate::ports::{CustomerReadRepository, Presenter, RepositoryError};

/// Load the customer owning `account_id`; a missing account is a business
/// rejection, not a storage fault.
pub(crate) async fn load_by_account(
    repository: &dyn CustomerReadRepository,
    account_id: Uuid,
) -> AppResult<Customer> {
    repository
        .get_by_account(account_id)
        .await
        .map_err(|e| match e {
            e if e.is_not_found() => DomainError::AccountNotFound(account_id).into(),
            e => AppError::Repository(e),
        })
}

pub(crate) async fn load_by_customer(
    repository: &dyn CustomerReadRepository,
    customer_id: Uuid,
) -> AppResult<Customer> {
    repository
        .get_by_customer_id(customer_id)
        .await
        .map_err(|e| match e {
            RepositoryError::CustomerNotFound(_) => DomainError::CustomerNotFound(customer_id).into(),
            e => AppError::Repository(e),
        })
}

/// Hand the outcome to the presenter (exactly once) and decide what the
/// caller sees: business rejections were fully handled by presenting them,
/// infrastructure failures are also returned.
pub(crate) fn present<R>(presenter: &dyn Presenter<R>, result: AppResult<R>) -> AppResult<()> {
    let outcome = match &result {
        Ok(_) => {
            tracing::info!("Command completed");
            Ok(())
        }
        Err(e) if e.is_business_error() => {
            tracing::info!(error_code = e.error_code(), error = %e, "Command rejected");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error_code = e.error_code(), error = %e, "Command failed");
            Err(e.clone())
        }
    };

    presenter.populate(result);
    outcome
}
