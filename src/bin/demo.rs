//! Ledger walkthrough
//!
//! Registers a customer against the in-memory adapters, then deposits,
//! withdraws and closes the account, printing each presented outcome.
//!
//! Run with: cargo run --bin demo -- --opening 300

use std::sync::Arc;

use bank_ledger::adapters::{CapturingPresenter, InMemoryCustomerRepository, InMemoryEventBus};
use bank_ledger::handlers::*;
use bank_ledger::{AppResult, Config};
use rust_decimal::Decimal;
use serde::Serialize;

fn print_outcome<R: Serialize>(step: &str, outcome: Option<AppResult<R>>) -> anyhow::Result<()> {
    match outcome {
        Some(Ok(response)) => println!("{step}: {}", serde_json::to_string_pretty(&response)?),
        Some(Err(e)) => println!("{step} rejected: {}", serde_json::to_string(&e.to_response())?),
        None => println!("{step}: no outcome presented"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    bank_ledger::telemetry::init_tracing(&config);

    let args: Vec<String> = std::env::args().collect();
    let opening: Decimal = args
        .iter()
        .position(|a| a == "--opening")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.parse::<Decimal>())
        .transpose()?
        .unwrap_or_else(|| Decimal::new(300, 0));

    tracing::info!(environment = %config.environment, "Starting ledger walkthrough");

    let repository = Arc::new(InMemoryCustomerRepository::new());
    let bus = Arc::new(InMemoryEventBus::new());

    // Register
    let registered = Arc::new(CapturingPresenter::<RegisterResponse>::new());
    RegisterHandler::new(repository.clone(), bus.clone(), registered.clone())
        .execute(RegisterCommand::new("08724050601", "Ivan Paulovich", opening))
        .await?;
    let Some(account_id) = registered.response().map(|r| r.account.account_id) else {
        print_outcome("register", registered.take())?;
        return Ok(());
    };
    print_outcome("register", registered.take())?;

    // Closing with funds is rejected
    let closed = Arc::new(CapturingPresenter::<CloseAccountResponse>::new());
    let close = CloseAccountHandler::new(repository.clone(), repository.clone(), bus.clone(), closed.clone());
    close.execute(CloseAccountCommand::new(account_id)).await?;
    print_outcome("close", closed.take())?;

    // Deposit, then withdraw everything
    let deposited = Arc::new(CapturingPresenter::<DepositResponse>::new());
    DepositHandler::new(repository.clone(), repository.clone(), bus.clone(), deposited.clone())
        .execute(DepositCommand::new(account_id, Decimal::new(100, 0)))
        .await?;
    print_outcome("deposit", deposited.take())?;

    let details = Arc::new(CapturingPresenter::<AccountDetails>::new());
    GetAccountDetailsHandler::new(repository.clone(), details.clone())
        .execute(GetAccountDetailsQuery { account_id })
        .await?;
    let balance = details
        .response()
        .map(|d| d.account.balance)
        .unwrap_or_default();

    let withdrawn = Arc::new(CapturingPresenter::<WithdrawResponse>::new());
    let withdraw = WithdrawHandler::new(repository.clone(), repository.clone(), bus.clone(), withdrawn.clone());
    withdraw.execute(WithdrawCommand::new(account_id, balance + Decimal::ONE)).await?;
    print_outcome("overdraw", withdrawn.take())?;
    withdraw.execute(WithdrawCommand::new(account_id, balance)).await?;
    print_outcome("withdraw", withdrawn.take())?;

    close.execute(CloseAccountCommand::new(account_id)).await?;
    print_outcome("close", closed.take())?;

    for event in bus.events() {
        println!("event: {}", serde_json::to_string(&event)?);
    }

    tracing::info!(events = bus.len(), "Walkthrough finished");
    Ok(())
}
