//! The account ledger. These two functions are the only writers of
//! `Account.balance`; every other mutation path goes through them.

use cosmwasm_std::{ensure, Addr, Storage, Uint128};

use crate::{state::ACCOUNTS, ContractError};

/// Credits an account, creating it on first touch. Returns the new balance.
pub fn credit(
    storage: &mut dyn Storage,
    addr: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    ensure!(!amount.is_zero(), ContractError::InvalidAmount {});

    let account = ACCOUNTS.update(storage, addr, |account| -> Result<_, ContractError> {
        let mut account = account.unwrap_or_default();
        account.balance = account.balance.checked_add(amount)?;
        Ok(account)
    })?;

    Ok(account.balance)
}

/// Debits an account. Fails with `InsufficientFunds` and no mutation if the
/// balance cannot cover `amount`; the balance can never go negative.
pub fn debit(
    storage: &mut dyn Storage,
    addr: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    ensure!(!amount.is_zero(), ContractError::InvalidAmount {});

    let account = ACCOUNTS.update(storage, addr, |account| -> Result<_, ContractError> {
        let mut account = account.unwrap_or_default();
        if account.balance < amount {
            return Err(ContractError::InsufficientFunds {
                available: account.balance,
                required: amount,
            });
        }
        account.balance -= amount;
        Ok(account)
    })?;

    Ok(account.balance)
}
