use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_ownable::OwnershipError;
use prize_table::PrizeTableError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),

    #[error("{0}")]
    OwnershipError(#[from] OwnershipError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    PrizeTableError(#[from] PrizeTableError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Amount must be greater than zero")]
    InvalidAmount {},

    #[error("Insufficient funds: {available} available, {required} required")]
    InsufficientFunds {
        available: Uint128,
        required: Uint128,
    },

    #[error("Contest {contest_id} was not found")]
    ContestNotFound { contest_id: Uint128 },

    #[error("Contest is full")]
    ContestFull {},

    #[error("Contest is closed")]
    ContestClosed {},

    #[error("Contest is still active")]
    ContestActive {},

    #[error("Contest has already been settled")]
    AlreadySettled {},

    #[error("Account has already joined this contest")]
    AlreadyJoined {},

    #[error("Order {order_id} was not found")]
    OrderNotFound { order_id: Uint128 },

    #[error("Order is not awaiting payment")]
    OrderNotPending {},

    #[error("Payment reference does not match the one already confirmed for this order")]
    PaymentReferenceMismatch {},

    #[error("Payment reference {reference} has already been applied")]
    DuplicatePaymentReference { reference: String },

    #[error("Withdrawal amount is below the minimum of {minimum}")]
    BelowMinimum { minimum: Uint128 },

    #[error("Withdrawal {withdrawal_id} was not found")]
    WithdrawalNotFound { withdrawal_id: Uint128 },

    #[error("Withdrawal is not pending settlement")]
    WithdrawalNotPending {},

    #[error("Roster must have exactly {expected} players, got {actual}")]
    InvalidRosterSize { expected: u32, actual: u32 },

    #[error("Player {player_id} appears more than once in the roster")]
    DuplicatePlayer { player_id: String },

    #[error("Captain and vice-captain must be distinct members of the roster")]
    InvalidCaptaincy {},

    #[error("Team {team_id} was not found")]
    TeamNotFound { team_id: Uint128 },
}
