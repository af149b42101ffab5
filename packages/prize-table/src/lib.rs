use cosmwasm_schema::cw_serde;
use cosmwasm_std::{OverflowError, Uint128, Uint64};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PrizeTableError {
    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("Prize tier rank range {from_rank}-{to_rank} is invalid")]
    InvalidRange { from_rank: Uint64, to_rank: Uint64 },

    #[error("Prize tiers must be ordered by rank and non-overlapping at rank {rank}")]
    OverlappingTiers { rank: Uint64 },

    #[error("Prize tier for ranks {from_rank}-{to_rank} has no payout")]
    ZeroPayout { from_rank: Uint64, to_rank: Uint64 },

    #[error("Prize tiers extend past the maximum rank {max_rank}")]
    ExceedsMaxRank { max_rank: Uint64 },
}

/// A contiguous range of ranks paying the same amount to each rank in the range.
#[cw_serde]
pub struct PrizeTier {
    pub from_rank: Uint64,
    pub to_rank: Uint64,
    /// Payout per rank in the range, not for the range as a whole
    pub amount: Uint128,
}

#[cw_serde]
pub struct PrizeTableUnchecked {
    pub tiers: Vec<PrizeTier>,
}

impl PrizeTableUnchecked {
    pub fn new(tiers: Vec<PrizeTier>) -> Self {
        Self { tiers }
    }

    /// Validates that tiers are ordered, non-overlapping, paying, and within `1..=max_rank`.
    /// An empty table is valid (a free-to-win contest with no prize breakup is not this
    /// crate's concern to reject).
    pub fn into_checked(self, max_rank: Uint64) -> Result<PrizeTable, PrizeTableError> {
        let mut last_covered = Uint64::zero();

        for tier in &self.tiers {
            if tier.from_rank.is_zero() || tier.from_rank > tier.to_rank {
                return Err(PrizeTableError::InvalidRange {
                    from_rank: tier.from_rank,
                    to_rank: tier.to_rank,
                });
            }
            if tier.from_rank <= last_covered {
                return Err(PrizeTableError::OverlappingTiers {
                    rank: tier.from_rank,
                });
            }
            if tier.amount.is_zero() {
                return Err(PrizeTableError::ZeroPayout {
                    from_rank: tier.from_rank,
                    to_rank: tier.to_rank,
                });
            }
            if tier.to_rank > max_rank {
                return Err(PrizeTableError::ExceedsMaxRank { max_rank });
            }

            last_covered = tier.to_rank;
        }

        Ok(PrizeTable { tiers: self.tiers })
    }
}

/// A validated prize breakup. Construct via [`PrizeTableUnchecked::into_checked`].
#[cw_serde]
pub struct PrizeTable {
    tiers: Vec<PrizeTier>,
}

impl PrizeTable {
    pub fn tiers(&self) -> &[PrizeTier] {
        &self.tiers
    }

    /// The payout owed to a 1-based rank, if any tier covers it.
    pub fn payout_for_rank(&self, rank: Uint64) -> Option<Uint128> {
        self.tiers
            .iter()
            .find(|tier| tier.from_rank <= rank && rank <= tier.to_rank)
            .map(|tier| tier.amount)
    }

    /// Total liability if every covered rank is occupied.
    pub fn total_payout(&self) -> Result<Uint128, PrizeTableError> {
        let mut total = Uint128::zero();

        for tier in &self.tiers {
            let ranks = Uint128::from(tier.to_rank.checked_sub(tier.from_rank)?.u64() + 1);
            total = total.checked_add(tier.amount.checked_mul(ranks)?)?;
        }

        Ok(total)
    }
}
