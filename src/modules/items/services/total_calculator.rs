use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};

/// Fractional digits kept for every stored amount (DECIMAL(19, 4))
pub const AMOUNT_SCALE: u32 = 4;

/// Amounts must stay strictly below this magnitude to fit the 15 integer
/// digits of a DECIMAL(19, 4) column
const AMOUNT_LIMIT: i64 = 1_000_000_000_000_000;

/// Stored pricing fields of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amounts {
    pub base_amount: Decimal,
    pub discount: Decimal,
    pub total_amount: Decimal,
}

/// TotalCalculator derives an item's `total_amount` from its inputs.
///
/// Formula: total_amount = base_amount - discount
///
/// Inputs are rounded to [`AMOUNT_SCALE`] before subtracting so the three
/// stored columns always agree with each other.
pub struct TotalCalculator;

impl TotalCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Round an amount to the stored scale, half away from zero
    pub fn normalize(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Compute the total, treating absent operands as zero
    pub fn compute_total(
        &self,
        base_amount: Option<Decimal>,
        discount: Option<Decimal>,
    ) -> Result<Decimal> {
        base_amount
            .unwrap_or(Decimal::ZERO)
            .checked_sub(discount.unwrap_or(Decimal::ZERO))
            .ok_or_else(out_of_range)
    }

    /// Pricing for a new item
    pub fn for_create(
        &self,
        base_amount: Option<Decimal>,
        discount: Option<Decimal>,
    ) -> Result<Amounts> {
        self.amounts(
            base_amount.unwrap_or(Decimal::ZERO),
            discount.unwrap_or(Decimal::ZERO),
        )
    }

    /// Pricing after a partial update.
    ///
    /// Returns `None` when the update touches neither input. Otherwise the
    /// missing operand is taken from `current` before recomputing.
    pub fn for_update(
        &self,
        current: Amounts,
        base_amount: Option<Decimal>,
        discount: Option<Decimal>,
    ) -> Result<Option<Amounts>> {
        if base_amount.is_none() && discount.is_none() {
            return Ok(None);
        }

        self.amounts(
            base_amount.unwrap_or(current.base_amount),
            discount.unwrap_or(current.discount),
        )
        .map(Some)
    }

    fn amounts(&self, base_amount: Decimal, discount: Decimal) -> Result<Amounts> {
        let base_amount = self.normalize(base_amount);
        let discount = self.normalize(discount);
        let total_amount = self.compute_total(Some(base_amount), Some(discount))?;

        for amount in [base_amount, discount, total_amount] {
            if amount.abs() >= Decimal::from(AMOUNT_LIMIT) {
                return Err(out_of_range());
            }
        }

        Ok(Amounts {
            base_amount,
            discount,
            total_amount,
        })
    }
}

impl Default for TotalCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn out_of_range() -> AppError {
    AppError::validation("amount out of range")
}
