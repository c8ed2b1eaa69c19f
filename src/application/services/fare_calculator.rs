//! Fare calculation for closed parking tickets

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::domain::{DomainError, DomainResult, RateCard, Ticket};

/// Stays shorter than this are free.
pub const GRACE_PERIOD_MINUTES: i64 = 30;

/// Multiplier applied to the fare of a returning vehicle (5% off).
pub const LOYALTY_DISCOUNT_FACTOR: Decimal = dec!(0.95);

const MILLIS_PER_MINUTE: Decimal = dec!(60000);
const MINUTES_PER_HOUR: Decimal = dec!(60);

/// Converts a ticket's time span into a price
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    rates: RateCard,
}

impl FareCalculator {
    pub fn new(rates: RateCard) -> Self {
        Self { rates }
    }

    /// Compute the fare and store it on the ticket.
    ///
    /// Only `ticket.price` is written. On error the ticket is left untouched.
    pub fn compute_fare(&self, ticket: &mut Ticket, discount: bool) -> DomainResult<Decimal> {
        let price = self.fare_for(ticket, discount)?;
        ticket.price = price;
        Ok(price)
    }

    /// Price a ticket without mutating it.
    ///
    /// # Arguments
    /// * `ticket` - must carry an out time no earlier than its in time
    /// * `discount` - whether the loyalty discount applies
    ///
    /// # Returns
    /// `minutes × hourly rate / 60`, zero inside the grace period,
    /// multiplied by [`LOYALTY_DISCOUNT_FACTOR`] when `discount` is set.
    pub fn fare_for(&self, ticket: &Ticket, discount: bool) -> DomainResult<Decimal> {
        let out_time = match ticket.out_time {
            Some(out_time) if out_time >= ticket.in_time => out_time,
            out_time => {
                return Err(DomainError::InvalidTimeRange {
                    in_time: ticket.in_time,
                    out_time,
                })
            }
        };

        let millis = (out_time - ticket.in_time).num_milliseconds();
        let minutes = Decimal::from(millis) / MILLIS_PER_MINUTE;

        let mut price = if minutes < Decimal::from(GRACE_PERIOD_MINUTES) {
            Decimal::ZERO
        } else {
            minutes * self.rates.rate_for(ticket.spot.category) / MINUTES_PER_HOUR
        };

        if discount {
            price *= LOYALTY_DISCOUNT_FACTOR;
        }

        debug!(
            ticket_id = ticket.id,
            category = %ticket.spot.category,
            %minutes,
            discount,
            %price,
            "Fare computed"
        );

        Ok(price)
    }
}

// ── Tests ──────────────────────────────────────────────────────
