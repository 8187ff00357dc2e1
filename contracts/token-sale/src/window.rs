//! Purchase windows and the sale phase derived from them.
//!
//! The phase is never stored. It is recomputed from the ledger timestamp, the
//! raised counter and the finalization status on every call, so it cannot go
//! stale.

use soroban_sdk::contracttype;

use crate::error::SaleError;
use crate::gate::SaleStatus;

/// Two closed intervals: `[presale_start, presale_end]` and
/// `[publicsale_start, publicsale_end]`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SaleWindows {
    pub presale_start: u64,
    pub presale_end: u64,
    pub publicsale_start: u64,
    pub publicsale_end: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SalePhase {
    NotStarted = 0,
    Presale = 1,
    /// Between the end of the presale and the start of the public sale.
    Intermission = 2,
    PublicSale = 3,
    Ended = 4,
    Finalized = 5,
}

impl SaleWindows {
    /// Windows must be ordered and must not overlap except at a shared bound.
    pub fn validate(&self) -> Result<(), SaleError> {
        let ordered = self.presale_start <= self.presale_end
            && self.presale_end <= self.publicsale_start
            && self.publicsale_start <= self.publicsale_end;
        if !ordered {
            return Err(SaleError::InvalidSaleWindows);
        }
        Ok(())
    }

    pub fn in_presale(&self, now: u64) -> bool {
        self.presale_start <= now && now <= self.presale_end
    }

    pub fn in_publicsale(&self, now: u64) -> bool {
        self.publicsale_start <= now && now <= self.publicsale_end
    }

    pub fn is_open(&self, now: u64) -> bool {
        self.in_presale(now) || self.in_publicsale(now)
    }

    /// Past the public sale, or every token has been sold.
    pub fn has_ended(&self, now: u64, token_raised: u128, max_tokens: u128) -> bool {
        now > self.publicsale_end || token_raised >= max_tokens
    }

    pub fn phase(&self, now: u64, token_raised: u128, max_tokens: u128, status: SaleStatus) -> SalePhase {
        if status == SaleStatus::Finalized {
            return SalePhase::Finalized;
        }
        if self.has_ended(now, token_raised, max_tokens) {
            return SalePhase::Ended;
        }
        if now < self.presale_start {
            SalePhase::NotStarted
        } else if self.in_presale(now) {
            SalePhase::Presale
        } else if self.in_publicsale(now) {
            SalePhase::PublicSale
        } else {
            SalePhase::Intermission
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows() -> SaleWindows {
        SaleWindows {
            presale_start: 100,
            presale_end: 200,
            publicsale_start: 300,
            publicsale_end: 400,
        }
    }

    #[test]
    fn test_validate_ordering() {
        assert_eq!(windows().validate(), Ok(()));

        let mut overlapping = windows();
        overlapping.publicsale_start = 150;
        assert_eq!(overlapping.validate(), Err(SaleError::InvalidSaleWindows));

        let mut inverted = windows();
        inverted.presale_start = 250;
        assert_eq!(inverted.validate(), Err(SaleError::InvalidSaleWindows));

        let touching = SaleWindows {
            presale_start: 1,
            presale_end: 5,
            publicsale_start: 5,
            publicsale_end: 9,
        };
        assert_eq!(touching.validate(), Ok(()));
    }

    #[test]
    fn test_windows_are_closed_intervals() {
        let w = windows();
        assert!(!w.is_open(99));
        assert!(w.is_open(100));
        assert!(w.is_open(200));
        assert!(!w.is_open(201));
        assert!(!w.is_open(299));
        assert!(w.is_open(300));
        assert!(w.is_open(400));
        assert!(!w.is_open(401));
    }

    #[test]
    fn test_phase_follows_clock() {
        let w = windows();
        let open = SaleStatus::Open;
        assert_eq!(w.phase(50, 0, 10, open), SalePhase::NotStarted);
        assert_eq!(w.phase(150, 0, 10, open), SalePhase::Presale);
        assert_eq!(w.phase(250, 0, 10, open), SalePhase::Intermission);
        assert_eq!(w.phase(350, 0, 10, open), SalePhase::PublicSale);
        assert_eq!(w.phase(401, 0, 10, open), SalePhase::Ended);
        assert_eq!(w.phase(401, 0, 10, SaleStatus::Finalized), SalePhase::Finalized);
    }

    #[test]
    fn test_sold_out_ends_sale_early() {
        let w = windows();
        assert!(w.has_ended(150, 10, 10));
        assert_eq!(w.phase(150, 10, 10, SaleStatus::Open), SalePhase::Ended);
        assert!(!w.has_ended(400, 9, 10));
    }
}
