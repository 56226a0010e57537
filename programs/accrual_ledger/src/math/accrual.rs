use super::*;

/// Linear growth factor at `PRECISION_FACTOR` scale: `P + rate * elapsed`.
///
/// A zero rate, or a clock that has not moved past `last_settled`, yields
/// exactly `P`, so balances never shrink when read.
pub fn growth_factor(rate: u64, last_settled: i64, now: i64) -> Result<u128> {
    if rate == 0 || now <= last_settled {
        return Ok(PRECISION_FACTOR);
    }

    let elapsed = now.safe_sub(last_settled)? as u128;
    let accrued = (rate as u128).safe_mul(elapsed)?;

    PRECISION_FACTOR.safe_add(accrued)
}

/// `principal * growth / P`, truncated toward zero.
pub fn effective_balance(principal: u64, rate: u64, last_settled: i64, now: i64) -> Result<u64> {
    if principal == 0 {
        return Ok(0);
    }

    let growth = growth_factor(rate, last_settled, now)?;
    let scaled = (principal as u128)
        .safe_mul(growth)?
        .safe_div(PRECISION_FACTOR)?;

    u64::try_from(scaled).map_err(|_| error!(LedgerError::ArithmeticOverflow))
}

/// Interest owed on `principal` since `last_settled` and not yet realized.
pub fn pending_interest(principal: u64, rate: u64, last_settled: i64, now: i64) -> Result<u64> {
    effective_balance(principal, rate, last_settled, now)?.safe_sub(principal)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u64 = 50_000_000_000;

    #[test]
    fn growth_is_unity_without_rate_or_elapsed_time() {
        assert_eq!(growth_factor(0, 0, 10_000).unwrap(), PRECISION_FACTOR);
        assert_eq!(growth_factor(RATE, 500, 500).unwrap(), PRECISION_FACTOR);
        // a clock that reads earlier than the last settlement never shrinks the balance
        assert_eq!(growth_factor(RATE, 500, 100).unwrap(), PRECISION_FACTOR);
    }

    #[test]
    fn one_hour_at_five_e10() {
        assert_eq!(
            growth_factor(RATE, 0, 3600).unwrap(),
            1_000_180_000_000_000_000
        );
        // 100 whole units with 9 decimals grow by 0.018%
        assert_eq!(
            effective_balance(100_000_000_000, RATE, 0, 3600).unwrap(),
            100_018_000_000
        );
        // with no decimals the 0.018 unit is truncated away
        assert_eq!(effective_balance(100, RATE, 0, 3600).unwrap(), 100);
    }

    #[test]
    fn pending_interest_is_effective_minus_principal() {
        let principal = 1_000_000_000;
        let interest = pending_interest(principal, RATE, 1_000, 1_000 + 86_400).unwrap();
        assert_eq!(interest, 4_320_000);
        assert_eq!(pending_interest(principal, 0, 0, 86_400).unwrap(), 0);
    }

    #[test]
    fn overflow_is_reported() {
        let err = effective_balance(u64::MAX, u64::MAX, 0, i64::MAX);
        assert!(err.is_err());
        assert!(growth_factor(u64::MAX, i64::MIN, i64::MAX).is_err());
    }
}
