use cosmwasm_std::Uint128;

/// Piecewise-linear vesting curve shared by the Minter's unlock schedule and
/// each vesting wallet's release schedule.
///
/// Returns the portion of `total` vested at `now` for a schedule beginning at
/// `start` (seconds) over `duration` (seconds). A zero `duration` vests the
/// full `total` at `start`. Interpolation truncates toward zero.
pub fn linear_vested(total: Uint128, now: u64, start: u64, duration: u64) -> Uint128 {
    if now < start {
        Uint128::zero()
    } else if duration == 0u64 || (now - start) >= duration {
        total
    } else {
        total.multiply_ratio(now - start, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: u128 = 1_000_000_000_000_000_000u128;

    #[test]
    fn nothing_vested_before_start() {
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), 99, 100, 200),
            Uint128::zero()
        );
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), 0, 100, 200),
            Uint128::zero()
        );
    }

    #[test]
    fn fully_vested_at_and_after_end() {
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), 300, 100, 200),
            Uint128::new(TOTAL)
        );
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), u64::MAX, 100, 200),
            Uint128::new(TOTAL)
        );
    }

    #[test]
    fn zero_duration_vests_everything_at_start() {
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), 100, 100, 0),
            Uint128::new(TOTAL)
        );
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), 99, 100, 0),
            Uint128::zero()
        );
    }

    #[test]
    fn linear_interpolation() {
        //1%
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), 102, 100, 200),
            Uint128::new(TOTAL / 100)
        );
        //10%
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), 120, 100, 200),
            Uint128::new(TOTAL / 10)
        );
        //50%
        assert_eq!(
            linear_vested(Uint128::new(TOTAL), 200, 100, 200),
            Uint128::new(TOTAL / 2)
        );
    }

    #[test]
    fn division_truncates_toward_zero() {
        //1/3 of 100 units
        assert_eq!(
            linear_vested(Uint128::new(100u128), 101, 100, 3),
            Uint128::new(33u128)
        );
    }

    #[test]
    fn monotonic_over_time() {
        let mut last = Uint128::zero();
        for now in 0..400u64 {
            let vested = linear_vested(Uint128::new(TOTAL), now, 100, 200);
            assert!(vested >= last);
            last = vested;
        }
        assert_eq!(last, Uint128::new(TOTAL));
    }
}
