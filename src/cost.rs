//! Exponential purchase cost algebra.
//!
//! Every upgrade's cost grows by a fixed factor per unit already owned.
//! Bulk purchases use the closed form of the geometric sum, and
//! max-affordable inverts that closed form instead of looping unit by
//! unit. Permanent cost modifiers (artifices, prestige cost reduction)
//! are applied to the base cost *before* these functions are called.

use crate::constants::COST_GROWTH_RATE;

/// Hard cap on the verification walk in [`max_affordable`]. The
/// closed-form estimate is off by at most a unit or two from float
/// error, so a small fixed cap is plenty.
const MAX_SEARCH_STEPS: u32 = 64;

/// Cost of the next single unit given `owned` units already purchased.
///
/// The exponent is taken in `f64` so absurd counts overflow to infinity
/// instead of wrapping; an infinite cost can never pass a budget check.
pub fn unit_cost(base: f64, owned: u64) -> f64 {
    base * COST_GROWTH_RATE.powf(owned as f64)
}

/// Total cost of buying `count` units starting from `owned` already
/// purchased. Closed form of the geometric sum; equals the naive sum of
/// unit costs to floating-point tolerance.
pub fn bulk_cost(base: f64, owned: u64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let growth = COST_GROWTH_RATE;
    unit_cost(base, owned) * (growth.powf(count as f64) - 1.0) / (growth - 1.0)
}

/// Result of a max-affordable computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkPurchase {
    pub count: u64,
    pub cost: f64,
}

impl BulkPurchase {
    const NONE: BulkPurchase = BulkPurchase {
        count: 0,
        cost: 0.0,
    };
}

/// Largest `count` such that `bulk_cost(base, owned, count) <= budget`,
/// together with that cost.
///
/// Derived by inverting the geometric series, then verified with a
/// bounded walk so float error near the boundary can never return an
/// unaffordable count.
pub fn max_affordable(base: f64, owned: u64, budget: f64) -> BulkPurchase {
    if !base.is_finite() || base <= 0.0 || !budget.is_finite() || budget <= 0.0 {
        return BulkPurchase::NONE;
    }

    let first = unit_cost(base, owned);
    if !first.is_finite() || budget < first {
        return BulkPurchase::NONE;
    }

    // budget >= sum => growth^count <= budget*(g-1)/first + 1
    let growth = COST_GROWTH_RATE;
    let raw = ((budget * (growth - 1.0) / first) + 1.0).ln() / growth.ln();
    let mut count = if raw.is_finite() && raw >= 1.0 {
        raw.floor() as u64
    } else {
        1
    };

    // Walk down if float error overshot the budget.
    let mut steps = 0;
    while count > 0 && bulk_cost(base, owned, count) > budget && steps < MAX_SEARCH_STEPS {
        count -= 1;
        steps += 1;
    }
    // Walk up while one more unit still fits.
    while steps < MAX_SEARCH_STEPS && bulk_cost(base, owned, count + 1) <= budget {
        count += 1;
        steps += 1;
    }

    BulkPurchase {
        count,
        cost: bulk_cost(base, owned, count),
    }
}
