// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Everything in the store is expressed in this currency.
pub const BASE_CURRENCY: &str = "USD";

// Approximate static rates: 1 unit of the foreign currency in USD.
static RATES_TO_USD: Lazy<HashMap<&'static str, Decimal>> = Lazy::new(|| {
    HashMap::from([
        ("USD", Decimal::ONE),
        ("INR", Decimal::new(12, 3)),  // 0.012
        ("EUR", Decimal::new(108, 2)), // 1.08
        ("GBP", Decimal::new(127, 2)), // 1.27
        ("CAD", Decimal::new(73, 2)),  // 0.73
    ])
});

/// Multiplier converting `code` into the base currency. Unknown codes fall
/// back to 1.0: the amount passes through unconverted rather than failing
/// the import.
pub fn rate_to_base(code: &str) -> Decimal {
    RATES_TO_USD.get(code).copied().unwrap_or(Decimal::ONE)
}

/// Convert `amount` in `code` into the base currency.
pub fn to_base(amount: Decimal, code: &str) -> Decimal {
    if code == BASE_CURRENCY {
        return amount;
    }
    amount * rate_to_base(code)
}
