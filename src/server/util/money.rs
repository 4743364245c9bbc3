use rust_decimal::Decimal;

/// Number of decimal places every amount is stored and rendered with.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to cents and fixes its scale so it serializes as e.g. `"10.00"`.
///
/// Amounts read back from SQLite pass through a floating point column and may carry
/// representation noise or a shorter scale.
pub fn normalize(amount: Decimal) -> Decimal {
    let mut amount = amount.round_dp(MONEY_SCALE);
    amount.rescale(MONEY_SCALE);
    amount
}

/// Whether an amount is expressible in whole cents, ignoring trailing zeros.
pub fn is_whole_cents(amount: Decimal) -> bool {
    amount.normalize().scale() <= MONEY_SCALE
}
