//! Amount of a charge with its due-date modifiers.

use super::{Discount, Fine, Interest, Reduction};

extensible_model! {
    /// ChargeValue groups the original amount of a PIX charge with the
    /// fine, interest, reduction and discount that modify it.
    pub struct ChargeValue / ChargeValueBuilder {
        /// Original amount as a decimal string (e.g. "123.45").
        original / set_original: String => "original",
        fine / set_fine: Fine => "fine",
        interest / set_interest: Interest => "interest",
        reduction / set_reduction: Reduction => "reduction",
        discount / set_discount: Discount => "discount",
    }
}
