//! Interest accrued on an overdue charge.

extensible_model! {
    /// Interest represents the interest rate applied while a charge is overdue.
    pub struct Interest / InterestBuilder {
        /// Interest calculation method code (e.g. daily or monthly rate).
        modality / set_modality: i32 => "modality",
        value_percentage / set_value_percentage: String => "valuePercentage",
    }
}
