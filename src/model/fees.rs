//! Fees applied to a PIX charge.

extensible_model! {
    /// Fees represents a fee charged on a PIX payment.
    ///
    /// The modality selects how the fee is calculated and the percentage is
    /// the rate applied under it, as a two-digit decimal string (e.g. "5.00").
    pub struct Fees / FeesBuilder {
        /// Fee calculation method code.
        modality / set_modality: i32 => "modality",
        /// Rate applied under the modality (e.g. "5.00").
        value_percentage / set_value_percentage: String => "valuePercentage",
    }
}
