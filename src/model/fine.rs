//! Fine for a charge paid after its due date.

extensible_model! {
    /// Fine represents the penalty applied when a charge is paid late.
    pub struct Fine / FineBuilder {
        /// Fine calculation method code.
        modality / set_modality: i32 => "modality",
        /// Rate applied under the modality (e.g. "10.00").
        value_percentage / set_value_percentage: String => "valuePercentage",
    }
}
