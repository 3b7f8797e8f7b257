//! Reduction granted on the original charge amount.

extensible_model! {
    /// Reduction represents a fixed abatement on the charge amount.
    pub struct Reduction / ReductionBuilder {
        modality / set_modality: i32 => "modality",
        value_percentage / set_value_percentage: String => "valuePercentage",
    }
}
