//! Early payment discounts.

use chrono::NaiveDate;

extensible_model! {
    /// FixedDateDiscount is a discount valid when paying up to a given date.
    pub struct FixedDateDiscount / FixedDateDiscountBuilder {
        /// Last day the discount applies (YYYY-MM-DD on the wire).
        date / set_date: NaiveDate => "date",
        value_percentage / set_value_percentage: String => "valuePercentage",
    }
}

extensible_model! {
    /// Discount represents the early payment discount of a charge.
    ///
    /// Depending on the modality the discount is either a single percentage
    /// or a schedule of fixed-date discounts.
    pub struct Discount / DiscountBuilder {
        /// Discount calculation method code.
        modality / set_modality: i32 => "modality",
        value_percentage / set_value_percentage: String => "valuePercentage",
        /// Discounts bound to specific dates, earliest first.
        fixed_date_discounts / set_fixed_date_discounts: Vec<FixedDateDiscount> => "fixedDateDiscounts",
    }
}

impl Discount {
    /// Appends a fixed-date discount, creating the schedule on first use.
    pub fn push_fixed_date_discount(&mut self, discount: FixedDateDiscount) {
        self.fixed_date_discounts
            .get_or_insert_with(Vec::new)
            .push(discount);
    }

    /// Returns the fixed-date discount still valid on `day`, if any.
    ///
    /// The schedule is searched for the earliest date not before `day`.
    pub fn fixed_date_discount_on(&self, day: NaiveDate) -> Option<&FixedDateDiscount> {
        self.fixed_date_discounts
            .as_deref()?
            .iter()
            .filter(|d| d.date().is_some_and(|date| *date >= day))
            .min_by_key(|d| d.date().copied())
    }
}
