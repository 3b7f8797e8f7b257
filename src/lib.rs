//! PIX payment models.
//!
//! Typed payload models for PIX charges (fees, fines, interest, reductions,
//! discounts) that keep unknown wire fields instead of dropping them, plus
//! the JSON codec and configuration used to marshal them.

pub mod codec;
pub mod config;
pub mod model;
