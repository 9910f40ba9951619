// src/services.rs

pub mod checkout;
pub mod delivery;
pub mod pricing;
pub mod shipping;
