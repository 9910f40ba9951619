// src/handlers.rs

pub mod checkout;
pub mod delivery;
pub mod orders;
