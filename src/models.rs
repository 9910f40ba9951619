// src/models.rs

pub mod catalog;
pub mod order;
pub mod region;
