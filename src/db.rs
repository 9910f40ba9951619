// src/db.rs

pub mod delivery_config_repo;
pub mod order_repo;

pub use delivery_config_repo::DeliveryConfigRepository;
pub use order_repo::OrderRepository;
