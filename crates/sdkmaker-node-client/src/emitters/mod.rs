pub mod aggregator;
pub mod client;
pub mod methods;
pub mod models;
pub mod readme;
pub mod scaffold;
