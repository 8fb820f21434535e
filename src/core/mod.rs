pub mod activity;
pub mod app;
pub mod clock;
pub mod ids;
pub mod pricing;
pub mod registry;
pub mod seed;
pub mod views;

pub use app::StudioApp;
pub use pricing::calculate_price;
