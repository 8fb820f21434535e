pub mod appointments;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod estimate;
pub mod export;
pub mod guide;
pub mod portfolio;
pub mod shell;
