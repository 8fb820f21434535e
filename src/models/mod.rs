pub mod appointment;
pub mod client;
pub mod estimate;
pub mod portfolio;
pub mod service;
pub mod status;

pub use appointment::{Appointment, AppointmentDraft};
pub use client::{Client, ClientDraft, LastVisit};
pub use estimate::{Complexity, EstimateDraft, TattooSize};
pub use portfolio::PortfolioPiece;
pub use service::Service;
pub use status::AppointmentStatus;
