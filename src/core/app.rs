//! The studio controller: owns every collection and draft of a session.

use super::activity::ActivityLog;
use super::clock::{Clock, SystemClock};
use super::ids::IdGenerator;
use super::pricing;
use super::registry::{AppointmentRegistry, ClientRegistry, Record, Registry};
use super::seed;
use super::views::{self, DashboardStats};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Appointment, AppointmentDraft, Client, ClientDraft, EstimateDraft, PortfolioPiece,
};
use crate::ui::notify::{ConsoleNotifier, Notifier};
use std::sync::Arc;

pub struct StudioApp {
    appointments: AppointmentRegistry,
    clients: ClientRegistry,
    portfolio: Arc<Vec<PortfolioPiece>>,

    appointment_draft: AppointmentDraft,
    client_draft: ClientDraft,
    estimate_draft: EstimateDraft,
    default_rate: f64,
    recent_limit: usize,

    ids: IdGenerator,
    log: ActivityLog,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
}

impl StudioApp {
    /// An empty studio using the system clock and terminal notifications.
    pub fn new(hourly_rate: f64) -> Self {
        Self {
            appointments: Registry::new(),
            clients: Registry::new(),
            portfolio: Arc::new(Vec::new()),
            appointment_draft: AppointmentDraft::default(),
            client_draft: ClientDraft::default(),
            estimate_draft: EstimateDraft::with_rate(hourly_rate),
            default_rate: hourly_rate,
            recent_limit: 3,
            ids: IdGenerator::new(),
            log: ActivityLog::new(),
            clock: Box::new(SystemClock),
            notifier: Box::new(ConsoleNotifier),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let app = Self::new(cfg.hourly_rate).with_recent_limit(cfg.recent_limit);
        if cfg.seed_demo_data {
            app.with_seed_data()
        } else {
            app
        }
    }

    pub fn with_seed_data(mut self) -> Self {
        self.appointments = Registry::from_items(seed::appointments());
        self.clients = Registry::from_items(seed::clients());
        self.portfolio = Arc::new(seed::portfolio());
        self
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_notifier<N: Notifier + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_recent_limit(mut self, n: usize) -> Self {
        self.recent_limit = n;
        self
    }

    // ---------------------------
    // Collections (read-only)
    // ---------------------------

    pub fn appointments(&self) -> &[Appointment] {
        self.appointments.items()
    }

    pub fn appointments_snapshot(&self) -> Arc<Vec<Appointment>> {
        self.appointments.snapshot()
    }

    pub fn clients(&self) -> &[Client] {
        self.clients.items()
    }

    pub fn clients_snapshot(&self) -> Arc<Vec<Client>> {
        self.clients.snapshot()
    }

    pub fn portfolio(&self) -> &[PortfolioPiece] {
        &self.portfolio
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.log
    }

    // ---------------------------
    // Drafts
    // ---------------------------

    pub fn appointment_draft(&self) -> &AppointmentDraft {
        &self.appointment_draft
    }

    pub fn client_draft(&self) -> &ClientDraft {
        &self.client_draft
    }

    pub fn estimate_draft(&self) -> &EstimateDraft {
        &self.estimate_draft
    }

    pub fn edit_appointment(&mut self, field: &str, value: &str) -> AppResult<()> {
        self.appointment_draft.set_field(field, value)
    }

    pub fn edit_client(&mut self, field: &str, value: &str) -> AppResult<()> {
        self.client_draft.set_field(field, value)
    }

    pub fn edit_estimate(&mut self, field: &str, value: &str) -> AppResult<()> {
        self.estimate_draft.set_field(field, value)
    }

    /// Route a field edit to the draft named by `form`.
    pub fn edit(&mut self, form: &str, field: &str, value: &str) -> AppResult<()> {
        match form {
            AppointmentDraft::FORM => self.edit_appointment(field, value),
            ClientDraft::FORM => self.edit_client(field, value),
            EstimateDraft::FORM => self.edit_estimate(field, value),
            other => Err(AppError::UnknownCommand(format!("unknown form '{other}'"))),
        }
    }

    /// Reset a draft to its empty defaults.
    pub fn clear(&mut self, form: &str) -> AppResult<()> {
        match form {
            AppointmentDraft::FORM => self.appointment_draft = AppointmentDraft::default(),
            ClientDraft::FORM => self.client_draft = ClientDraft::default(),
            EstimateDraft::FORM => self.estimate_draft = EstimateDraft::with_rate(self.default_rate),
            other => return Err(AppError::UnknownCommand(format!("unknown form '{other}'"))),
        }
        Ok(())
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Commit the appointment draft.
    ///
    /// On a missing client name, date or time the collection and the draft
    /// are left as they are and an error notification is sent.
    pub fn add_appointment(&mut self) -> Option<&Appointment> {
        if let Err(e) = self.appointment_draft.validate() {
            reject(&mut self.log, self.notifier.as_ref(), AppointmentDraft::FORM, &e);
            return None;
        }

        let id = fresh_id(&mut self.ids, self.clock.as_ref(), &self.appointments);
        match self.appointments.add(id, &self.appointment_draft) {
            Ok(appointment) => {
                self.appointment_draft = AppointmentDraft::default();
                self.log.record(
                    "add",
                    AppointmentDraft::FORM,
                    &format!(
                        "{} on {} ({})",
                        appointment.client_name,
                        appointment.when(),
                        appointment.id
                    ),
                );
                self.notifier.success("Appointment scheduled successfully!");
                Some(appointment)
            }
            Err(e) => {
                reject(&mut self.log, self.notifier.as_ref(), AppointmentDraft::FORM, &e);
                None
            }
        }
    }

    /// Commit the client draft. Requires name and email.
    pub fn add_client(&mut self) -> Option<&Client> {
        if let Err(e) = self.client_draft.validate() {
            reject(&mut self.log, self.notifier.as_ref(), ClientDraft::FORM, &e);
            return None;
        }

        let id = fresh_id(&mut self.ids, self.clock.as_ref(), &self.clients);
        match self.clients.add(id, &self.client_draft) {
            Ok(client) => {
                self.client_draft = ClientDraft::default();
                self.log.record(
                    "add",
                    ClientDraft::FORM,
                    &format!("{} <{}> ({})", client.name, client.email, client.id),
                );
                self.notifier.success("Client added successfully!");
                Some(client)
            }
            Err(e) => {
                reject(&mut self.log, self.notifier.as_ref(), ClientDraft::FORM, &e);
                None
            }
        }
    }

    // ---------------------------
    // Derived views
    // ---------------------------

    /// Date used by `todays_appointments`, read from the clock on each call.
    pub fn today(&self) -> String {
        self.clock.today_iso()
    }

    pub fn todays_appointments(&self) -> Vec<&Appointment> {
        views::todays_appointments(self.appointments(), &self.today())
    }

    pub fn total_revenue(&self) -> f64 {
        views::total_revenue(self.appointments())
    }

    pub fn recent_appointments(&self) -> &[Appointment] {
        views::recent_appointments(self.appointments(), self.recent_limit)
    }

    /// Price for the current estimator inputs.
    pub fn calculated_price(&self) -> i64 {
        pricing::estimate(&self.estimate_draft)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_clients: self.clients.len(),
            todays_appointments: self.todays_appointments().len(),
            total_revenue: self.total_revenue(),
            portfolio_pieces: self.portfolio.len(),
        }
    }
}

fn fresh_id<T: Record>(ids: &mut IdGenerator, clock: &dyn Clock, registry: &Registry<T>) -> String {
    loop {
        let id = ids.next_id(clock.now_millis());
        if !registry.contains_id(&id) {
            return id;
        }
    }
}

fn reject(log: &mut ActivityLog, notifier: &dyn Notifier, target: &str, err: &AppError) {
    log.record("rejected", target, &err.to_string());
    notifier.error(&err.to_string());
}
