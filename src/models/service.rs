/// Services offered when booking. The appointment `service` field accepts
/// any text; these are the suggested values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Small,
    Medium,
    Large,
    TouchUp,
    Consultation,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::TouchUp,
        Self::Consultation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Service::Small => "small",
            Service::Medium => "medium",
            Service::Large => "large",
            Service::TouchUp => "touch-up",
            Service::Consultation => "consultation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Service::Small => "Small Tattoo (1-3 hours)",
            Service::Medium => "Medium Tattoo (3-6 hours)",
            Service::Large => "Large Tattoo (6+ hours)",
            Service::TouchUp => "Touch-up Session",
            Service::Consultation => "Consultation",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}
