use chrono::{DateTime, Utc};

/// Represents an entity responsible for providing dates across application. This can allow it to
/// be used for testing
pub trait Clock {
    fn time(&self) -> DateTime<Utc>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
