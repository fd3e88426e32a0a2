//! Client configuration

/// Configuration for the check-in client
///
/// The ambiguity epsilon and fallback radius are venue-dependent tuning
/// knobs (they track the physical spacing of tables), so they are
/// configurable rather than baked in; the defaults match typical indoor
/// spacing.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.example.com")
    pub base_url: String,

    /// Restaurant the device is checking into (QR verification scope)
    pub restaurant_id: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Bounded wait for a geolocation fix, in seconds
    pub geo_timeout_secs: u64,

    /// Two tables closer together than this are indistinguishable by GPS
    pub ambiguity_epsilon_m: f64,

    /// Beyond every detection radius, tables within this distance are
    /// still offered as low-confidence candidates
    pub fallback_radius_m: f64,

    /// Display delay before an auto-confirmed geo match proceeds, in ms
    pub confirm_delay_ms: u64,

    /// Retry attempts for read-only idempotent lookups
    pub lookup_retries: u32,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new(base_url: impl Into<String>, restaurant_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            restaurant_id: restaurant_id.into(),
            timeout_secs: 30,
            geo_timeout_secs: 12,
            ambiguity_epsilon_m: 0.05,
            fallback_radius_m: 20.0,
            confirm_delay_ms: 1200,
            lookup_retries: 2,
        }
    }

    /// Set the transport request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set the geolocation sampling timeout
    pub fn with_geo_timeout(mut self, seconds: u64) -> Self {
        self.geo_timeout_secs = seconds;
        self
    }

    /// Set the GPS ambiguity epsilon
    pub fn with_ambiguity_epsilon(mut self, meters: f64) -> Self {
        self.ambiguity_epsilon_m = meters;
        self
    }

    /// Set the fallback matching radius
    pub fn with_fallback_radius(mut self, meters: f64) -> Self {
        self.fallback_radius_m = meters;
        self
    }

    /// Set the auto-confirm display delay (0 disables it)
    pub fn with_confirm_delay(mut self, millis: u64) -> Self {
        self.confirm_delay_ms = millis;
        self
    }

    /// Set the retry bound for idempotent lookups
    pub fn with_lookup_retries(mut self, retries: u32) -> Self {
        self.lookup_retries = retries;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080", "default")
    }
}
