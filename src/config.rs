use log::Level;

const SUPABASE_URL: Option<&str> = option_env!("FLUENT_SUPABASE_URL");
const SUPABASE_KEY: Option<&str> = option_env!("FLUENT_SUPABASE_KEY");
const WAITLIST_COLLECTION: Option<&str> = option_env!("FLUENT_WAITLIST_COLLECTION");
const LOG_LEVEL: Option<&str> = option_env!("FLUENT_LOG_LEVEL");
const ANALYTICS: Option<&str> = option_env!("FLUENT_ANALYTICS");

pub const DEFAULT_COLLECTION: &str = "waitlist";

/// Displayed waitlist size never drops below this.
pub const COUNTER_FLOOR: u64 = 500;

pub const INSTITUTION: &str = "Berkeley";
pub const ACCEPTED_DOMAINS: &[&str] = &["berkeley.edu", "cal.berkeley.edu"];

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Where signups are persisted.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreBackend {
    Supabase { url: String, key: String },
    /// Legacy localStorage list, only for builds without a remote project.
    Local,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub backend: StoreBackend,
    pub collection: String,
    pub institution: String,
    pub accepted_domains: Vec<String>,
    pub counter_floor: u64,
    pub log_level: Level,
    pub analytics: bool,
}

impl Config {
    /// Build from the environment baked in at compile time.
    pub fn from_env() -> Self {
        Self::from_values(SUPABASE_URL, SUPABASE_KEY, WAITLIST_COLLECTION, LOG_LEVEL, ANALYTICS)
    }

    fn from_values(
        url: Option<&str>,
        key: Option<&str>,
        collection: Option<&str>,
        log_level: Option<&str>,
        analytics: Option<&str>,
    ) -> Self {
        let backend = match (non_empty(url), non_empty(key)) {
            (Some(url), Some(key)) => StoreBackend::Supabase {
                url: url.trim_end_matches('/').to_string(),
                key: key.to_string(),
            },
            _ => StoreBackend::Local,
        };

        let log_level = non_empty(log_level)
            .and_then(|l| l.parse().ok())
            .unwrap_or(if cfg!(debug_assertions) { Level::Debug } else { Level::Info });

        let analytics = !matches!(
            non_empty(analytics).map(|a| a.to_ascii_lowercase()).as_deref(),
            Some("off" | "false" | "0")
        );

        Self {
            backend,
            collection: non_empty(collection).unwrap_or(DEFAULT_COLLECTION).to_string(),
            institution: INSTITUTION.to_string(),
            accepted_domains: ACCEPTED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            counter_floor: COUNTER_FLOOR,
            log_level,
            analytics,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            StoreBackend::Supabase { .. } => "supabase",
            StoreBackend::Local => "local",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None, None, None, None)
    }
}
