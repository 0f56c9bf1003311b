use thiserror::Error;

#[cfg(debug_assertions)]
pub fn get_emailjs_api_url() -> &'static str {
    // Lets local builds point at a mock server
    match option_env!("EMAILJS_API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => "https://api.emailjs.com",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_emailjs_api_url() -> &'static str {
    "https://api.emailjs.com"
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("build variable {0} is not set")]
    Missing(&'static str),
}

/// Identifiers the EmailJS service needs for every send. They are
/// environment specific and baked in at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            get_emailjs_api_url(),
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_values(
        api_url: &str,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            service_id: required("EMAILJS_SERVICE_ID", service_id)?,
            template_id: required("EMAILJS_TEMPLATE_ID", template_id)?,
            public_key: required("EMAILJS_PUBLIC_KEY", public_key)?,
        })
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::Missing(name)),
    }
}
