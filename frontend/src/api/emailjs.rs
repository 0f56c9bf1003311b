use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use crate::booking::form::BookingForm;
use crate::config::EmailJsConfig;

/// Template parameters in the shape the email template expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub company: String,
    pub talent_type: String,
}

impl From<&BookingForm> for EmailPayload {
    fn from(form: &BookingForm) -> Self {
        Self {
            from_name: form.full_name.clone(),
            from_email: form.work_email.clone(),
            company: form.company.clone(),
            talent_type: form.talent_type.map(|t| t.key()).unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("email service is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("email service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers a booking request to a third party. Implementations make no
/// promises about transport, retries or latency.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait EmailGateway {
    async fn send(&self, payload: EmailPayload) -> Result<(), GatewayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

pub struct EmailJsGateway {
    config: EmailJsConfig,
}

impl EmailJsGateway {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.config.api_url)
    }
}

#[async_trait(?Send)]
impl EmailGateway for EmailJsGateway {
    async fn send(&self, payload: EmailPayload) -> Result<(), GatewayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: &payload,
        };

        let response = Request::post(&self.send_url())
            .json(&body)
            .map_err(|e| GatewayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if response.ok() {
            info!("EmailJS accepted the request");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("EmailJS responded with {}: {}", status, body);
            Err(GatewayError::Rejected { status, body })
        }
    }
}

/// Stand-in used when the build carries no EmailJS credentials.
pub struct UnconfiguredGateway;

#[async_trait(?Send)]
impl EmailGateway for UnconfiguredGateway {
    async fn send(&self, _payload: EmailPayload) -> Result<(), GatewayError> {
        Err(GatewayError::NotConfigured)
    }
}

/// Shares one gateway with the component tree through a context.
#[derive(Clone)]
pub struct GatewayHandle(pub Rc<dyn EmailGateway>);

impl GatewayHandle {
    pub fn new<G: EmailGateway + 'static>(gateway: G) -> Self {
        Self(Rc::new(gateway))
    }

    pub fn from_build_env() -> Self {
        match EmailJsConfig::from_build_env() {
            Ok(config) => Self::new(EmailJsGateway::new(config)),
            Err(e) => {
                error!("Booking form disabled: {}", e);
                Self::new(UnconfiguredGateway)
            }
        }
    }
}

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::form::TalentType;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn payload_uses_template_field_names() {
        let form = BookingForm {
            full_name: "Grace Hopper".into(),
            work_email: "grace@navy.mil".into(),
            company: "US Navy".into(),
            talent_type: Some(TalentType::Security),
        };

        let value = serde_json::to_value(EmailPayload::from(&form)).unwrap();
        assert_eq!(
            value,
            json!({
                "from_name": "Grace Hopper",
                "from_email": "grace@navy.mil",
                "company": "US Navy",
                "talent_type": "security",
            })
        );
    }

    #[test]
    fn unselected_talent_type_is_sent_as_empty_string() {
        let payload = EmailPayload::from(&BookingForm::default());
        assert_eq!(payload.talent_type, "");
    }

    #[test]
    fn send_request_wraps_payload_with_credentials() {
        let payload = EmailPayload {
            from_name: "A".into(),
            ..Default::default()
        };
        let body = SendRequest {
            service_id: "service_1",
            template_id: "template_1",
            user_id: "public_1",
            template_params: &payload,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["service_id"], "service_1");
        assert_eq!(value["template_id"], "template_1");
        assert_eq!(value["user_id"], "public_1");
        assert_eq!(value["template_params"]["from_name"], "A");
    }

    #[test]
    fn send_url_ignores_trailing_slash_in_config() {
        let config = EmailJsConfig::from_values("https://mock.local/", Some("s"), Some("t"), Some("k")).unwrap();
        let gateway = EmailJsGateway::new(config);
        assert_eq!(gateway.send_url(), "https://mock.local/api/v1.0/email/send");
    }

    #[test]
    fn unconfigured_gateway_always_fails() {
        let result = block_on(UnconfiguredGateway.send(EmailPayload::default()));
        assert_eq!(result, Err(GatewayError::NotConfigured));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = GatewayHandle::new(UnconfiguredGateway);
        let b = GatewayHandle::new(UnconfiguredGateway);
        assert!(a == a.clone());
        assert!(a != b);
    }
}
