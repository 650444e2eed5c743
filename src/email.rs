use gloo_net::http::Request;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config;

/// Field values collected from the contact form at submit time. Built,
/// sent, and discarded per submission; nothing is persisted.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormSubmission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: Value,
}

/// Parameter map the consultation template interpolates. The visitor's own
/// address goes in `reply_to` so replies from the team reach them directly.
pub fn template_params(submission: &FormSubmission) -> Value {
    json!({
        "to_name": "Admin",
        "from_name": submission.name,
        "from_email": config::FROM_EMAIL,
        "company": submission.company,
        "phone": submission.phone,
        "message": submission.message,
        "to_email": config::TO_EMAIL,
        "reply_to": submission.email,
    })
}

/// Sends the consultation request through the hosted EmailJS REST API.
/// One shot: no retries, no timeout beyond the transport default. Any
/// transport error or non-2xx status comes back as a human-readable
/// string for the form to display.
pub async fn send_consultation_request(submission: &FormSubmission) -> Result<(), String> {
    let body = EmailJsRequest {
        service_id: config::EMAILJS_SERVICE_ID,
        template_id: config::EMAILJS_TEMPLATE_ID,
        user_id: config::EMAILJS_PUBLIC_KEY,
        template_params: template_params(submission),
    };

    let response = Request::post(config::get_emailjs_url())
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        let detail = response.text().await.unwrap_or_default();
        Err(format!(
            "delivery failed with status {}: {}",
            response.status(),
            detail
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_submission() -> FormSubmission {
        FormSubmission {
            name: "Ada Lovelace".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            message: "We need help migrating to the cloud.".to_string(),
        }
    }

    #[test]
    fn template_params_maps_every_field() {
        let params = template_params(&sample_submission());

        assert_eq!(params["from_name"], "Ada Lovelace");
        assert_eq!(params["company"], "Analytical Engines Ltd");
        assert_eq!(params["phone"], "+44 20 7946 0000");
        assert_eq!(params["message"], "We need help migrating to the cloud.");
        assert_eq!(params["reply_to"], "ada@example.com");
    }

    #[test]
    fn template_params_carries_fixed_routing() {
        let params = template_params(&sample_submission());

        assert_eq!(params["to_name"], "Admin");
        assert_eq!(params["from_email"], config::FROM_EMAIL);
        assert_eq!(params["to_email"], config::TO_EMAIL);
        assert_eq!(params.as_object().map(|o| o.len()), Some(8));
    }
}
