//! Fixed wiring for the hosted EmailJS delivery service. The service,
//! template, and public key identify this site's EmailJS account; the
//! address pair is the fixed sender/destination the consultation template
//! expects.

pub const EMAILJS_SERVICE_ID: &str = "service_5flqfvl";
pub const EMAILJS_TEMPLATE_ID: &str = "template_0s8a6z5";
pub const EMAILJS_PUBLIC_KEY: &str = "xrPmWogYA-Bx1timJ";

pub const FROM_EMAIL: &str = "noreply@techvantage.io";
pub const TO_EMAIL: &str = "consultations@techvantage.io";

pub fn get_emailjs_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}
