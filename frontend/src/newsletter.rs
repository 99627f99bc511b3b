use std::fmt;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Serialize, Debug, PartialEq)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct UnsubscribeRequest {
    pub email: String,
    pub token: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error_description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NewsletterError {
    Rejected { status: u16, description: String },
    MalformedResponse { status: u16 },
    Network(String),
    IncompleteLink,
}

impl fmt::Display for NewsletterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsletterError::Rejected { description, .. } => f.write_str(description),
            NewsletterError::MalformedResponse { .. } => {
                f.write_str("unexpected response from server")
            }
            NewsletterError::Network(_) => f.write_str("could not reach the server"),
            NewsletterError::IncompleteLink => f.write_str("this unsubscribe link is incomplete"),
        }
    }
}

impl NewsletterError {
    /// Console detail for a failure; the user only sees the `Display` text.
    pub fn diagnostic(&self) -> String {
        match self {
            NewsletterError::Rejected { status, description } => {
                format!("rejected with {}: {}", status, description)
            }
            NewsletterError::MalformedResponse { status } => {
                format!("unreadable body with status {}", status)
            }
            NewsletterError::Network(cause) => format!("network error: {}", cause),
            NewsletterError::IncompleteLink => "missing email or token".to_string(),
        }
    }
}

/// Text and style for the status region under a newsletter form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Success(String),
    Failure(String),
}

impl FormStatus {
    pub fn from_result(result: &Result<(), NewsletterError>, success: &str) -> Self {
        match result {
            Ok(()) => FormStatus::Success(success.to_string()),
            Err(e) => FormStatus::Failure(format!("Error: {}", e)),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FormStatus::Success(msg) | FormStatus::Failure(msg) => msg,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Success(_) => "alert alert-success",
            FormStatus::Failure(_) => "alert alert-danger",
        }
    }
}

pub const SUBSCRIBED_MESSAGE: &str = "You have been successfully subscribed!";
pub const UNSUBSCRIBED_MESSAGE: &str = "You have been unsubscribed.";

/// The request to send for what the user typed, or `None` if there is
/// nothing to send.
pub fn subscribe_request(input: &str) -> Option<SubscribeRequest> {
    let email = input.trim();
    if email.is_empty() {
        None
    } else {
        Some(SubscribeRequest { email: email.to_string() })
    }
}

pub fn unsubscribe_request(
    email: Option<String>,
    token: Option<String>,
) -> Result<UnsubscribeRequest, NewsletterError> {
    match (email, token) {
        (Some(email), Some(token)) if !email.is_empty() && !token.is_empty() => {
            Ok(UnsubscribeRequest { email, token })
        }
        _ => Err(NewsletterError::IncompleteLink),
    }
}

/// Maps a backend reply onto success or the reason it was refused.
pub fn outcome(status: u16, expected: u16, body: &str) -> Result<(), NewsletterError> {
    if status == expected {
        return Ok(());
    }
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => Err(NewsletterError::Rejected { status, description: err.error_description }),
        Err(_) => Err(NewsletterError::MalformedResponse { status }),
    }
}

async fn send(request: Request, expected: u16) -> Result<(), NewsletterError> {
    let response = request
        .send()
        .await
        .map_err(|e| NewsletterError::Network(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    outcome(status, expected, &body)
}

/// `POST /newsletter`; the backend answers 201 Created on success.
pub async fn subscribe(request: &SubscribeRequest) -> Result<(), NewsletterError> {
    let request = Request::post(&config::newsletter_url())
        .json(request)
        .map_err(|e| NewsletterError::Network(e.to_string()))?;
    send(request, 201).await
}

/// `DELETE /newsletter`; the backend answers 200 OK on success.
pub async fn unsubscribe(request: &UnsubscribeRequest) -> Result<(), NewsletterError> {
    let request = Request::delete(&config::newsletter_url())
        .json(request)
        .map_err(|e| NewsletterError::Network(e.to_string()))?;
    send(request, 200).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_sends_nothing() {
        assert_eq!(subscribe_request(""), None);
        assert_eq!(subscribe_request("   "), None);
        assert_eq!(
            subscribe_request(" john-doe@example.com "),
            Some(SubscribeRequest { email: "john-doe@example.com".to_string() })
        );
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(SubscribeRequest { email: "a@b.c".to_string() }).unwrap();
        assert_eq!(body, serde_json::json!({ "email": "a@b.c" }));
    }

    #[test]
    fn created_is_success() {
        let result = outcome(201, 201, r#"{"id":42,"email":"a@b.c","token":"t"}"#);
        assert_eq!(result, Ok(()));
        let status = FormStatus::from_result(&result, SUBSCRIBED_MESSAGE);
        assert_eq!(status.class(), "alert alert-success");
        assert!(!status.class().contains("danger"));
    }

    #[test]
    fn rejection_shows_description() {
        let result = outcome(400, 201, r#"{"error_description":"Invalid email"}"#);
        let status = FormStatus::from_result(&result, SUBSCRIBED_MESSAGE);
        assert_eq!(status.message(), "Error: Invalid email");
        assert_eq!(status.class(), "alert alert-danger");
        assert!(!status.class().contains("success"));
    }

    #[test]
    fn unreadable_bodies_and_network_failures() {
        let result = outcome(500, 201, "<html>oops</html>");
        assert_eq!(result, Err(NewsletterError::MalformedResponse { status: 500 }));
        assert_eq!(
            FormStatus::from_result(&result, SUBSCRIBED_MESSAGE).message(),
            "Error: unexpected response from server"
        );
        let network: Result<(), _> = Err(NewsletterError::Network("TypeError".to_string()));
        assert_eq!(
            FormStatus::from_result(&network, SUBSCRIBED_MESSAGE).message(),
            "Error: could not reach the server"
        );
    }

    #[test]
    fn diagnostics_carry_status_and_cause() {
        let rejected = outcome(400, 201, r#"{"error_description":"Invalid email"}"#).unwrap_err();
        assert_eq!(rejected.diagnostic(), "rejected with 400: Invalid email");
        let malformed = outcome(502, 201, "").unwrap_err();
        assert_eq!(malformed.diagnostic(), "unreadable body with status 502");
        let network = NewsletterError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(network.diagnostic(), "network error: TypeError: Failed to fetch");
    }

    #[test]
    fn unsubscribe_needs_email_and_token() {
        assert_eq!(
            unsubscribe_request(Some("a@b.c".into()), None),
            Err(NewsletterError::IncompleteLink)
        );
        assert_eq!(
            unsubscribe_request(Some("".into()), Some("t".into())),
            Err(NewsletterError::IncompleteLink)
        );
        assert!(unsubscribe_request(Some("a@b.c".into()), Some("t".into())).is_ok());
        let body = serde_json::json!({
            "error": "forbidden",
            "error_description": "you are not authorized to remove this email",
        });
        let forbidden = outcome(403, 200, &body.to_string());
        assert_eq!(
            FormStatus::from_result(&forbidden, UNSUBSCRIBED_MESSAGE).message(),
            "Error: you are not authorized to remove this email"
        );
    }
}
