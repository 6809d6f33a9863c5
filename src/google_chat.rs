use crate::error::Error;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct Message<'a> {
    text: &'a str,
}

pub fn send_message(webhook_url: &str, message: &str) -> Result<(), Error> {
    call_webhook(webhook_url, &Message { text: message })
}

fn call_webhook(webhook_url: &str, body: &impl Serialize) -> Result<(), Error> {
    let body = serde_json::to_vec(body)?;

    let client = reqwest::blocking::Client::new();

    let response = client
        .post(webhook_url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .map_err(Error::Request)?;

    let status = response.status();
    debug!("Webhook responded with {}", status);

    if status != StatusCode::OK {
        return Err(Error::UnexpectedStatus(status.as_u16()));
    }

    Ok(())
}
