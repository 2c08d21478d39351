use std::io;

use twilio::{Credentials, MessageBody, RawPhoneNumber, TwilioClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let account_sid = std::env::var("TWILIO_ACCOUNT_SID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_ACCOUNT_SID environment variable is required",
        )
    })?;
    let auth_token = std::env::var("TWILIO_AUTH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_AUTH_TOKEN environment variable is required",
        )
    })?;
    let to_raw = std::env::var("TWILIO_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_TO environment variable is required",
        )
    })?;
    let from_raw = std::env::var("TWILIO_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_FROM environment variable is required",
        )
    })?;
    let body = std::env::var("TWILIO_BODY")
        .unwrap_or_else(|_| "Hello from the twilio crate.".to_owned());

    let client = TwilioClient::new(Credentials::new(account_sid, auth_token)?);
    let to = RawPhoneNumber::new(to_raw)?;
    let from = RawPhoneNumber::new(from_raw)?;
    let text = MessageBody::new(body)?;

    let message = client.send_sms(to, from, text).await?;
    println!(
        "sid: {:?}, status: {:?}, num_segments: {:?}, price: {:?}",
        message.sid, message.status, message.num_segments, message.price
    );

    Ok(())
}
