use std::io;

use twilio::{Credentials, MessageSid, TwilioClient};

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
    let message_sid_raw = std::env::var("TWILIO_MESSAGE_SID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_MESSAGE_SID environment variable is required",
        )
    })?;

    let client = TwilioClient::new(Credentials::new(account_sid, auth_token)?);
    let sid = MessageSid::new(message_sid_raw)?;

    let message = client.get_message(&sid).await?;
    println!(
        "sid: {:?}, status: {:?}, date_sent: {:?}, price: {:?}",
        message.sid, message.status, message.date_sent, message.price
    );

    Ok(())
}
