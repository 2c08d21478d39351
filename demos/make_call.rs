use std::io;

use twilio::{
    CallOptions, CallTarget, Credentials, MakeCall, RawPhoneNumber, TwilioClient, TwimlUrl,
};

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
    let twiml_url = std::env::var("TWILIO_TWIML_URL")
        .unwrap_or_else(|_| "http://demo.twilio.com/docs/voice.xml".to_owned());

    let client = TwilioClient::new(Credentials::new(account_sid, auth_token)?);
    let request = MakeCall::new(
        RawPhoneNumber::new(to_raw)?,
        RawPhoneNumber::new(from_raw)?,
        CallTarget::twiml(TwimlUrl::new(twiml_url)?),
        CallOptions::default(),
    );

    let call = client.make_call(request).await?;
    println!(
        "sid: {:?}, status: {:?}, direction: {:?}",
        call.sid, call.status, call.direction
    );

    Ok(())
}
