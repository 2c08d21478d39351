use std::io;

use twilio::{Credentials, ListMessages, RawPhoneNumber, TwilioClient};

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

    let filter = match std::env::var("TWILIO_TO") {
        Ok(to_raw) => ListMessages {
            to: Some(RawPhoneNumber::new(to_raw)?),
            ..Default::default()
        },
        Err(_) => ListMessages::default(),
    };

    let client = TwilioClient::new(Credentials::new(account_sid, auth_token)?);
    let page = client.list_messages(filter).await?;

    println!(
        "page: {:?}, page_size: {:?}, total: {:?}, has_next_page: {:?}",
        page.pagination.page,
        page.pagination.page_size,
        page.pagination.total,
        page.pagination.has_next_page()
    );
    for message in &page.messages {
        println!(
            "sid: {:?}, status: {:?}, to: {:?}, date_sent: {:?}",
            message.sid, message.status, message.to, message.date_sent
        );
    }

    Ok(())
}
