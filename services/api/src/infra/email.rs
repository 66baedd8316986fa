use anyhow::Context as _;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::config::ApiConfig;
use crate::domain::repository::VerificationMailer;
use crate::error::ApiError;

/// SMTP-backed verification mailer.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    mail_from: String,
    public_base_url: String,
}

impl SmtpMailer {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .context("create SMTP transport")?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            mail_from: config.mail_from.clone(),
            public_base_url: config.public_base_url.clone(),
        })
    }
}

impl VerificationMailer for SmtpMailer {
    async fn send_verification(
        &self,
        email: &str,
        name: &str,
        token: &str,
    ) -> Result<(), ApiError> {
        let from = self
            .mail_from
            .parse::<Mailbox>()
            .context("parse from mailbox")?;
        let to = format!("{name} <{email}>")
            .parse::<Mailbox>()
            .context("parse to mailbox")?;

        let verify_link = format!("{}/verify-email?token={token}", self.public_base_url);
        let body = format!(
            "<p>Hey {name},</p>\
             <p>Welcome to Velvet Rope. Confirm your email to activate your \
             account:</p>\
             <p><a href=\"{verify_link}\">{verify_link}</a></p>\
             <p>The link is good for 24 hours. If you didn't sign up, ignore \
             this mail.</p>"
        );

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject("Confirm your Velvet Rope account")
            .header(ContentType::TEXT_HTML)
            .body(body)
            .context("build verification email")?;

        self.transport
            .send(message)
            .await
            .context("send verification email")?;
        Ok(())
    }
}
