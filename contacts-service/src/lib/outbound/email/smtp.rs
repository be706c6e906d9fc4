use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::AsyncSmtpTransport;
use lettre::AsyncTransport;
use lettre::Message;
use lettre::Tokio1Executor;

use crate::config::MailConfig;
use crate::domain::user::errors::MailError;
use crate::domain::user::ports::MailDispatcher;

/// SMTP mail dispatcher for account emails.
///
/// Builds small HTML messages around the token link; the token itself is
/// produced by the auth orchestrator, never here.
pub struct SmtpMailDispatcher {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailDispatcher {
    /// Build a dispatcher from mail configuration.
    ///
    /// # Errors
    /// Fails if the sender address does not parse as a mailbox.
    pub fn new(config: &MailConfig) -> Result<Self, anyhow::Error> {
        let credentials =
            Credentials::new(config.username.clone(), config.password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .credentials(credentials)
            .build();

        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid sender address: {}", e))?;

        Ok(Self { mailer, from })
    }

    async fn send_html(
        &self,
        recipient: &str,
        subject: &str,
        body: String,
    ) -> Result<(), MailError> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|_| MailError::InvalidRecipient(recipient.to_string()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| MailError::SendFailed(e.to_string()))?;

        self.mailer
            .send(message)
            .await
            .map_err(|e| MailError::SendFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl MailDispatcher for SmtpMailDispatcher {
    async fn send_verification(
        &self,
        recipient: &str,
        username: &str,
        base_url: &str,
        token: &str,
    ) -> Result<(), MailError> {
        let link = format!("{}/api/email/confirm/{}", base_url, token);
        let body = format!(
            "<p>Hi <strong>{username}</strong>,</p>\
             <p>Thank you for signing up for Contacts App. Please confirm your \
             email address by following the link below:</p>\
             <p><a href=\"{link}\">Confirm your email</a></p>\
             <p>If you did not create an account, you can ignore this message.</p>",
        );

        self.send_html(recipient, "Confirm your email for Contacts App", body)
            .await
    }

    async fn send_password_reset(
        &self,
        recipient: &str,
        username: &str,
        base_url: &str,
        token: &str,
    ) -> Result<(), MailError> {
        let link = format!("{}/api/email/reset-password/{}", base_url, token);
        let body = format!(
            "<p>Hi <strong>{username}</strong>,</p>\
             <p>A password reset was requested for your Contacts App account. \
             Follow the link below to choose a new password:</p>\
             <p><a href=\"{link}\">Reset password</a></p>\
             <p>If you did not request a reset, you can ignore this message.</p>",
        );

        self.send_html(recipient, "Reset password for Contacts App", body)
            .await
    }
}
