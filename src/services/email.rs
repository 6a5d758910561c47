use crate::{
    config::settings::{SmtpSettings, configured},
    models::{
        donation::Donation,
        site::{CONTACT, ORGANIZATION},
        volunteer::Volunteer,
    },
};
use handlebars::Handlebars;
use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

const DONATION_THANKS: &str = "donation_thanks";
const VOLUNTEER_RECEIVED: &str = "volunteer_received";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("SMTP configuration error: {0}")]
    Config(String),
    #[error("Email sending failed: {0}")]
    Send(#[from] lettre::transport::smtp::Error),
    #[error("Message building failed: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("Address parsing failed: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Template rendering failed: {0}")]
    Template(String),
}

impl From<handlebars::RenderError> for EmailError {
    fn from(err: handlebars::RenderError) -> Self {
        EmailError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for EmailError {
    fn from(err: handlebars::TemplateError) -> Self {
        EmailError::Template(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub subject: String,
    pub html_body: String,
    pub text_body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
}

impl EmailConfig {
    /// `None` when no SMTP server is configured; acknowledgements are then skipped.
    pub fn from_settings(settings: &SmtpSettings) -> Result<Option<Self>, EmailError> {
        let Some(smtp_server) = configured(&settings.server) else {
            return Ok(None);
        };

        Ok(Some(Self {
            smtp_server: smtp_server.to_string(),
            smtp_port: settings.port,
            username: settings
                .username
                .clone()
                .ok_or_else(|| EmailError::Config("SMTP_USERNAME not set".to_string()))?,
            password: settings
                .password
                .clone()
                .ok_or_else(|| EmailError::Config("SMTP_PASSWORD not set".to_string()))?,
            from_email: settings
                .from_email
                .clone()
                .ok_or_else(|| EmailError::Config("FROM_EMAIL not set".to_string()))?,
            from_name: settings.from_name.clone(),
        }))
    }
}

/// Renders acknowledgement e-mails. HTML bodies go through handlebars so
/// donor-supplied text is escaped.
pub struct EmailTemplates {
    html: Handlebars<'static>,
}

impl EmailTemplates {
    pub fn new() -> Result<Self, EmailError> {
        let mut html = Handlebars::new();
        html.set_strict_mode(true);
        html.register_template_string(
            DONATION_THANKS,
            include_str!("../../templates/donation_thanks.html.hbs"),
        )?;
        html.register_template_string(
            VOLUNTEER_RECEIVED,
            include_str!("../../templates/volunteer_received.html.hbs"),
        )?;
        Ok(Self { html })
    }

    pub fn donation_thanks(&self, donation: &Donation) -> Result<EmailTemplate, EmailError> {
        let message = donation.message.clone().unwrap_or_default();
        let html_body = self.html.render(
            DONATION_THANKS,
            &json!({
                "name": donation.name,
                "amount": donation.amount.to_string(),
                "frequency": donation.donation_type.label(),
                "message": message,
                "anonymous": donation.anonymous,
                "contact": CONTACT.general_email,
                "organization": ORGANIZATION,
            }),
        )?;

        let text_body = format!(
            "Hi {}!\n\nThank you for your donation of ${} ({}).\n\nYour generosity helps us continue our mission to support physically challenged children.\n\nQuestions? Write to {}.\n\n{}",
            donation.name,
            donation.amount,
            donation.donation_type.label(),
            CONTACT.general_email,
            ORGANIZATION
        );

        Ok(EmailTemplate {
            subject: format!("Thank you for supporting {}", ORGANIZATION),
            html_body,
            text_body: Some(text_body),
        })
    }

    pub fn volunteer_received(&self, volunteer: &Volunteer) -> Result<EmailTemplate, EmailError> {
        let html_body = self.html.render(
            VOLUNTEER_RECEIVED,
            &json!({
                "name": volunteer.name,
                "availability": volunteer.availability.label(),
                "contact": CONTACT.volunteer_email,
                "organization": ORGANIZATION,
            }),
        )?;

        let text_body = format!(
            "Hi {}!\n\nThank you for your interest in volunteering with us. We'll be in touch soon!\n\nAvailability: {}\n\nQuestions? Write to {}.\n\n{}",
            volunteer.name,
            volunteer.availability.label(),
            CONTACT.volunteer_email,
            ORGANIZATION
        );

        Ok(EmailTemplate {
            subject: "Your volunteer application was received".to_string(),
            html_body,
            text_body: Some(text_body),
        })
    }
}

pub struct EmailService {
    mailer: SmtpTransport,
    config: EmailConfig,
    templates: EmailTemplates,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let mailer = SmtpTransport::relay(&config.smtp_server)
            .map_err(|e| EmailError::Config(format!("SMTP relay error: {}", e)))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            config,
            templates: EmailTemplates::new()?,
        })
    }

    pub fn from_settings(settings: &SmtpSettings) -> Result<Option<Self>, EmailError> {
        EmailConfig::from_settings(settings)?
            .map(Self::new)
            .transpose()
    }

    pub fn templates(&self) -> &EmailTemplates {
        &self.templates
    }

    pub fn send_email(
        &self,
        to_email: &str,
        to_name: Option<&str>,
        template: EmailTemplate,
    ) -> Result<(), EmailError> {
        let to_address = match to_name {
            Some(name) => format!("{} <{}>", name, to_email),
            None => to_email.to_string(),
        };

        let from_address = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let message_builder = Message::builder()
            .from(from_address.parse()?)
            .to(to_address.parse()?)
            .subject(&template.subject);

        let message = if let Some(text_body) = &template.text_body {
            message_builder.multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(template.html_body.clone()),
                    ),
            )?
        } else {
            message_builder
                .header(ContentType::TEXT_HTML)
                .body(template.html_body.clone())?
        };

        info!("Sending email to: {}", to_email);
        self.mailer.send(&message)?;
        info!("Email sent successfully to: {}", to_email);

        Ok(())
    }
}

/// Sends on the blocking pool and only logs failures; an acknowledgement
/// never changes the outcome of the submission it follows.
pub fn send_in_background(
    service: Arc<EmailService>,
    to_email: String,
    to_name: String,
    template: EmailTemplate,
) {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = service.send_email(&to_email, Some(&to_name), template) {
            error!("Failed to send acknowledgement to {}: {}", to_email, e);
        }
    });
}
