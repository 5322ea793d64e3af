use contracts::system::auth::SendEmailRequest;

use crate::shared::config;
use crate::shared::error::AppError;

/// Relay an outgoing email to the configured HTTP mail transport.
///
/// Delivery mechanics live entirely behind `[mail] transport_url`; this
/// side only validates the envelope and forwards it as JSON.
pub async fn relay(request: &SendEmailRequest) -> Result<(), AppError> {
    if request.to.trim().is_empty() || !request.to.contains('@') {
        return Err(AppError::BadRequest("invalid recipient address".to_string()));
    }
    if request.subject.trim().is_empty() || request.text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "subject and text are required".to_string(),
        ));
    }

    let transport_url = config::get()
        .mail
        .transport_url
        .as_deref()
        .ok_or_else(|| AppError::Mail("no mail transport configured".to_string()))?;

    let response = reqwest::Client::new()
        .post(transport_url)
        .json(request)
        .send()
        .await
        .map_err(|e| AppError::Mail(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AppError::Mail(format!(
            "transport returned {}",
            response.status()
        )));
    }

    tracing::info!(to = %request.to, "email relayed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(to: &str, subject: &str, text: &str) -> SendEmailRequest {
        SendEmailRequest {
            to: to.to_string(),
            subject: subject.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rejects_invalid_recipient() {
        let err = relay(&request("not-an-address", "Order", "hi")).await;
        assert!(matches!(err, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_rejects_empty_subject() {
        let err = relay(&request("a@b.com", " ", "hi")).await;
        assert!(matches!(err, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_transport_is_mail_error() {
        // Default embedded config carries no transport_url
        let err = relay(&request("a@b.com", "Order", "hi")).await;
        assert!(matches!(err, Err(AppError::Mail(_))));
    }
}
