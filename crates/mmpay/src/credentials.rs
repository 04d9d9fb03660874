use std::fmt;

use url::Url;

use crate::error::MmpayError;

/// Immutable merchant credentials, supplied once at construction and held
/// for the lifetime of the client. There is no ambient or process-wide
/// secret state: everything that signs goes through an explicit
/// `Credentials` value.
#[derive(Clone)]
pub struct Credentials {
    app_id: String,
    publishable_key: String,
    secret_key: String,
    api_base_url: String,
}

impl Credentials {
    /// Build credentials from the four required inputs.
    ///
    /// `api_base_url` must be an absolute http(s) URL; a trailing `/` is
    /// stripped so endpoint paths can be appended verbatim.
    pub fn new(
        app_id: impl Into<String>,
        publishable_key: impl Into<String>,
        secret_key: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Result<Self, MmpayError> {
        let app_id = app_id.into();
        let publishable_key = publishable_key.into();
        let secret_key = secret_key.into();
        let api_base_url = api_base_url.into();

        if app_id.is_empty() {
            return Err(MmpayError::Validation("appId is required".to_string()));
        }
        if publishable_key.is_empty() {
            return Err(MmpayError::Validation(
                "publishableKey is required".to_string(),
            ));
        }
        if secret_key.is_empty() {
            return Err(MmpayError::Validation("secretKey is required".to_string()));
        }

        let parsed = Url::parse(&api_base_url)
            .map_err(|e| MmpayError::Validation(format!("apiBaseUrl is not a valid URL: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(MmpayError::Validation(format!(
                "apiBaseUrl must be http or https, got {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            app_id,
            publishable_key,
            secret_key,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Base URL with any trailing slash removed.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

// The secret key must never end up in logs via `{:?}`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("publishable_key", &self.publishable_key)
            .field("secret_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Credentials {
        Credentials::new("app_1", "pk_test_1", "sk_test_1", "https://api.mmpay.com").unwrap()
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let creds =
            Credentials::new("app_1", "pk_test_1", "sk_test_1", "https://api.mmpay.com/").unwrap();
        assert_eq!(creds.api_base_url(), "https://api.mmpay.com");
    }

    #[test]
    fn url_without_trailing_slash_is_kept() {
        assert_eq!(sample().api_base_url(), "https://api.mmpay.com");
    }

    #[test]
    fn invalid_url_is_rejected() {
        let result = Credentials::new("app_1", "pk_test_1", "sk_test_1", "not a url");
        assert!(matches!(result, Err(MmpayError::Validation(_))));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result = Credentials::new("app_1", "pk_test_1", "sk_test_1", "ftp://api.mmpay.com");
        assert!(matches!(result, Err(MmpayError::Validation(_))));
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(Credentials::new("", "pk", "sk", "https://api.mmpay.com").is_err());
        assert!(Credentials::new("app", "", "sk", "https://api.mmpay.com").is_err());
        assert!(Credentials::new("app", "pk", "", "https://api.mmpay.com").is_err());
    }

    #[test]
    fn debug_redacts_secret_key() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("sk_test_1"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("app_1"));
    }
}
