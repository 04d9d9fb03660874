use mmpay::{
    canonical_json, fresh_nonce, CreatePaymentResponse, Credentials, Environment,
    HandshakeRequest, HandshakeResponse, MmpayError, PaymentPayload, PaymentRequest,
    SignedEnvelope, HEADER_BTOKEN, HEADER_NONCE, HEADER_SIGNATURE,
};

/// Client for the MMPay gateway.
///
/// Wraps `reqwest::Client`. Each call canonicalizes its payload, signs it
/// with the merchant secret, and sends the exact signed bytes as the
/// request body. Holds no mutable state: the handshake token is threaded
/// through the create call as a value, so one client can serve concurrent
/// payments.
pub struct MmpayClient {
    http: reqwest::Client,
    credentials: Credentials,
    environment: Environment,
}

impl MmpayClient {
    pub fn new(credentials: Credentials, environment: Environment) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("failed to build HTTP client"),
            credentials,
            environment,
        }
    }

    /// Create a client with a custom `reqwest::Client`.
    pub fn with_http_client(
        credentials: Credentials,
        environment: Environment,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            credentials,
            environment,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Perform the authentication handshake.
    ///
    /// `request.nonce` is the nonce of the payment the handshake is for;
    /// the handshake's own signature uses a fresh one.
    pub async fn handshake(
        &self,
        request: &HandshakeRequest,
    ) -> Result<HandshakeResponse, MmpayError> {
        let body = canonical_json(request)?;
        let envelope = SignedEnvelope::seal(self.credentials.secret_key(), fresh_nonce(), body);

        tracing::debug!(
            order_id = %request.order_id,
            endpoint = self.environment.handshake_path(),
            "performing gateway handshake"
        );

        let resp = self
            .signed_post(self.environment.handshake_path(), &envelope, None)
            .await
            .map_err(|e| MmpayError::Transport(format!("handshake request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "handshake rejected by gateway");
            return Err(MmpayError::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<HandshakeResponse>()
            .await
            .map_err(|e| MmpayError::Transport(format!("handshake response parse failed: {e}")))
    }

    /// Validate, sign, and submit a payment creation request.
    ///
    /// Runs the handshake first and passes the issued token along with the
    /// signed payload. Fails with [`MmpayError::Validation`] before any
    /// network I/O when required fields are missing, with
    /// [`MmpayError::Transport`] when a call fails, and with
    /// [`MmpayError::Gateway`] when the gateway answers non-success.
    pub async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<CreatePaymentResponse, MmpayError> {
        request.validate()?;

        let nonce = fresh_nonce();
        let payload = PaymentPayload::from_request(self.credentials.app_id(), &nonce, request);
        let body = canonical_json(&payload)?;
        let envelope = SignedEnvelope::seal(self.credentials.secret_key(), nonce, body);

        let handshake = self
            .handshake(&HandshakeRequest {
                order_id: request.order_id.clone(),
                nonce: envelope.nonce.clone(),
            })
            .await?;
        let token = handshake.token.ok_or_else(|| {
            MmpayError::Transport("handshake response contained no token".to_string())
        })?;

        tracing::debug!(
            order_id = %request.order_id,
            endpoint = self.environment.create_path(),
            "submitting payment creation"
        );

        let resp = self
            .signed_post(self.environment.create_path(), &envelope, Some(&token))
            .await
            .map_err(|e| MmpayError::Transport(format!("create request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                order_id = %request.order_id,
                "payment creation rejected by gateway"
            );
            return Err(MmpayError::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<CreatePaymentResponse>()
            .await
            .map_err(|e| MmpayError::Transport(format!("create response parse failed: {e}")))
    }

    /// Verify the signature of an inbound callback delivery.
    ///
    /// `raw_payload` must be the exact raw request body as received;
    /// `nonce` and `expected_signature` come from the
    /// [`HEADER_NONCE`] and [`HEADER_SIGNATURE`] headers.
    pub fn verify_callback(
        &self,
        raw_payload: &str,
        nonce: &str,
        expected_signature: &str,
    ) -> Result<bool, MmpayError> {
        mmpay::verify_callback(
            self.credentials.secret_key(),
            raw_payload,
            nonce,
            expected_signature,
        )
    }

    /// POST a signed envelope. The body is the envelope's exact payload
    /// bytes — the same bytes the signature was computed over.
    async fn signed_post(
        &self,
        path: &str,
        envelope: &SignedEnvelope,
        btoken: Option<&str>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.credentials.api_base_url(), path);

        let mut req = self
            .http
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.credentials.publishable_key()),
            )
            .header(HEADER_NONCE, &envelope.nonce)
            .header(HEADER_SIGNATURE, &envelope.signature)
            .header("Content-Type", "application/json");
        if let Some(token) = btoken {
            req = req.header(HEADER_BTOKEN, token);
        }

        req.body(envelope.payload.clone()).send().await
    }
}
