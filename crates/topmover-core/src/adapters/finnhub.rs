use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient, USER_AGENT};
use crate::quote_source::{ProviderId, QuoteSource, SourceError};
use crate::{Quote, Symbol, UtcDateTime, ValidationError};

const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Finnhub `/quote` adapter supporting both real API calls and mock mode.
#[derive(Clone)]
pub struct FinnhubAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    base_url: String,
    timeout_ms: u64,
    use_real_api: bool,
}

impl Default for FinnhubAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            api_key: std::env::var("TOPMOVER_FINNHUB_API_KEY")
                .unwrap_or_else(|_| String::from("demo")),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: 10_000,
            use_real_api: false,
        }
    }
}

impl FinnhubAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        let is_real = !http_client.is_mock();
        Self {
            http_client,
            api_key: api_key.into(),
            use_real_api: is_real,
            ..Self::default()
        }
    }

    /// Point the adapter at a different endpoint root, for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn is_real_client(&self) -> bool {
        self.use_real_api
    }

    fn quote_url(&self, symbol: &Symbol) -> String {
        format!(
            "{}/quote?symbol={}&token={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(&self.api_key),
        )
    }

    async fn fetch_real_quote(&self, symbol: &Symbol) -> Result<Quote, SourceError> {
        let request = HttpRequest::get(self.quote_url(symbol))
            .with_header("user-agent", USER_AGENT)
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("finnhub transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            return Err(classify_status(response.status));
        }

        let payload: FinnhubQuotePayload = serde_json::from_str(&response.body).map_err(|e| {
            SourceError::internal(format!("failed to parse finnhub response: {e}"))
        })?;

        normalize_quote(symbol, &payload)
    }

    async fn fetch_mock_quote(&self, symbol: &Symbol) -> Result<Quote, SourceError> {
        // Exercise the transport so scripted mocks still observe the call.
        let request = HttpRequest::get(self.quote_url(symbol))
            .with_header("user-agent", USER_AGENT)
            .with_timeout_ms(self.timeout_ms);
        let response = self.http_client.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("finnhub transport error: {}", error.message()))
        })?;
        if !response.is_success() {
            return Err(classify_status(response.status));
        }

        let payload = FinnhubQuotePayload::from_symbol(symbol);
        normalize_quote(symbol, &payload)
    }
}

/// Map a non-2xx upstream status to the retry classification.
fn classify_status(status: u16) -> SourceError {
    match status {
        401 | 403 => SourceError::unauthorized(format!(
            "finnhub rejected the API key (status {status})"
        )),
        429 => SourceError::rate_limited("finnhub free-tier limit exceeded (status 429)"),
        408 | 500..=599 => {
            SourceError::unavailable(format!("finnhub returned status {status}"))
        }
        _ => SourceError::invalid_request(format!("finnhub returned status {status}")),
    }
}

impl QuoteSource for FinnhubAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Finnhub
    }

    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Quote, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_quote(symbol).await
            } else {
                self.fetch_mock_quote(symbol).await
            }
        })
    }
}

/// Finnhub `/quote` response body.
///
/// Field names follow the upstream wire format: `c` current price, `dp`
/// signed percent change from previous close, `pc` previous close. The
/// response also carries `d`/`h`/`l`/`o`/`t`, which serde skips.
#[derive(Debug, Clone, Deserialize)]
struct FinnhubQuotePayload {
    c: f64,
    #[serde(default)]
    dp: Option<f64>,
    pc: f64,
}

impl FinnhubQuotePayload {
    /// Deterministic offline payload derived from the symbol bytes.
    fn from_symbol(symbol: &Symbol) -> Self {
        let seed = symbol_seed(symbol);
        let previous_close = 90.0 + (seed % 520) as f64 / 10.0;
        let dp = ((seed % 61) as f64 - 30.0) / 10.0;
        let current = previous_close * (1.0 + dp / 100.0);

        Self {
            c: current,
            dp: Some(dp),
            pc: previous_close,
        }
    }
}

fn normalize_quote(symbol: &Symbol, payload: &FinnhubQuotePayload) -> Result<Quote, SourceError> {
    // Finnhub answers unknown symbols with an all-zero body instead of an
    // error status.
    if payload.c == 0.0 && payload.pc == 0.0 && payload.dp.is_none() {
        return Err(SourceError::invalid_request(format!(
            "finnhub has no quote data for '{symbol}'"
        )));
    }

    let percent_change = match payload.dp {
        Some(dp) => dp,
        None if payload.pc > 0.0 => 100.0 * (payload.c - payload.pc) / payload.pc,
        None => {
            return Err(SourceError::invalid_request(format!(
                "finnhub quote for '{symbol}' has no percent change and no usable previous close"
            )));
        }
    };

    Quote::new(
        symbol.clone(),
        payload.c,
        payload.pc,
        percent_change,
        UtcDateTime::now(),
    )
    .map_err(validation_to_error)
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(11_u64, |acc, byte| {
        acc.wrapping_mul(31).wrapping_add(byte as u64)
    })
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::internal(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse};
    use crate::quote_source::SourceErrorKind;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct RecordingHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttpClient {
        fn respond_with(response: Result<HttpResponse, HttpError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for RecordingHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn symbol(raw: &str) -> Symbol {
        Symbol::parse(raw).expect("test symbol is valid")
    }

    #[tokio::test]
    async fn quote_url_carries_symbol_token_and_user_agent() {
        let client = Arc::new(RecordingHttpClient::respond_with(Ok(HttpResponse::ok_json(
            r#"{"c":261.74,"d":2.33,"dp":0.898,"h":263.31,"l":260.68,"o":261.07,"pc":259.45,"t":1582641000}"#,
        ))));
        let adapter = FinnhubAdapter::with_http_client(client.clone(), "secret-key");

        let quote = adapter
            .quote(&symbol("AAPL"))
            .await
            .expect("quote should parse");
        assert_eq!(quote.symbol.as_str(), "AAPL");
        assert_eq!(quote.current_price, 261.74);
        assert_eq!(quote.previous_close, 259.45);
        assert_eq!(quote.percent_change, 0.898);

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.contains("/quote?symbol=AAPL&token=secret-key"));
        assert_eq!(
            requests[0].headers.get("user-agent").map(String::as_str),
            Some(USER_AGENT)
        );
    }

    #[tokio::test]
    async fn base_url_override_redirects_requests() {
        let client = Arc::new(RecordingHttpClient::respond_with(Ok(HttpResponse::ok_json(
            r#"{"c":100.0,"dp":1.0,"pc":99.0}"#,
        ))));
        let adapter = FinnhubAdapter::with_http_client(client.clone(), "key")
            .with_base_url("http://127.0.0.1:9999/api/v1");

        adapter
            .quote(&symbol("AAPL"))
            .await
            .expect("quote should parse");

        let requests = client.recorded_requests();
        assert!(requests[0]
            .url
            .starts_with("http://127.0.0.1:9999/api/v1/quote?"));
    }

    #[tokio::test]
    async fn unauthorized_status_is_permanent() {
        let client = Arc::new(RecordingHttpClient::respond_with(Ok(HttpResponse {
            status: 401,
            body: String::from(r#"{"error":"Invalid API key"}"#),
        })));
        let adapter = FinnhubAdapter::with_http_client(client, "bad-key");

        let error = adapter
            .quote(&symbol("AAPL"))
            .await
            .expect_err("401 must fail");
        assert_eq!(error.kind(), SourceErrorKind::Unauthorized);
        assert!(!error.retryable());
    }

    #[tokio::test]
    async fn rate_limit_status_is_transient() {
        let client = Arc::new(RecordingHttpClient::respond_with(Ok(HttpResponse {
            status: 429,
            body: String::new(),
        })));
        let adapter = FinnhubAdapter::with_http_client(client, "key");

        let error = adapter
            .quote(&symbol("AMZN"))
            .await
            .expect_err("429 must fail");
        assert_eq!(error.kind(), SourceErrorKind::RateLimited);
        assert!(error.retryable());
    }

    #[tokio::test]
    async fn server_errors_are_transient() {
        let client = Arc::new(RecordingHttpClient::respond_with(Ok(HttpResponse {
            status: 503,
            body: String::new(),
        })));
        let adapter = FinnhubAdapter::with_http_client(client, "key");

        let error = adapter
            .quote(&symbol("META"))
            .await
            .expect_err("503 must fail");
        assert_eq!(error.kind(), SourceErrorKind::Unavailable);
        assert!(error.retryable());
    }

    #[tokio::test]
    async fn transport_errors_are_transient() {
        let client = Arc::new(RecordingHttpClient::respond_with(Err(HttpError::new(
            "connection refused",
        ))));
        let adapter = FinnhubAdapter::with_http_client(client, "key");

        let error = adapter
            .quote(&symbol("GOOGL"))
            .await
            .expect_err("transport failure must fail");
        assert_eq!(error.kind(), SourceErrorKind::Unavailable);
        assert!(error.retryable());
    }

    #[tokio::test]
    async fn malformed_json_is_permanent() {
        let client = Arc::new(RecordingHttpClient::respond_with(Ok(HttpResponse::ok_json(
            "not json at all",
        ))));
        let adapter = FinnhubAdapter::with_http_client(client, "key");

        let error = adapter
            .quote(&symbol("NFLX"))
            .await
            .expect_err("garbage body must fail");
        assert_eq!(error.kind(), SourceErrorKind::Internal);
        assert!(!error.retryable());
    }

    #[tokio::test]
    async fn unknown_symbol_zero_payload_is_permanent() {
        let client = Arc::new(RecordingHttpClient::respond_with(Ok(HttpResponse::ok_json(
            r#"{"c":0,"d":null,"dp":null,"h":0,"l":0,"o":0,"pc":0,"t":0}"#,
        ))));
        let adapter = FinnhubAdapter::with_http_client(client, "key");

        let error = adapter
            .quote(&symbol("ZZZZZZ"))
            .await
            .expect_err("empty payload must fail");
        assert_eq!(error.kind(), SourceErrorKind::InvalidRequest);
        assert!(!error.retryable());
    }

    #[tokio::test]
    async fn null_dp_falls_back_to_derived_percent() {
        let client = Arc::new(RecordingHttpClient::respond_with(Ok(HttpResponse::ok_json(
            r#"{"c":110.0,"dp":null,"pc":100.0}"#,
        ))));
        let adapter = FinnhubAdapter::with_http_client(client, "key");

        let quote = adapter
            .quote(&symbol("AAPL"))
            .await
            .expect("derived percent should succeed");
        assert!((quote.percent_change - 10.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn mock_mode_synthesizes_deterministic_quotes() {
        let adapter = FinnhubAdapter::default();
        let first = adapter.quote(&symbol("AAPL")).await.expect("mock quote");
        let second = adapter.quote(&symbol("AAPL")).await.expect("mock quote");

        assert_eq!(first.symbol, second.symbol);
        assert_eq!(first.current_price, second.current_price);
        assert_eq!(first.percent_change, second.percent_change);
        assert_eq!(adapter.id(), ProviderId::Finnhub);
    }
}
