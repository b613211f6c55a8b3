use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::data_source::{InfoRequest, QuoteSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{QuoteRecord, Symbol};

/// quoteSummary modules that together cover descriptive metadata, market
/// classification, and the priced fields the summary renders.
const SUMMARY_MODULES: &str = "assetProfile,price,summaryDetail,defaultKeyStatistics,quoteType";

/// Yahoo adapter supporting both real API calls and mock mode.
///
/// Real mode issues one GET against the quoteSummary endpoint and flattens
/// every returned module into a single flat [`QuoteRecord`]. Mock mode (any
/// transport whose `is_mock()` is true) produces a deterministic record
/// derived from the symbol, for offline tests.
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
        }
    }
}

impl YahooAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
        }
    }
}

impl QuoteSource for YahooAdapter {
    fn info<'a>(
        &'a self,
        req: InfoRequest,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteRecord, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            if self.use_real_api {
                self.fetch_real_info(&req).await
            } else {
                Ok(fake_info(&req.symbol))
            }
        })
    }
}

impl YahooAdapter {
    async fn fetch_real_info(&self, req: &InfoRequest) -> Result<QuoteRecord, SourceError> {
        let endpoint = format!(
            "https://query2.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}",
            urlencoding::encode(req.symbol.as_str()),
            SUMMARY_MODULES,
        );

        let request = HttpRequest::get(endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(10_000);

        let response = self.http_client.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo upstream returned status {}",
                response.status
            )));
        }

        parse_summary_response(&response.body)
    }
}

/// Parse a quoteSummary response into one flat record.
///
/// Modules arrive as named objects (`price`, `summaryDetail`, …); their
/// fields are merged into a single key space the way the formatter expects.
fn parse_summary_response(body: &str) -> Result<QuoteRecord, SourceError> {
    let parsed: YahooQuoteSummaryResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo response: {}", e)))?;

    if let Some(error) = &parsed.quote_summary.error {
        if !error.is_null() {
            return Err(SourceError::unavailable(format!(
                "yahoo API error: {}",
                error
            )));
        }
    }

    let mut record = QuoteRecord::new();
    let Some(result) = parsed
        .quote_summary
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
    else {
        return Ok(record);
    };

    for (_module, payload) in result {
        if let Value::Object(fields) = payload {
            for (key, value) in fields {
                record.insert(key, flatten_value(value));
            }
        }
    }

    Ok(record)
}

/// Yahoo wraps numeric values as `{"raw": …, "fmt": …}`; unwrap to the raw
/// value so the record holds plain numbers.
fn flatten_value(value: Value) -> Value {
    match value {
        Value::Object(ref map) if map.contains_key("raw") => {
            map.get("raw").cloned().unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Deterministic offline record derived from the symbol.
///
/// Carries comfortably more than the usability threshold, every
/// introduction and priority key, a handful of free-form extras, an
/// ignore-listed key, a zero-valued field, and a `regularMarket*` duplicate
/// so tests can exercise each rendering rule.
fn fake_info(symbol: &Symbol) -> QuoteRecord {
    let seed = symbol_seed(symbol);
    let price = 92.0 + (seed % 500) as f64 / 10.0;
    let volume = 50_000 + seed % 10_000;
    let host = symbol
        .as_str()
        .to_ascii_lowercase()
        .replace(['.', '-', '='], "");

    QuoteRecord::from_fields([
        (
            "longName",
            Value::from(format!("{} Holdings Inc.", symbol.as_str())),
        ),
        ("shortName", Value::from(symbol.as_str())),
        (
            "website",
            Value::from(format!("https://www.{}.example.com", host)),
        ),
        ("country", Value::from("United States")),
        ("sector", Value::from("Technology")),
        ("industry", Value::from("Consumer Electronics")),
        ("quoteType", Value::from("EQUITY")),
        ("exchange", Value::from("NMS")),
        ("currency", Value::from("USD")),
        ("regularMarketPrice", Value::from(price)),
        ("bid", Value::from(price - 0.08)),
        ("ask", Value::from(price + 0.08)),
        ("regularMarketOpen", Value::from(price - 0.45)),
        ("regularMarketPreviousClose", Value::from(price - 0.60)),
        ("regularMarketDayHigh", Value::from(price + 1.20)),
        ("regularMarketDayLow", Value::from(price - 1.10)),
        ("trailingPE", Value::from(14.0 + (seed % 200) as f64 / 10.0)),
        (
            "marketCap",
            Value::from(500_000_000_000_u64 + (seed % 300_000) * 1_000_000),
        ),
        ("volume", Value::from(volume)),
        ("regularMarketVolume", Value::from(volume)),
        ("beta", Value::from(1.0 + (seed % 80) as f64 / 100.0)),
        ("fiftyTwoWeekHigh", Value::from(price + 25.0)),
        ("fiftyTwoWeekLow", Value::from((price - 30.0).max(1.0))),
        (
            "dividendYield",
            Value::from(0.005 + (seed % 50) as f64 / 10_000.0),
        ),
        ("payoutRatio", Value::from(0.0)),
        ("maxAge", Value::from(86_400)),
    ])
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

// Yahoo quoteSummary response structure. Module payloads stay as raw JSON
// values because their field sets are provider-defined.
#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: YahooQuoteSummaryData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryData {
    #[serde(default)]
    result: Option<Vec<BTreeMap<String, Value>>>,
    #[serde(default)]
    error: Option<Value>,
}
