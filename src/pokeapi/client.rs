use crate::error::{PokedexError, Result};
use reqwest::header;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// One named GraphQL query: its document, its variables shape, and the
/// shape its `data` object must deserialize into.
///
/// Implementations are zero-sized markers; the document is built once per
/// process because the dex cutoff is interpolated into it.
pub trait QueryDefinition {
    type Variables: Serialize;
    type Data: DeserializeOwned;

    /// Operation name, as it appears in the document header.
    const OPERATION: &'static str;

    /// The full GraphQL document.
    fn document() -> &'static str;
}

#[derive(Serialize)]
struct GraphqlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

/// The `{ "data": ... }` envelope every GraphQL response arrives in.
/// A missing or null `data` object fails typed deserialization later,
/// which is exactly the validation failure we want to report.
#[derive(Deserialize)]
struct GraphqlEnvelope {
    #[serde(default)]
    data: serde_json::Value,
}

/// Transport for the PokeAPI GraphQL endpoint.
///
/// Holds no state besides the connection pool and the endpoint URL; it is
/// cheap to clone and safe to share across concurrent calls. No caching,
/// no retries: every call is one POST.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl PokeApiClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| PokedexError::Config(format!("Invalid endpoint URL '{endpoint}': {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `{ query, variables }` and deserialize the `data` object.
    ///
    /// Failure classification, in order:
    /// 1. connect/send/body-read problems are `Transport`;
    /// 2. a non-success HTTP status is `Status` (the body is not read);
    /// 3. a `data` object that does not match `Q::Data` is `Validation`.
    pub async fn fetch<Q: QueryDefinition>(&self, variables: Q::Variables) -> Result<Q::Data> {
        tracing::debug!(operation = Q::OPERATION, endpoint = %self.endpoint, "Sending query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CACHE_CONTROL, "max-age=31536000")
            .json(&GraphqlRequest {
                query: Q::document(),
                variables,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(operation = Q::OPERATION, status = %status, "Query failed");
            return Err(PokedexError::Status {
                operation: Q::OPERATION,
                status,
            });
        }

        let envelope: GraphqlEnvelope = response.json().await?;
        serde_json::from_value(envelope.data).map_err(|e| {
            tracing::error!(operation = Q::OPERATION, error = %e, "Response failed validation");
            PokedexError::validation(Q::OPERATION, e)
        })
    }
}
