use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use url::Url;

use crate::logic::{BuyQuery, SellQuery};
use crate::model::{Crop, CropOffer, MarketInsight, Recommendation, Region};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("server answered {status}: {message}")]
    Rejected {
        status: u16,
        message: String,
        details: BTreeMap<String, Vec<String>>,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: BTreeMap<String, Vec<String>>,
}

/// Typed client for the AgroLynk HTTP API.
#[derive(Debug, Clone)]
pub struct AgroClient {
    client: Client,
    base_url: Url,
}

impl AgroClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn recommendations(&self, query: &BuyQuery) -> Result<Recommendation, ClientError> {
        self.send(self.get("/api/farmer/buy")?.query(query)).await
    }

    pub async fn insights(&self, query: &SellQuery) -> Result<MarketInsight, ClientError> {
        self.send(self.get("/api/farmer/sell")?.query(query)).await
    }

    pub async fn crops(&self) -> Result<Vec<Crop>, ClientError> {
        self.send(self.get("/api/crops")?).await
    }

    pub async fn crop(&self, id: &str) -> Result<Crop, ClientError> {
        self.send(self.get(&format!("/api/crops/{}", id))?).await
    }

    pub async fn regions(&self) -> Result<Vec<Region>, ClientError> {
        self.send(self.get("/api/regions")?).await
    }

    pub async fn offers(&self) -> Result<Vec<CropOffer>, ClientError> {
        self.send(self.get("/api/company/offers")?).await
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        Ok(self.client.get(self.base_url.join(path)?))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Error bodies are JSON from this API, but a proxy in between may not be
        let text = response.text().await?;
        let (message, details) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.error, body.details),
            Err(_) => (text, BTreeMap::new()),
        };
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
            details,
        })
    }
}
