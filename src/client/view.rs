use crate::client::drafts::{Listing, ListingDraft, OrderDraft, OrderQuote};
use crate::client::http::{AgroClient, ClientError};
use crate::client::submission::{Confirmation, SubmissionError, Submitter};
use crate::logic::{BuyQuery, BuyQueryParams, FieldErrors, SellQuery, SellQueryParams};
use crate::model::{CropOffer, MarketInsight, Recommendation};

/// What a panel shows for one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Empty,
    Failed(String),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> FetchState<Vec<T>> {
    /// Like `from_result`, with an empty list shown as `Empty`.
    pub fn from_list(result: Result<Vec<T>, ClientError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => FetchState::Empty,
            other => FetchState::from_result(other),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// Farmer buy and sell panels.
#[derive(Debug)]
pub struct FarmerView {
    client: AgroClient,
    pub recommendations: FetchState<Recommendation>,
    pub insights: FetchState<MarketInsight>,
}

impl FarmerView {
    pub fn new(client: AgroClient) -> Self {
        Self {
            client,
            recommendations: FetchState::Idle,
            insights: FetchState::Idle,
        }
    }

    pub fn client(&self) -> &AgroClient {
        &self.client
    }

    /// Validate the buy form and mark the panel as loading. Form errors
    /// leave the panel untouched.
    pub fn start_buy(&mut self, form: &BuyQueryParams) -> Result<BuyQuery, FieldErrors> {
        let query = form.validate()?;
        self.recommendations = FetchState::Loading;
        Ok(query)
    }

    pub fn finish_buy(&mut self, result: Result<Recommendation, ClientError>) {
        self.recommendations = FetchState::from_result(result);
    }

    pub fn start_sell(&mut self, form: &SellQueryParams) -> Result<SellQuery, FieldErrors> {
        let query = form.validate()?;
        self.insights = FetchState::Loading;
        Ok(query)
    }

    pub fn finish_sell(&mut self, result: Result<MarketInsight, ClientError>) {
        self.insights = FetchState::from_result(result);
    }

    /// Start, fetch and finish in one step, for callers that do not render
    /// the loading state.
    pub async fn submit_buy(&mut self, form: &BuyQueryParams) -> Result<(), FieldErrors> {
        let query = self.start_buy(form)?;
        let result = self.client.recommendations(&query).await;
        self.finish_buy(result);
        Ok(())
    }

    pub async fn submit_sell(&mut self, form: &SellQueryParams) -> Result<(), FieldErrors> {
        let query = self.start_sell(form)?;
        let result = self.client.insights(&query).await;
        self.finish_sell(result);
        Ok(())
    }
}

/// Company purchase and listing panels. Submissions are simulated locally.
#[derive(Debug, Default)]
pub struct CompanyView {
    pub offers: Vec<CropOffer>,
    orders: Submitter<OrderQuote>,
    listings: Submitter<Listing>,
}

impl CompanyView {
    pub fn new(offers: Vec<CropOffer>) -> Self {
        Self {
            offers,
            ..Default::default()
        }
    }

    pub fn offer(&self, crop: &str) -> Option<&CropOffer> {
        self.offers.iter().find(|offer| offer.crop == crop)
    }

    /// Price the order form without submitting it.
    pub fn quote(&self, form: &OrderDraft) -> Result<OrderQuote, FieldErrors> {
        let order = form.validate()?;
        let offer = self.offer(&order.crop);
        Ok(order.quote(offer))
    }

    pub fn place_order(&mut self, form: &OrderDraft) -> Result<(), FieldErrors> {
        let quote = self.quote(form)?;
        self.orders.submit(quote);
        Ok(())
    }

    pub fn list_product(&mut self, form: &ListingDraft) -> Result<(), FieldErrors> {
        let listing = form.validate()?;
        self.listings.submit(listing);
        Ok(())
    }

    pub fn is_ordering(&self) -> bool {
        self.orders.is_pending()
    }

    pub fn is_listing(&self) -> bool {
        self.listings.is_pending()
    }

    pub async fn order_placed(&mut self) -> Result<Confirmation<OrderQuote>, SubmissionError> {
        self.orders.wait().await
    }

    pub async fn product_listed(&mut self) -> Result<Confirmation<Listing>, SubmissionError> {
        self.listings.wait().await
    }

    /// Leave the page: pending submissions are abandoned.
    pub fn leave(&mut self) {
        self.orders.cancel();
        self.listings.cancel();
    }
}
