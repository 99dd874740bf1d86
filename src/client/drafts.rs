use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;

use crate::logic::validate::{require_min_chars, require_number, require_text};
use crate::logic::FieldErrors;
use crate::model::CropOffer;

/// Smallest order a company may place, in quintals.
pub const MIN_ORDER_QUINTALS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityGrade {
    Premium,
    Standard,
    Economy,
}

impl QualityGrade {
    pub fn price_multiplier(self) -> f64 {
        match self {
            QualityGrade::Premium => 1.15,
            QualityGrade::Standard => 1.0,
            QualityGrade::Economy => 0.85,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QualityGrade::Premium => "Top-tier quality, meeting all international standards",
            QualityGrade::Standard => "Regular quality, suitable for most applications",
            QualityGrade::Economy => "Basic quality, ideal for processing and animal feed",
        }
    }
}

impl FromStr for QualityGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "premium" => Ok(QualityGrade::Premium),
            "standard" => Ok(QualityGrade::Standard),
            "economy" => Ok(QualityGrade::Economy),
            other => Err(format!("Unknown quality grade '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Seeds,
    Fertilizers,
    Pesticides,
    Instruments,
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seeds" => Ok(ProductCategory::Seeds),
            "fertilizers" => Ok(ProductCategory::Fertilizers),
            "pesticides" => Ok(ProductCategory::Pesticides),
            "instruments" => Ok(ProductCategory::Instruments),
            other => Err(format!("Unknown category '{}'", other)),
        }
    }
}

/// Company purchase form as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderDraft {
    pub crop: Option<String>,
    pub quantity: Option<String>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub crop: String,
    /// Quintals
    pub quantity: f64,
    pub grade: QualityGrade,
}

/// An order priced against the crop's offer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuote {
    pub order: Order,
    pub unit_price: f64,
    pub total: f64,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<Order, FieldErrors> {
        let mut errors = FieldErrors::new();
        let crop = require_text(&mut errors, "crop", self.crop.as_deref());
        let quantity = require_number(
            &mut errors,
            "quantity",
            self.quantity.as_deref(),
            MIN_ORDER_QUINTALS,
        );
        let grade = match self.grade.as_deref() {
            None | Some("") => {
                errors.add("grade", "Please select a quality grade");
                None
            }
            Some(raw) => raw
                .parse::<QualityGrade>()
                .map_err(|message| errors.add("grade", message))
                .ok(),
        };

        match grade {
            Some(grade) if errors.is_empty() => Ok(Order {
                crop,
                quantity,
                grade,
            }),
            _ => Err(errors),
        }
    }
}

impl Order {
    /// Price the order. A crop without an offer is quoted at zero.
    pub fn quote(self, offer: Option<&CropOffer>) -> OrderQuote {
        let unit_price =
            offer.map_or(0.0, |o| f64::from(o.average_price)) * self.grade.price_multiplier();
        OrderQuote {
            total: unit_price * self.quantity,
            unit_price,
            order: self,
        }
    }
}

/// Company product listing form as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub category: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub specifications: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub category: ProductCategory,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub description: String,
    pub manufacturer: Option<String>,
    pub specifications: Option<String>,
    pub image_url: Option<Url>,
}

// Blank optional inputs count as not given.
fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl ListingDraft {
    pub fn validate(&self) -> Result<Listing, FieldErrors> {
        let mut errors = FieldErrors::new();

        let category = match optional(&self.category) {
            None => {
                errors.add("category", "Please select a category");
                None
            }
            Some(raw) => raw
                .parse::<ProductCategory>()
                .map_err(|message| errors.add("category", message))
                .ok(),
        };
        let name = require_min_chars(&mut errors, "name", self.name.as_deref(), 3);
        let price = require_number(&mut errors, "price", self.price.as_deref(), 1.0);
        let quantity = require_number(&mut errors, "quantity", self.quantity.as_deref(), 1.0);
        let description =
            require_min_chars(&mut errors, "description", self.description.as_deref(), 10);
        let manufacturer = optional(&self.manufacturer)
            .map(|m| require_min_chars(&mut errors, "manufacturer", Some(m), 2));
        let image_url = optional(&self.image_url).and_then(|raw| {
            Url::parse(raw)
                .map_err(|_| errors.add("imageUrl", "Please enter a valid URL"))
                .ok()
        });

        match category {
            Some(category) if errors.is_empty() => Ok(Listing {
                category,
                name,
                price,
                quantity,
                description,
                manufacturer,
                specifications: optional(&self.specifications).map(str::to_string),
                image_url,
            }),
            _ => Err(errors),
        }
    }
}
