//! Domain model for launch tracking.
//!
//! A `LaunchRecord` describes one regional launch of a product line. Records
//! sharing a `baseProductName` are the same product rolled out across
//! regions; that implicit key is the only relationship in the model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four markets a product can launch in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    US,
    EU,
    CN,
    JP,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::US, Region::EU, Region::CN, Region::JP];

    /// Case-insensitive parse; stored and compared upper-cased.
    pub fn parse(code: &str) -> Option<Region> {
        match code.to_ascii_uppercase().as_str() {
            "US" => Some(Region::US),
            "EU" => Some(Region::EU),
            "CN" => Some(Region::CN),
            "JP" => Some(Region::JP),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Region::US => "US",
            Region::EU => "EU",
            Region::CN => "CN",
            Region::JP => "JP",
        }
    }

    /// Fixed display label table.
    pub fn label(&self) -> &'static str {
        match self {
            Region::US => "United States",
            Region::EU => "Europe",
            Region::CN => "China",
            Region::JP => "Japan",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One regional launch with its three key dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    pub id: String,
    pub product_name: String,
    pub base_product_name: String,
    /// Regional launch date, month 1-indexed.
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub region: Region,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub strategy_kickoff_date: String,
    /// ISO `YYYY-MM-DD`.
    pub market_readout_date: String,
}

/// The one way an ISO date string becomes a calendar date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

impl LaunchRecord {
    pub fn launch_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn kickoff_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.strategy_kickoff_date)
    }

    pub fn readout_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.market_readout_date)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid region. Must be one of: US, EU, CN, JP")]
    InvalidRegion,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Wire payload for `POST /launches`. Every field is optional so presence
/// checks live in `validate` instead of failing at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSubmission {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub base_product_name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub strategy_kickoff_date: Option<String>,
    #[serde(default)]
    pub market_readout_date: Option<String>,
}

/// A submission that passed validation; `id` stays optional until the store
/// assigns one on append.
#[derive(Debug, Clone)]
pub struct ValidatedLaunch {
    pub id: Option<String>,
    pub product_name: String,
    pub base_product_name: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub region: Region,
    pub category: String,
    pub description: Option<String>,
    pub strategy_kickoff_date: String,
    pub market_readout_date: String,
}

impl LaunchSubmission {
    /// Presence checks first (empty strings count as missing, like the API
    /// contract), then region membership, then date parseability. Unparseable
    /// dates are rejected here so the timeline never sees them.
    pub fn validate(self) -> Result<ValidatedLaunch, ValidationError> {
        let product_name = required(self.product_name)?;
        let base_product_name = required(self.base_product_name)?;
        let category = required(self.category)?;
        let region_code = required(self.region)?;
        let strategy_kickoff_date = required(self.strategy_kickoff_date)?;
        let market_readout_date = required(self.market_readout_date)?;
        let year = self.year.ok_or(ValidationError::MissingFields)?;
        let month = self.month.ok_or(ValidationError::MissingFields)?;
        let day = self.day.ok_or(ValidationError::MissingFields)?;

        let region = Region::parse(&region_code).ok_or(ValidationError::InvalidRegion)?;

        if parse_iso_date(&strategy_kickoff_date).is_none() {
            return Err(ValidationError::InvalidDate(strategy_kickoff_date));
        }
        if parse_iso_date(&market_readout_date).is_none() {
            return Err(ValidationError::InvalidDate(market_readout_date));
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(ValidationError::InvalidDate(format!("{year}-{month}-{day}")));
        }

        Ok(ValidatedLaunch {
            id: self.id.filter(|id| !id.trim().is_empty()),
            product_name,
            base_product_name,
            year,
            month,
            day,
            region,
            category,
            description: self.description,
            strategy_kickoff_date,
            market_readout_date,
        })
    }
}

fn required(field: Option<String>) -> Result<String, ValidationError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingFields),
    }
}
