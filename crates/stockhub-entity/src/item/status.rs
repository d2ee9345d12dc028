//! Inventory item status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability status of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// In stock and requestable.
    Available,
    /// Held against an approved request.
    Reserved,
    /// No stock remaining.
    OutOfStock,
    /// Temporarily withdrawn for maintenance.
    Maintenance,
}

impl ItemStatus {
    /// Check if items with this status can be requested.
    pub fn is_requestable(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::OutOfStock => "out_of_stock",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = stockhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "out_of_stock" => Ok(Self::OutOfStock),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(stockhub_core::AppError::validation(format!(
                "Invalid item status: '{s}'. Expected one of: available, reserved, out_of_stock, maintenance"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_available_is_requestable() {
        assert!(ItemStatus::Available.is_requestable());
        assert!(!ItemStatus::Reserved.is_requestable());
        assert!(!ItemStatus::OutOfStock.is_requestable());
        assert!(!ItemStatus::Maintenance.is_requestable());
    }

    #[test]
    fn test_from_str_round_trip() {
        assert_eq!(
            "out_of_stock".parse::<ItemStatus>().unwrap(),
            ItemStatus::OutOfStock
        );
        assert!("broken".parse::<ItemStatus>().is_err());
    }
}
