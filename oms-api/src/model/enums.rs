//! Enumerated field values with their FIX wire codes.

use serde::{Deserialize, Serialize};

/// Side of an order (tag 54).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Buy,
    Sell,
    SellShort,
    SellShortExempt,
}

impl Side {
    pub fn fix_value(&self) -> char {
        match self {
            Self::Buy => '1',
            Self::Sell => '2',
            Self::SellShort => '5',
            Self::SellShortExempt => '6',
        }
    }
}

/// Order type (tag 40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrdType {
    Market,
    Limit,
    Stop,
    StopLimit,
    MarketOnClose,
    LimitOnClose,
    Pegged,
}

impl OrdType {
    pub fn fix_value(&self) -> char {
        match self {
            Self::Market => '1',
            Self::Limit => '2',
            Self::Stop => '3',
            Self::StopLimit => '4',
            Self::MarketOnClose => '5',
            Self::LimitOnClose => 'B',
            Self::Pegged => 'P',
        }
    }

    /// True when a limit price (tag 44) belongs on the order.
    pub fn requires_price(&self) -> bool {
        matches!(self, Self::Limit | Self::StopLimit)
    }

    /// True when a stop price (tag 99) belongs on the order.
    pub fn requires_stop_price(&self) -> bool {
        matches!(self, Self::Stop | Self::StopLimit)
    }
}

/// How a cross is executed against the book (tag 549).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrossType {
    AonBothSides,
    ImmediateOrCancelBothSides,
    OneSideIoc,
    CrossExecutedAgainstBook,
}

impl CrossType {
    pub fn fix_value(&self) -> char {
        match self {
            Self::AonBothSides => '1',
            Self::ImmediateOrCancelBothSides => '2',
            Self::OneSideIoc => '3',
            Self::CrossExecutedAgainstBook => '4',
        }
    }
}

/// Which side of a cross is prioritized (tag 550).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrossPrioritization {
    #[default]
    None,
    BuySidePrioritized,
    SellSidePrioritized,
}

impl CrossPrioritization {
    pub fn fix_value(&self) -> char {
        match self {
            Self::None => '0',
            Self::BuySidePrioritized => '1',
            Self::SellSidePrioritized => '2',
        }
    }
}

/// Option right (tag 201).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PutOrCall {
    Put,
    Call,
}

impl PutOrCall {
    pub fn fix_value(&self) -> char {
        match self {
            Self::Put => '0',
            Self::Call => '1',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_requirements_follow_ord_type() {
        assert!(OrdType::Limit.requires_price());
        assert!(OrdType::StopLimit.requires_price());
        assert!(!OrdType::Market.requires_price());
        assert!(!OrdType::Stop.requires_price());

        assert!(OrdType::Stop.requires_stop_price());
        assert!(OrdType::StopLimit.requires_stop_price());
        assert!(!OrdType::Limit.requires_stop_price());
        assert!(!OrdType::Pegged.requires_stop_price());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&OrdType::StopLimit).unwrap();
        assert_eq!(json, "\"STOP_LIMIT\"");

        let side: Side = serde_json::from_str("\"SELL_SHORT\"").unwrap();
        assert_eq!(side, Side::SellShort);
        assert_eq!(side.fix_value(), '5');
    }
}
