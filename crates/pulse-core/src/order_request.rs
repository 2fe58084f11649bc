//! Order submission payload.
//!
//! The order API accepts
//!
//! ```json
//! { "stockId": "...", "orderType": "Buy", "priceType": "Market",
//!   "productType": "MIS", "qty": 10, "price": 10.0,
//!   "userId": "...", "stockPrice": 187.2 }
//! ```
//!
//! at `POST {base}/stock/{buy|sell}`. Building the request is pure and
//! lives here; transport belongs to the terminal's order gateway.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::interpreter::ExecutedOrder;
use crate::preset::Preset;
use crate::side::Side;

/// A tradable instrument as listed in the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Backend identifier of the script.
    pub id: String,
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub last_price: Decimal,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceType {
    Market,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    /// Margin intraday square-off.
    #[serde(rename = "MIS")]
    Mis,
}

/// Body of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub stock_id: String,
    pub order_type: Side,
    pub price_type: PriceType,
    pub product_type: ProductType,
    pub qty: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub stock_price: Decimal,

    /// Ticker for status messages; not part of the wire body.
    #[serde(skip)]
    pub symbol: String,
}

impl OrderRequest {
    /// Market/MIS order for `stock` using a preset's action, size and price.
    pub fn from_preset(stock: &Stock, preset: &Preset, user_id: impl Into<String>) -> Self {
        OrderRequest {
            stock_id: stock.id.clone(),
            order_type: preset.action,
            price_type: PriceType::Market,
            product_type: ProductType::Mis,
            qty: preset.quantity,
            price: preset.price,
            user_id: user_id.into(),
            stock_price: stock.last_price,
            symbol: stock.symbol.clone(),
        }
    }

    /// Request for a voice order. When the ticker is not in the watchlist
    /// the ticker stands in for the stock id and the preset price for the
    /// last traded price.
    pub fn from_executed(
        order: &ExecutedOrder,
        stock: Option<&Stock>,
        user_id: impl Into<String>,
    ) -> Self {
        let (stock_id, stock_price) = match stock {
            Some(s) => (s.id.clone(), s.last_price),
            None => (order.symbol.clone(), order.price),
        };
        OrderRequest {
            stock_id,
            order_type: order.action,
            price_type: PriceType::Market,
            product_type: ProductType::Mis,
            qty: order.quantity,
            price: order.price,
            user_id: user_id.into(),
            stock_price,
            symbol: order.symbol.clone(),
        }
    }

    /// Endpoint path relative to the API base, e.g. `stock/buy`.
    pub fn endpoint_path(&self) -> String {
        format!("stock/{}", self.order_type.as_path())
    }

    /// Status line shown once the backend accepted the order.
    pub fn completed_message(&self) -> String {
        format!("Order completed: {} {} of {}", self.order_type, self.qty, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Stock {
        Stock {
            id: "65f0c1".into(),
            symbol: "AAPL".into(),
            last_price: Decimal::new(18720, 2),
        }
    }

    #[test]
    fn preset_request_fields() {
        let preset = Preset::new(Side::Buy, 10, Decimal::new(1505, 1));
        let req = OrderRequest::from_preset(&apple(), &preset, "u-42");
        assert_eq!(req.stock_id, "65f0c1");
        assert_eq!(req.endpoint_path(), "stock/buy");
        assert_eq!(req.completed_message(), "Order completed: Buy 10 of AAPL");
    }

    #[test]
    fn executed_without_watchlist_entry_uses_ticker() {
        let order = ExecutedOrder {
            preset_id: "preset-2".into(),
            action: Side::Sell,
            quantity: 10,
            price: Decimal::from(5),
            symbol: "TSLA".into(),
        };
        let req = OrderRequest::from_executed(&order, None, "u-1");
        assert_eq!(req.stock_id, "TSLA");
        assert_eq!(req.stock_price, Decimal::from(5));
        assert_eq!(req.endpoint_path(), "stock/sell");
    }

    #[test]
    fn wire_shape() {
        let preset = Preset::new(Side::Sell, 5, Decimal::new(27501, 1));
        let req = OrderRequest::from_preset(&apple(), &preset, "u-42");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["stockId"], "65f0c1");
        assert_eq!(json["orderType"], "Sell");
        assert_eq!(json["priceType"], "Market");
        assert_eq!(json["productType"], "MIS");
        assert_eq!(json["qty"], 5);
        assert!((json["price"].as_f64().unwrap() - 2750.1).abs() < 1e-9);
        assert!((json["stockPrice"].as_f64().unwrap() - 187.2).abs() < 1e-9);
        assert!(json.get("symbol").is_none());
        assert!(serde_json::from_str::<PriceType>("\"Limit\"").is_err());
    }
}
