use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::remote_service;
use crate::Identity;

remote_service! {
    /// Shopping cart operations (`cart/cart`).
    pub struct Cart as cart ("cart/cart") {
        /// Lists the cart of the signed-in user.
        listCart => fn list_cart / list_cart_async(user: Option<&Identity>) -> Vec<CartItem>;

        /// Adds a goods item with the chosen spec attributes to the cart.
        addCart => fn add_cart / add_cart_async(
            goods_id: i64,
            attributes: &[CartAttribute],
            user: Option<&Identity>,
        ) -> bool;

        /// Replaces the spec attributes of one cart entry and returns the
        /// updated entry.
        updateCart => fn update_cart / update_cart_async(
            unique_id: &str,
            attributes: &[CartAttribute],
            user: Option<&Identity>,
        ) -> CartItem;

        /// Empties the cart.
        clearCart => fn clear_cart / clear_cart_async(user: Option<&Identity>) -> bool;

        /// Removes one cart entry by its unique key.
        deleteCart => fn delete_cart / delete_cart_async(
            unique_id: &str,
            user: Option<&Identity>,
        ) -> bool;

        /// Removes a batch of cart entries by their unique keys.
        deleteCartBatch => fn delete_cart_batch / delete_cart_batch_async(
            unique_ids: &[String],
            user: Option<&Identity>,
        ) -> bool;

        /// Maximum number of entries a cart may hold.
        getMaxCount => fn get_max_count / get_max_count_async() -> i64;

        /// Number of entries currently in the user's cart.
        getCartCount => fn get_cart_count / get_cart_count_async(user: Option<&Identity>) -> i64;
    }
}

/// One spec line of a goods item (color/size/quantity).
///
/// `lose_spec` and `price` only appear in responses; requests leave them
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartAttribute {
    pub sp_id: i64,
    pub color: String,
    pub size: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lose_spec: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// One cart listing entry, as returned by `listCart`/`updateCart`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartItem {
    pub unique_id: String,
    pub store_id: i64,
    pub store_name: String,
    pub goods_id: i64,
    pub goods_name: String,
    pub quantity: i64,
    pub price: f64,
    pub attributes: Vec<CartAttribute>,
    pub price_info: Option<PriceInfo>,
    /// Tip classification: 0 ok, 1 spec sold out, 2 spec changed, 3 mix rule
    /// not met.
    pub tip_type: i64,
    pub tip_reason: String,
    pub created_time: i64,
    pub update_time: i64,
    pub useful: bool,
    pub is_mix: i64,
    pub min_money: Option<f64>,
    pub mix_num: Option<i64>,
    pub color_sum: i64,
    pub size_sum: i64,
}

/// Price details of a cart entry. Wire keys are snake_case, unlike the
/// enclosing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceInfo {
    pub goods_id: i64,
    pub store_id: i64,
    pub price_type: i64,
    pub price_lower: f64,
    pub price_upper: f64,
    /// Quantity-tiered prices; a single tier when the goods is spec-priced.
    pub price_data: Vec<PriceTier>,
    /// Per-spec prices; absent for tier-priced goods.
    pub price_specdata: Option<Vec<SpecPrice>>,
    /// Promotion payload; shape varies per promotion, absent without one.
    pub price_detail: Option<Value>,
    pub price_title: Option<String>,
    pub price_crm: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTier {
    pub lower_limit: i64,
    pub upper_limit: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecPrice {
    pub spec_id: i64,
    pub goods_id: i64,
    pub spec_1: String,
    pub spec_2: String,
    pub color_rgb: String,
    pub price: f64,
    pub stock: i64,
    pub sku: String,
}
