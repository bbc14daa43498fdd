use mallkit::{BoxFuture, Call, Client, DomainError, Identity, Result, Transport};
use serde_json::{json, Value};

/// In-memory stand-in for the platform dispatcher, answering a handful of
/// operations so the example runs without a network.
struct InMemory;

impl InMemory {
    fn answer(&self, call: &Call) -> Result<Value> {
        match (call.service, call.method) {
            ("user/user", "getUser") => Ok(json!({
                "uid": call.args[0].clone(),
                "username": "molimoq",
                "mobile": "13800138000",
            })),
            ("cart/cart", "getMaxCount") => Ok(json!(50)),
            ("cart/cart", "addCart") => Ok(json!(true)),
            ("cart/cart", "getCartCount") => Ok(json!(8)),
            _ => Err(DomainError::new(format!(
                "{}::{} is not wired up in this example",
                call.service, call.method
            ))
            .into()),
        }
    }
}

impl Transport for InMemory {
    fn request(&self, call: &Call) -> Result<Value> {
        self.answer(call)
    }

    fn request_deferred(&self, call: Call) -> BoxFuture<Result<Value>> {
        let reply = self.answer(&call);
        Box::pin(async move { reply })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let client = Client::new(InMemory);
    let me = Identity::new(148086, "molimoq");

    // Blocking variants return the decoded result directly.
    let profile = client.user().get_user(148086)?;
    println!("> user.getUser() -> {profile:?}");

    let added = client.cart().add_cart(
        27767,
        &[mallkit::api::CartAttribute {
            sp_id: 9521387,
            color: "purple".to_string(),
            size: "xl".to_string(),
            quantity: 3,
            ..Default::default()
        }],
        Some(&me),
    )?;
    println!("> cart.addCart() -> {added}");

    // The `_async` variants return an unresolved handle to await later.
    let max = client.cart().get_max_count_async();
    let count = client.cart().get_cart_count_async(Some(&me));
    println!("> cart.getMaxCount() -> {}", max.await?);
    println!("> cart.getCartCount() -> {}", count.await?);

    // Unknown operations surface the remote error taxonomy unchanged.
    let err = client.stats().get_stats_by_live_ids(&[1]).unwrap_err();
    println!("> live.stats error -> {err}");

    Ok(())
}
