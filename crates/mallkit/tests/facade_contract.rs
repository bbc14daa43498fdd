use std::sync::{Arc, Mutex};

use futures::FutureExt as _;
use mallkit::api::CartAttribute;
use mallkit::{Call, Client, DomainError, Error, Identity, RemoteError, Result, Transport};
use serde_json::{json, Value};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    service: String,
    method: String,
    args: Vec<Value>,
    deferred: bool,
}

/// Records every dispatched call and answers with a configurable reply.
struct Recording {
    calls: Mutex<Vec<Recorded>>,
    reply: Box<dyn Fn() -> Result<Value> + Send + Sync>,
}

impl Recording {
    fn replying(reply: impl Fn() -> Result<Value> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        })
    }

    fn ok(value: Value) -> Arc<Self> {
        Self::replying(move || Ok(value.clone()))
    }

    fn record(&self, call: &Call, deferred: bool) {
        self.calls.lock().unwrap().push(Recorded {
            service: call.service.to_string(),
            method: call.method.to_string(),
            args: call.args.clone(),
            deferred,
        });
    }

    fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for Recording {
    fn request(&self, call: &Call) -> Result<Value> {
        self.record(call, false);
        (self.reply)()
    }

    fn request_deferred(&self, call: Call) -> mallkit::BoxFuture<Result<Value>> {
        self.record(&call, true);
        let reply = (self.reply)();
        Box::pin(async move { reply })
    }
}

/// Holds every deferred reply back until released.
struct Gated {
    release: Arc<Notify>,
    reply: Value,
}

impl Transport for Gated {
    fn request(&self, _call: &Call) -> Result<Value> {
        Ok(self.reply.clone())
    }

    fn request_deferred(&self, _call: Call) -> mallkit::BoxFuture<Result<Value>> {
        let release = self.release.clone();
        let reply = self.reply.clone();
        Box::pin(async move {
            release.notified().await;
            Ok(reply)
        })
    }
}

#[tokio::test]
async fn both_variants_forward_identical_tuples() {
    let transport = Recording::ok(json!(true));
    let client = Client::new(transport.clone());
    let attributes = vec![CartAttribute {
        sp_id: 9521387,
        color: "purple".to_string(),
        size: "xl".to_string(),
        quantity: 3,
        ..Default::default()
    }];

    let cart = client.cart();
    cart.add_cart(27767, &attributes, None).unwrap();
    cart.add_cart_async(27767, &attributes, None).await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].service, calls[1].service);
    assert_eq!(calls[0].method, calls[1].method);
    assert_eq!(calls[0].args, calls[1].args);
    assert!(!calls[0].deferred);
    assert!(calls[1].deferred);
}

#[test]
fn missing_identity_is_forwarded_as_null_not_elided() {
    let transport = Recording::ok(json!(0));
    let client = Client::new(transport.clone());

    client.cart().get_cart_count(None).unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].args, vec![Value::Null]);
}

#[test]
fn present_identity_rides_last() {
    let transport = Recording::ok(json!(true));
    let client = Client::new(transport.clone());
    let user = Identity::new(148086, "molimoq");

    client
        .complain()
        .delete_store_complain(31, Some(&user))
        .unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].service, "store/complain");
    assert_eq!(calls[0].method, "deleteStoreComplain");
    assert_eq!(
        calls[0].args,
        vec![json!(31), json!({"uid": 148086, "username": "molimoq"})]
    );
}

#[test]
fn facades_from_one_client_share_the_transport() {
    let transport = Recording::ok(json!(0));
    let client = Client::new(transport.clone());
    let clone = client.clone();

    assert!(Arc::ptr_eq(client.transport(), clone.transport()));

    client.user().check_is_exist_user_mobile("13512719777").unwrap();
    clone.black().get_black_count(1, None).unwrap();

    // both facades dispatched through the same recording instance
    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].service, "user/user");
    assert_eq!(calls[1].service, "contact/black");
}

#[test]
fn get_user_decodes_the_profile() {
    let transport = Recording::ok(json!({
        "uid": 148086,
        "username": "molimoq",
        "mobile": "13800138000",
    }));
    let client = Client::new(transport.clone());

    let profile = client.user().get_user(148086).unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].service, "user/user");
    assert_eq!(calls[0].method, "getUser");
    assert_eq!(calls[0].args, vec![json!(148086)]);
    assert!(!calls[0].deferred);
    assert_eq!(profile.uid, 148086);
    assert_eq!(profile.username, "molimoq");
    assert_eq!(profile.mobile, "13800138000");
}

#[test]
fn add_cart_forwards_three_args_in_order() {
    let transport = Recording::ok(json!(true));
    let client = Client::new(transport.clone());
    let attributes = vec![CartAttribute {
        sp_id: 9521387,
        color: "purple".to_string(),
        size: "xl".to_string(),
        quantity: 3,
        ..Default::default()
    }];

    let added = client.cart().add_cart(27767, &attributes, None).unwrap();

    assert!(added);
    let calls = transport.calls();
    assert_eq!(calls[0].service, "cart/cart");
    assert_eq!(calls[0].method, "addCart");
    assert_eq!(
        calls[0].args,
        vec![
            json!(27767),
            json!([{"spId": 9521387, "color": "purple", "size": "xl", "quantity": 3}]),
            Value::Null,
        ]
    );
}

#[tokio::test]
async fn deferred_handle_is_unresolved_at_return() {
    let release = Arc::new(Notify::new());
    let client = Client::new(Gated {
        release: release.clone(),
        reply: json!(100),
    });

    let mut pending = client.cart().get_max_count_async();
    assert!((&mut pending).now_or_never().is_none());

    release.notify_one();
    assert_eq!(pending.await.unwrap(), 100);
}

#[test]
fn domain_errors_propagate_unchanged() {
    let transport = Recording::replying(|| {
        Err(DomainError::new("duplicate user").with_code(701).into())
    });
    let client = Client::new(transport);

    let err = client
        .user()
        .register_user(&json!({"mobile": "13800138000"}))
        .unwrap_err();

    match err {
        Error::Domain(domain) => {
            assert_eq!(domain.message, "duplicate user");
            assert_eq!(domain.code, Some(701));
        }
        other => panic!("expected a domain error, got {other:?}"),
    }
}

#[tokio::test]
async fn deferred_handle_rejects_with_the_same_error_kind() {
    let transport = Recording::replying(|| {
        Err(RemoteError::Timeout {
            service: "pay/recharge".to_string(),
            method: "getRecharge".to_string(),
        }
        .into())
    });
    let client = Client::new(transport);

    let err = client.recharge().get_recharge_async(7).await.unwrap_err();
    assert!(matches!(err, Error::Remote(RemoteError::Timeout { .. })));

    let err = client.recharge().get_recharge(7).unwrap_err();
    assert!(matches!(err, Error::Remote(RemoteError::Timeout { .. })));
}

#[test]
fn stats_decode_string_counters() {
    let transport = Recording::ok(json!([
        {"liveId": "1", "view": "133", "praise": "1", "follow": "1"},
        {"liveId": "2", "view": "222", "praise": "1", "follow": "1"},
    ]));
    let client = Client::new(transport.clone());

    let stats = client.stats().get_stats_by_live_ids(&[1, 2]).unwrap();

    assert_eq!(transport.calls()[0].args, vec![json!([1, 2])]);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].live_id, "1");
    assert_eq!(stats[0].view, "133");
    assert_eq!(stats[1].live_id, "2");
}

#[test]
fn buyer_order_forwards_no_identity() {
    let transport = Recording::ok(json!({}));
    let client = Client::new(transport.clone());

    client.buyer_order().list_applet_order(0, 0, 20).unwrap();
    client.buyer_order().my_applet_order_stats().unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].args, vec![json!(0), json!(0), json!(20)]);
    assert!(calls[1].args.is_empty());
}

#[test]
fn cart_listing_decodes_nested_price_records() {
    let transport = Recording::ok(json!([{
        "uniqueId": "372f86e3539ef75e5b49f393e98decc7",
        "storeId": 159771,
        "storeName": "ioeoi selection",
        "goodsId": 27767,
        "goodsName": "french long coat",
        "quantity": 8,
        "price": 464.0,
        "attributes": [
            {"spId": 9521387, "color": "purple", "size": "xl", "quantity": 3, "loseSpec": false},
        ],
        "priceInfo": {
            "goods_id": 27767,
            "store_id": 159771,
            "price_type": 1,
            "price_lower": 58.0,
            "price_upper": 58.0,
            "price_data": [{"lower_limit": 1, "upper_limit": 0, "price": 58.0}],
        },
        "tipType": 2,
        "tipReason": "spec changed",
        "createdTime": 1534408722,
        "updateTime": 1534413098,
        "useful": false,
        "isMix": 1,
        "colorSum": 2,
        "sizeSum": 1,
    }]));
    let client = Client::new(transport);

    let items = client.cart().list_cart(None).unwrap();

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.unique_id, "372f86e3539ef75e5b49f393e98decc7");
    assert_eq!(item.attributes[0].sp_id, 9521387);
    assert_eq!(item.attributes[0].lose_spec, Some(false));
    let price_info = item.price_info.as_ref().unwrap();
    assert_eq!(price_info.price_lower, 58.0);
    assert_eq!(price_info.price_data[0].lower_limit, 1);
    assert_eq!(item.tip_type, 2);
    assert!(!item.useful);
}
