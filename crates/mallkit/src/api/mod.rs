//! Generated-style service facades, one module per remote subsystem.
//!
//! Each facade is declared as a single operation table fed to
//! `remote_service!`, which emits the blocking method, the `_async` method
//! and the [`Client`](crate::Client) accessor for every row. Both variants of
//! an operation build their [`Call`](crate::Call) from the same row, so they
//! can never diverge in service, method or argument order.

pub mod apply_withdraw;
pub mod black;
pub mod buyer_order;
pub mod callback;
pub mod cart;
pub mod complain;
pub mod live_plan;
pub mod recharge;
pub mod stats;
pub mod user;
pub mod voucher;

pub use apply_withdraw::ApplyWithdraw;
pub use black::Black;
pub use buyer_order::BuyerOrder;
pub use callback::{Callback, CallbackRecord};
pub use cart::{Cart, CartAttribute, CartItem, PriceInfo, PriceTier, SpecPrice};
pub use complain::Complain;
pub use live_plan::LivePlan;
pub use recharge::{Recharge, RechargeRecord};
pub use stats::{LiveStats, Stats};
pub use user::{User, UserProfile};
pub use voucher::Voucher;

/// Declares one remote service facade from a table of operations.
///
/// Table row shape:
///
/// ```text
/// wireName => fn blocking_name / deferred_name(arg: Ty, ...) -> Output;
/// ```
///
/// The wire name is the camelCase method name sent to the dispatcher; the two
/// Rust names are the blocking and deferred entry points. Arguments are
/// serialized positionally in declaration order, so a trailing
/// `Option<&Identity>` forwards an explicit `null` when absent.
macro_rules! remote_service {
    (
        $(#[$smeta:meta])*
        $vis:vis struct $facade:ident as $accessor:ident ($service:literal) {
            $(
                $(#[$ometa:meta])*
                $wire:ident => fn $name:ident / $name_async:ident
                    ( $( $arg:ident : $ty:ty ),* $(,)? ) -> $out:ty;
            )*
        }
    ) => {
        $(#[$smeta])*
        #[derive(Debug, Clone)]
        $vis struct $facade {
            client: $crate::Client,
        }

        impl $facade {
            /// Remote service path every operation on this facade dispatches to.
            pub const SERVICE: &'static str = $service;

            pub fn new(client: $crate::Client) -> Self {
                Self { client }
            }

            $(
                $(#[$ometa])*
                pub fn $name(&self $(, $arg: $ty)*) -> $crate::Result<$out> {
                    let call = $crate::Call::to(Self::SERVICE, stringify!($wire))
                        $(.arg(&$arg))*
                        .finish()?;
                    self.client.invoke(call)
                }

                #[doc = concat!(
                    "Deferred variant of [`", stringify!($facade), "::", stringify!($name), "`]; ",
                    "dispatches the same call and returns the handle without resolving it.",
                )]
                pub fn $name_async(&self $(, $arg: $ty)*) -> $crate::Pending<$out> {
                    let call = $crate::Call::to(Self::SERVICE, stringify!($wire))
                        $(.arg(&$arg))*
                        .finish();
                    match call {
                        Ok(call) => self.client.invoke_async(call),
                        Err(err) => $crate::Pending::failed(err),
                    }
                }
            )*
        }

        impl $crate::Client {
            #[doc = concat!(
                "Returns the [`", stringify!($facade), "`] facade, sharing this client's transport.",
            )]
            $vis fn $accessor(&self) -> $facade {
                $facade::new(self.clone())
            }
        }
    };
}

pub(crate) use remote_service;
