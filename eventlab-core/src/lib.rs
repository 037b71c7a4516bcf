//! EventLab Core — the typed messages of an event-driven backtest.
//!
//! The pipeline these events flow through lives elsewhere:
//! - a market-data feed emits [`Bar`] / [`Tick`]
//! - a strategy turns them into [`Signal`]s
//! - a risk/sizing stage turns signals into [`Order`]s
//! - an execution simulator turns orders into [`Fill`]s
//!
//! Every event carries an [`EventHeader`] and implements [`EventHandler`], so one
//! scheduler can order and route all of them. Kind-specific behaviour sits behind
//! the capability traits ([`DataEventHandler`], [`SignalEvent`], [`OrderEvent`],
//! [`FillEvent`]). The [`Event`] enum wraps any kind for heterogeneous queues.
//!
//! Events are plain owned values with no locking. Whoever holds one may mutate it;
//! once it is handed to the next stage it should be treated as read-only.

pub mod direction;
pub mod error;
pub mod event;
pub mod fill;
pub mod header;
pub mod market;
pub mod order;
pub mod policy;
pub mod signal;

pub use direction::{Directioner, FillDirection, OrderDirection, Quantifier, SignalDirection};
pub use error::{ConfigError, ValidationError};
pub use event::{Event, EventKind};
pub use fill::{Fill, FillEvent};
pub use header::{EventHandler, EventHeader};
pub use market::{Bar, DataEventHandler, MarketEvent, Metrics, Tick};
pub use order::{Order, OrderEvent, OrderType};
pub use policy::ValidationPolicy;
pub use signal::{Signal, SignalEvent};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: every event type can move between pipeline threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<EventHeader>();
        require_sync::<EventHeader>();
        require_send::<Bar>();
        require_sync::<Bar>();
        require_send::<Tick>();
        require_sync::<Tick>();
        require_send::<MarketEvent>();
        require_sync::<MarketEvent>();
        require_send::<Signal>();
        require_sync::<Signal>();
        require_send::<Order>();
        require_sync::<Order>();
        require_send::<Fill>();
        require_sync::<Fill>();
        require_send::<Event>();
        require_sync::<Event>();
        require_send::<ValidationError>();
        require_sync::<ValidationError>();
    }

    /// Architecture contract: downstream stages are written once against a
    /// capability and never see the concrete event kind.
    #[test]
    fn capabilities_accept_any_implementor() {
        fn route<E: EventHandler + ?Sized>(event: &E) -> &str {
            event.symbol()
        }
        fn mark<E: DataEventHandler + ?Sized>(event: &E) -> f64 {
            event.latest_price()
        }
        fn book<F: FillEvent>(fill: &F) -> f64 {
            fill.net_value()
        }
        fn size<O: OrderEvent>(order: &O) -> i64 {
            order.qty()
        }

        let header = EventHeader::new(chrono::Utc::now(), "ES");
        let tick = Tick::new(header.clone(), 10.0, 10.5).unwrap();
        let data: &dyn DataEventHandler = &tick;
        assert_eq!(route(data), "ES");
        assert_eq!(mark(data), 10.25);

        let order = Order::market(header.clone(), OrderDirection::Buy, 2).unwrap();
        assert_eq!(size(&order), 2);

        let fill = Fill::from_order(&order, "CME", 4500.0).unwrap().with_cost(4.0).unwrap();
        assert_eq!(book(&fill), 9004.0);
    }
}
