//! Conversions: order wire types → Order domain types.

use super::wire;
use super::{Execution, Fill, Order};

impl From<wire::FillResponse> for Fill {
    fn from(fill: wire::FillResponse) -> Self {
        Fill {
            price: fill.price,
            quantity: fill.qty,
            timestamp: fill.ts,
        }
    }
}

impl From<wire::OrderResponse> for Order {
    fn from(resp: wire::OrderResponse) -> Self {
        // Older snapshots omit the original quantity.
        let original_quantity = if resp.original_qty == 0 {
            resp.qty + resp.total_filled
        } else {
            resp.original_qty
        };

        Order {
            account: resp.account,
            venue: resp.venue,
            symbol: resp.symbol,
            price: resp.price,
            original_quantity,
            quantity: resp.qty,
            direction: resp.direction,
            order_type: resp.order_type,
            id: resp.id,
            timestamp: resp.ts,
            fills: resp.fills.into_iter().map(Fill::from).collect(),
            total_filled: resp.total_filled,
            open: resp.open,
        }
    }
}

impl From<wire::ExecutionMessage> for Execution {
    fn from(msg: wire::ExecutionMessage) -> Self {
        Execution {
            account: msg.account,
            venue: msg.venue,
            symbol: msg.symbol,
            order: msg.order.into(),
            standing_id: msg.standing_id,
            incoming_id: msg.incoming_id,
            price: msg.price,
            filled: msg.filled,
            filled_at: msg.filled_at,
            standing_complete: msg.standing_complete,
            incoming_complete: msg.incoming_complete,
        }
    }
}
