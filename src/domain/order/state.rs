//! Order state containers: app-owned, SDK-provided update logic.

use super::{Execution, Order};
use crate::shared::{Direction, OrderId};
use std::collections::BTreeMap;

/// Net holdings implied by a set of fills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Shares held (negative when short).
    pub shares: i64,
    /// Cash in cents (negative after net buying).
    pub cash: i64,
}

impl Position {
    /// Net asset value in cents with shares marked at `price`. Saturates at the `i64` bounds.
    pub fn value_at(&self, price: u64) -> i64 {
        let marked = i128::from(self.shares) * i128::from(price);
        clamp_i64(i128::from(self.cash) + marked)
    }
}

fn clamp_i64(v: i128) -> i64 {
    i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX })
}

/// Tracks the account's orders by id.
///
/// Feed it status responses and execution messages; an update never moves an
/// order backwards (less filled, or reopened after closing).
#[derive(Debug, Clone, Default)]
pub struct OrderTracker {
    orders: BTreeMap<OrderId, Order>,
}

impl OrderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update an order. Returns `false` if the snapshot was stale.
    pub fn upsert(&mut self, order: Order) -> bool {
        if let Some(existing) = self.orders.get(&order.id) {
            let less_filled = order.total_filled < existing.total_filled;
            let reopened = order.open && !existing.open;
            if less_filled || reopened {
                tracing::trace!(id = %order.id, "Ignoring stale order snapshot");
                return false;
            }
        }
        self.orders.insert(order.id, order);
        true
    }

    /// Update from an execution feed message.
    pub fn apply_execution(&mut self, execution: &Execution) -> bool {
        self.upsert(execution.order.clone())
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.orders.remove(&id)
    }

    /// Open orders, oldest id first.
    pub fn open_orders(&self) -> Vec<&Order> {
        self.orders.values().filter(|o| o.open).collect()
    }

    /// Position implied by every fill of every tracked order.
    pub fn position(&self) -> Position {
        let (mut shares, mut cash) = (0i128, 0i128);
        for order in self.orders.values() {
            for fill in &order.fills {
                let qty = i128::from(fill.quantity);
                let notional = qty * i128::from(fill.price);
                match order.direction {
                    Direction::Buy => {
                        shares += qty;
                        cash -= notional;
                    }
                    Direction::Sell => {
                        shares -= qty;
                        cash += notional;
                    }
                }
            }
        }
        Position {
            shares: clamp_i64(shares),
            cash: clamp_i64(cash),
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Fill, OrderType};
    use crate::shared::{Account, Symbol, Venue};
    use chrono::Utc;

    fn order(id: u64, direction: Direction, fills: &[(u64, u64)], open: bool) -> Order {
        let total: u64 = fills.iter().map(|(_, q)| q).sum();
        Order {
            account: Account::from("EXB123456"),
            venue: Venue::from("TESTEX"),
            symbol: Symbol::from("FOOBAR"),
            price: 5000,
            original_quantity: 100,
            quantity: 100 - total,
            direction,
            order_type: OrderType::Limit,
            id: OrderId(id),
            timestamp: Utc::now(),
            fills: fills
                .iter()
                .map(|&(price, quantity)| Fill {
                    price,
                    quantity,
                    timestamp: Utc::now(),
                })
                .collect(),
            total_filled: total,
            open,
        }
    }

    #[test]
    fn test_upsert_adds_and_replaces() {
        let mut tracker = OrderTracker::new();
        assert!(tracker.upsert(order(1, Direction::Buy, &[], true)));
        assert!(tracker.upsert(order(1, Direction::Buy, &[(5000, 10)], true)));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.get(OrderId(1)).unwrap().total_filled, 10);
    }

    #[test]
    fn test_stale_snapshot_ignored() {
        let mut tracker = OrderTracker::new();
        tracker.upsert(order(1, Direction::Buy, &[(5000, 10)], true));
        assert!(!tracker.upsert(order(1, Direction::Buy, &[], true)));
        tracker.upsert(order(1, Direction::Buy, &[(5000, 10)], false));
        assert!(!tracker.upsert(order(1, Direction::Buy, &[(5000, 10)], true)));
        assert!(!tracker.get(OrderId(1)).unwrap().open);
    }

    #[test]
    fn test_open_orders_sorted() {
        let mut tracker = OrderTracker::new();
        tracker.upsert(order(3, Direction::Buy, &[], true));
        tracker.upsert(order(1, Direction::Sell, &[], true));
        tracker.upsert(order(2, Direction::Buy, &[], false));
        let ids: Vec<OrderId> = tracker.open_orders().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(3)]);
    }

    #[test]
    fn test_position_from_fills() {
        let mut tracker = OrderTracker::new();
        tracker.upsert(order(1, Direction::Buy, &[(5000, 10), (5010, 5)], true));
        tracker.upsert(order(2, Direction::Sell, &[(5100, 8)], false));
        let pos = tracker.position();
        assert_eq!(pos.shares, 7);
        assert_eq!(pos.cash, -(5000 * 10 + 5010 * 5) + 5100 * 8);
        assert_eq!(pos.value_at(5050), pos.cash + 7 * 5050);
    }

    #[test]
    fn test_apply_execution_updates_order() {
        let mut tracker = OrderTracker::new();
        tracker.upsert(order(4, Direction::Sell, &[], true));
        let execution = Execution {
            account: Account::from("EXB123456"),
            venue: Venue::from("TESTEX"),
            symbol: Symbol::from("FOOBAR"),
            order: order(4, Direction::Sell, &[(5200, 100)], false),
            standing_id: OrderId(4),
            incoming_id: OrderId(9),
            price: 5200,
            filled: 100,
            filled_at: Utc::now(),
            standing_complete: true,
            incoming_complete: false,
        };
        assert!(execution.was_standing());
        assert!(execution.completed_order());
        assert!(tracker.apply_execution(&execution));
        assert!(tracker.open_orders().is_empty());
        assert_eq!(tracker.position().shares, -100);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut tracker = OrderTracker::new();
        tracker.upsert(order(1, Direction::Buy, &[], true));
        tracker.upsert(order(2, Direction::Buy, &[], true));
        assert!(tracker.remove(OrderId(1)).is_some());
        assert_eq!(tracker.len(), 1);
        tracker.clear();
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_position_saturates_on_huge_fills() {
        let mut tracker = OrderTracker::new();
        tracker.upsert(order(1, Direction::Sell, &[(u64::MAX, 50)], false));
        let position = tracker.position();
        assert_eq!(position.shares, -50);
        assert_eq!(position.cash, i64::MAX);
        assert_eq!(position.value_at(u64::MAX), i64::MIN);

        let flat = Position { shares: 10, cash: -500 };
        assert_eq!(flat.value_at(60), 100);
    }
}
