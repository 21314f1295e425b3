//! Order placement and the status lifecycle.

use chrono::Utc;
use common::{
    NewOrder, Order, OrderId, OrderItem, OrderItemWithMenuItem, OrderLine, OrderStatus,
    OrderWithItems, UserId,
};
use entity_store::{MemStorage, Tables};

use crate::error::DomainError;

fn join_order_items(tables: &Tables, order: Order) -> OrderWithItems {
    let items = tables
        .order_items
        .iter()
        .filter(|line| line.order_id == order.id)
        .filter_map(|line| {
            let menu_item = tables.menu_items.get(line.menu_item_id)?.clone();
            Some(OrderItemWithMenuItem {
                item: line.clone(),
                menu_item,
            })
        })
        .collect();

    OrderWithItems { order, items }
}

/// Order operations. Placement fans out one [`OrderItem`] row per
/// submitted line, all under a single write guard, so an order and its
/// lines always appear together.
#[derive(Clone)]
pub struct OrderService {
    storage: MemStorage,
}

impl OrderService {
    /// Creates an order service over the given store.
    pub fn new(storage: MemStorage) -> Self {
        Self { storage }
    }

    /// Inserts the order, then one line row per entry in `lines`, each
    /// referencing the new order id. Line non-emptiness is the
    /// boundary layer's check; an empty slice here simply creates an
    /// order with no lines.
    #[tracing::instrument(skip(self, new, lines), fields(line_count = lines.len()))]
    pub async fn create_order(&self, new: NewOrder, lines: &[OrderLine]) -> Order {
        metrics::counter!("orders_created_total").increment(1);

        let mut tables = self.storage.write().await;

        let order = tables.orders.insert(|id| Order {
            id,
            user_id: new.user_id,
            total: new.total,
            status: new.status,
            delivery_address: new.delivery_address,
            estimated_delivery_time: new.estimated_delivery_time,
            created_at: Utc::now(),
        });

        for line in lines {
            tables.order_items.insert(|id| OrderItem {
                id,
                order_id: order.id,
                menu_item_id: line.menu_item_id,
                quantity: line.quantity,
                price: line.price,
            });
        }

        order
    }

    /// The user's orders, each joined to its lines and their menu
    /// items. Lines whose menu item has been deleted are silently
    /// dropped.
    #[tracing::instrument(skip(self))]
    pub async fn orders_for_user(&self, user_id: UserId) -> Vec<OrderWithItems> {
        let tables = self.storage.read().await;
        tables
            .orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .map(|order| join_order_items(&tables, order))
            .collect()
    }

    /// Single order lookup with its joined lines.
    #[tracing::instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Option<OrderWithItems> {
        let tables = self.storage.read().await;
        let order = tables.orders.get(id).cloned()?;
        Some(join_order_items(&tables, order))
    }

    /// Advances an order's status. Only the immediate successor in the
    /// pending → confirmed → preparing → out_for_delivery → delivered
    /// progression is allowed; `Ok(None)` when the order is absent.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let mut tables = self.storage.write().await;

        let Some(current) = tables.orders.get(id).map(|order| order.status) else {
            return Ok(None);
        };

        if !current.can_become(status) {
            return Err(DomainError::InvalidStatusTransition {
                from: current,
                to: status,
            });
        }

        tracing::info!(%id, from = %current, to = %status, "order status advanced");
        Ok(tables.orders.update(id, |order| order.status = status))
    }
}
