//! # Report Aggregator
//!
//! Read-only summaries over closed orders. Prices and names come from the menu as it is
//! now, not as it was when the order was placed, so a price change also changes past
//! totals.

use crate::clients::{EntityClient, MenuClient, OrderClient};
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, Order, PopularItem, ProductId, TotalSalesReport};
use crate::order_actor::OrderError;
use std::collections::HashMap;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Menu(#[from] MenuError),
}

/// Σ price × quantity over the lines of closed orders. Lines whose product is no longer
/// on the menu count for nothing.
pub fn total_sales(orders: &[Order], menu: &[MenuItem]) -> f64 {
    let prices: HashMap<&ProductId, f64> = menu
        .iter()
        .map(|item| (&item.product_id, item.price))
        .collect();

    orders
        .iter()
        .filter(|order| !order.is_open())
        .flat_map(|order| &order.items)
        .filter_map(|line| {
            prices
                .get(&line.product_id)
                .map(|price| price * f64::from(line.quantity))
        })
        .sum()
}

/// Units sold per product over closed orders, most sold first, ties by product id.
pub fn popular_items(orders: &[Order], menu: &[MenuItem]) -> Vec<PopularItem> {
    let mut counts: HashMap<&ProductId, u64> = HashMap::new();
    for line in orders
        .iter()
        .filter(|order| !order.is_open())
        .flat_map(|order| &order.items)
    {
        *counts.entry(&line.product_id).or_default() += u64::from(line.quantity);
    }

    let names: HashMap<&ProductId, &str> = menu
        .iter()
        .map(|item| (&item.product_id, item.name.as_str()))
        .collect();

    let mut popular: Vec<PopularItem> = counts
        .into_iter()
        .map(|(product_id, count)| PopularItem {
            product_id: product_id.clone(),
            name: names.get(product_id).copied().unwrap_or_default().to_string(),
            count,
        })
        .collect();
    popular.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    popular
}

#[derive(Clone)]
pub struct ReportAggregator {
    orders: OrderClient,
    menu: MenuClient,
}

impl ReportAggregator {
    pub fn new(orders: OrderClient, menu: MenuClient) -> Self {
        Self { orders, menu }
    }

    #[instrument(skip(self))]
    pub async fn total_sales(&self) -> Result<TotalSalesReport, ReportError> {
        let (orders, menu) = self.snapshot().await?;
        Ok(TotalSalesReport {
            total_sales: total_sales(&orders, &menu),
        })
    }

    #[instrument(skip(self))]
    pub async fn popular_items(&self) -> Result<Vec<PopularItem>, ReportError> {
        let (orders, menu) = self.snapshot().await?;
        Ok(popular_items(&orders, &menu))
    }

    async fn snapshot(&self) -> Result<(Vec<Order>, Vec<MenuItem>), ReportError> {
        let orders = self.orders.list().await?;
        let menu = self.menu.list().await?;
        Ok((orders, menu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderItem, OrderStatus};
    use chrono::Utc;
    use collection_actor::mock::MockClient;

    fn product(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            product_id: id.into(),
            name: name.to_string(),
            description: String::new(),
            price,
            ingredients: Vec::new(),
        }
    }

    fn order(id: &str, status: OrderStatus, items: Vec<OrderItem>) -> Order {
        Order {
            order_id: id.into(),
            customer_name: "Grace".to_string(),
            items,
            status,
            created_at: Utc::now(),
            reserved: None,
        }
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            product("latte", "Caffe Latte", 3.5),
            product("muffin", "Blueberry Muffin", 2.0),
        ]
    }

    #[test]
    fn total_sales_counts_closed_orders_only() {
        let orders = vec![
            order("001", OrderStatus::Closed, vec![OrderItem::new("latte", 2)]),
            order("002", OrderStatus::Open, vec![OrderItem::new("latte", 5)]),
            order(
                "003",
                OrderStatus::Closed,
                vec![OrderItem::new("muffin", 3), OrderItem::new("scone", 4)],
            ),
        ];

        assert_eq!(total_sales(&orders, &menu()), 3.5 * 2.0 + 2.0 * 3.0);
    }

    #[test]
    fn total_sales_follows_current_prices() {
        let orders = vec![order("001", OrderStatus::Closed, vec![OrderItem::new("latte", 2)])];
        let mut repriced = menu();
        repriced[0].price = 4.0;

        assert_eq!(total_sales(&orders, &repriced), 8.0);
    }

    #[test]
    fn popular_items_rank_by_units_sold() {
        let orders = vec![
            order(
                "001",
                OrderStatus::Closed,
                vec![OrderItem::new("latte", 1), OrderItem::new("muffin", 2)],
            ),
            order("002", OrderStatus::Closed, vec![OrderItem::new("latte", 1)]),
            order("003", OrderStatus::Closed, vec![OrderItem::new("scone", 2)]),
            order("004", OrderStatus::Open, vec![OrderItem::new("latte", 9)]),
        ];

        let popular = popular_items(&orders, &menu());
        assert_eq!(
            popular,
            vec![
                PopularItem {
                    product_id: "latte".into(),
                    name: "Caffe Latte".to_string(),
                    count: 2,
                },
                PopularItem {
                    product_id: "muffin".into(),
                    name: "Blueberry Muffin".to_string(),
                    count: 2,
                },
                PopularItem {
                    product_id: "scone".into(),
                    name: String::new(),
                    count: 2,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_aggregator_reads_both_collections() {
        let mut orders = MockClient::<Order>::new();
        let mut menu_mock = MockClient::<MenuItem>::new();
        orders
            .expect_list()
            .return_ok(vec![order("001", OrderStatus::Closed, vec![OrderItem::new("latte", 2)])]);
        menu_mock.expect_list().return_ok(menu());

        let reports = ReportAggregator::new(
            OrderClient::new(orders.client()),
            MenuClient::new(menu_mock.client()),
        );
        let report = reports.total_sales().await.unwrap();

        assert_eq!(report, TotalSalesReport { total_sales: 7.0 });
        orders.verify();
        menu_mock.verify();
    }
}
