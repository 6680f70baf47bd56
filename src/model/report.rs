use crate::model::ProductId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalSalesReport {
    pub total_sales: f64,
}

/// Units sold of one product across closed orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularItem {
    pub product_id: ProductId,
    pub name: String,
    pub count: u64,
}
