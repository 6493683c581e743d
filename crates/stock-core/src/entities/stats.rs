//! Dashboard summary snapshot

/// Aggregate counts and sums shown on the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub total_items: i64,
    pub total_locations: i64,
    pub total_transactions: i64,
    /// Items with `current_stock <= minimum_stock`
    pub low_stock_items: i64,
    /// Sum of `current_stock * cost` over items with positive stock
    pub total_value: f64,
}

impl DashboardStats {
    /// Share of items at or below their minimum stock, in `0.0..=1.0`
    pub fn low_stock_ratio(&self) -> f64 {
        if self.total_items == 0 {
            0.0
        } else {
            self.low_stock_items as f64 / self.total_items as f64
        }
    }
}
