//! Owner share calculation and dashboard aggregation.
//!
//! Both calculators are pure functions over already-fetched
//! collections; [`BusinessService`] only glues them to the
//! repositories. Amounts are summed as-is, derived values are rounded
//! to 2 decimals at the edge.

use serde::Serialize;

use crate::db::models::{Expense, Owner, ProductionBatch, Sale, WarrantyClaim};
use crate::db::repository::{
    ExpenseRepository, OwnerRepository, ProductionRepository, RepoResult, SaleRepository,
    WarrantyRepository,
};
use crate::services::forecast::{self, ExpenseForecast};
use crate::utils::round2;

/// One owner's slice of the profit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerShare {
    pub name: String,
    pub email: String,
    pub investment_amount: f64,
    pub ownership_percentage: f64,
    pub profit_share: f64,
    pub roi: f64,
}

/// Share calculation result: per-owner shares plus the aggregate totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerShareReport {
    pub shares: Vec<OwnerShare>,
    pub total_investment: f64,
    pub total_profit_loss: f64,
    pub total_sales: f64,
    pub total_production: f64,
    pub total_expenses: f64,
}

/// Dashboard aggregates: simple sums and counts, nothing derived
/// beyond `profitLoss` and `warrantyPending`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_sales: f64,
    pub total_expenses: f64,
    pub total_production: f64,
    pub profit_loss: f64,
    pub sales_count: usize,
    pub expense_count: usize,
    pub production_count: usize,
    pub warranty_count: usize,
    pub warranty_replaced: usize,
    pub warranty_pending: usize,
}

/// Compute each owner's ownership percentage and profit share,
/// proportional to investment.
///
/// Guarantees (within rounding epsilon): ownership percentages sum to
/// 100 whenever total investment is positive, and profit shares sum to
/// the overall profit/loss.
pub fn calculate_owner_shares(
    owners: &[Owner],
    sales: &[Sale],
    batches: &[ProductionBatch],
    expenses: &[Expense],
) -> OwnerShareReport {
    let total_sales: f64 = sales.iter().map(|s| s.total_amount).sum();
    let total_production: f64 = batches.iter().map(|b| b.total_cost).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();

    // May be negative; a loss is distributed the same way
    let profit_loss = total_sales - total_production - total_expenses;
    let total_investment: f64 = owners.iter().map(|o| o.investment_amount).sum();

    let shares = owners
        .iter()
        .map(|owner| {
            let investment = owner.investment_amount;
            let ownership_percentage = if total_investment > 0.0 {
                investment / total_investment * 100.0
            } else {
                0.0
            };
            let profit_share = profit_loss * ownership_percentage / 100.0;
            let roi = if investment > 0.0 {
                round2(profit_share / investment * 100.0)
            } else {
                0.0
            };

            OwnerShare {
                name: owner.name.clone(),
                email: owner.email.clone(),
                investment_amount: investment,
                ownership_percentage: round2(ownership_percentage),
                profit_share: round2(profit_share),
                roi,
            }
        })
        .collect();

    OwnerShareReport {
        shares,
        total_investment,
        total_profit_loss: profit_loss,
        total_sales,
        total_production,
        total_expenses,
    }
}

/// Sum and count everything the dashboard shows.
pub fn aggregate_dashboard_metrics(
    sales: &[Sale],
    batches: &[ProductionBatch],
    expenses: &[Expense],
    claims: &[WarrantyClaim],
) -> DashboardMetrics {
    let total_sales: f64 = sales.iter().map(|s| s.total_amount).sum();
    let total_production: f64 = batches.iter().map(|b| b.total_cost).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();

    let warranty_replaced = claims.iter().filter(|c| c.replaced).count();

    DashboardMetrics {
        total_sales,
        total_expenses,
        total_production,
        profit_loss: total_sales - total_production - total_expenses,
        sales_count: sales.len(),
        expense_count: expenses.len(),
        production_count: batches.len(),
        warranty_count: claims.len(),
        warranty_replaced,
        warranty_pending: claims.len() - warranty_replaced,
    }
}

/// Fetches the collections and runs the calculators. Any data-access
/// fault surfaces as a tagged failure; no partial results.
#[derive(Clone)]
pub struct BusinessService {
    owners: OwnerRepository,
    sales: SaleRepository,
    production: ProductionRepository,
    expenses: ExpenseRepository,
    warranty: WarrantyRepository,
}

impl BusinessService {
    pub fn new(
        owners: OwnerRepository,
        sales: SaleRepository,
        production: ProductionRepository,
        expenses: ExpenseRepository,
        warranty: WarrantyRepository,
    ) -> Self {
        Self {
            owners,
            sales,
            production,
            expenses,
            warranty,
        }
    }

    /// Profit shares for all owners.
    pub async fn owner_shares(&self) -> RepoResult<OwnerShareReport> {
        let owners = self.owners.find_all().await?;
        let sales = self.sales.find_all().await?;
        let batches = self.production.find_all().await?;
        let expenses = self.expenses.find_all().await?;

        Ok(calculate_owner_shares(&owners, &sales, &batches, &expenses))
    }

    /// Next-month expense forecast.
    pub async fn predict_expenses(&self) -> RepoResult<ExpenseForecast> {
        let expenses = self.expenses.find_all().await?;
        Ok(forecast::forecast_expenses(&expenses))
    }

    /// All dashboard metrics.
    pub async fn dashboard_metrics(&self) -> RepoResult<DashboardMetrics> {
        let sales = self.sales.find_all().await?;
        let batches = self.production.find_all().await?;
        let expenses = self.expenses.find_all().await?;
        let claims = self.warranty.find_all().await?;

        Ok(aggregate_dashboard_metrics(
            &sales, &batches, &expenses, &claims,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(name: &str, investment: f64) -> Owner {
        Owner {
            id: None,
            name: name.to_string(),
            email: format!("{name}@example.com"),
            investment_amount: investment,
            created_at: None,
            updated_at: None,
        }
    }

    fn sale(amount: f64) -> Sale {
        Sale {
            id: None,
            total_amount: amount,
            created_at: None,
            updated_at: None,
        }
    }

    fn batch(cost: f64) -> ProductionBatch {
        ProductionBatch {
            id: None,
            total_cost: cost,
            created_at: None,
            updated_at: None,
        }
    }

    fn expense(amount: f64) -> Expense {
        Expense {
            id: None,
            amount,
            category: "general".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn claim(replaced: bool) -> WarrantyClaim {
        WarrantyClaim {
            id: None,
            replaced,
            created_at: None,
            updated_at: None,
        }
    }

    const EPS: f64 = 0.05;

    #[test]
    fn percentages_sum_to_hundred() {
        let owners = vec![owner("a", 3000.0), owner("b", 5000.0), owner("c", 2000.0)];
        let report = calculate_owner_shares(&owners, &[sale(1000.0)], &[], &[]);

        let pct_sum: f64 = report.shares.iter().map(|s| s.ownership_percentage).sum();
        assert!((pct_sum - 100.0).abs() < EPS, "pct_sum = {pct_sum}");
    }

    #[test]
    fn profit_shares_sum_to_profit_loss() {
        let owners = vec![owner("a", 700.0), owner("b", 300.0)];
        let sales = vec![sale(500.0), sale(300.0)];
        let batches = vec![batch(200.0)];
        let expenses = vec![expense(100.0)];

        let report = calculate_owner_shares(&owners, &sales, &batches, &expenses);
        assert_eq!(report.total_profit_loss, 500.0);

        let share_sum: f64 = report.shares.iter().map(|s| s.profit_share).sum();
        assert!((share_sum - 500.0).abs() < EPS, "share_sum = {share_sum}");
    }

    #[test]
    fn loss_is_distributed_proportionally() {
        let owners = vec![owner("a", 500.0), owner("b", 500.0)];
        let report = calculate_owner_shares(&owners, &[], &[batch(400.0)], &[]);

        assert_eq!(report.total_profit_loss, -400.0);
        assert_eq!(report.shares[0].profit_share, -200.0);
        assert_eq!(report.shares[0].roi, -40.0);
    }

    #[test]
    fn zero_total_investment_yields_zero_shares() {
        let owners = vec![owner("a", 0.0)];
        let report = calculate_owner_shares(&owners, &[sale(100.0)], &[], &[]);

        assert_eq!(report.shares[0].ownership_percentage, 0.0);
        assert_eq!(report.shares[0].profit_share, 0.0);
        assert_eq!(report.shares[0].roi, 0.0);
    }

    #[test]
    fn dashboard_sums_and_counts() {
        let metrics = aggregate_dashboard_metrics(
            &[sale(500.0), sale(300.0)],
            &[batch(200.0)],
            &[expense(100.0)],
            &[claim(true), claim(false), claim(false)],
        );

        assert_eq!(metrics.total_sales, 800.0);
        assert_eq!(metrics.total_production, 200.0);
        assert_eq!(metrics.total_expenses, 100.0);
        assert_eq!(metrics.profit_loss, 500.0);
        assert_eq!(metrics.sales_count, 2);
        assert_eq!(metrics.warranty_count, 3);
        assert_eq!(metrics.warranty_replaced, 1);
        assert_eq!(metrics.warranty_pending, 2);
    }

    #[test]
    fn warranty_pending_is_count_minus_replaced() {
        let metrics = aggregate_dashboard_metrics(&[], &[], &[], &[claim(true), claim(true)]);
        assert_eq!(metrics.warranty_pending, 0);
    }
}
