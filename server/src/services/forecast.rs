//! Next-month expense forecast.
//!
//! Expenses are bucketed by calendar month of `createdAt` and an
//! ordinary least-squares line is fitted over the ordered monthly
//! sums. The prediction is one step past the last month, clamped to
//! non-negative. No outlier rejection, no seasonality.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::models::Expense;
use crate::utils::round2;

/// Forecast reliability, based solely on how many months of history
/// exist. A fixed heuristic, intentionally simple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Forecast result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForecast {
    /// Month key (`YYYY-MM`) -> summed amount, sorted ascending
    pub historical_data: BTreeMap<String, f64>,
    pub predicted_next_month: f64,
    pub confidence: Confidence,
    pub months_analyzed: usize,
}

/// Fit a least-squares line over the monthly totals and extrapolate
/// one month forward.
///
/// Zero months of history predicts 0; a single month predicts that
/// month's value; both at Low confidence. These are defined outputs,
/// not errors.
pub fn forecast_expenses(expenses: &[Expense]) -> ExpenseForecast {
    // BTreeMap keeps the month keys sorted ascending
    let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        if let Some(created_at) = expense.created_at {
            let month_key = created_at.format("%Y-%m").to_string();
            *monthly.entry(month_key).or_insert(0.0) += expense.amount;
        }
    }

    let values: Vec<f64> = monthly.values().copied().collect();
    let n = values.len();

    if n < 2 {
        return ExpenseForecast {
            predicted_next_month: values.first().copied().unwrap_or(0.0),
            confidence: Confidence::Low,
            months_analyzed: n,
            historical_data: monthly,
        };
    }

    // OLS over x = 1..n
    let nf = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, y) in values.iter().enumerate() {
        let x = (i + 1) as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = nf * sum_x2 - sum_x * sum_x;
    let slope = if denominator == 0.0 {
        0.0
    } else {
        (nf * sum_xy - sum_x * sum_y) / denominator
    };
    let intercept = (sum_y - slope * sum_x) / nf;

    // Extrapolate one step, clamped to non-negative
    let prediction = (intercept + slope * (nf + 1.0)).max(0.0);

    let confidence = if n >= 3 {
        Confidence::High
    } else {
        Confidence::Medium
    };

    ExpenseForecast {
        predicted_next_month: round2(prediction),
        confidence,
        months_analyzed: n,
        historical_data: monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn expense_in(year: i32, month: u32, amount: f64) -> Expense {
        Expense {
            id: None,
            amount,
            category: "general".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap()),
            updated_at: None,
        }
    }

    #[test]
    fn no_history_predicts_zero_at_low_confidence() {
        let forecast = forecast_expenses(&[]);
        assert_eq!(forecast.predicted_next_month, 0.0);
        assert_eq!(forecast.confidence, Confidence::Low);
        assert_eq!(forecast.months_analyzed, 0);
        assert!(forecast.historical_data.is_empty());
    }

    #[test]
    fn single_month_predicts_its_value() {
        let forecast = forecast_expenses(&[
            expense_in(2026, 3, 70.0),
            expense_in(2026, 3, 30.0),
        ]);
        assert_eq!(forecast.predicted_next_month, 100.0);
        assert_eq!(forecast.confidence, Confidence::Low);
        assert_eq!(forecast.months_analyzed, 1);
    }

    #[test]
    fn two_months_is_medium_confidence() {
        let forecast = forecast_expenses(&[
            expense_in(2026, 1, 100.0),
            expense_in(2026, 2, 200.0),
        ]);
        assert_eq!(forecast.confidence, Confidence::Medium);
        assert_eq!(forecast.predicted_next_month, 300.0);
    }

    #[test]
    fn rising_trend_extrapolates_linearly() {
        // [100, 200, 300] -> slope 100, intercept 0, month 4 = 400
        let forecast = forecast_expenses(&[
            expense_in(2026, 1, 100.0),
            expense_in(2026, 2, 200.0),
            expense_in(2026, 3, 300.0),
        ]);
        assert_eq!(forecast.predicted_next_month, 400.0);
        assert_eq!(forecast.confidence, Confidence::High);
        assert_eq!(forecast.months_analyzed, 3);
    }

    #[test]
    fn declining_trend_is_clamped_at_zero() {
        // [300, 200, 100] -> line hits 0 at month 4
        let forecast = forecast_expenses(&[
            expense_in(2026, 1, 300.0),
            expense_in(2026, 2, 200.0),
            expense_in(2026, 3, 100.0),
        ]);
        assert_eq!(forecast.predicted_next_month, 0.0);
    }

    #[test]
    fn buckets_span_year_boundaries() {
        let forecast = forecast_expenses(&[
            expense_in(2025, 12, 50.0),
            expense_in(2026, 1, 80.0),
        ]);
        let months: Vec<&String> = forecast.historical_data.keys().collect();
        assert_eq!(months, vec!["2025-12", "2026-01"]);
        assert_eq!(forecast.historical_data["2025-12"], 50.0);
        assert_eq!(forecast.historical_data["2026-01"], 80.0);
    }
}
