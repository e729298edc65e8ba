// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Parametrized aggregate queries over the expense store: period
//! comparison, category breakdown and time-bucketed trends. Every
//! aggregator returns a defined value for the empty-data case.

use anyhow::Result;
use chrono::{Datelike, Utc};
use rusqlite::Connection;
use serde::Serialize;

use crate::utils::fmt_usd;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    // Clamp to 1..=12 so a stray 0 cannot underflow the index.
    MONTH_NAMES[(month.clamp(1, 12) as usize) - 1]
}

/// Accepts full month names, 3-letter abbreviations ("sept" included) and
/// numbers 1-12.
pub fn month_number(s: &str) -> Option<u32> {
    let lowered = s.trim().to_lowercase();
    if let Ok(n) = lowered.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    if lowered == "sept" {
        return Some(9);
    }
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == lowered || name[..3] == lowered
        })
        .map(|i| i as u32 + 1)
}

// ---------------------------------------------------------------------------
// Period comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl Period {
    pub fn parse(s: &str) -> std::result::Result<Period, String> {
        match s {
            "this_month" => Ok(Period::ThisMonth),
            "last_month" => Ok(Period::LastMonth),
            "this_year" => Ok(Period::ThisYear),
            "last_year" => Ok(Period::LastYear),
            other => Err(format!(
                "Invalid period '{}'. Use: this_month, last_month, this_year, last_year",
                other
            )),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::ThisMonth => "this_month",
            Period::LastMonth => "last_month",
            Period::ThisYear => "this_year",
            Period::LastYear => "last_year",
        }
    }

    fn filter_sql(&self) -> &'static str {
        match self {
            Period::ThisMonth => "strftime('%Y-%m', date) = strftime('%Y-%m', 'now')",
            Period::LastMonth => "strftime('%Y-%m', date) = strftime('%Y-%m', 'now', '-1 month')",
            Period::ThisYear => "strftime('%Y', date) = strftime('%Y', 'now')",
            Period::LastYear => "strftime('%Y', date) = strftime('%Y', 'now', '-1 year')",
        }
    }
}

fn period_total(conn: &Connection, period: Period) -> Result<f64> {
    let sql = format!(
        "SELECT IFNULL(SUM(amount), 0) FROM expenses WHERE {}",
        period.filter_sql()
    );
    let total: f64 = conn.query_row(&sql, [], |r| r.get(0))?;
    Ok(total)
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodComparison {
    pub period1: String,
    pub period2: String,
    pub total1: f64,
    pub total2: f64,
    pub change: f64,
    pub change_percent: f64,
    pub summary: String,
}

/// Sum the two periods and compute absolute and percentage change. A zero
/// baseline yields zero percentage change, never a division fault.
pub fn compare_periods(conn: &Connection, p1: Period, p2: Period) -> Result<PeriodComparison> {
    let total1 = period_total(conn, p1)?;
    let total2 = period_total(conn, p2)?;
    let change = total1 - total2;
    let change_percent = if total2 > 0.0 {
        (change / total2) * 100.0
    } else {
        0.0
    };
    let summary = format!(
        "{}: {}, {}: {}, Change: {:+.1}%",
        p1.label(),
        fmt_usd(total1),
        p2.label(),
        fmt_usd(total2),
        change_percent
    );
    Ok(PeriodComparison {
        period1: p1.label().to_string(),
        period2: p2.label().to_string(),
        total1,
        total2,
        change,
        change_percent,
        summary,
    })
}

// ---------------------------------------------------------------------------
// Insights report (this vs last month, plus top categories)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct TopCategory {
    pub name: String,
    pub total: f64,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsReport {
    pub this_total: f64,
    pub last_total: f64,
    pub change: f64,
    pub change_percent: f64,
    pub top_categories: Vec<TopCategory>,
}

pub fn spending_insights(conn: &Connection) -> Result<InsightsReport> {
    let this_total = period_total(conn, Period::ThisMonth)?;
    let last_total = period_total(conn, Period::LastMonth)?;
    let change = this_total - last_total;
    let change_percent = if last_total > 0.0 {
        (change / last_total) * 100.0
    } else {
        0.0
    };

    let mut stmt = conn.prepare(
        "SELECT category, SUM(amount) AS total, COUNT(*) AS count
         FROM expenses
         WHERE strftime('%Y-%m', date) = strftime('%Y-%m', 'now')
         GROUP BY category ORDER BY total DESC LIMIT 5",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, Option<String>>(0)?,
            r.get::<_, f64>(1)?,
            r.get::<_, i64>(2)?,
        ))
    })?;
    let mut top_categories = Vec::new();
    for row in rows {
        let (name, total, count) = row?;
        top_categories.push(TopCategory {
            name: name.unwrap_or_else(|| "Uncategorized".to_string()),
            total,
            count,
        });
    }

    Ok(InsightsReport {
        this_total,
        last_total,
        change,
        change_percent,
        top_categories,
    })
}

impl InsightsReport {
    pub fn render(&self) -> String {
        let comparison = if self.last_total > 0.0 {
            format!(
                "{} {} ({:.1}%)",
                if self.change > 0.0 { "↑" } else { "↓" },
                fmt_usd(self.change.abs()),
                self.change_percent.abs()
            )
        } else {
            "No previous data".to_string()
        };
        let mut report = format!(
            "📊 Spending Insights\n\nThis Month: {}\nLast Month: {}\nChange: {}\n\nTop Categories This Month:",
            fmt_usd(self.this_total),
            fmt_usd(self.last_total),
            comparison
        );
        if self.top_categories.is_empty() {
            report.push_str("\nNo expenses yet this month");
        } else {
            for cat in &self.top_categories {
                report.push_str(&format!(
                    "\n• {}: {} ({} transactions)",
                    cat.name,
                    fmt_usd(cat.total),
                    cat.count
                ));
            }
        }
        report
    }
}

// ---------------------------------------------------------------------------
// Category breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakdownPeriod {
    Week,
    ThisMonth,
    LastMonth,
    Year,
    AllTime,
    Month { month: u32, year: i32 },
}

impl BreakdownPeriod {
    /// `period` is one of week/month/last_month/year/all/specific_month;
    /// specific_month takes a month name or number plus an optional year
    /// (defaulting to the current one).
    pub fn parse(
        period: &str,
        specific_month: Option<&str>,
        year: Option<i32>,
    ) -> std::result::Result<BreakdownPeriod, String> {
        match period {
            "week" => Ok(BreakdownPeriod::Week),
            "month" | "" => Ok(BreakdownPeriod::ThisMonth),
            "last_month" => Ok(BreakdownPeriod::LastMonth),
            "year" => Ok(BreakdownPeriod::Year),
            "all" => Ok(BreakdownPeriod::AllTime),
            "specific_month" => {
                let name = specific_month
                    .ok_or_else(|| "specific_month requires a month name or number".to_string())?;
                let month = month_number(name).ok_or_else(|| format!("Unknown month '{}'", name))?;
                let year = year.unwrap_or_else(|| Utc::now().year());
                Ok(BreakdownPeriod::Month { month, year })
            }
            other => Err(format!(
                "Invalid period '{}'. Use: week, month, last_month, year, all, specific_month",
                other
            )),
        }
    }

    pub fn label(&self) -> String {
        match self {
            BreakdownPeriod::Week => "Last 7 Days".to_string(),
            BreakdownPeriod::ThisMonth => "This Month".to_string(),
            BreakdownPeriod::LastMonth => "Last Month".to_string(),
            BreakdownPeriod::Year => "Last 12 Months".to_string(),
            BreakdownPeriod::AllTime => "All Time".to_string(),
            BreakdownPeriod::Month { month, year } => {
                format!("{} {}", month_name(*month), year)
            }
        }
    }

    fn date_filter(&self) -> String {
        match self {
            BreakdownPeriod::Week => "WHERE date >= date('now', '-7 days')".to_string(),
            BreakdownPeriod::ThisMonth => {
                "WHERE strftime('%Y-%m', date) = strftime('%Y-%m', 'now')".to_string()
            }
            BreakdownPeriod::LastMonth => {
                "WHERE strftime('%Y-%m', date) = strftime('%Y-%m', 'now', '-1 month')".to_string()
            }
            BreakdownPeriod::Year => "WHERE date >= date('now', '-12 months')".to_string(),
            BreakdownPeriod::AllTime => String::new(),
            BreakdownPeriod::Month { month, year } => {
                format!("WHERE strftime('%Y-%m', date) = '{:04}-{:02}'", year, month)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub period_label: String,
    pub total: f64,
    pub categories: Vec<CategorySlice>,
}

/// Per-category totals, counts and share of the period total. Rows without
/// a category are surfaced as "Uncategorized". Ok(None) means no data for
/// the period.
pub fn category_breakdown(
    conn: &Connection,
    period: &BreakdownPeriod,
) -> Result<Option<CategoryBreakdown>> {
    let sql = format!(
        "SELECT category, SUM(amount) AS total, COUNT(*) AS count
         FROM expenses {} GROUP BY category ORDER BY total DESC",
        period.date_filter()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, Option<String>>(0)?,
            r.get::<_, f64>(1)?,
            r.get::<_, i64>(2)?,
        ))
    })?;

    let mut raw = Vec::new();
    for row in rows {
        raw.push(row?);
    }
    if raw.is_empty() {
        return Ok(None);
    }

    let total: f64 = raw.iter().map(|(_, t, _)| t).sum();
    let categories = raw
        .into_iter()
        .map(|(name, value, count)| CategorySlice {
            name: name.unwrap_or_else(|| "Uncategorized".to_string()),
            value,
            count,
            percentage: if total > 0.0 { value / total * 100.0 } else { 0.0 },
        })
        .collect();

    Ok(Some(CategoryBreakdown {
        period_label: period.label(),
        total,
        categories,
    }))
}

impl CategoryBreakdown {
    pub fn render(&self) -> String {
        let mut out = format!(
            "Category Breakdown ({} - Total: {}):",
            self.period_label,
            fmt_usd(self.total)
        );
        for c in &self.categories {
            out.push_str(&format!(
                "\n  {}: {} ({:.1}%) - {} transactions",
                c.name,
                fmt_usd(c.value),
                c.percentage,
                c.count
            ));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Trends
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPeriod {
    Week,
    Month,
    Year,
}

impl TrendPeriod {
    pub fn parse(s: &str) -> std::result::Result<TrendPeriod, String> {
        match s {
            "week" => Ok(TrendPeriod::Week),
            "month" => Ok(TrendPeriod::Month),
            "year" => Ok(TrendPeriod::Year),
            other => Err(format!(
                "Invalid period '{}'. Use: 'week', 'month', or 'year'",
                other
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendPeriod::Week => "week",
            TrendPeriod::Month => "month",
            TrendPeriod::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendPeriod::Week => "Last 7 Days",
            TrendPeriod::Month => "Last 2 Months",
            TrendPeriod::Year => "Last 12 Months",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub period: String,
    pub period_label: String,
    pub data: Vec<TrendPoint>,
}

/// Time-bucketed totals: daily for a week, a two-month comparison window,
/// monthly for a year. Points are ordered oldest first, ready for charting.
/// Ok(None) means no data in the window.
pub fn spending_trends(conn: &Connection, period: TrendPeriod) -> Result<Option<TrendReport>> {
    let sql = match period {
        TrendPeriod::Week => {
            "SELECT date(date) AS bucket, SUM(amount) AS amount
             FROM expenses WHERE date >= date('now', '-7 days')
             GROUP BY date(date) ORDER BY bucket ASC"
        }
        TrendPeriod::Month => {
            "SELECT strftime('%Y-%m', date) AS bucket, SUM(amount) AS amount
             FROM expenses WHERE strftime('%Y-%m', date) >= strftime('%Y-%m', 'now', '-1 month')
             GROUP BY strftime('%Y-%m', date) ORDER BY bucket ASC"
        }
        TrendPeriod::Year => {
            "SELECT strftime('%Y-%m', date) AS bucket, SUM(amount) AS amount
             FROM expenses WHERE date >= date('now', '-12 months')
             GROUP BY strftime('%Y-%m', date) ORDER BY bucket ASC"
        }
    };
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |r| {
        Ok((r.get::<_, String>(0)?, r.get::<_, f64>(1)?))
    })?;

    let mut data = Vec::new();
    for row in rows {
        let (bucket, amount) = row?;
        let label = if period == TrendPeriod::Month {
            month_display(&bucket)
        } else {
            bucket
        };
        data.push(TrendPoint { date: label, amount });
    }
    if data.is_empty() {
        return Ok(None);
    }

    Ok(Some(TrendReport {
        period: period.as_str().to_string(),
        period_label: period.label().to_string(),
        data,
    }))
}

// "2026-01" -> "January 2026"; unparseable buckets pass through untouched.
fn month_display(ym: &str) -> String {
    let mut parts = ym.splitn(2, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts
        .next()
        .and_then(|m| m.parse::<u32>().ok())
        .filter(|m| (1..=12).contains(m));
    match month {
        Some(m) => format!("{} {}", month_name(m), year),
        None => ym.to_string(),
    }
}

impl TrendReport {
    pub fn render(&self) -> String {
        let total: f64 = self.data.iter().map(|p| p.amount).sum();
        let avg = total / self.data.len() as f64;
        let mut out = format!(
            "Spending trends ({}):\nTotal: {}, Average: {} per bucket\nActivity:",
            self.period,
            fmt_usd(total),
            fmt_usd(avg)
        );
        for p in &self.data {
            out.push_str(&format!("\n  {}: {}", p.date, fmt_usd(p.amount)));
        }
        out
    }
}
