//! Static sample data for the portfolio view. Amounts are in rupees.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub monthly_returns: f64,
    pub goal_progress: f64,
    pub monthly_change: f64,
    pub returns_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFigures {
    pub month: &'static str,
    pub value: f64,
    pub expenses: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub name: &'static str,
    pub percent: u16,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformancePoint {
    pub month: &'static str,
    pub portfolio: f64,
    pub benchmark: f64,
    pub risk: f64,
}

/// Income source or expense category with its share of the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlow {
    pub name: &'static str,
    pub amount: u64,
    pub percent: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Liability {
    pub kind: &'static str,
    pub amount: f64,
    pub monthly_payment: f64,
    pub interest_rate: f64,
    pub paid: f64,
    pub is_secured: bool,
    pub description: &'static str,
}

impl Liability {
    /// Share of the principal already repaid, 0..=100.
    pub fn paid_percent(&self) -> f64 {
        if self.amount <= 0.0 {
            return 0.0;
        }
        (self.paid / self.amount * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub kind: &'static str,
    pub amount: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub category: &'static str,
    pub balance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentGoal {
    pub name: &'static str,
    pub target: f64,
    pub current: f64,
    pub timeline: &'static str,
}

impl InvestmentGoal {
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskMetrics {
    pub volatility: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub beta: f64,
    pub alpha: f64,
}

impl RiskMetrics {
    /// Score out of 100 derived from volatility and beta.
    pub fn risk_score(&self) -> u16 {
        let score = ((self.volatility / 20.0 + self.beta / 1.5) * 50.0).round();
        score.clamp(0.0, f64::from(u16::MAX)) as u16
    }

    /// Label, formatted value and description for each metric.
    pub fn rows(&self) -> [(&'static str, String, &'static str); 5] {
        [
            ("Volatility", format!("{:.2}", self.volatility), "Price variation over time"),
            ("Sharpe Ratio", format!("{:.2}", self.sharpe_ratio), "Risk-adjusted return"),
            ("Alpha", format!("{:.2}", self.alpha), "Excess return vs benchmark"),
            ("Beta", format!("{:.2}", self.beta), "Market sensitivity"),
            ("Max Drawdown", format!("{:.2}%", self.max_drawdown), "Largest peak-to-trough decline"),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketIndicator {
    pub name: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

pub const SUMMARY: PortfolioSummary = PortfolioSummary {
    total_value: 847_293.0,
    monthly_returns: 4_483.0,
    goal_progress: 42.3,
    monthly_change: 12.5,
    returns_change: 8.2,
};

pub const MONTHLY: [MonthlyFigures; 6] = [
    MonthlyFigures { month: "Jan", value: 4000.0, expenses: 2800.0, savings: 1200.0 },
    MonthlyFigures { month: "Feb", value: 3000.0, expenses: 2600.0, savings: 400.0 },
    MonthlyFigures { month: "Mar", value: 5000.0, expenses: 2900.0, savings: 2100.0 },
    MonthlyFigures { month: "Apr", value: 2780.0, expenses: 2500.0, savings: 280.0 },
    MonthlyFigures { month: "May", value: 1890.0, expenses: 2400.0, savings: -510.0 },
    MonthlyFigures { month: "Jun", value: 2390.0, expenses: 2200.0, savings: 190.0 },
];

pub const ASSET_ALLOCATION: [Allocation; 5] = [
    Allocation { name: "Indian Stocks", percent: 45, amount: 4_500_000.0 },
    Allocation { name: "Indian Bonds", percent: 25, amount: 2_500_000.0 },
    Allocation { name: "International Markets", percent: 15, amount: 1_500_000.0 },
    Allocation { name: "Real Estate (India)", percent: 10, amount: 1_000_000.0 },
    Allocation { name: "Cash & Others", percent: 5, amount: 500_000.0 },
];

pub const PERFORMANCE: [PerformancePoint; 6] = [
    PerformancePoint { month: "Jan", portfolio: 1_000_000.0, benchmark: 980_000.0, risk: 950_000.0 },
    PerformancePoint { month: "Feb", portfolio: 1_050_000.0, benchmark: 1_000_000.0, risk: 980_000.0 },
    PerformancePoint { month: "Mar", portfolio: 1_150_000.0, benchmark: 1_100_000.0, risk: 1_050_000.0 },
    PerformancePoint { month: "Apr", portfolio: 1_200_000.0, benchmark: 1_150_000.0, risk: 1_100_000.0 },
    PerformancePoint { month: "May", portfolio: 1_250_000.0, benchmark: 1_200_000.0, risk: 1_150_000.0 },
    PerformancePoint { month: "Jun", portfolio: 1_300_000.0, benchmark: 1_250_000.0, risk: 1_200_000.0 },
];

pub const INCOME_STREAMS: [CashFlow; 4] = [
    CashFlow { name: "Primary Salary", amount: 8500, percent: 70 },
    CashFlow { name: "Investments", amount: 2000, percent: 16 },
    CashFlow { name: "Side Business", amount: 1200, percent: 10 },
    CashFlow { name: "Rental Income", amount: 500, percent: 4 },
];

pub const EXPENSE_CATEGORIES: [CashFlow; 7] = [
    CashFlow { name: "Housing", amount: 2500, percent: 35 },
    CashFlow { name: "Transportation", amount: 800, percent: 11 },
    CashFlow { name: "Food", amount: 1000, percent: 14 },
    CashFlow { name: "Utilities", amount: 400, percent: 6 },
    CashFlow { name: "Insurance", amount: 300, percent: 4 },
    CashFlow { name: "Entertainment", amount: 600, percent: 8 },
    CashFlow { name: "Savings", amount: 1500, percent: 21 },
];

pub const LIABILITIES: [Liability; 2] = [
    Liability {
        kind: "Home Loan",
        amount: 5_000_000.0,
        monthly_payment: 42_000.0,
        interest_rate: 8.5,
        paid: 1_500_000.0,
        is_secured: true,
        description: "Home loan from SBI",
    },
    Liability {
        kind: "Car Loan",
        amount: 800_000.0,
        monthly_payment: 15_000.0,
        interest_rate: 9.5,
        paid: 300_000.0,
        is_secured: true,
        description: "Car loan from HDFC",
    },
];

pub const RECENT_ACTIVITY: [Activity; 2] = [
    Activity {
        kind: "Stock Purchase",
        amount: "+ ₹50,000",
        date: "2024-01-25",
        status: "Completed",
        category: "HDFC Bank",
        balance: "₹4,50,000",
    },
    Activity {
        kind: "SIP Investment",
        amount: "+ ₹25,000",
        date: "2024-01-20",
        status: "Completed",
        category: "Mutual Funds",
        balance: "₹4,00,000",
    },
];

pub const INVESTMENT_GOALS: [InvestmentGoal; 4] = [
    InvestmentGoal { name: "Retirement", target: 2_000_000.0, current: 847_293.0, timeline: "20 years" },
    InvestmentGoal { name: "House Down Payment", target: 100_000.0, current: 45_000.0, timeline: "3 years" },
    InvestmentGoal { name: "Emergency Fund", target: 50_000.0, current: 35_000.0, timeline: "1 year" },
    InvestmentGoal { name: "Children Education", target: 150_000.0, current: 25_000.0, timeline: "10 years" },
];

pub const RISK_METRICS: RiskMetrics = RiskMetrics {
    volatility: 12.5,
    sharpe_ratio: 1.8,
    max_drawdown: -15.2,
    beta: 0.85,
    alpha: 2.3,
};

pub const MARKET_INDICATORS: [MarketIndicator; 4] = [
    MarketIndicator { name: "NIFTY 50", value: "22,378.40", trend: Trend::Up },
    MarketIndicator { name: "SENSEX", value: "73,745.35", trend: Trend::Up },
    MarketIndicator { name: "BANK NIFTY", value: "46,875.20", trend: Trend::Down },
    MarketIndicator { name: "NIFTY IT", value: "33,456.80", trend: Trend::Up },
];

/// Sum of all liability principals.
pub fn total_debt(liabilities: &[Liability]) -> f64 {
    liabilities.iter().map(|liability| liability.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_score_matches_formula() {
        assert_eq!(RISK_METRICS.risk_score(), 60);
        let calm = RiskMetrics {
            volatility: 0.0,
            beta: 0.0,
            ..RISK_METRICS
        };
        assert_eq!(calm.risk_score(), 0);
    }

    #[test]
    fn total_debt_sums_principals() {
        assert_eq!(total_debt(&LIABILITIES), 5_800_000.0);
        assert_eq!(total_debt(&[]), 0.0);
    }

    #[test]
    fn progress_helpers_clamp() {
        assert!((LIABILITIES[0].paid_percent() - 30.0).abs() < f64::EPSILON);
        assert!((INVESTMENT_GOALS[2].progress_percent() - 70.0).abs() < 1e-9);
        let overfunded = InvestmentGoal {
            current: 500.0,
            target: 100.0,
            ..INVESTMENT_GOALS[0]
        };
        assert_eq!(overfunded.progress_percent(), 100.0);
    }

    #[test]
    fn allocation_shares_add_up() {
        let total: u16 = ASSET_ALLOCATION.iter().map(|a| a.percent).sum();
        assert_eq!(total, 100);
        assert_eq!(RISK_METRICS.rows()[4].1, "-15.20%");
    }
}
