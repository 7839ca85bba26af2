//! Wealth portfolio view: summary figures, charts and obligations spread
//! over three pages so each fits a terminal.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, BarChart, Chart, Dataset, Gauge, GraphType, LineGauge, Paragraph, Row, Table},
};
use uikit_types::Effect;
use uikit_util::{format_inr, format_percent_change};

use super::{
    ASSET_ALLOCATION, EXPENSE_CATEGORIES, INCOME_STREAMS, INVESTMENT_GOALS, LIABILITIES, MARKET_INDICATORS, MONTHLY,
    PERFORMANCE, PerformancePoint, PortfolioPage, RECENT_ACTIVITY, RISK_METRICS, SUMMARY, Trend, total_debt,
};
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::widgets::{Card, TabBar};

#[derive(Debug, Default)]
pub struct PortfolioComponent;

impl PortfolioComponent {
    fn page_titles() -> Vec<&'static str> {
        PortfolioPage::ALL.iter().map(|page| page.title()).collect()
    }

    fn trend_style(theme: &dyn Theme, positive: bool) -> Style {
        if positive { theme.status_success() } else { theme.status_error() }
    }

    fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let cells = Layout::horizontal([Constraint::Fill(1); 3]).spacing(2).split(area);
        let wealth = app.portfolio.wealth.value_at(Instant::now());
        let cards = [
            (" Total Wealth ", format_inr(wealth), SUMMARY.monthly_change, "from last month"),
            (" Monthly Returns ", format_inr(SUMMARY.monthly_returns), SUMMARY.returns_change, "from last month"),
            (" Goal Progress ", format!("{:.1}%", SUMMARY.goal_progress), SUMMARY.goal_progress, "of retirement goal"),
        ];
        for ((title, value, change, caption), cell) in cards.iter().zip(cells.iter()) {
            let body = vec![
                Line::from(Span::styled(value.clone(), theme.heading_style())),
                Line::from(vec![
                    Span::styled(format_percent_change(*change), Self::trend_style(theme, *change >= 0.0)),
                    Span::styled(format!(" {caption}"), theme.text_muted_style()),
                ]),
            ];
            frame.render_widget(Card::new(theme).title(title).body(body), *cell);
        }
    }

    fn render_market(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let spans: Vec<Span> = MARKET_INDICATORS
            .iter()
            .flat_map(|indicator| {
                let style = Self::trend_style(theme, indicator.trend == Trend::Up);
                [
                    Span::styled(format!(" {} ", indicator.name), theme.text_secondary_style()),
                    Span::styled(indicator.value, theme.text_primary_style()),
                    Span::styled(format!(" {}   ", indicator.trend.arrow()), style),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_allocation(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let card = Card::new(theme).title(" Asset Allocation ");
        let inner = card.inner(area);
        frame.render_widget(card, area);
        let rows = Layout::vertical([Constraint::Length(1); ASSET_ALLOCATION.len()]).split(inner);
        for (allocation, row) in ASSET_ALLOCATION.iter().zip(rows.iter()) {
            let [label, gauge] = Layout::horizontal([Constraint::Length(24), Constraint::Min(10)]).areas(*row);
            frame.render_widget(
                Paragraph::new(allocation.name).style(theme.text_secondary_style()),
                label,
            );
            frame.render_widget(
                LineGauge::default()
                    .ratio(f64::from(allocation.percent) / 100.0)
                    .label(format!("{:>3}% {}", allocation.percent, format_inr(allocation.amount)))
                    .filled_style(theme.accent_primary_style())
                    .unfilled_style(theme.text_muted_style()),
                gauge,
            );
        }
    }

    fn render_monthly(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let header = Row::new(["Month", "Income", "Expenses", "Savings"]).style(theme.heading_style());
        let rows = MONTHLY.iter().map(|month| {
            Row::new([
                Span::styled(month.month, theme.text_secondary_style()),
                Span::styled(format_inr(month.value), theme.text_primary_style()),
                Span::styled(format_inr(month.expenses), theme.text_primary_style()),
                Span::styled(format_inr(month.savings), Self::trend_style(theme, month.savings >= 0.0)),
            ])
        });
        let card = Card::new(theme).title(" Monthly Overview ");
        let inner = card.inner(area);
        frame.render_widget(card, area);
        frame.render_widget(Table::new(rows, [Constraint::Fill(1); 4]).header(header), inner);
    }

    fn render_goals(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let card = Card::new(theme).title(" Investment Goals ");
        let inner = card.inner(area);
        frame.render_widget(card, area);
        let rows = Layout::vertical([Constraint::Length(2); INVESTMENT_GOALS.len()]).split(inner);
        for (goal, row) in INVESTMENT_GOALS.iter().zip(rows.iter()) {
            let [caption, gauge] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);
            let line = Line::from(vec![
                Span::styled(goal.name, theme.text_primary_style()),
                Span::styled(
                    format!("  {} of {} · {}", format_inr(goal.current), format_inr(goal.target), goal.timeline),
                    theme.text_muted_style(),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), caption);
            frame.render_widget(
                Gauge::default()
                    .ratio(goal.progress_percent() / 100.0)
                    .label(format!("{:.0}%", goal.progress_percent()))
                    .gauge_style(theme.accent_primary_style()),
                gauge,
            );
        }
    }

    fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let [market, summary, details] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(4), Constraint::Min(0)])
                .spacing(1)
                .areas(area);
        Self::render_market(frame, market, theme);
        Self::render_summary(frame, summary, app);
        let [left, right] = Layout::horizontal([Constraint::Fill(1); 2]).spacing(2).areas(details);
        let [allocation, monthly] = Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).areas(left);
        Self::render_allocation(frame, allocation, theme);
        Self::render_monthly(frame, monthly, theme);
        Self::render_goals(frame, right, theme);
    }

    fn render_performance_chart(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let roles = theme.roles();
        let series = |pick: fn(&PerformancePoint) -> f64| -> Vec<(f64, f64)> {
            PERFORMANCE
                .iter()
                .enumerate()
                .map(|(index, point)| (index as f64, pick(point) / 100_000.0))
                .collect()
        };
        let portfolio = series(|point| point.portfolio);
        let benchmark = series(|point| point.benchmark);
        let risk = series(|point| point.risk);
        let datasets = vec![
            Dataset::default()
                .name("Portfolio")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(roles.accent_primary))
                .data(&portfolio),
            Dataset::default()
                .name("Benchmark")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(roles.info))
                .data(&benchmark),
            Dataset::default()
                .name("Risk-adjusted")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(roles.warning))
                .data(&risk),
        ];
        let months: Vec<Span> = PERFORMANCE
            .iter()
            .map(|point| Span::styled(point.month, theme.text_muted_style()))
            .collect();
        let chart = Chart::new(datasets)
            .block(th::block(theme, Some(" Portfolio Performance (₹ lakh) "), false))
            .x_axis(
                Axis::default()
                    .bounds([0.0, (PERFORMANCE.len() - 1) as f64])
                    .labels(months)
                    .style(theme.text_muted_style()),
            )
            .y_axis(
                Axis::default()
                    .bounds([9.0, 13.5])
                    .labels(["9", "11", "13.5"])
                    .style(theme.text_muted_style()),
            );
        frame.render_widget(chart, area);
    }

    fn render_cash_flow(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let [income, expenses] = Layout::horizontal([Constraint::Fill(2), Constraint::Fill(3)]).spacing(1).areas(area);
        let income_bars: Vec<(&str, u64)> = INCOME_STREAMS.iter().map(|flow| (flow.name, flow.amount)).collect();
        let expense_bars: Vec<(&str, u64)> =
            EXPENSE_CATEGORIES.iter().map(|flow| (flow.name, flow.amount)).collect();
        frame.render_widget(
            BarChart::default()
                .block(th::block(theme, Some(" Income "), false))
                .data(income_bars.as_slice())
                .bar_width(6)
                .bar_gap(1)
                .bar_style(theme.status_success())
                .value_style(theme.selection_style()),
            income,
        );
        frame.render_widget(
            BarChart::default()
                .block(th::block(theme, Some(" Expenses "), false))
                .data(expense_bars.as_slice())
                .bar_width(5)
                .bar_gap(1)
                .bar_style(theme.status_error())
                .value_style(theme.selection_style()),
            expenses,
        );
    }

    fn render_risk(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let card = Card::new(theme).title(" Risk Analysis ");
        let inner = card.inner(area);
        frame.render_widget(card, area);
        let [score, metrics] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
        let risk_score = RISK_METRICS.risk_score();
        frame.render_widget(
            LineGauge::default()
                .ratio((f64::from(risk_score) / 100.0).clamp(0.0, 1.0))
                .label(format!("Risk score {risk_score}/100"))
                .filled_style(theme.status_warning())
                .unfilled_style(theme.text_muted_style()),
            score,
        );
        let rows = RISK_METRICS.rows().into_iter().map(|(label, value, description)| {
            Row::new([
                Span::styled(label, theme.text_primary_style()),
                Span::styled(value, theme.accent_primary_style()),
                Span::styled(description, theme.text_muted_style()),
            ])
        });
        frame.render_widget(
            Table::new(rows, [Constraint::Length(14), Constraint::Length(9), Constraint::Min(10)]),
            metrics,
        );
    }

    fn render_performance(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let [chart, lower] = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).spacing(1).areas(area);
        Self::render_performance_chart(frame, chart, theme);
        let [cash, risk] = Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).spacing(2).areas(lower);
        Self::render_cash_flow(frame, cash, theme);
        Self::render_risk(frame, risk, theme);
    }

    fn render_liabilities(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let card = Card::new(theme).title(" Liabilities ");
        let inner = card.inner(area);
        frame.render_widget(card, area);
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend([Constraint::Length(4); LIABILITIES.len()]);
        let rows = Layout::vertical(constraints).split(inner);
        let total = Line::from(vec![
            Span::styled("Total debt ", theme.text_secondary_style()),
            Span::styled(format_inr(total_debt(&LIABILITIES)), theme.heading_style()),
        ]);
        frame.render_widget(Paragraph::new(total), rows[0]);
        for (liability, row) in LIABILITIES.iter().zip(rows.iter().skip(1)) {
            let [title, detail, gauge, _] = Layout::vertical([Constraint::Length(1); 4]).areas(*row);
            let secured = if liability.is_secured { "Secured" } else { "Unsecured" };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(liability.kind, theme.text_primary_style().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", format_inr(liability.amount)), theme.text_primary_style()),
                    Span::styled(format!("  {secured}"), theme.text_muted_style()),
                ])),
                title,
            );
            frame.render_widget(
                Paragraph::new(format!(
                    "{} · EMI {} · {:.1}% p.a.",
                    liability.description,
                    format_inr(liability.monthly_payment),
                    liability.interest_rate
                ))
                .style(theme.text_muted_style()),
                detail,
            );
            frame.render_widget(
                LineGauge::default()
                    .ratio(liability.paid_percent() / 100.0)
                    .label(format!("{:.0}% paid", liability.paid_percent()))
                    .filled_style(theme.status_success())
                    .unfilled_style(theme.text_muted_style()),
                gauge,
            );
        }
    }

    fn render_activity(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let header = Row::new(["Activity", "Amount", "Date", "Status", "Balance"]).style(theme.heading_style());
        let rows = RECENT_ACTIVITY.iter().map(|activity| {
            Row::new([
                Line::from(vec![
                    Span::styled(activity.kind, theme.text_primary_style()),
                    Span::styled(format!(" ({})", activity.category), theme.text_muted_style()),
                ]),
                Line::from(Span::styled(activity.amount, theme.status_success())),
                Line::from(Span::styled(activity.date, theme.text_secondary_style())),
                Line::from(Span::styled(activity.status, theme.text_secondary_style())),
                Line::from(Span::styled(activity.balance, theme.text_primary_style())),
            ])
        });
        let card = Card::new(theme).title(" Recent Activity ");
        let inner = card.inner(area);
        frame.render_widget(card, area);
        frame.render_widget(
            Table::new(
                rows,
                [
                    Constraint::Min(28),
                    Constraint::Length(12),
                    Constraint::Length(12),
                    Constraint::Length(11),
                    Constraint::Length(12),
                ],
            )
            .header(header),
            inner,
        );
    }

    fn render_obligations(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
        let [liabilities, activity] =
            Layout::vertical([Constraint::Length(3 + 4 * LIABILITIES.len() as u16), Constraint::Min(0)])
                .spacing(1)
                .areas(area);
        Self::render_liabilities(frame, liabilities, theme);
        Self::render_activity(frame, activity, theme);
    }
}

impl Component for PortfolioComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left => app.portfolio.cycle_page(false),
            KeyCode::Right => app.portfolio.cycle_page(true),
            KeyCode::Char(digit @ '1'..='3') => app.portfolio.set_page(digit as usize - '1' as usize),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let hit = find_target_index_by_mouse_position(
            &app.portfolio.last_area,
            &app.portfolio.page_areas,
            mouse.column,
            mouse.row,
        );
        if let Some(index) = hit {
            app.portfolio.set_page(index);
            let flag = app.portfolio.pages_focus.clone();
            app.focus.focus(&flag);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let layout = self.get_preferred_layout(app, rect);
        let theme = &*app.ctx.theme;
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Wealth Portfolio", theme.heading_style())),
                Line::from(Span::styled("Figures in Indian rupees, updated monthly.", theme.text_muted_style())),
            ]),
            layout[0],
        );
        let titles = Self::page_titles();
        frame.render_widget(
            TabBar::new(theme, &titles, app.portfolio.page_index()).focused(app.portfolio.pages_focus.get()),
            layout[1],
        );
        match app.portfolio.page() {
            PortfolioPage::Overview => Self::render_overview(frame, layout[2], app),
            PortfolioPage::Performance => Self::render_performance(frame, layout[2], theme),
            PortfolioPage::Obligations => Self::render_obligations(frame, layout[2], theme),
        }
        app.portfolio.page_areas = TabBar::title_areas(layout[1], &titles);
        app.portfolio.last_area = rect;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ←/→", " Page "), (" 1-3", " Jump ")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Pages
            Constraint::Min(0),    // Body
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use uikit_identity::LocalIdentityProvider;
    use uikit_util::{AppConfig, UserPreferences};

    use super::*;
    use crate::app::Shell;
    use crate::loading::CountingNumber;

    fn portfolio_app() -> App {
        App::new(
            Shell::Dashboard,
            &AppConfig::new(Some("pk_test_demo"), None, None).expect("config"),
            Arc::new(LocalIdentityProvider::new("pk_test_demo")),
            Arc::new(UserPreferences::ephemeral()),
        )
    }

    fn draw(app: &mut App) -> String {
        let mut component = PortfolioComponent;
        let mut terminal = Terminal::new(TestBackend::new(130, 44)).expect("terminal");
        terminal.draw(|frame| component.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn overview_shows_finished_counter_and_goals() {
        let mut app = portfolio_app();
        app.portfolio.wealth = CountingNumber::new(SUMMARY.total_value, Instant::now() - Duration::from_secs(5));
        let text = draw(&mut app);
        assert!(text.contains("₹8,47,293"));
        assert!(text.contains("+12.50%"));
        assert!(text.contains("NIFTY 50"));
        assert!(text.contains("Retirement"));
        assert!(text.contains("Indian Stocks"));
    }

    #[test]
    fn arrows_and_digits_change_page() {
        let mut app = portfolio_app();
        let mut component = PortfolioComponent;
        component.handle_key_events(&mut app, KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(app.portfolio.page(), PortfolioPage::Obligations);
        let text = draw(&mut app);
        assert!(text.contains("₹58,00,000"));
        assert!(text.contains("Stock Purchase"));
        component.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE));
        assert_eq!(app.portfolio.page(), PortfolioPage::Performance);
        let text = draw(&mut app);
        assert!(text.contains("Risk score 60/100"));
        assert!(text.contains("Sharpe Ratio"));
    }

    #[test]
    fn clicking_page_title_switches_page() {
        let mut app = portfolio_app();
        draw(&mut app);
        let target = app.portfolio.page_areas[1];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x + 1,
            row: target.y,
            modifiers: KeyModifiers::NONE,
        };
        PortfolioComponent.handle_mouse_events(&mut app, click);
        assert_eq!(app.portfolio.page(), PortfolioPage::Performance);
    }
}
