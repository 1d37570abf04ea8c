use finance_domain::formatting::format_currency;
use finance_domain::{ProfileSource, Services};
use shared::AppConfig;
use yew::prelude::*;

use crate::components::expense_chart::ExpenseChart;
use crate::components::expense_table::ExpenseTable;
use crate::components::key_metrics::KeyMetricsGrid;
use crate::components::progress_bar::ProgressBar;
use crate::hooks::use_dashboard::FinanceView;

#[derive(Properties, PartialEq)]
pub struct StatsPageProps {
    pub config: AppConfig,
}

/// Detailed breakdown of the cached profile
#[function_component(StatsPage)]
pub fn stats_page(props: &StatsPageProps) -> Html {
    let services = use_memo(props.config.clone(), |config| Services::new(config.clone()));
    let view = use_memo((), |_| FinanceView::from_storage(&services));
    let summary = &view.summary;
    let symbol = props.config.currency_symbol.as_str();
    let net_savings = summary.income - summary.total_expenses;

    html! {
        <div class="stats-page">
            <h2>{"Financial Statistics"}</h2>
            if view.source == ProfileSource::Fallback {
                <p class="stats-note">{"Showing sample figures until your profile is loaded."}</p>
            }

            <div class="overview-cards">
                <div class="summary-card">
                    <div class="summary-label">{"Total Income"}</div>
                    <div class="summary-value">{format_currency(summary.income, symbol)}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-label">{"Total Expenses"}</div>
                    <div class="summary-value">{format_currency(summary.total_expenses, symbol)}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-label">{"Net Savings"}</div>
                    <div class={classes!("summary-value", if net_savings >= 0.0 { "positive" } else { "negative" })}>
                        {format_currency(net_savings, symbol)}
                    </div>
                </div>
            </div>

            <ProgressBar
                label="Savings Goal Progress"
                pct={view.metrics.savings_progress}
                detail={view.metrics.goal_remaining_text(symbol)}
                class="savings"
            />

            <KeyMetricsGrid metrics={view.metrics.clone()} currency_symbol={symbol.to_string()} />

            <div class="stats-grid">
                <ExpenseChart
                    data={view.chart.clone()}
                    currency_symbol={symbol.to_string()}
                    title="Spending by Category"
                />
                <ExpenseTable
                    rows={view.rows.clone()}
                    currency_symbol={symbol.to_string()}
                    opted_out={summary.opted_out}
                />
            </div>
        </div>
    }
}
