use finance_domain::formatting::format_currency;
use shared::AppConfig;
use yew::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::expense_chart::ExpenseChart;
use crate::components::progress_bar::ProgressBar;
use crate::components::recent_transactions::RecentTransactions;
use crate::components::tip_banner::TipBanner;
use crate::hooks::use_dashboard::use_dashboard;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api_client: ApiClient,
    pub config: AppConfig,
    pub on_notifications_changed: Callback<()>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let dashboard = use_dashboard(&props.api_client, &props.config, props.on_notifications_changed.clone());
    let state = &dashboard.state;
    let summary = &state.view.summary;
    let symbol = props.config.currency_symbol.as_str();

    let on_refresh = {
        let refresh_data = dashboard.actions.refresh_data.clone();
        Callback::from(move |_: MouseEvent| refresh_data.emit(()))
    };

    html! {
        <div class="dashboard">
            <TipBanner rotation_ms={props.config.tip_rotation_ms} />

            <div class="dashboard-toolbar">
                if state.loading {
                    <span class="loading">{"Loading..."}</span>
                }
                if summary.opted_out {
                    <span class="tracking-disabled-badge">{"Tracking disabled"}</span>
                }
                <button class="btn btn-secondary" onclick={on_refresh}>
                    <i class="fas fa-sync-alt"></i>{" Refresh"}
                </button>
            </div>

            <div class="summary-cards">
                <div class="summary-card">
                    <div class="summary-label">{"Monthly Income"}</div>
                    <div class="summary-value">{format_currency(summary.income, symbol)}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-label">{"Total Expenses"}</div>
                    <div class="summary-value">{format_currency(summary.total_expenses, symbol)}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-label">{"Monthly Budget"}</div>
                    <div class="summary-value">{format_currency(summary.monthly_budget, symbol)}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-label">{"Current Savings"}</div>
                    <div class="summary-value">{format_currency(summary.current_savings, symbol)}</div>
                </div>
            </div>

            <div class="dashboard-grid">
                <ExpenseChart data={state.view.chart.clone()} currency_symbol={symbol.to_string()} />

                <div class="progress-section">
                    <h3>{"Spending Health"}</h3>
                    <ProgressBar
                        label="Needs"
                        pct={summary.needs_pct}
                        detail={format_currency(summary.needs_total, symbol)}
                        class="needs"
                    />
                    <ProgressBar
                        label="Wants"
                        pct={summary.wants_pct}
                        detail={format_currency(summary.wants_total, symbol)}
                        class="wants"
                    />
                    <ProgressBar
                        label="Budget Used"
                        pct={summary.budget_used_pct}
                        detail={format!("{} left", format_currency(summary.budget_remaining(), symbol))}
                        class="budget"
                    />
                    <ProgressBar
                        label="Savings Goal"
                        pct={summary.savings_goal_pct}
                        detail={format!(
                            "{} of {}",
                            format_currency(summary.current_savings, symbol),
                            format_currency(summary.savings_goal, symbol)
                        )}
                        class="savings"
                    />
                </div>
            </div>

            <RecentTransactions
                transactions={state.recent_transactions.clone()}
                loading={state.transactions_loading}
                tracking_disabled={summary.opted_out}
                currency_symbol={symbol.to_string()}
            />

            <ChatWidget api_client={props.api_client.clone()} config={props.config.clone()} />
        </div>
    }
}
