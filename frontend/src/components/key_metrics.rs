use finance_domain::summary::MetricStatus;
use finance_domain::KeyMetrics;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KeyMetricsProps {
    pub metrics: KeyMetrics,
    pub currency_symbol: AttrValue,
}

fn metric_card(title: &str, value: String, status: MetricStatus) -> Html {
    let class = classes!("metric-status", if status.is_ok() { "positive" } else { "negative" });
    html! {
        <div class="metric-card">
            <div class="metric-title">{title.to_string()}</div>
            <div class="metric-value">{value}</div>
            <div {class}>{status.label()}</div>
        </div>
    }
}

#[function_component(KeyMetricsGrid)]
pub fn key_metrics_grid(props: &KeyMetricsProps) -> Html {
    let metrics = &props.metrics;
    let goal_class = classes!("metric-status", if metrics.goal_achieved() { "positive" } else { "neutral" });

    html! {
        <div class="key-metrics">
            {metric_card("Needs vs Wants", metrics.needs_wants_ratio.clone(), metrics.needs_wants_status)}
            {metric_card("Savings Rate", format!("{:.1}%", metrics.savings_rate), metrics.savings_status)}
            {metric_card("Budget Utilization", format!("{:.1}%", metrics.budget_utilization), metrics.budget_status)}
            <div class="metric-card">
                <div class="metric-title">{"Savings Goal Progress"}</div>
                <div class="metric-value">{format!("{:.1}%", metrics.savings_progress)}</div>
                <div class={goal_class}>{metrics.goal_remaining_text(&props.currency_symbol)}</div>
            </div>
        </div>
    }
}
