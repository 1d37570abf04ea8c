use finance_domain::formatting::bar_width;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub label: AttrValue,
    /// Percentage shown as text; the bar itself is clamped to 0..=100
    pub pct: f64,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let width = bar_width(props.pct);

    html! {
        <div class={classes!("progress-item", props.class.clone())}>
            <div class="progress-label">
                <span>{&props.label}</span>
                <span class="progress-value">{format!("{:.0}%", props.pct)}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {:.1}%;", width)}></div>
            </div>
            if let Some(detail) = &props.detail {
                <div class="progress-detail">{detail}</div>
            }
        </div>
    }
}
