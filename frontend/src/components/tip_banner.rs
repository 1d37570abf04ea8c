use finance_domain::tips::{next_tip_index, tip_at};
use yew::prelude::*;

use crate::hooks::use_periodic_refresh::{use_periodic_refresh, PeriodicRefreshConfig};

#[derive(Properties, PartialEq)]
pub struct TipBannerProps {
    pub rotation_ms: u32,
}

/// Financial tip that rotates on a timer
#[function_component(TipBanner)]
pub fn tip_banner(props: &TipBannerProps) -> Html {
    let index = use_state(|| 0usize);

    let rotate = {
        let index = index.clone();
        use_callback(*index, move |_, current| index.set(next_tip_index(*current)))
    };

    use_periodic_refresh(
        PeriodicRefreshConfig {
            name: "tip rotation",
            interval_ms: props.rotation_ms,
        },
        rotate,
    );

    html! {
        <div class="tip-banner">
            <i class="fas fa-lightbulb"></i>
            <span class="tip-text">{tip_at(*index)}</span>
        </div>
    }
}
