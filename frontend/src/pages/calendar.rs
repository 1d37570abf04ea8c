use shared::AppConfig;
use yew::prelude::*;

use crate::components::calendar::Calendar;
use crate::components::day_detail_modal::DayDetailModal;
use crate::components::transaction_detail::TransactionDetail;
use crate::hooks::use_calendar::use_calendar;

#[derive(Properties, PartialEq)]
pub struct CalendarPageProps {
    pub config: AppConfig,
    /// Announces a regenerated month as a notification
    pub on_generated: Callback<(String, String)>,
}

#[function_component(CalendarPage)]
pub fn calendar_page(props: &CalendarPageProps) -> Html {
    let calendar = use_calendar(&props.config, props.on_generated.clone());
    let state = &calendar.state;
    let symbol: AttrValue = props.config.currency_symbol.clone().into();

    let on_regenerate = {
        let regenerate = calendar.actions.regenerate.clone();
        Callback::from(move |_: MouseEvent| regenerate.emit(()))
    };

    html! {
        <div class="calendar-page">
            <div class="calendar-header">
                <button class="nav-button" onclick={calendar.actions.prev_month.clone()} aria-label="Previous month">
                    <i class="fas fa-chevron-left"></i>
                </button>
                <h2 class="calendar-title">{&state.title}</h2>
                <button class="nav-button" onclick={calendar.actions.next_month.clone()} aria-label="Next month">
                    <i class="fas fa-chevron-right"></i>
                </button>
                <button class="btn btn-primary generate-button" onclick={on_regenerate}>
                    {"Generate Transactions"}
                </button>
            </div>

            <Calendar
                calendar_data={state.calendar_data.clone()}
                currency_symbol={symbol.clone()}
                on_select_day={calendar.actions.select_day.clone()}
                on_select_transaction={calendar.actions.select_transaction.clone()}
            />

            if let Some(view) = &state.transaction {
                <TransactionDetail
                    transaction={view.transaction.clone()}
                    date_label={view.date_label.clone()}
                    currency_symbol={symbol.clone()}
                    on_close={calendar.actions.close_transaction.clone()}
                />
            } else if let Some(detail) = &state.detail {
                <DayDetailModal
                    title={detail.title.clone()}
                    transactions={detail.transactions.clone()}
                    currency_symbol={symbol.clone()}
                    on_close={calendar.actions.close_detail.clone()}
                    on_select_transaction={calendar.actions.select_transaction.clone()}
                />
            }
        </div>
    }
}
