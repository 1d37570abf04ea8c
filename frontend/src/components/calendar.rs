use finance_domain::calendar::{chip_label, overflow_label};
use shared::{CalendarCell, CalendarDayType, CalendarMonth, Transaction, TransactionKind};
use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar_data: CalendarMonth,
    pub currency_symbol: AttrValue,
    pub on_select_day: Callback<u32>,
    pub on_select_transaction: Callback<Transaction>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    html! {
        <div class="calendar-grid">
            {for WEEKDAYS.iter().map(|day| html! {
                <div class="calendar-weekday">{*day}</div>
            })}
            {for props.calendar_data.cells.iter().enumerate().map(|(index, cell)| {
                html! {
                    <CalendarDay
                        key={index.to_string()}
                        cell={cell.clone()}
                        currency_symbol={props.currency_symbol.clone()}
                        on_select_day={props.on_select_day.clone()}
                        on_select_transaction={props.on_select_transaction.clone()}
                    />
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CalendarDayProps {
    cell: CalendarCell,
    currency_symbol: AttrValue,
    on_select_day: Callback<u32>,
    on_select_transaction: Callback<Transaction>,
}

#[function_component(CalendarDay)]
fn calendar_day(props: &CalendarDayProps) -> Html {
    let cell = &props.cell;

    if !cell.is_month_day() {
        let class = match cell.day_type {
            CalendarDayType::PaddingBefore => "calendar-day other-month prev",
            _ => "calendar-day other-month next",
        };
        return html! {
            <div {class}>
                <div class="day-number">{cell.day}</div>
            </div>
        };
    }

    let onclick = {
        let day = cell.day;
        let on_select_day = props.on_select_day.clone();
        Callback::from(move |_: MouseEvent| on_select_day.emit(day))
    };

    let class = classes!("calendar-day", cell.is_today.then_some("today"));

    html! {
        <div {class} {onclick}>
            <div class="day-number">{cell.day}</div>
            <div class="day-transactions">
                {for cell.visible().iter().map(|transaction| {
                    let kind = TransactionKind::of(transaction.amount);
                    let onclick = {
                        let transaction = transaction.clone();
                        let on_select_transaction = props.on_select_transaction.clone();
                        // Keep the day cell from opening its list as well
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            on_select_transaction.emit(transaction.clone());
                        })
                    };
                    html! {
                        <div
                            key={transaction.id.to_string()}
                            class={classes!("transaction-chip", kind.css_class())}
                            title={transaction.category.clone()}
                            {onclick}
                        >
                            {chip_label(transaction, &props.currency_symbol)}
                        </div>
                    }
                })}
                if let Some(label) = overflow_label(cell.overflow()) {
                    <div class="transaction-more">{label}</div>
                }
            </div>
        </div>
    }
}
