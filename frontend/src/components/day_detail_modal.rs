use finance_domain::calendar::format_signed_amount;
use shared::{Transaction, TransactionKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DayDetailModalProps {
    pub title: AttrValue,
    pub transactions: Vec<Transaction>,
    pub currency_symbol: AttrValue,
    pub on_close: Callback<()>,
    pub on_select_transaction: Callback<Transaction>,
}

/// Every transaction of one day, including those hidden behind "+ N more"
#[function_component(DayDetailModal)]
pub fn day_detail_modal(props: &DayDetailModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="modal day-detail-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3>{&props.title}</h3>
                    <button class="modal-close" onclick={on_close} aria-label="Close">{"×"}</button>
                </div>
                <div class="modal-body">
                    if props.transactions.is_empty() {
                        <p class="empty-state">{"No transactions on this day"}</p>
                    } else {
                        <ul class="day-detail-list">
                            {for props.transactions.iter().map(|transaction| {
                                let kind = TransactionKind::of(transaction.amount);
                                let onclick = {
                                    let transaction = transaction.clone();
                                    let on_select_transaction = props.on_select_transaction.clone();
                                    Callback::from(move |_: MouseEvent| on_select_transaction.emit(transaction.clone()))
                                };
                                html! {
                                    <li
                                        key={transaction.id.to_string()}
                                        class={classes!("day-detail-item", kind.css_class())}
                                        {onclick}
                                    >
                                        <div class="detail-main">
                                            <span class="detail-title">{&transaction.title}</span>
                                            <span class="detail-category">{&transaction.category}</span>
                                        </div>
                                        <span class="detail-amount">
                                            {format_signed_amount(transaction.amount, &props.currency_symbol)}
                                        </span>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                </div>
            </div>
        </div>
    }
}
