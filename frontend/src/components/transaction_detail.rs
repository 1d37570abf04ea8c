use finance_domain::calendar::format_signed_amount;
use shared::{Transaction, TransactionKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionDetailProps {
    pub transaction: Transaction,
    /// Long-format date, e.g. "13 June 2025"
    pub date_label: AttrValue,
    pub currency_symbol: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(TransactionDetail)]
pub fn transaction_detail(props: &TransactionDetailProps) -> Html {
    let transaction = &props.transaction;
    let kind = TransactionKind::of(transaction.amount);

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="modal transaction-detail-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3>{"Transaction Details"}</h3>
                    <button class="modal-close" onclick={on_close} aria-label="Close">{"×"}</button>
                </div>
                <div class="modal-body">
                    <div class="modal-detail-row">
                        <div class="modal-detail-label">{"Title:"}</div>
                        <div>{&transaction.title}</div>
                    </div>
                    <div class="modal-detail-row">
                        <div class="modal-detail-label">{"Amount:"}</div>
                        <div class={classes!("transaction-amount", kind.css_class())}>
                            {format_signed_amount(transaction.amount, &props.currency_symbol)}
                        </div>
                    </div>
                    <div class="modal-detail-row">
                        <div class="modal-detail-label">{"Category:"}</div>
                        <div>{&transaction.category}</div>
                    </div>
                    <div class="modal-detail-row">
                        <div class="modal-detail-label">{"Date:"}</div>
                        <div>{&props.date_label}</div>
                    </div>
                    if let Some(description) = transaction.description.as_ref().filter(|d| !d.is_empty()) {
                        <div class="modal-detail-row">
                            <div class="modal-detail-label">{"Description:"}</div>
                            <div>{description}</div>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
