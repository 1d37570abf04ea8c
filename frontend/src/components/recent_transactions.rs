use finance_domain::breakdown::TRACKING_DISABLED_LABEL;
use finance_domain::calendar::format_signed_amount;
use finance_domain::formatting::category_emoji;
use shared::{Transaction, TransactionKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecentTransactionsProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    #[prop_or_default]
    pub tracking_disabled: bool,
    pub currency_symbol: AttrValue,
}

#[function_component(RecentTransactions)]
pub fn recent_transactions(props: &RecentTransactionsProps) -> Html {
    html! {
        <div class="recent-transactions">
            <h3>{"Recent Transactions"}</h3>
            if props.loading {
                <div class="loading">{"Loading..."}</div>
            } else if props.tracking_disabled {
                <div class="empty-state">{TRACKING_DISABLED_LABEL}</div>
            } else if props.transactions.is_empty() {
                <div class="empty-state">{"No recent transactions"}</div>
            } else {
                <ul class="recent-list">
                    {for props.transactions.iter().map(|transaction| {
                        let kind = TransactionKind::of(transaction.amount);
                        html! {
                            <li key={transaction.id.to_string()} class={classes!("recent-item", kind.css_class())}>
                                <span class="recent-icon">{category_emoji(&transaction.category)}</span>
                                <div class="recent-main">
                                    <span class="recent-title">{&transaction.title}</span>
                                    <span class="recent-date">{transaction.date.format("%b %d, %Y").to_string()}</span>
                                </div>
                                <span class="recent-amount">
                                    {format_signed_amount(transaction.amount, &props.currency_symbol)}
                                </span>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
