use finance_domain::breakdown::{CategoryRow, TRACKING_DISABLED_LABEL};
use finance_domain::formatting::format_currency;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub rows: Vec<CategoryRow>,
    pub currency_symbol: AttrValue,
    pub opted_out: bool,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let symbol = props.currency_symbol.as_str();

    html! {
        <div class="expense-table-container">
            <div class="table-header">
                <h3>{"Expense Breakdown"}</h3>
            </div>
            <table class="expense-table">
                <thead>
                    <tr>
                        <th>{"Category"}</th>
                        <th>{"Amount"}</th>
                        <th>{"% of Total"}</th>
                        <th>{"Budget"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.opted_out {
                        <tr><td colspan="5" class="empty-state">{TRACKING_DISABLED_LABEL}</td></tr>
                    } else if props.rows.is_empty() {
                        <tr><td colspan="5" class="empty-state">{"No expenses recorded"}</td></tr>
                    } else {
                        {for props.rows.iter().map(|row| html! {
                            <tr key={row.category.clone()}>
                                <td class="category">
                                    <span class="category-swatch" style={format!("background: {};", row.color)}></span>
                                    {format!("{} {}", row.emoji, row.label)}
                                </td>
                                <td class="amount">{format_currency(row.amount, symbol)}</td>
                                <td class="share">{format!("{:.1}%", row.pct_of_total)}</td>
                                <td class="budget">{format_currency(row.budget, symbol)}</td>
                                <td class={classes!("status", row.status.css_class())}>
                                    {format!("{} {}", row.status.icon(), row.status.label())}
                                </td>
                            </tr>
                        })}
                    }
                </tbody>
            </table>
        </div>
    }
}
