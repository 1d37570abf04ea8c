use finance_domain::notification_service::format_timestamp;
use shared::Notification;
use yew::prelude::*;

use crate::hooks::use_notifications::NotificationActions;

#[derive(Properties, PartialEq)]
pub struct NotificationsPanelProps {
    pub notifications: Vec<Notification>,
    pub actions: NotificationActions,
    pub on_close: Callback<()>,
}

/// Dropdown under the bell; clicking an entry marks it read
#[function_component(NotificationsPanel)]
pub fn notifications_panel(props: &NotificationsPanelProps) -> Html {
    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_mark_all_read = {
        let mark_all_read = props.actions.mark_all_read.clone();
        Callback::from(move |_: MouseEvent| mark_all_read.emit(()))
    };

    let on_clear_all = {
        let clear_all = props.actions.clear_all.clone();
        Callback::from(move |_: MouseEvent| clear_all.emit(()))
    };

    html! {
        <>
            <div class="dropdown-backdrop" onclick={on_backdrop_click}></div>
            <div class="notifications-panel" onclick={on_panel_click}>
                <div class="notifications-header">
                    <h3>{"Notifications"}</h3>
                    <div class="notifications-actions">
                        <button class="link-button" onclick={on_mark_all_read}>{"Mark all read"}</button>
                        <button class="link-button" onclick={on_clear_all}>{"Clear all"}</button>
                    </div>
                </div>

                if props.notifications.is_empty() {
                    <div class="notifications-empty">{"No notifications"}</div>
                } else {
                    <ul class="notifications-list">
                        {for props.notifications.iter().map(|notification| {
                            let id = notification.id;
                            let mark_read = props.actions.mark_read.clone();
                            let onclick = Callback::from(move |_: MouseEvent| mark_read.emit(id));
                            let class = classes!("notification-item", (!notification.read).then_some("unread"));

                            html! {
                                <li key={id.to_string()} {class} {onclick}>
                                    <div class="notification-title">{&notification.title}</div>
                                    <div class="notification-message">{&notification.message}</div>
                                    <div class="notification-time">{format_timestamp(&notification.timestamp)}</div>
                                </li>
                            }
                        })}
                    </ul>
                }
            </div>
        </>
    }
}
