use yew::prelude::*;

use super::notifications_panel::NotificationsPanel;
use crate::hooks::use_notifications::{NotificationActions, NotificationsState};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub username: Option<String>,
    pub notifications: NotificationsState,
    pub notification_actions: NotificationActions,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let panel_open = use_state(|| false);

    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let toggle_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            panel_open.set(!*panel_open);
        })
    };

    let close_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |_: ()| panel_open.set(false))
    };

    let unread = props.notifications.unread_count;

    html! {
        <header class="header">
            <div class="container">
                <button class="menu-toggle" onclick={toggle_menu} aria-label="Open menu">
                    <i class="fas fa-bars"></i>
                </button>
                <h1>
                    {match &props.username {
                        Some(name) => format!("Welcome back, {}", name),
                        None => "Finance Dashboard".to_string(),
                    }}
                </h1>
                <div class="header-right">
                    <button class="notification-bell" onclick={toggle_panel} aria-label="Notifications">
                        <i class="fas fa-bell"></i>
                        if unread > 0 {
                            <span class="notification-badge">{unread}</span>
                        }
                    </button>
                    if *panel_open {
                        <NotificationsPanel
                            notifications={props.notifications.notifications.clone()}
                            actions={props.notification_actions.clone()}
                            on_close={close_panel}
                        />
                    }
                </div>
            </div>
        </header>
    }
}
