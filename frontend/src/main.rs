use finance_domain::ProfileService;
use shared::AppConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::header::Header;
use components::side_menu::SideMenu;
use hooks::use_notifications::use_notifications;
use pages::calendar::CalendarPage;
use pages::dashboard::DashboardPage;
use pages::landing::LandingPage;
use pages::settings::SettingsPage;
use pages::stats::StatsPage;
use services::{ApiClient, BrowserStore, Logger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Dashboard,
    Calendar,
    Stats,
    Settings,
}

impl Page {
    /// Pages reachable from the side menu
    pub const NAVIGATION: [Page; 4] = [Page::Dashboard, Page::Calendar, Page::Stats, Page::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Landing => "Sign Up",
            Page::Dashboard => "Dashboard",
            Page::Calendar => "Calendar",
            Page::Stats => "Statistics",
            Page::Settings => "Privacy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Landing => "fas fa-user-plus",
            Page::Dashboard => "fas fa-home",
            Page::Calendar => "fas fa-calendar-alt",
            Page::Stats => "fas fa-chart-pie",
            Page::Settings => "fas fa-user-shield",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::default());
    let api_client = use_memo((), |_| ApiClient::new(&config));
    let username = use_state(|| ProfileService::new().username(&BrowserStore::local()));
    let page = use_state(|| if username.is_some() { Page::Dashboard } else { Page::Landing });
    let menu_open = use_state(|| false);
    let notifications = use_notifications();

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            Logger::debug_with_component("app", &format!("Navigating to {:?}", next));
            page.set(next);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let on_created = {
        let username = username.clone();
        let page = page.clone();
        Callback::from(move |name: String| {
            username.set(Some(name));
            page.set(Page::Dashboard);
        })
    };

    if *page == Page::Landing {
        return html! {
            <LandingPage api_client={(*api_client).clone()} {on_created} />
        };
    }

    let content = match *page {
        Page::Dashboard | Page::Landing => html! {
            <DashboardPage
                api_client={(*api_client).clone()}
                config={(*config).clone()}
                on_notifications_changed={notifications.actions.refresh.clone()}
            />
        },
        Page::Calendar => html! {
            <CalendarPage config={(*config).clone()} on_generated={notifications.actions.add.clone()} />
        },
        Page::Stats => html! {
            <StatsPage config={(*config).clone()} />
        },
        Page::Settings => html! {
            <SettingsPage on_navigate={on_navigate.clone()} />
        },
    };

    html! {
        <div class="app">
            <Header
                username={(*username).clone()}
                notifications={notifications.state.clone()}
                notification_actions={notifications.actions.clone()}
                on_toggle_menu={toggle_menu}
            />
            <SideMenu
                open={*menu_open}
                active_page={*page}
                {on_navigate}
                on_close={close_menu}
            />
            <main class="container">
                {content}
            </main>
        </div>
    }
}

fn main() {
    Logger::init(&AppConfig::default());
    yew::Renderer::<App>::new().render();
}
