use std::cell::RefCell;
use std::rc::Rc;

use finance_domain::{CalendarState, Services};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use shared::{AppConfig, CalendarMonth, Transaction, ViewportClass};
use yew::prelude::*;

use crate::services::{date_utils, BrowserStore, Logger};

#[derive(Clone, PartialEq)]
pub struct DayDetail {
    pub title: String,
    pub transactions: Vec<Transaction>,
}

/// One transaction opened from a chip or from the day list
#[derive(Clone, PartialEq)]
pub struct TransactionView {
    pub transaction: Transaction,
    pub date_label: String,
}

#[derive(Clone, PartialEq)]
pub struct CalendarViewState {
    pub current: CalendarState,
    pub title: String,
    pub calendar_data: CalendarMonth,
    /// Every transaction of the selected day, when one is open
    pub detail: Option<DayDetail>,
    pub transaction: Option<TransactionView>,
}

pub struct UseCalendarResult {
    pub state: CalendarViewState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub regenerate: Callback<()>,
    pub select_day: Callback<u32>,
    pub close_detail: Callback<()>,
    pub select_transaction: Callback<Transaction>,
    pub close_transaction: Callback<()>,
}

fn current_viewport(config: &AppConfig) -> ViewportClass {
    config.viewport_for(date_utils::viewport_width())
}

fn build_month(services: &Services, current: CalendarState, viewport: ViewportClass) -> CalendarMonth {
    let transactions = services.transactions.load_transactions(&BrowserStore::local());
    services.calendar.build_month(
        current,
        &transactions,
        services.config.max_visible(viewport),
        Some(date_utils::today()),
    )
}

/// Replace the month's stored transactions and announce it. Returns false
/// when nothing could be stored.
fn regenerate_month(services: &Services, current: CalendarState, on_generated: &Callback<(String, String)>) -> bool {
    let viewport = current_viewport(&services.config);
    let outcome = services.transactions.regenerate_month(
        &BrowserStore::local(),
        current,
        viewport,
        &mut rand::thread_rng(),
        date_utils::now_millis(),
    );

    match outcome {
        Ok(outcome) => {
            on_generated.emit(services.transactions.generated_message(&outcome));
            true
        }
        Err(e) => {
            Logger::error_with_component("calendar-hook", &format!("Failed to generate transactions: {}", e));
            false
        }
    }
}

/// Calendar navigation and generation over the transactions kept in
/// `localStorage`. `on_generated` receives the (title, message) of the
/// notification announcing a regenerated month.
#[hook]
pub fn use_calendar(config: &AppConfig, on_generated: Callback<(String, String)>) -> UseCalendarResult {
    let services = use_memo(config.clone(), |config| Services::new(config.clone()));
    let current = use_state(|| CalendarState::containing(date_utils::today()));
    let selected_day = use_state(|| Option::<u32>::None);
    let selected_transaction = use_state(|| Option::<Transaction>::None);
    // Bumped whenever stored transactions change so the grid is rebuilt
    let revision = use_state(|| 0u32);
    // Only re-renders when a resize crosses the breakpoint
    let viewport = use_state_eq(|| current_viewport(config));

    let calendar_data = {
        let services = services.clone();
        use_memo((*current, *revision, *viewport), move |(current, _, viewport)| {
            build_month(&services, *current, *viewport)
        })
    };

    // Re-measure once the window has stopped resizing
    {
        let viewport = viewport.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    let viewport = viewport.clone();
                    let config = config.clone();
                    // Replacing the pending timeout cancels it
                    pending.replace(Some(Timeout::new(config.resize_debounce_ms, move || {
                        viewport.set(current_viewport(&config));
                    })));
                })
            });
            move || drop(listener)
        });
    }

    // Generate on first load when nothing is stored or the user just signed up
    {
        let services = services.clone();
        let current = current.clone();
        let revision = revision.clone();
        let on_generated = on_generated.clone();
        use_effect_with((), move |_| {
            let local = BrowserStore::local();
            let session = BrowserStore::session();
            if services.transactions.should_generate_on_load(&local, &session)
                && regenerate_month(&services, *current, &on_generated)
            {
                revision.set(*revision + 1);
            }
            || ()
        });
    }

    let prev_month = {
        let current = current.clone();
        let selected_day = selected_day.clone();
        let selected_transaction = selected_transaction.clone();
        use_callback(*current, move |_: MouseEvent, current_state| {
            selected_day.set(None);
            selected_transaction.set(None);
            current.set(current_state.previous());
        })
    };

    let next_month = {
        let current = current.clone();
        let selected_day = selected_day.clone();
        let selected_transaction = selected_transaction.clone();
        use_callback(*current, move |_: MouseEvent, current_state| {
            selected_day.set(None);
            selected_transaction.set(None);
            current.set(current_state.next());
        })
    };

    let regenerate = {
        let services = services.clone();
        let revision = revision.clone();
        let selected_day = selected_day.clone();
        let selected_transaction = selected_transaction.clone();
        use_callback((*current, *revision), move |_, (current_state, rev)| {
            if regenerate_month(&services, *current_state, &on_generated) {
                selected_day.set(None);
                selected_transaction.set(None);
                revision.set(rev + 1);
            }
        })
    };

    let select_day = {
        let selected_day = selected_day.clone();
        use_callback((), move |day: u32, _| selected_day.set(Some(day)))
    };

    let close_detail = {
        let selected_day = selected_day.clone();
        use_callback((), move |_, _| selected_day.set(None))
    };

    let select_transaction = {
        let selected_transaction = selected_transaction.clone();
        use_callback((), move |transaction: Transaction, _| selected_transaction.set(Some(transaction)))
    };

    // Back to the day list when one was open
    let close_transaction = {
        let selected_transaction = selected_transaction.clone();
        use_callback((), move |_, _| selected_transaction.set(None))
    };

    UseCalendarResult {
        state: CalendarViewState {
            current: *current,
            title: services.calendar.title(*current),
            detail: (*selected_day).and_then(|day| {
                calendar_data.month_day(day).map(|cell| DayDetail {
                    title: services.calendar.day_detail_title(*current, day),
                    transactions: cell.transactions.clone(),
                })
            }),
            transaction: (*selected_transaction).clone().map(|transaction| TransactionView {
                date_label: services.calendar.format_long_date(transaction.date),
                transaction,
            }),
            calendar_data: (*calendar_data).clone(),
        },
        actions: UseCalendarActions {
            prev_month,
            next_month,
            regenerate,
            select_day,
            close_detail,
            select_transaction,
            close_transaction,
        },
    }
}
