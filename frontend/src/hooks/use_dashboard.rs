use finance_domain::breakdown::{category_rows, CategoryRow, ChartData};
use finance_domain::{FinancialSummary, KeyMetrics, ProfileSource, Services};
use shared::{AppConfig, Profile, RemoteTransaction, Transaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_periodic_refresh::{use_periodic_refresh, PeriodicRefreshConfig};
use crate::services::api::{mock_recent_transactions, ApiClient};
use crate::services::{date_utils, BrowserStore, Logger};

/// Everything the dashboard and stats pages draw for one profile
#[derive(Clone, PartialEq)]
pub struct FinanceView {
    pub profile: Profile,
    pub source: ProfileSource,
    pub summary: FinancialSummary,
    pub metrics: KeyMetrics,
    pub chart: ChartData,
    pub rows: Vec<CategoryRow>,
}

impl FinanceView {
    pub fn build(services: &Services, profile: Profile, source: ProfileSource, opted_out: bool) -> Self {
        let summary = services.summarize(&profile, opted_out);
        Self {
            metrics: summary.key_metrics(),
            chart: ChartData::from_profile(&profile, opted_out),
            rows: category_rows(&profile, opted_out),
            summary,
            profile,
            source,
        }
    }

    /// View over whatever is cached right now, without touching the network
    pub fn from_storage(services: &Services) -> Self {
        let store = BrowserStore::local();
        let opted_out = services.opt_out.is_opted_out(&store);
        let (profile, source) = services.profiles.resolve(&store, None);
        Self::build(services, profile, source, opted_out)
    }
}

#[derive(Clone, PartialEq)]
pub struct DashboardState {
    pub view: FinanceView,
    pub recent_transactions: Vec<Transaction>,
    pub loading: bool,
    pub transactions_loading: bool,
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[derive(Clone)]
pub struct UseDashboardActions {
    /// Fetch profile and history, persist the summary, raise nudges
    pub refresh_data: Callback<()>,
}

#[hook]
pub fn use_dashboard(
    api_client: &ApiClient,
    config: &AppConfig,
    on_notifications_changed: Callback<()>,
) -> UseDashboardResult {
    let services = use_memo(config.clone(), |config| Services::new(config.clone()));
    let view = use_state(|| FinanceView::from_storage(&services));
    let recent_transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let transactions_loading = use_state(|| true);

    let refresh_data = {
        let api_client = api_client.clone();
        let services = services.clone();
        let view = view.clone();
        let loading = loading.clone();
        let on_notifications_changed = on_notifications_changed.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let services = services.clone();
            let view = view.clone();
            let loading = loading.clone();
            let on_notifications_changed = on_notifications_changed.clone();

            spawn_local(async move {
                let store = BrowserStore::local();
                let opted_out = services.opt_out.is_opted_out(&store);

                // An opted-out user keeps the zeroed cache
                let fetched = if opted_out {
                    None
                } else {
                    match api_client.get_profile().await {
                        Ok(profile) => Some(profile),
                        Err(e) => {
                            Logger::warn_with_component("dashboard-hook", &format!("Using cached profile: {}", e));
                            None
                        }
                    }
                };

                let (profile, source) = services.profiles.resolve(&store, fetched);
                let next = FinanceView::build(&services, profile, source, opted_out);

                if let Err(e) = next.summary.persist(&store, date_utils::now_utc()) {
                    Logger::error_with_component("dashboard-hook", &format!("Failed to persist summary: {}", e));
                }

                if !opted_out {
                    let nudges = services.nudges.generate(&next.profile, &next.summary);
                    match services.nudges.notify(&store, &nudges, date_utils::now_utc()) {
                        Ok(added) if !added.is_empty() => {
                            Logger::info_with_component("dashboard-hook", &format!("Raised {} nudges", added.len()));
                            on_notifications_changed.emit(());
                        }
                        Ok(_) => {}
                        Err(e) => Logger::error_with_component("dashboard-hook", &format!("Failed to store nudges: {}", e)),
                    }
                }

                view.set(next);
                loading.set(false);
            });
        })
    };

    let refresh_transactions = {
        let api_client = api_client.clone();
        let services = services.clone();
        let recent_transactions = recent_transactions.clone();
        let transactions_loading = transactions_loading.clone();
        let limit = config.recent_transactions_limit;

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let services = services.clone();
            let recent_transactions = recent_transactions.clone();
            let transactions_loading = transactions_loading.clone();

            if services.opt_out.is_opted_out(&BrowserStore::local()) {
                recent_transactions.set(Vec::new());
                transactions_loading.set(false);
                return;
            }

            spawn_local(async move {
                let transactions = match api_client.get_recent_transactions(limit).await {
                    Ok(transactions) => transactions,
                    Err(e) => {
                        Logger::warn_with_component("dashboard-hook", &format!("Using generated history: {}", e));
                        mock_recent_transactions(limit)
                            .transactions
                            .into_iter()
                            .map(RemoteTransaction::into_transaction)
                            .collect()
                    }
                };
                // The flag may have been set while the request was in flight
                let opted_out = services.opt_out.is_opted_out(&BrowserStore::local());
                recent_transactions.set(services.opt_out.visible_history(opted_out, transactions));
                transactions_loading.set(false);
            });
        })
    };

    let rerender = {
        let services = services.clone();
        let view = view.clone();
        use_callback((), move |_, _| view.set(FinanceView::from_storage(&services)))
    };

    let refresh_all = {
        let refresh_data = refresh_data.clone();
        let refresh_transactions = refresh_transactions.clone();
        use_callback((), move |_, _| {
            refresh_data.emit(());
            refresh_transactions.emit(());
        })
    };

    {
        let refresh_all = refresh_all.clone();
        use_effect_with((), move |_| {
            refresh_all.emit(());
            || ()
        });
    }

    use_periodic_refresh(
        PeriodicRefreshConfig {
            name: "dashboard render",
            interval_ms: config.render_interval_ms,
        },
        rerender,
    );
    use_periodic_refresh(
        PeriodicRefreshConfig {
            name: "dashboard data",
            interval_ms: config.data_refresh_interval_ms,
        },
        refresh_all.clone(),
    );

    UseDashboardResult {
        state: DashboardState {
            view: (*view).clone(),
            recent_transactions: (*recent_transactions).clone(),
            loading: *loading,
            transactions_loading: *transactions_loading,
        },
        actions: UseDashboardActions {
            refresh_data: refresh_all,
        },
    }
}
