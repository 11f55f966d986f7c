// Customers page: owns the customer collection and every filter value, and
// wires the list, filter bar and detail panel together.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use salescrm_shared::{
    AppliedRange, Customer, CustomerQuery, CustomerStats, CustomerStore, DateFilterState,
    DetailTab, RecordingContext, SortKey, StageFilter, StoreAction,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};

use crate::components::customer_card::CustomerCard;
use crate::components::customer_detail::CustomerDetail;
use crate::components::customer_filters::CustomerFilters;
use crate::mock;
use crate::preferences::{load_preferences, save_preferences, ViewPreferences};
use crate::services::customers::{self, SaveNoteRequest, UpdateTaskRequest};
use crate::services::ApiError;
use crate::utils::today;

const SEARCH_DEBOUNCE_MS: u32 = 250;
const CUSTOMER_PAGE_SIZE: u32 = 100;

/// `CustomerStore` behind `use_reducer`. Rejected actions are logged and
/// leave the state as it was.
#[derive(Default, PartialEq)]
struct CustomerState {
    store: CustomerStore,
}

impl Reducible for CustomerState {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.store.clone();
        match store.apply(action) {
            Ok(()) => Rc::new(CustomerState { store }),
            Err(err) => {
                log::warn!("customer store rejected action: {}", err);
                self
            }
        }
    }
}

#[function_component(CustomersPage)]
pub fn customers_page() -> Html {
    let state = use_reducer(CustomerState::default);
    let preferences = use_state(load_preferences);

    let search_input = use_state(String::new);
    let search_query = use_state(String::new);
    let search_timer = use_mut_ref(|| None::<Timeout>);

    let date_filter = use_state(DateFilterState::default);
    let applied_range = use_state(|| None::<AppliedRange>);
    let selected_id = use_state(|| None::<String>);

    // Initial load; the built-in samples stand in when the API is unreachable.
    let load = {
        let state = state.dispatcher();
        use_async_with_options(
            async move {
                let loaded = match customers::list(1, CUSTOMER_PAGE_SIZE).await {
                    Ok(page) => {
                        log::info!("loaded {} customers", page.data.len());
                        page.data
                    }
                    Err(err) => {
                        log::warn!("customer list unavailable, using sample data: {}", err);
                        mock::sample_customers()
                    }
                };
                state.dispatch(StoreAction::Replace(loaded));
                Ok::<_, ApiError>(())
            },
            UseAsyncOptions::enable_auto(),
        )
    };

    // Persist view preferences on change
    {
        use_effect_with((*preferences).clone(), move |preferences| {
            save_preferences(preferences);
            || ()
        });
    }

    let on_search_change = {
        let search_input = search_input.clone();
        let search_query = search_query.clone();
        let search_timer = search_timer.clone();
        Callback::from(move |value: String| {
            search_input.set(value.clone());
            let search_query = search_query.clone();
            // Replacing the handle drops, and so cancels, the pending timeout.
            *search_timer.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                search_query.set(value);
            }));
        })
    };

    let on_stage_filter_change = {
        let preferences = preferences.clone();
        Callback::from(move |stage_filter: StageFilter| {
            preferences.set(ViewPreferences { stage_filter, ..(*preferences).clone() });
        })
    };

    let on_sort_change = {
        let preferences = preferences.clone();
        Callback::from(move |sort_by: SortKey| {
            preferences.set(ViewPreferences { sort_by, ..(*preferences).clone() });
        })
    };

    let on_tab_change = {
        let preferences = preferences.clone();
        Callback::from(move |detail_tab: DetailTab| {
            preferences.set(ViewPreferences { detail_tab, ..(*preferences).clone() });
        })
    };

    let on_date_filter_change = {
        let date_filter = date_filter.clone();
        let applied_range = applied_range.clone();
        Callback::from(move |next: DateFilterState| {
            if (*applied_range).is_some_and(|range| !range.still_selected_by(&next)) {
                log::debug!("date picker changed, clearing applied range");
                applied_range.set(None);
            }
            date_filter.set(next);
        })
    };

    let on_date_range_apply = {
        let date_filter = date_filter.clone();
        let applied_range = applied_range.clone();
        Callback::from(move |(start, end): (String, String)| {
            match AppliedRange::parse(date_filter.filter_type, &start, &end) {
                Ok(range) => {
                    log::debug!("applying {:?} range {} ~ {}", range.kind, start, end);
                    applied_range.set(Some(range));
                }
                Err(err) => log::warn!("ignoring date range: {}", err),
            }
        })
    };

    let on_reset_date_filter = {
        let date_filter = date_filter.clone();
        let applied_range = applied_range.clone();
        Callback::from(move |_| {
            date_filter.set(DateFilterState::default());
            applied_range.set(None);
        })
    };

    let on_select = {
        let selected_id = selected_id.clone();
        Callback::from(move |id: String| selected_id.set(Some(id)))
    };

    let on_start_recording = Callback::from(|context: RecordingContext| {
        match serde_json::to_string(&context) {
            Ok(payload) => log::info!("start recording requested: {}", payload),
            Err(err) => log::warn!("could not serialise recording context: {}", err),
        }
    });

    let query = CustomerQuery {
        search: (*search_query).clone(),
        stage: preferences.stage_filter,
        sort: preferences.sort_by,
        date_range: *applied_range,
    };
    let visible = query.apply(state.store.customers());
    let stats = CustomerStats::from_customers(visible.iter().copied());

    // Keep the explicit selection even when filtered out; otherwise show the
    // first visible customer.
    let selected: Option<Customer> = selected_id
        .as_deref()
        .and_then(|id| state.store.get(id))
        .or_else(|| visible.first().copied())
        .cloned();

    let detail = match &selected {
        Some(customer) => {
            let customer_id = customer.id.clone();

            let on_toggle_task = {
                let state = state.clone();
                let customer_id = customer_id.clone();
                Callback::from(move |task_id: String| {
                    let completed = state
                        .store
                        .get(&customer_id)
                        .and_then(|c| c.tasks.iter().find(|t| t.id == task_id))
                        .map(|t| !t.completed);
                    state.dispatch(StoreAction::ToggleTask {
                        customer_id: customer_id.clone(),
                        task_id: task_id.clone(),
                    });
                    if let Some(completed) = completed {
                        let customer_id = customer_id.clone();
                        spawn_local(async move {
                            let update = UpdateTaskRequest { completed };
                            if let Err(err) = customers::update_task(&customer_id, &task_id, &update).await {
                                log::warn!("task {} update not saved: {}", task_id, err);
                            }
                        });
                    }
                })
            };

            let on_delete_task = {
                let state = state.clone();
                let customer_id = customer_id.clone();
                Callback::from(move |task_id: String| {
                    state.dispatch(StoreAction::DeleteTask {
                        customer_id: customer_id.clone(),
                        task_id: task_id.clone(),
                    });
                    let customer_id = customer_id.clone();
                    spawn_local(async move {
                        if let Err(err) = customers::delete_task(&customer_id, &task_id).await {
                            log::warn!("task {} delete not saved: {}", task_id, err);
                        }
                    });
                })
            };

            let on_edit_task = Callback::from(|task_id: String| {
                log::info!("edit requested for task {}", task_id);
            });

            let on_save_note = {
                let state = state.clone();
                let customer_id = customer_id.clone();
                Callback::from(move |text: String| {
                    if text.trim().is_empty() {
                        return;
                    }
                    let date = today();
                    state.dispatch(StoreAction::SaveNote {
                        customer_id: customer_id.clone(),
                        text: text.clone(),
                        date,
                    });
                    let customer_id = customer_id.clone();
                    spawn_local(async move {
                        let note = SaveNoteRequest {
                            text: text.trim().to_string(),
                            date: salescrm_shared::dates::format_iso(date),
                        };
                        if let Err(err) = customers::save_note(&customer_id, &note).await {
                            log::warn!("note for {} not saved: {}", customer_id, err);
                        }
                    });
                })
            };

            html! {
                <CustomerDetail
                    customer={customer.clone()}
                    active_tab={preferences.detail_tab.clone()}
                    on_tab_change={on_tab_change}
                    on_edit_task={on_edit_task}
                    on_toggle_task={on_toggle_task}
                    on_delete_task={on_delete_task}
                    on_save_note={on_save_note}
                    on_start_recording={on_start_recording.clone()}
                />
            }
        }
        None => html! {
            <div class="p-6 rounded-lg border text-center" style="background-color: var(--bg-secondary); border-color: var(--border-primary); color: var(--fg-muted);">
                {"Select a customer to see the details"}
            </div>
        },
    };

    let selected_key = selected.as_ref().map(|c| c.id.clone());

    html! {
        <div class="p-6 space-y-6">
            <div>
                <h1 class="text-2xl font-bold" style="color: var(--fg-primary);">{"Customers"}</h1>
                <p style="color: var(--fg-muted);">{"Consultations, tasks and notes for every customer"}</p>
            </div>

            <CustomerFilters
                search_query={(*search_input).clone()}
                stage_filter={preferences.stage_filter}
                sort_by={preferences.sort_by}
                date_filter={(*date_filter).clone()}
                on_search_change={on_search_change}
                on_stage_filter_change={on_stage_filter_change}
                on_sort_change={on_sort_change}
                on_date_filter_change={on_date_filter_change}
                on_date_range_apply={on_date_range_apply}
                on_reset_date_filter={on_reset_date_filter}
                stats={stats}
            />

            if load.loading {
                <div class="flex justify-center items-center h-64">
                    <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500"></div>
                </div>
            } else {
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="space-y-3">
                        if visible.is_empty() {
                            <p class="text-sm" style="color: var(--fg-muted);">{"No customers match the current filters"}</p>
                        }
                        { for visible.iter().map(|customer| html! {
                            <CustomerCard
                                key={customer.id.clone()}
                                customer={(*customer).clone()}
                                selected={selected_key.as_deref() == Some(customer.id.as_str())}
                                on_select={on_select.clone()}
                                on_start_recording={on_start_recording.clone()}
                            />
                        }) }
                    </div>
                    <div class="lg:col-span-2">{detail}</div>
                </div>
            }
        </div>
    }
}
