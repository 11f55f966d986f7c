// Search and filter bar above the customer list, with the statistics block.
//
// The parent owns every value; the only local state is whether the date
// picker is expanded.

use salescrm_shared::dates::calendar_date;
use salescrm_shared::{
    CustomerStats, DateFilter, DateFilterState, DateFilterType, SortKey, StageFilter,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomerFiltersProps {
    pub search_query: String,
    pub stage_filter: StageFilter,
    pub sort_by: SortKey,
    pub date_filter: DateFilterState,
    pub on_search_change: Callback<String>,
    pub on_stage_filter_change: Callback<StageFilter>,
    pub on_sort_change: Callback<SortKey>,
    pub on_date_filter_change: Callback<DateFilterState>,
    /// `(start, end)` as `YYYY-MM-DD`.
    pub on_date_range_apply: Callback<(String, String)>,
    pub on_reset_date_filter: Callback<()>,
    pub stats: CustomerStats,
}

#[function_component(CustomerFilters)]
pub fn customer_filters(props: &CustomerFiltersProps) -> Html {
    let picker_open = use_state(|| false);
    let filter = DateFilter::from(&props.date_filter);

    let on_search = {
        let on_search_change = props.on_search_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search_change.emit(input.value());
        })
    };

    let on_stage = {
        let on_stage_filter_change = props.on_stage_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_stage_filter_change.emit(StageFilter::from_value(&select.value()));
        })
    };

    let on_sort = {
        let on_sort_change = props.on_sort_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_sort_change.emit(SortKey::from_value(&select.value()));
        })
    };

    let on_kind = {
        let on_date_filter_change = props.on_date_filter_change.clone();
        let picker_open = picker_open.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let next = filter.select_kind(DateFilterType::from_value(&select.value()));
            picker_open.set(next.is_active());
            on_date_filter_change.emit(DateFilterState::from(&next));
        })
    };

    let date_input = |update: fn(DateFilter, Option<chrono::NaiveDate>) -> DateFilter| {
        let on_date_filter_change = props.on_date_filter_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let next = update(filter, calendar_date(&input.value()));
            on_date_filter_change.emit(DateFilterState::from(&next));
        })
    };
    let on_start = date_input(DateFilter::set_start);
    let on_end = date_input(DateFilter::set_end);

    let on_apply = {
        let on_date_range_apply = props.on_date_range_apply.clone();
        let picker_open = picker_open.clone();
        Callback::from(move |_| {
            if let Some(range) = filter.apply() {
                on_date_range_apply.emit(range);
                picker_open.set(false);
            }
        })
    };

    let on_reset = {
        let on_reset_date_filter = props.on_reset_date_filter.clone();
        let picker_open = picker_open.clone();
        Callback::from(move |_| {
            picker_open.set(false);
            on_reset_date_filter.emit(());
        })
    };

    let toggle_picker = {
        let picker_open = picker_open.clone();
        Callback::from(move |_| picker_open.set(!*picker_open))
    };

    let date_value = |date: Option<chrono::NaiveDate>| {
        date.map(salescrm_shared::dates::format_iso).unwrap_or_default()
    };

    let stats = &props.stats;

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center gap-3">
                <input
                    type="text"
                    class="flex-1 min-w-[200px] px-3 py-2 rounded-lg border text-sm"
                    style="background-color: var(--bg-secondary); border-color: var(--border-primary); color: var(--fg-primary);"
                    placeholder="Search name, email, phone or product"
                    value={props.search_query.clone()}
                    oninput={on_search}
                />
                <select
                    class="px-3 py-2 rounded-lg border text-sm"
                    style="background-color: var(--bg-secondary); border-color: var(--border-primary); color: var(--fg-primary);"
                    onchange={on_stage}
                >
                    { for StageFilter::all().into_iter().map(|stage| html! {
                        <option value={stage.as_str()} selected={stage == props.stage_filter}>
                            {stage.label()}
                        </option>
                    }) }
                </select>
                <select
                    class="px-3 py-2 rounded-lg border text-sm"
                    style="background-color: var(--bg-secondary); border-color: var(--border-primary); color: var(--fg-primary);"
                    onchange={on_sort}
                >
                    { for SortKey::all().into_iter().map(|sort| html! {
                        <option value={sort.as_str()} selected={sort == props.sort_by}>
                            {sort.label()}
                        </option>
                    }) }
                </select>
                <button
                    data-action="toggle-picker"
                    class="px-3 py-2 rounded-lg border text-sm"
                    style="background-color: var(--bg-secondary); border-color: var(--border-primary); color: var(--fg-primary);"
                    onclick={toggle_picker}
                >
                    {filter.filter_type().label()}
                </button>
            </div>

            if *picker_open {
                <div data-panel="date-picker" class="p-4 rounded-lg border space-y-3" style="background-color: var(--bg-secondary); border-color: var(--border-primary);">
                    <select
                        class="px-3 py-2 rounded-lg border text-sm"
                        style="background-color: var(--bg-tertiary); border-color: var(--border-primary); color: var(--fg-primary);"
                        onchange={on_kind}
                    >
                        { for DateFilterType::all().into_iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={kind == filter.filter_type()}>
                                {kind.label()}
                            </option>
                        }) }
                    </select>

                    if filter.is_active() {
                        <div class="flex items-center gap-2">
                            <input
                                type="date"
                                class="px-3 py-2 rounded-lg border text-sm"
                                style="background-color: var(--bg-tertiary); border-color: var(--border-primary); color: var(--fg-primary);"
                                value={date_value(filter.start())}
                                onchange={on_start}
                            />
                            <span style="color: var(--fg-muted);">{"~"}</span>
                            <input
                                type="date"
                                class="px-3 py-2 rounded-lg border text-sm"
                                style="background-color: var(--bg-tertiary); border-color: var(--border-primary); color: var(--fg-primary);"
                                value={date_value(filter.end())}
                                onchange={on_end}
                            />
                        </div>
                    }

                    if let Some(range_text) = filter.range_text() {
                        <p class="text-sm" style="color: var(--fg-secondary);">{range_text}</p>
                    }

                    <div class="flex justify-end gap-2">
                        <button
                            data-action="reset"
                            class="px-3 py-1.5 rounded-lg text-sm text-gray-300 hover:bg-gray-700"
                            onclick={on_reset}
                        >
                            {"Reset"}
                        </button>
                        <button
                            data-action="apply"
                            class="px-3 py-1.5 rounded-lg text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                            disabled={!filter.is_ready()}
                            onclick={on_apply}
                        >
                            {"Apply"}
                        </button>
                    </div>
                </div>
            }

            <div class="grid grid-cols-5 gap-3">
                <StatTile label="Customers" value={stats.total_customers.to_string()} />
                <StatTile label="Consults" value={stats.total_consults.to_string()} />
                <StatTile label="Actions" value={stats.total_actions.to_string()} />
                <StatTile label="Pending" value={stats.total_pending.to_string()} />
                <StatTile label="Completion" value={format!("{}%", stats.completion_rate)} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatTileProps {
    label: &'static str,
    value: String,
}

#[function_component(StatTile)]
fn stat_tile(props: &StatTileProps) -> Html {
    html! {
        <div class="p-3 rounded-lg border" style="background-color: var(--bg-secondary); border-color: var(--border-primary);">
            <p class="text-xs" style="color: var(--fg-muted);">{props.label}</p>
            <p class="text-xl font-bold" style="color: var(--fg-primary);">{&props.value}</p>
        </div>
    }
}
