// Detail panel for the selected customer: summary, activity feed, tasks and
// notes tabs. Mutations are only emitted; the page owns the data.

use salescrm_shared::{
    ActivityEntry, ActivityKind, Customer, DetailTab, RecordingContext, SummaryOverview, Task,
    VoiceSummary,
};
use yew::prelude::*;

use super::badges::{PriorityBadge, SentimentBadge, StageBadge};
use crate::utils::format_count;

#[derive(Properties, PartialEq)]
pub struct CustomerDetailProps {
    pub customer: Customer,
    pub active_tab: DetailTab,
    pub on_tab_change: Callback<DetailTab>,
    pub on_edit_task: Callback<String>,
    pub on_toggle_task: Callback<String>,
    pub on_delete_task: Callback<String>,
    pub on_save_note: Callback<String>,
    #[prop_or_default]
    pub on_start_recording: Option<Callback<RecordingContext>>,
}

#[function_component(CustomerDetail)]
pub fn customer_detail(props: &CustomerDetailProps) -> Html {
    let customer = &props.customer;

    let on_record = props.on_start_recording.clone().map(|on_start_recording| {
        let context = RecordingContext::for_customer(customer);
        Callback::from(move |_: MouseEvent| on_start_recording.emit(context.clone()))
    });

    let panel = match &props.active_tab {
        DetailTab::Summary => html! { <SummaryPanel customer={customer.clone()} /> },
        DetailTab::Activities => html! { <ActivityPanel customer={customer.clone()} /> },
        DetailTab::Tasks => html! {
            <TaskPanel
                tasks={customer.tasks.clone()}
                on_edit={props.on_edit_task.clone()}
                on_toggle={props.on_toggle_task.clone()}
                on_delete={props.on_delete_task.clone()}
            />
        },
        // Keyed so a draft does not leak into another customer's notes.
        DetailTab::Notes => html! {
            <NotesPanel key={customer.id.clone()} on_save={props.on_save_note.clone()} />
        },
        DetailTab::Other(value) => {
            log::debug!("no panel for detail tab {:?}", value);
            html! {}
        }
    };

    html! {
        <div class="rounded-lg border" style="background-color: var(--bg-secondary); border-color: var(--border-primary);">
            <div class="p-6 border-b" style="border-color: var(--border-primary);">
                <div class="flex items-start justify-between">
                    <div class="flex items-center space-x-4">
                        <div class="w-14 h-14 rounded-full bg-blue-500 flex items-center justify-center">
                            <span class="text-white text-xl font-semibold">{customer.avatar_glyph()}</span>
                        </div>
                        <div>
                            <div class="flex items-center space-x-2">
                                <h2 class="text-xl font-bold" style="color: var(--fg-primary);">{&customer.name}</h2>
                                <StageBadge stage={customer.stage.clone()} />
                            </div>
                            <p class="text-sm" style="color: var(--fg-muted);">{&customer.product}</p>
                            <p class="text-sm" style="color: var(--fg-muted);">
                                {format!("{} · {}", customer.email, customer.phone)}
                            </p>
                        </div>
                    </div>
                    if let Some(on_record) = on_record {
                        <button
                            class="px-3 py-1.5 rounded-lg text-sm text-white bg-red-600 hover:bg-red-700"
                            onclick={on_record}
                        >
                            {"Start recording"}
                        </button>
                    }
                </div>

                <nav class="flex space-x-1 mt-4">
                    { for DetailTab::all().into_iter().map(|tab| {
                        let active = tab == props.active_tab;
                        let on_tab_change = props.on_tab_change.clone();
                        let label = tab.label();
                        html! {
                            <button
                                class={if active {
                                    "px-3 py-1.5 rounded text-sm font-medium bg-blue-600 text-white"
                                } else {
                                    "px-3 py-1.5 rounded text-sm font-medium text-gray-400 hover:bg-gray-700"
                                }}
                                onclick={Callback::from(move |_| on_tab_change.emit(tab.clone()))}
                            >
                                {label}
                            </button>
                        }
                    }) }
                </nav>
            </div>

            <div data-panel="detail-tab" class="p-6">{panel}</div>
        </div>
    }
}

// ===== Summary =====

#[derive(Properties, PartialEq)]
struct CustomerPanelProps {
    customer: Customer,
}

#[function_component(SummaryPanel)]
fn summary_panel(props: &CustomerPanelProps) -> Html {
    let customer = &props.customer;

    let overview = match customer.summary_overview() {
        SummaryOverview::Api { latest_voice, counters } => html! {
            <div class="space-y-3">
                <div class="p-3 rounded" style="background-color: var(--bg-tertiary);">
                    <p class="text-xs font-medium mb-1" style="color: var(--fg-muted);">{"Latest consultation"}</p>
                    <p class="text-sm" style="color: var(--fg-secondary);">{latest_voice}</p>
                </div>
                <div class="grid grid-cols-3 gap-3 text-center">
                    <Stat label="Consults" value={format_count(counters.consults)} />
                    <Stat label="Actions" value={format_count(counters.actions)} />
                    <Stat label="Pending" value={format_count(counters.pending)} />
                </div>
            </div>
        },
        SummaryOverview::Local { voice_summaries } if voice_summaries.is_empty() => html! {
            <p class="text-sm" style="color: var(--fg-muted);">{"No voice summaries yet"}</p>
        },
        SummaryOverview::Local { voice_summaries } => html! {
            <div class="space-y-3">
                { for voice_summaries.iter().map(voice_card) }
            </div>
        },
    };

    let tasks = customer.summary_tasks();

    html! {
        <div class="space-y-6">
            <section>
                <h3 class="text-sm font-semibold mb-3" style="color: var(--fg-primary);">{"Overview"}</h3>
                {overview}
            </section>
            <section>
                <h3 class="text-sm font-semibold mb-3" style="color: var(--fg-primary);">{"Tasks"}</h3>
                if tasks.is_empty() {
                    <p class="text-sm" style="color: var(--fg-muted);">{"No tasks"}</p>
                } else {
                    <ul class="space-y-2">
                        { for tasks.iter().map(|task| html! {
                            <li key={task.id.clone()} class="flex items-center justify-between text-sm">
                                <span
                                    class={if task.completed { "line-through" } else { "" }}
                                    style="color: var(--fg-secondary);"
                                >
                                    {&task.title}
                                </span>
                                <PriorityBadge priority={task.priority.clone()} />
                            </li>
                        }) }
                    </ul>
                }
            </section>
        </div>
    }
}

fn voice_card(voice: &VoiceSummary) -> Html {
    html! {
        <div key={voice.id.clone()} class="p-3 rounded" style="background-color: var(--bg-tertiary);">
            <div class="flex items-center justify-between mb-1">
                <span class="text-xs font-medium" style="color: var(--fg-muted);">
                    {format!("{} · {}", voice.meeting_type, voice.date)}
                </span>
                <SentimentBadge sentiment={voice.sentiment.clone()} />
            </div>
            <p class="text-sm" style="color: var(--fg-secondary);">{&voice.summary}</p>
            <ul class="mt-2 list-disc list-inside text-xs" style="color: var(--fg-muted);">
                { for voice.summary_key_points().iter().map(|point| html! { <li>{point}</li> }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatProps {
    label: &'static str,
    value: String,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    html! {
        <div class="p-3 rounded" style="background-color: var(--bg-tertiary);">
            <p class="text-lg font-semibold" style="color: var(--fg-primary);">{&props.value}</p>
            <p class="text-xs" style="color: var(--fg-muted);">{props.label}</p>
        </div>
    }
}

// ===== Activities =====

#[function_component(ActivityPanel)]
fn activity_panel(props: &CustomerPanelProps) -> Html {
    let feed = props.customer.activity_feed();

    if feed.is_empty() {
        return html! {
            <p class="text-sm" style="color: var(--fg-muted);">{"No activity recorded"}</p>
        };
    }

    html! {
        <ol class="space-y-3">
            { for feed.iter().map(activity_row) }
        </ol>
    }
}

fn activity_row(entry: &ActivityEntry<'_>) -> Html {
    let sentiment = match entry {
        ActivityEntry::Voice(voice) => html! { <SentimentBadge sentiment={voice.sentiment.clone()} /> },
        ActivityEntry::Consultation(_) => html! {},
    };

    html! {
        <li key={format!("{:?}-{}", entry.kind(), entry.id())} class="flex space-x-3">
            {activity_icon(entry.kind())}
            <div class="flex-1">
                <div class="flex items-center justify-between">
                    <span class="text-sm font-medium" style="color: var(--fg-primary);">{entry.title()}</span>
                    <span class="text-xs" style="color: var(--fg-muted);">{entry.date()}</span>
                </div>
                <p class="text-sm" style="color: var(--fg-secondary);">{entry.summary()}</p>
                {sentiment}
            </div>
        </li>
    }
}

fn activity_icon(kind: ActivityKind) -> Html {
    match kind {
        ActivityKind::Voice => html! {
            <div class="w-8 h-8 rounded-full bg-purple-600 flex items-center justify-center" title={kind.label()}>
                <svg class="w-4 h-4 text-white" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 11a7 7 0 01-7 7m0 0a7 7 0 01-7-7m7 7v4m0 0H8m4 0h4m-4-8a3 3 0 01-3-3V5a3 3 0 116 0v6a3 3 0 01-3 3z"/>
                </svg>
            </div>
        },
        ActivityKind::Consultation => html! {
            <div class="w-8 h-8 rounded-full bg-blue-600 flex items-center justify-center" title={kind.label()}>
                <svg class="w-4 h-4 text-white" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 10h.01M12 10h.01M16 10h.01M9 16H5a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v8a2 2 0 01-2 2h-5l-5 5v-5z"/>
                </svg>
            </div>
        },
    }
}

// ===== Tasks =====

#[derive(Properties, PartialEq)]
struct TaskPanelProps {
    tasks: Vec<Task>,
    on_edit: Callback<String>,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
}

#[function_component(TaskPanel)]
fn task_panel(props: &TaskPanelProps) -> Html {
    if props.tasks.is_empty() {
        return html! {
            <p class="text-sm" style="color: var(--fg-muted);">{"No tasks"}</p>
        };
    }

    html! {
        <ul class="space-y-2">
            { for props.tasks.iter().map(|task| html! {
                <TaskRow
                    key={task.id.clone()}
                    task={task.clone()}
                    on_edit={props.on_edit.clone()}
                    on_toggle={props.on_toggle.clone()}
                    on_delete={props.on_delete.clone()}
                />
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct TaskRowProps {
    task: Task,
    on_edit: Callback<String>,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
}

#[function_component(TaskRow)]
fn task_row(props: &TaskRowProps) -> Html {
    let menu_open = use_state(|| false);
    let task = &props.task;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    // Each menu entry emits its hook with the task id and closes the menu.
    let menu_action = |hook: &Callback<String>| {
        let hook = hook.clone();
        let id = task.id.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            hook.emit(id.clone());
        })
    };

    let toggle_label = if task.completed { "Mark as pending" } else { "Mark as complete" };

    html! {
        <li class="flex items-center justify-between p-3 rounded" style="background-color: var(--bg-tertiary);">
            <div>
                <div class="flex items-center space-x-2">
                    <span
                        class={classes!("text-sm", "font-medium", task.completed.then_some("line-through"))}
                        style="color: var(--fg-primary);"
                    >
                        {&task.title}
                    </span>
                    <PriorityBadge priority={task.priority.clone()} />
                </div>
                if !task.description.is_empty() {
                    <p class="text-xs mt-1" style="color: var(--fg-muted);">{&task.description}</p>
                }
                <p class="text-xs mt-1" style="color: var(--fg-muted);">{format!("Due {}", task.due_date)}</p>
            </div>
            <div class="relative">
                <button
                    class="p-1 rounded text-gray-400 hover:bg-gray-700"
                    title="Task actions"
                    onclick={toggle_menu}
                >
                    <svg class="w-4 h-4" fill="currentColor" viewBox="0 0 24 24">
                        <path d="M12 8a2 2 0 110-4 2 2 0 010 4zm0 6a2 2 0 110-4 2 2 0 010 4zm0 6a2 2 0 110-4 2 2 0 010 4z"/>
                    </svg>
                </button>
                if *menu_open {
                    <div class="absolute right-0 mt-1 w-44 bg-gray-800 rounded-lg shadow-lg border border-gray-700 py-1 z-10">
                        <button class="w-full text-left px-3 py-2 text-sm text-gray-300 hover:bg-gray-700"
                            onclick={menu_action(&props.on_edit)}>
                            {"Edit"}
                        </button>
                        <button class="w-full text-left px-3 py-2 text-sm text-gray-300 hover:bg-gray-700"
                            onclick={menu_action(&props.on_toggle)}>
                            {toggle_label}
                        </button>
                        <button class="w-full text-left px-3 py-2 text-sm text-red-400 hover:bg-gray-700"
                            onclick={menu_action(&props.on_delete)}>
                            {"Delete"}
                        </button>
                    </div>
                }
            </div>
        </li>
    }
}

// ===== Notes =====

#[derive(Properties, PartialEq)]
struct NotesPanelProps {
    on_save: Callback<String>,
}

#[function_component(NotesPanel)]
fn notes_panel(props: &NotesPanelProps) -> Html {
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_save = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_| {
            on_save.emit((*draft).clone());
            draft.set(String::new());
        })
    };

    html! {
        <div class="space-y-3">
            <textarea
                class="w-full h-40 p-3 rounded-lg border text-sm"
                style="background-color: var(--bg-tertiary); border-color: var(--border-primary); color: var(--fg-primary);"
                placeholder="Write a consultation note..."
                value={(*draft).clone()}
                oninput={on_input}
            />
            <div class="flex justify-end">
                <button
                    class="px-4 py-2 rounded-lg text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                    onclick={on_save}
                >
                    {"Save"}
                </button>
            </div>
        </div>
    }
}
