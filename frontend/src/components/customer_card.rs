// Customer tile for the list column: identity, stage, counters and one
// preview snippet.

use salescrm_shared::{Customer, PreviewSnippet, RecordingContext};
use yew::prelude::*;

use super::badges::{SentimentBadge, StageBadge};

#[derive(Properties, PartialEq)]
pub struct CustomerCardProps {
    pub customer: Customer,
    #[prop_or_default]
    pub selected: bool,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub on_start_recording: Option<Callback<RecordingContext>>,
}

#[function_component(CustomerCard)]
pub fn customer_card(props: &CustomerCardProps) -> Html {
    let customer = &props.customer;
    let counters = customer.display_counters();

    let on_click = {
        let on_select = props.on_select.clone();
        let id = customer.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    // The buttons sit inside the clickable tile; stop the click there so the
    // tile handler does not fire a second time.
    let on_manage = {
        let on_select = props.on_select.clone();
        let id = customer.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_select.emit(id.clone());
        })
    };

    let on_record = props.on_start_recording.clone().map(|on_start_recording| {
        let context = RecordingContext::for_customer(customer);
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_start_recording.emit(context.clone());
        })
    });

    let border = if props.selected {
        "border-color: var(--color-primary); background-color: var(--bg-highlight);"
    } else {
        "border-color: var(--border-primary); background-color: var(--bg-secondary);"
    };

    let preview = customer.preview();

    html! {
        <div
            class="rounded-lg border p-4 cursor-pointer transition-colors"
            style={border}
            onclick={on_click}
        >
            <div class="flex items-start justify-between">
                <div class="flex items-center space-x-3">
                    <div class="w-10 h-10 rounded-full bg-blue-500 flex items-center justify-center">
                        <span class="text-white font-medium">{customer.avatar_glyph()}</span>
                    </div>
                    <div>
                        <div class="flex items-center space-x-2">
                            <h3 class="font-semibold" style="color: var(--fg-primary);">{&customer.name}</h3>
                            <StageBadge stage={customer.stage.clone()} />
                        </div>
                        <p class="text-sm" style="color: var(--fg-muted);">{&customer.product}</p>
                    </div>
                </div>
                <div class="flex items-center space-x-1">
                    if let Some(on_record) = on_record {
                        <button
                            data-action="record"
                            class="px-2 py-1 rounded text-xs text-white bg-red-600 hover:bg-red-700"
                            title="Start recording"
                            onclick={on_record}
                        >
                            {"Record"}
                        </button>
                    }
                    <button
                        data-action="manage"
                        class="px-2 py-1 rounded text-xs text-white bg-blue-600 hover:bg-blue-700"
                        onclick={on_manage}
                    >
                        {"Manage"}
                    </button>
                </div>
            </div>

            <div class="grid grid-cols-3 gap-2 mt-3 text-center">
                <Counter label="Consults" value={counters.consults} />
                <Counter label="Actions" value={counters.actions} />
                <Counter label="Pending" value={counters.pending} />
            </div>

            {render_preview(&preview)}
        </div>
    }
}

fn render_preview(preview: &PreviewSnippet<'_>) -> Html {
    let (Some(label), Some(text)) = (preview.label(), preview.text()) else {
        return html! {};
    };
    let sentiment = match preview {
        PreviewSnippet::RecentVoiceSummary(voice) => html! {
            <SentimentBadge sentiment={voice.sentiment.clone()} />
        },
        _ => html! {},
    };

    html! {
        <div class="mt-3 p-2 rounded" style="background-color: var(--bg-tertiary);">
            <div class="flex items-center justify-between mb-1">
                <span class="text-xs font-medium" style="color: var(--fg-muted);">{label}</span>
                {sentiment}
            </div>
            <p class="text-sm line-clamp-2" style="color: var(--fg-secondary);">{text}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CounterProps {
    label: &'static str,
    value: u32,
}

#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    html! {
        <div>
            <p class="text-lg font-semibold" style="color: var(--fg-primary);">{props.value}</p>
            <p class="text-xs" style="color: var(--fg-muted);">{props.label}</p>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn customer() -> Customer {
        serde_json::from_value(serde_json::json!({
            "id": "c-1",
            "name": "Kim",
            "avatar": "K",
            "product": "Annuity",
            "stage": "customer",
            "email": "kim@example.com",
            "phone": "010"
        }))
        .unwrap()
    }

    async fn render(props: CustomerCardProps) -> web_sys::Element {
        let document = document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<CustomerCard>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;
        root
    }

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn click(root: &web_sys::Element, action: &str) {
        root.query_selector(&format!("[data-action={}]", action))
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
    }

    #[wasm_bindgen_test]
    async fn manage_selects_exactly_once() {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let on_select = {
            let selected = selected.clone();
            Callback::from(move |id: String| selected.borrow_mut().push(id))
        };

        let root = render(CustomerCardProps {
            customer: customer(),
            selected: false,
            on_select,
            on_start_recording: None,
        })
        .await;

        assert!(root.query_selector("[data-action=record]").unwrap().is_none());
        click(&root, "manage");
        assert_eq!(*selected.borrow(), vec!["c-1".to_string()]);
    }

    #[wasm_bindgen_test]
    async fn record_emits_context_without_selecting() {
        let selected = Rc::new(RefCell::new(0));
        let recorded = Rc::new(RefCell::new(None));
        let on_select = {
            let selected = selected.clone();
            Callback::from(move |_: String| *selected.borrow_mut() += 1)
        };
        let on_start_recording = {
            let recorded = recorded.clone();
            Callback::from(move |context: RecordingContext| *recorded.borrow_mut() = Some(context))
        };

        let root = render(CustomerCardProps {
            customer: customer(),
            selected: false,
            on_select,
            on_start_recording: Some(on_start_recording),
        })
        .await;

        click(&root, "record");
        assert_eq!(*selected.borrow(), 0);
        assert_eq!(
            recorded.borrow().clone(),
            Some(RecordingContext {
                context_type: "customer".into(),
                name: "Kim".into(),
                id: "c-1".into(),
            })
        );
    }
}
