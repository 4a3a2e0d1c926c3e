// ============================================================================
// TOAST HOST - transient notifications
// ============================================================================
// Every feature action emits one of these. Toasts auto-dismiss after the
// configured duration; nothing blocks the UI.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, PartialEq)]
pub struct ToastMsg {
    pub title: String,
    pub description: String,
}

impl ToastMsg {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

enum ToastAction {
    Push(ToastMsg),
    Dismiss(u32),
}

#[derive(PartialEq, Default)]
struct ToastList {
    next_id: u32,
    toasts: Vec<(u32, ToastMsg)>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        match action {
            ToastAction::Push(msg) => {
                let mut toasts = self.toasts.clone();
                toasts.push((self.next_id, msg));
                Rc::new(Self {
                    next_id: self.next_id + 1,
                    toasts,
                })
            }
            ToastAction::Dismiss(id) => {
                let mut toasts = self.toasts.clone();
                toasts.retain(|(toast_id, _)| *toast_id != id);
                Rc::new(Self {
                    next_id: self.next_id,
                    toasts,
                })
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastContext {
    dispatcher: UseReducerDispatcher<ToastList>,
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    msg: ToastMsg,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Schedule dismissal once per toast; cancel if unmounted early.
    {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(CONFIG.toast_duration_ms, move || {
                on_dismiss.emit(id);
            });
            move || drop(timeout)
        });
    }

    html! {
        <div class="toast glass-card">
            <p class="toast-title">{&props.msg.title}</p>
            <p class="toast-description">{&props.msg.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);

    let context = ToastContext {
        dispatcher: list.dispatcher(),
    };

    let on_dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast-stack">
                { for list.toasts.iter().map(|(id, msg)| html! {
                    <ToastItem key={*id} id={*id} msg={msg.clone()} on_dismiss={on_dismiss.clone()} />
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

/// Returns a callback that shows a toast; it disappears on its own.
#[hook]
pub fn use_toast() -> Callback<ToastMsg> {
    let context = use_context::<ToastContext>().expect("use_toast called outside ToastProvider");

    let dispatcher = context.dispatcher;
    Callback::from(move |msg: ToastMsg| {
        dispatcher.dispatch(ToastAction::Push(msg));
    })
}
