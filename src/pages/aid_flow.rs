use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{use_toast, Confetti, PageHeader, ToastMsg};
use crate::config::CONFIG;
use crate::hooks::use_route_guard;
use crate::models::AidItem;

#[derive(Clone, Copy, PartialEq)]
enum AidTab {
    Available,
    Donate,
}

const ITEM_TYPES: [&str; 5] = ["Textbook", "Calculator", "Laptop", "School Supplies", "Other"];

#[function_component(AidFlow)]
pub fn aid_flow() -> Html {
    use_route_guard();

    let toast = use_toast();
    let tab = use_state(|| AidTab::Available);
    let items = use_state(AidItem::seed);
    let show_confetti = use_state(|| false);
    let submitting = use_state(|| false);
    let title_ref = use_node_ref();

    // Claim an item: mark it by id, celebrate, notify.
    let on_claim = {
        let items = items.clone();
        let show_confetti = show_confetti.clone();
        let toast = toast.clone();
        Callback::from(move |id: u32| {
            let mut next = (*items).clone();
            if !AidItem::claim(&mut next, id) {
                return;
            }
            items.set(next);

            show_confetti.set(true);
            Timeout::new(CONFIG.confetti_duration_ms, {
                let show_confetti = show_confetti.clone();
                move || show_confetti.set(false)
            })
            .forget();

            toast.emit(ToastMsg::new(
                "Item Claimed! 🎊",
                format!(
                    "Check your email for pickup details. +{} XP earned!",
                    CONFIG.xp_config.claim
                ),
            ));
        })
    };

    // Donate an item: simulated IPFS upload, then reset the form.
    let on_donate = {
        let submitting = submitting.clone();
        let title_ref = title_ref.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let title_input = match title_ref.cast::<HtmlInputElement>() {
                Some(input) => input,
                None => return,
            };
            if title_input.value().is_empty() {
                toast.emit(ToastMsg::new(
                    "Missing details",
                    "Give your item a title before donating.",
                ));
                return;
            }

            submitting.set(true);
            log::info!("🎁 Donating item: {}", title_input.value());

            let submitting = submitting.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(CONFIG.donate_delay_ms).await;
                submitting.set(false);
                title_input.set_value("");
                toast.emit(ToastMsg::new(
                    "Item Donated! 🎉",
                    format!(
                        "Your item has been added to the pool. +{} XP earned!",
                        CONFIG.xp_config.donate
                    ),
                ));
            });
        })
    };

    let select_tab = |target: AidTab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    let tab_class = |target: AidTab| {
        if *tab == target {
            "tab active"
        } else {
            "tab"
        }
    };

    html! {
        <div class="page aid-flow">
            if *show_confetti {
                <Confetti />
            }

            <PageHeader
                icon="🎁"
                title="AidFlow"
                blurb="Share what you have, get what you need"
            />

            <div class="tabs glass-card">
                <button class={tab_class(AidTab::Available)} onclick={select_tab(AidTab::Available)}>
                    {"Available Items"}
                </button>
                <button class={tab_class(AidTab::Donate)} onclick={select_tab(AidTab::Donate)}>
                    {"Donate Item"}
                </button>
            </div>

            if *tab == AidTab::Available {
                <div class="item-grid">
                    { for items.iter().map(|item| {
                        let on_claim = on_claim.clone();
                        let id = item.id;
                        html! {
                            <div key={item.id} class="item-card glass-card">
                                <div class="item-image">
                                    <img src={item.image.clone()} alt={item.title.clone()} />
                                    <span class="item-kind glass-card">{&item.kind}</span>
                                </div>
                                <div class="item-body">
                                    <h3>{&item.title}</h3>
                                    <p class="item-donor">
                                        {"Donated by "}
                                        <span class="mono">{&item.donor}</span>
                                    </p>
                                    <button
                                        class="btn-claim gradient-bg"
                                        disabled={!item.is_available()}
                                        onclick={Callback::from(move |_| on_claim.emit(id))}
                                    >
                                        if item.is_available() {
                                            {"✓ Claim Item"}
                                        } else {
                                            {"Claimed"}
                                        }
                                    </button>
                                </div>
                            </div>
                        }
                    })}
                </div>
            } else {
                <div class="donate-form glass-card">
                    <div class="form-group">
                        <label for="item-type">{"Item Type"}</label>
                        <select id="item-type" class="glass-card">
                            { for ITEM_TYPES.iter().map(|kind| html! {
                                <option key={*kind} value={*kind}>{*kind}</option>
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="item-title">{"Item Title"}</label>
                        <input
                            type="text"
                            id="item-title"
                            placeholder="Enter item name"
                            ref={title_ref}
                        />
                    </div>

                    <button
                        class="btn-donate gradient-bg"
                        disabled={*submitting}
                        onclick={on_donate}
                    >
                        if *submitting {
                            {"Uploading to IPFS..."}
                        } else {
                            {"🎁 Donate Item"}
                        }
                    </button>
                </div>
            }
        </div>
    }
}
