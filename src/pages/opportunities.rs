use yew::prelude::*;

use crate::components::{use_toast, PageHeader, ToastMsg};
use crate::config::CONFIG;
use crate::hooks::use_route_guard;
use crate::models::Opportunity;

#[function_component(Opportunities)]
pub fn opportunities() -> Html {
    use_route_guard();

    let toast = use_toast();
    let opportunities = use_state(Opportunity::seed);

    let on_save = {
        let opportunities = opportunities.clone();
        let toast = toast.clone();
        Callback::from(move |id: u32| {
            let mut next = (*opportunities).clone();
            let Some(now_saved) = Opportunity::toggle_saved(&mut next, id) else {
                return;
            };
            opportunities.set(next);

            if now_saved {
                toast.emit(ToastMsg::new(
                    "Saved! 📌",
                    format!("+{} XP for staying proactive!", CONFIG.xp_config.save_opportunity),
                ));
            } else {
                toast.emit(ToastMsg::new(
                    "Removed from saved",
                    "Opportunity removed from your list",
                ));
            }
        })
    };

    let on_learn_more = Callback::from(move |link: String| {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(&link, "_blank").is_err() {
                log::error!("❌ Could not open link: {}", link);
            }
        }
    });

    let saved_count = Opportunity::saved_count(&opportunities);

    html! {
        <div class="page opportunities">
            <PageHeader
                icon="🏆"
                title="Opportunities"
                blurb="Discover hackathons, scholarships & competitions"
            />

            <div class="filter-bar glass-card">
                <button class="btn-saved glass-card">
                    {format!("View Saved ({})", saved_count)}
                </button>
            </div>

            <div class="opportunity-grid">
                { for opportunities.iter().map(|opportunity| {
                    let on_save = on_save.clone();
                    let on_learn_more = on_learn_more.clone();
                    let id = opportunity.id;
                    let link = opportunity.link.clone();
                    html! {
                        <div key={opportunity.id} class="opportunity-card glass-card">
                            <div class={classes!("opportunity-header", opportunity.kind.css_class())}>
                                <div>
                                    <span class="opportunity-kind">{opportunity.kind.label()}</span>
                                    <h3>{&opportunity.title}</h3>
                                </div>
                                <button
                                    class={if opportunity.saved { "btn-bookmark saved" } else { "btn-bookmark" }}
                                    onclick={Callback::from(move |_| on_save.emit(id))}
                                >
                                    {"🔖"}
                                </button>
                            </div>

                            <div class="opportunity-meta">
                                <span>{"💰 "}{&opportunity.prize}</span>
                                <span>{"👥 "}{&opportunity.participants}</span>
                            </div>

                            <div class="opportunity-body">
                                <p>{&opportunity.description}</p>
                                <div class="deadline glass-card">
                                    {"📅 Deadline: "}
                                    <strong>{&opportunity.deadline}</strong>
                                </div>
                                <button
                                    class="btn-learn-more gradient-bg"
                                    onclick={Callback::from(move |_| on_learn_more.emit(link.clone()))}
                                >
                                    {"🔗 Learn More"}
                                </button>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
