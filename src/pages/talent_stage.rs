use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::{use_toast, Confetti, PageHeader, ToastMsg};
use crate::config::CONFIG;
use crate::hooks::use_route_guard;
use crate::models::Submission;

#[function_component(TalentStage)]
pub fn talent_stage() -> Html {
    use_route_guard();

    let toast = use_toast();
    let submissions = use_state(Submission::seed);
    let show_confetti = use_state(|| false);

    let on_vote = {
        let submissions = submissions.clone();
        let toast = toast.clone();
        Callback::from(move |id: u32| {
            let mut next = (*submissions).clone();
            Submission::vote(&mut next, id);
            submissions.set(next);
            toast.emit(ToastMsg::new(
                "Vote Submitted! 🗳️",
                format!(
                    "+{} XP earned for community engagement",
                    CONFIG.xp_config.vote
                ),
            ));
        })
    };

    let on_mint = {
        let show_confetti = show_confetti.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            show_confetti.set(true);
            Timeout::new(CONFIG.confetti_duration_ms, {
                let show_confetti = show_confetti.clone();
                move || show_confetti.set(false)
            })
            .forget();
            toast.emit(ToastMsg::new(
                "NFT Trophy Minted! 🏆",
                "Your achievement is now on the blockchain!",
            ));
        })
    };

    // Upload flow is display-only in the demo.
    let on_submit_entry = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            toast.emit(ToastMsg::new(
                "Entry Submitted! 🎬",
                "Your video is queued for this week's showcase.",
            ));
        })
    };

    let top_three = Submission::top_three(&submissions);

    html! {
        <div class="page talent-stage">
            if *show_confetti {
                <Confetti />
            }

            <PageHeader
                icon="🏆"
                title="TalentStage"
                blurb="Showcase your talent & vote for the best"
            />

            <div class="stage-layout">
                <div class="upload-panel glass-card">
                    <h2 class="gradient-text">{"Upload Your Talent"}</h2>

                    <div class="upload-dropzone glass-card">
                        <p>{"⬆ Upload 30-second video"}</p>
                        <p class="upload-hint">{"Max size: 50MB"}</p>
                    </div>

                    <button class="btn-submit gradient-bg" onclick={on_submit_entry}>
                        {"Submit Entry"}
                    </button>

                    <div class="top-three">
                        <h3>{"🏆 Top 3 This Week"}</h3>
                        { for top_three.iter().enumerate().map(|(i, sub)| html! {
                            <div key={sub.id} class="top-entry glass-card">
                                <span class="top-rank gradient-text">{format!("#{}", i + 1)}</span>
                                <div>
                                    <p class="top-creator">{&sub.creator}</p>
                                    <p class="top-votes">{format!("{} votes", sub.votes)}</p>
                                </div>
                            </div>
                        })}
                    </div>
                </div>

                <div class="submission-grid">
                    { for submissions.iter().map(|submission| {
                        let on_vote = on_vote.clone();
                        let id = submission.id;
                        html! {
                            <div key={submission.id} class="submission-card glass-card">
                                if submission.is_winner {
                                    <span class="winner-badge gradient-bg">{"🏆 Winner"}</span>
                                }

                                <div class="submission-thumb">
                                    <img src={submission.thumbnail.clone()} alt={submission.title.clone()} />
                                </div>

                                <div class="submission-body">
                                    <h3>{&submission.title}</h3>
                                    <p>{"by "}{&submission.creator}</p>

                                    <div class="submission-actions">
                                        <span class="vote-count glass-card">
                                            {format!("👍 {}", submission.votes)}
                                        </span>
                                        <button
                                            class="btn-vote gradient-bg"
                                            onclick={Callback::from(move |_| on_vote.emit(id))}
                                        >
                                            {"Vote"}
                                        </button>
                                    </div>

                                    if submission.is_winner {
                                        <button class="btn-mint-trophy" onclick={on_mint.clone()}>
                                            {"🏆 Mint NFT Trophy"}
                                        </button>
                                    }
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
