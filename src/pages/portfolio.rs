use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::{use_toast, Confetti, PageHeader, ToastMsg};
use crate::config::CONFIG;
use crate::hooks::use_route_guard;

const SKILLS: [&str; 5] = ["React", "Python", "Math", "Public Speaking", "Piano"];

const ACHIEVEMENTS: [(&str, &str); 4] = [
    ("🏆", "Top Contributor"),
    ("🎁", "Generous Donor"),
    ("🥇", "Talent Winner"),
    ("✨", "AI Helper"),
];

const STATS: [(&str, u32, &str); 4] = [
    ("Items Donated", 12, "🎁"),
    ("Talent Wins", 3, "🏆"),
    ("Helpful Answers", 27, "✨"),
    ("Total XP", 1850, "⚡"),
];

const TOKEN_ID: &str = "#EDU-RESUME-2025-001";

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_route_guard();

    let toast = use_toast();
    let is_minted = use_state(|| false);
    let show_confetti = use_state(|| false);

    // One-way toggle: once minted the button is replaced by the token card.
    let on_mint = {
        let is_minted = is_minted.clone();
        let show_confetti = show_confetti.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            is_minted.set(true);
            show_confetti.set(true);
            Timeout::new(CONFIG.confetti_duration_ms, {
                let show_confetti = show_confetti.clone();
                move || show_confetti.set(false)
            })
            .forget();
            toast.emit(ToastMsg::new(
                "NFT Resume Minted! 🎉",
                "Your dynamic resume is now on the blockchain!",
            ));
        })
    };

    html! {
        <div class="page portfolio">
            if *show_confetti {
                <Confetti />
            }

            <PageHeader
                icon="💼"
                title="NFT Portfolio"
                blurb="Your dynamic blockchain resume"
            />

            <div class="nft-card glass-card">
                <div class="nft-header">
                    <div>
                        <h2 class="gradient-text">{"Student #0x7a9f42e"}</h2>
                        <p>{"EduVerse Member Since 2025"}</p>
                    </div>
                    <div class="xp-badge glass-card">
                        {"⚡ 1850 XP"}
                    </div>
                </div>

                <div class="stats-grid">
                    { for STATS.iter().map(|(label, value, icon)| html! {
                        <div key={*label} class="stat-card glass-card">
                            <span class="stat-icon">{*icon}</span>
                            <p class="stat-value gradient-text">{*value}</p>
                            <p class="stat-label">{*label}</p>
                        </div>
                    })}
                </div>

                <div class="skills">
                    <h3>{"Skills"}</h3>
                    <div class="skill-pills">
                        { for SKILLS.iter().map(|skill| html! {
                            <span key={*skill} class="pill glass-card gradient-text">{*skill}</span>
                        })}
                    </div>
                </div>

                <div class="achievements">
                    <h3>{"Achievements"}</h3>
                    <div class="achievement-grid">
                        { for ACHIEVEMENTS.iter().map(|(icon, title)| html! {
                            <div key={*title} class="achievement-card glass-card">
                                <span class="achievement-icon">{*icon}</span>
                                <p>{*title}</p>
                            </div>
                        })}
                    </div>
                </div>

                if !*is_minted {
                    <button class="btn-mint gradient-bg glow-effect" onclick={on_mint}>
                        {"✨ Mint Dynamic NFT Resume"}
                    </button>
                } else {
                    <div class="minted-card glass-card">
                        <p class="minted-headline">{"✨ NFT Minted Successfully! ✨"}</p>
                        <p>
                            {"Your dynamic resume NFT is now on the blockchain and will \
                              update automatically with your achievements."}
                        </p>
                        <div class="token-id glass-card">
                            <p class="token-label">{"Token ID"}</p>
                            <p class="mono gradient-text">{TOKEN_ID}</p>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}
