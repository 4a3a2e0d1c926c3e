use yew::prelude::*;

use crate::components::PageHeader;
use crate::hooks::use_route_guard;
use crate::models::LeaderEntry;

#[function_component(Leaderboard)]
pub fn leaderboard() -> Html {
    use_route_guard();

    let leaders = LeaderEntry::seed();

    html! {
        <div class="page leaderboard">
            <PageHeader
                icon="🎓"
                title="Leaderboard"
                blurb="Top contributors & achievers in EduVerse"
            />

            <div class="leader-list">
                { for leaders.iter().map(|leader| {
                    let card_class = if leader.is_podium() {
                        "leader-card glass-card podium"
                    } else {
                        "leader-card glass-card"
                    };
                    html! {
                        <div key={leader.rank} class={card_class}>
                            <span class="leader-rank">{leader.rank_badge()}</span>
                            <img
                                class="leader-avatar"
                                src={leader.avatar.clone()}
                                alt={leader.name.clone()}
                            />
                            <div class="leader-info">
                                <h3>{&leader.name}</h3>
                                <p>{format!("⚡ {} XP", leader.xp)}</p>
                            </div>
                            if leader.is_podium() {
                                <span class="podium-badge glass-card gradient-text">
                                    {format!("TOP {}", leader.rank)}
                                </span>
                            }
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
