use yew::prelude::*;

const PARTICLE_COUNT: usize = 24;

/// Full-screen celebratory overlay. Visibility is owned by the page that
/// fires it; positions are derived from the particle index so the layer
/// renders the same on every mount.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    html! {
        <div class="confetti-layer">
            { for (0..PARTICLE_COUNT).map(|i| {
                let left = (i * 37) % 100;
                let delay_ms = (i * 137) % 1500;
                let style = format!(
                    "left: {}%; animation-delay: {}ms;",
                    left, delay_ms
                );
                html! {
                    <span key={i} class={classes!("confetti-piece", format!("confetti-{}", i % 4))} {style} />
                }
            })}
        </div>
    }
}
