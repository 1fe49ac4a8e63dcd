use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::icons::IconView;
use crate::content::{Icon, FLOATING_ICONS, HERO_STATS};
use crate::document::{viewport_size, WindowListener};
use crate::motion::{floating_icon_offset, rotation_css, tech_circle_rotation, Point, Size};

const TECH_CIRCLES: [&str; 3] = ["circle-a", "circle-b", "circle-c"];

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let loaded = use_state(|| false);
    let pointer = use_state(|| (Point::default(), Size::default()));
    let (_, scroll_y) = use_window_scroll();

    // Fade the hero in once it is on the page
    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                loaded.set(true);
                || ()
            },
            (),
        );
    }

    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("mousemove", move |e: Event| {
                    if let Some(e) = e.dyn_ref::<MouseEvent>() {
                        let at = Point::new(e.client_x() as f64, e.client_y() as f64);
                        pointer.set((at, viewport_size()));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let (at, viewport) = *pointer;

    html! {
        <section id="home" class={classes!("hero", (*loaded).then_some("loaded"))}>
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        position: relative;
                        overflow: hidden;
                        padding-top: 5rem;
                        opacity: 0;
                        transform: translateY(-1.5rem);
                        transition: all 1s var(--ease-elastic);
                    }
                    .hero.loaded { opacity: 1; transform: translateY(0); }
                    .hero-blob {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(100px);
                        animation: float 6s ease-in-out infinite;
                    }
                    .blob-a { top: -30%; left: -10%; width: 50%; height: 50%; background: linear-gradient(90deg, rgba(139, 92, 246, 0.2), rgba(14, 165, 233, 0.2)); }
                    .blob-b { top: 20%; right: -10%; width: 40%; height: 40%; background: linear-gradient(270deg, rgba(16, 185, 129, 0.2), rgba(147, 197, 253, 0.2)); animation-delay: 1s; }
                    .blob-c { bottom: -10%; left: 20%; width: 50%; height: 40%; background: linear-gradient(0deg, rgba(192, 132, 252, 0.2), rgba(249, 168, 212, 0.2)); animation-delay: 2s; }
                    .hero-layer { position: absolute; inset: 0; pointer-events: none; overflow: hidden; }
                    .tech-circle { position: absolute; border: 2px dashed; border-radius: 9999px; }
                    .circle-a { width: 300px; height: 300px; left: 10%; top: 20%; border-color: rgba(14, 165, 233, 0.3); }
                    .circle-b { width: 200px; height: 200px; right: 15%; top: 15%; border-color: rgba(16, 185, 129, 0.2); }
                    .circle-c { width: 400px; height: 400px; left: 20%; bottom: 10%; border-color: rgba(192, 132, 252, 0.2); }
                    .floating-icon { position: absolute; color: rgba(14, 165, 233, 0.2); transition: transform 0.1s linear; }
                    .float-a { top: 25%; left: 25%; }
                    .float-b { top: 33%; right: 25%; }
                    .float-c { bottom: 25%; left: 33%; }
                    .float-d { bottom: 33%; right: 20%; }
                    .float-e { top: 20%; right: 33%; color: rgba(16, 185, 129, 0.2); }
                    .float-f { bottom: 20%; right: 25%; color: rgba(192, 132, 252, 0.2); }
                    .float-g { top: 40%; left: 20%; color: rgba(250, 204, 21, 0.3); }
                    .hero-content { position: relative; z-index: 10; text-align: center; padding: 5rem 1.5rem; }
                    .hero-content h1 { font-size: clamp(2.25rem, 5vw, 4.5rem); font-weight: 700; line-height: 1.1; margin: 1rem 0 1.5rem; }
                    .hero-content p { max-width: 42rem; margin: 0 auto 2.5rem; font-size: 1.125rem; color: rgba(15, 23, 42, 0.8); }
                    .hero-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
                    .hero-stats { margin-top: 5rem; display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; color: rgba(15, 23, 42, 0.6); }
                    .hero-stat { display: flex; flex-direction: column; align-items: center; }
                    .hero-stat strong { font-size: 1.875rem; }
                    .hero-fade { position: absolute; bottom: 0; left: 0; right: 0; height: 5rem; background: linear-gradient(to top, #fff, transparent); }
                "#}
            </style>

            <div class="hero-layer">
                <div class="hero-blob blob-a"></div>
                <div class="hero-blob blob-b"></div>
                <div class="hero-blob blob-c"></div>
            </div>

            <div class="hero-layer">
                { for TECH_CIRCLES.iter().enumerate().map(|(index, class)| html! {
                    <div
                        class={classes!("tech-circle", *class)}
                        style={rotation_css(tech_circle_rotation(scroll_y, index))}
                    ></div>
                }) }
            </div>

            <div class="hero-layer">
                { for FLOATING_ICONS.iter().enumerate().map(|(index, floating)| html! {
                    <span
                        class={classes!("floating-icon", floating.class)}
                        style={format!(
                            "{} animation-delay: {};",
                            floating_icon_offset(at, viewport, index).to_css(),
                            floating.delay
                        )}
                    >
                        <IconView icon={floating.icon} size={80} />
                    </span>
                }) }
            </div>

            <div class="hero-content">
                <span class="badge animate-blur-in">{"NEXT-GEN IT SOLUTIONS"}</span>
                <h1 class="animate-fade-in" style="animation-delay: 0.5s;">
                    {"Empowering Business with "}<br />
                    <span class="gradient-text">{"Next-Gen IT Solutions"}</span>
                </h1>
                <p class="animate-fade-in" style="animation-delay: 0.7s;">
                    {"NepTech delivers cutting-edge IT infrastructure and cloud solutions that transform how businesses operate in the digital landscape."}
                </p>
                <div class="hero-actions animate-fade-in" style="animation-delay: 0.9s;">
                    <AnchorLink href="#services" class="button-primary">
                        {"Explore Services"}
                        <IconView icon={Icon::ArrowRight} size={18} class="button-arrow" />
                    </AnchorLink>
                    <AnchorLink href="#contact" class="button-secondary">
                        {"Contact Us"}
                    </AnchorLink>
                </div>
                <div class="hero-stats animate-fade-in" style="animation-delay: 1.1s;">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <div class="hero-stat" key={stat.label}>
                            <strong class={classes!("gradient-text", stat.gradient)}>{stat.value}</strong>
                            <span>{stat.label}</span>
                        </div>
                    }) }
                </div>
            </div>

            <div class="hero-fade"></div>
        </section>
    }
}
