use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::icons::IconView;
use crate::content::{Icon, ABOUT_STATS, FOUNDER_IMAGE, HIGHLIGHTS, ORBIT_ICONS};
use crate::document::WindowListener;
use crate::motion::{orbit_rotation, OrbitRotation, Point, Rect};
use crate::reveal::use_reveal;

fn bounding_rect(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let text = use_node_ref();
    let image = use_node_ref();
    let mission = use_node_ref();
    let orbits = use_node_ref();

    let text_revealed = use_reveal(text.clone(), 0);
    let image_revealed = use_reveal(image.clone(), 0);
    let mission_revealed = use_reveal(mission.clone(), 0);
    let rotation = use_state_eq(OrbitRotation::default);

    {
        let rotation = rotation.clone();
        let orbits = orbits.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("mousemove", move |e: Event| {
                    let Some(e) = e.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    if let Some(rect) = bounding_rect(&orbits) {
                        let at = Point::new(e.client_x() as f64, e.client_y() as f64);
                        rotation.set(orbit_rotation(at, rect));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <section id="about" class="section-padding about">
            <style>
                {r#"
                    .about { position: relative; overflow: hidden; background: #fff; }
                    .about-grid { display: grid; grid-template-columns: 1fr; gap: 4rem; align-items: center; }
                    @media (min-width: 1024px) {
                        .about-grid { grid-template-columns: 1fr 1fr; }
                        .about-text { order: 1; }
                        .about-visual { order: 2; }
                    }
                    .about-text h2 { font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 700; margin: 1rem 0 1.5rem; }
                    .about-text > p { margin-bottom: 1.5rem; }
                    .about-stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr)); gap: 1rem; margin: 2rem 0; }
                    .about-stat {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: #fff;
                        box-shadow: 0 10px 15px rgba(15, 23, 42, 0.08);
                        transition: all 0.3s;
                    }
                    .about-stat:hover { transform: translateY(-0.25rem); box-shadow: 0 20px 25px rgba(15, 23, 42, 0.1); }
                    .about-stat strong { font-size: 1.875rem; }
                    .about-stat span { font-size: 0.875rem; color: rgba(15, 23, 42, 0.7); }
                    .highlights { display: grid; gap: 1rem; margin-bottom: 2rem; }
                    .highlight { display: flex; align-items: flex-start; gap: 0.75rem; }
                    .highlight svg { flex-shrink: 0; margin-top: 0.25rem; color: var(--neptech-green); }
                    .highlight h4 { font-weight: 500; }
                    .highlight p { font-size: 0.875rem; color: rgba(15, 23, 42, 0.7); }
                    .about-visual { position: relative; perspective: 1000px; }
                    .founder-frame {
                        position: relative;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        transform-style: preserve-3d;
                        transition: transform 0.5s;
                    }
                    .founder-frame:hover { transform: scale(1.02); }
                    .founder-frame img { display: block; width: 100%; height: auto; object-fit: cover; }
                    .founder-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(15, 23, 42, 0.7), transparent); }
                    .founder-caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 1.5rem; color: #fff; }
                    .founder-caption h3 { font-size: 1.25rem; font-weight: 600; }
                    .orbits { position: absolute; inset: 0; pointer-events: none; }
                    .orbit { position: absolute; padding: 0.75rem; }
                    .orbit svg { animation: pulse-subtle 3s ease-in-out infinite; }
                    .orbit-a { top: 10%; left: 10%; color: var(--neptech-blue); }
                    .orbit-b { top: 20%; right: 15%; color: var(--neptech-green); }
                    .orbit-c { bottom: 30%; left: 20%; color: #facc15; }
                    .orbit-d { bottom: 20%; right: 10%; color: var(--neptech-purple); }
                    .mission-card {
                        margin-top: 2rem;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(90deg, #eff6ff, #faf5ff);
                        box-shadow: 0 10px 15px rgba(15, 23, 42, 0.08);
                        transition: all 0.5s;
                    }
                    .mission-card:hover { transform: scale(1.05); box-shadow: 0 20px 25px rgba(15, 23, 42, 0.1); }
                    .mission-card h3 { display: flex; align-items: center; gap: 0.5rem; font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                    .mission-card svg { color: var(--neptech-blue); }
                "#}
            </style>

            <div class="section-blobs">
                <div class="blob blob-tr"></div>
                <div class="blob blob-bl"></div>
                <div class="blob blob-mr"></div>
            </div>

            <div class="container about-grid">
                <div ref={text} class={classes!("about-text", "reveal-target", text_revealed.then_some("animate-fade-in-right"))}>
                    <span class="badge">{"ABOUT NEPTECH"}</span>
                    <h2>
                        {"Pioneering IT Solutions for "}
                        <span class="gradient-text">{"Forward-Thinking"}</span>
                        {" Businesses"}
                    </h2>
                    <p class="muted">
                        {"Founded by Shashank Ray, NepTech emerged from a vision to bridge the gap between complex technology and business needs. We provide enterprise-grade IT solutions with a personal touch, ensuring that technology becomes an enabler rather than a barrier for your business growth."}
                    </p>
                    <p class="muted">
                        {"Our team of certified IT professionals brings together decades of combined experience across various industry sectors, allowing us to deliver customized solutions that precisely match your operational requirements and strategic objectives."}
                    </p>

                    <div class="about-stats">
                        { for ABOUT_STATS.iter().map(|stat| html! {
                            <div class="about-stat" key={stat.label}>
                                <strong class={classes!("gradient-text", stat.gradient)}>{stat.value}</strong>
                                <span>{stat.label}</span>
                            </div>
                        }) }
                    </div>

                    <div class="highlights">
                        { for HIGHLIGHTS.iter().map(|highlight| html! {
                            <div class="highlight" key={highlight.title}>
                                <IconView icon={Icon::CheckCircle} size={20} />
                                <div>
                                    <h4>{highlight.title}</h4>
                                    <p>{highlight.text}</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <AnchorLink href="#contact" class="button-primary">
                        {"Learn Our Story"}
                    </AnchorLink>
                </div>

                <div ref={image} class={classes!("about-visual", "reveal-target", image_revealed.then_some("animate-fade-in-left"))}>
                    <div class="founder-frame">
                        <img src={FOUNDER_IMAGE} alt="Shashank Ray - Founder of NepTech" />
                        <div class="founder-shade"></div>
                        <div class="founder-caption">
                            <h3>{"Shashank Ray"}</h3>
                            <p>{"Founder & CEO"}</p>
                        </div>

                        <div ref={orbits} class="orbits" style={rotation.to_css()}>
                            { for ORBIT_ICONS.iter().enumerate().map(|(index, (icon, class, depth))| html! {
                                <div
                                    key={*class}
                                    class={classes!("orbit", *class)}
                                    style={format!("transform: translateZ({}px);", depth)}
                                >
                                    <span style={format!("animation-delay: {}s;", index as f64 * 0.5)}>
                                        <IconView icon={*icon} size={32} />
                                    </span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div ref={mission} class={classes!("mission-card", "reveal-target", mission_revealed.then_some("animate-fade-in"))}>
                        <h3>
                            <IconView icon={Icon::Award} size={20} />
                            {"Our Mission"}
                        </h3>
                        <p class="muted">
                            {"To empower businesses through innovative IT solutions that accelerate growth, enhance productivity, and create sustainable competitive advantages in today's rapidly evolving digital landscape."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
