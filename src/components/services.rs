use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::icons::IconView;
use crate::components::tilt_card::TiltCard;
use crate::content::{stagger_delay, Icon, ServiceEntry, SERVICES};
use crate::document::{DocumentHandle, ScrollLock};
use crate::overlay::{OverlayAction, OverlayState};
use crate::reveal::use_reveal;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    entry: &'static ServiceEntry,
    delay: u32,
    on_learn_more: Callback<()>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.delay);
    let hovered = use_state(|| false);
    let entry = props.entry;
    let gradient = entry.theme.gradient_class();

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |inside: bool| hovered.set(inside))
    };

    let onclick = {
        let on_learn_more = props.on_learn_more.clone();
        Callback::from(move |_: MouseEvent| on_learn_more.emit(()))
    };

    html! {
        <TiltCard
            node_ref={node}
            class={classes!("service-card", "reveal-target", revealed.then_some("animate-scale-in"))}
            {on_hover}
        >
            <div class={classes!("card-wash", gradient, (*hovered).then_some("visible"))}></div>
            <div class={classes!("service-icon-container", gradient)}>
                <IconView icon={entry.icon} size={32} />
            </div>
            <h3>{entry.title}</h3>
            <p class="muted">{entry.description}</p>
            <button class="learn-more" {onclick}>
                <span class={classes!("gradient-text", gradient)}>{"Learn more"}</span>
                <span class={classes!("gradient-text", gradient, "learn-more-arrow")}>{"→"}</span>
                <span class={classes!("learn-more-underline", gradient)}></span>
            </button>
        </TiltCard>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceDetailProps {
    entry: &'static ServiceEntry,
    on_close: Callback<()>,
}

/// Modal with the extended description of one service.
///
/// Page scrolling is locked while this is mounted, and a pointer-down
/// anywhere outside the panel closes it.
#[function_component(ServiceDetail)]
fn service_detail(props: &ServiceDetailProps) -> Html {
    let panel = use_node_ref();
    let doc = use_context::<DocumentHandle>().unwrap_or_default();

    {
        use_effect_with_deps(
            move |doc| {
                let lock = ScrollLock::acquire(doc);
                move || drop(lock)
            },
            doc,
        );
    }

    {
        let on_close = props.on_close.clone();
        use_click_away(panel.clone(), move |_: Event| on_close.emit(()));
    }

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let entry = props.entry;
    let gradient = entry.theme.gradient_class();

    html! {
        <div class="detail-backdrop">
            <div ref={panel} class="detail-panel animate-scale-in" role="dialog" aria-modal="true">
                <button class="detail-close" onclick={close_click} aria-label="Close">
                    <IconView icon={Icon::Close} size={18} />
                </button>
                <div class="detail-heading">
                    <div class={classes!("detail-icon", gradient)}>
                        <IconView icon={entry.icon} size={32} />
                    </div>
                    <h3>{entry.title}</h3>
                </div>
                <p class="muted">{entry.detail}</p>
                <h4>{"Key Features"}</h4>
                <ul class="feature-list">
                    { for entry.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            <span class={classes!("feature-dot", gradient)}><span></span></span>
                            <span>{*feature}</span>
                        </li>
                    }) }
                </ul>
                <AnchorLink
                    href="#contact"
                    class={classes!("detail-cta", gradient)}
                    on_navigate={props.on_close.clone()}
                >
                    {"Request a Consultation"}
                </AnchorLink>
            </div>
        </div>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let title = use_node_ref();
    let title_revealed = use_reveal(title.clone(), 0);
    let overlay = use_reducer(OverlayState::default);

    let on_close = {
        let overlay = overlay.dispatcher();
        Callback::from(move |_: ()| overlay.dispatch(OverlayAction::Close))
    };

    html! {
        <section id="services" class="section-padding section-gray services">
            <style>
                {r#"
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        padding: 2rem;
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 4px 20px rgba(15, 23, 42, 0.05);
                        transition: box-shadow 0.5s var(--ease-elastic), transform 0.2s ease-out;
                    }
                    .service-card:hover { box-shadow: 0 10px 30px rgba(15, 23, 42, 0.1); }
                    .card-wash { position: absolute; inset: 0; opacity: 0; transition: opacity 0.5s; }
                    .card-wash.visible { opacity: 0.1; }
                    .service-icon-container {
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1.5rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                    }
                    .service-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; }
                    .learn-more {
                        position: relative;
                        margin-top: 1.5rem;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        font-weight: 500;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0;
                    }
                    .learn-more-arrow { transition: transform 0.3s; }
                    .learn-more:hover .learn-more-arrow { transform: translateX(0.25rem); }
                    .learn-more-underline {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        height: 2px;
                        transform: scaleX(0);
                        transform-origin: left;
                        transition: transform 0.3s;
                    }
                    .learn-more:hover .learn-more-underline { transform: scaleX(1); }
                    .detail-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                    }
                    .detail-panel {
                        position: relative;
                        width: 100%;
                        max-width: 48rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 2rem;
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .detail-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        width: 2rem;
                        height: 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(241, 245, 249, 0.5);
                        cursor: pointer;
                    }
                    .detail-heading { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
                    .detail-heading h3 { font-size: 1.5rem; font-weight: 700; }
                    .detail-icon {
                        flex-shrink: 0;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                    }
                    .feature-list { list-style: none; padding: 0; margin: 1rem 0 2rem; display: grid; gap: 0.75rem; }
                    .feature-list li { display: flex; align-items: flex-start; gap: 0.75rem; }
                    .feature-dot {
                        flex-shrink: 0;
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .feature-dot span { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #fff; }
                    .detail-cta {
                        display: block;
                        width: 100%;
                        text-align: center;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: all 0.3s var(--ease-elastic);
                    }
                    .detail-cta:hover { transform: translateY(-2px); }
                "#}
            </style>

            <div class="section-blobs">
                <div class="blob blob-tl"></div>
                <div class="blob blob-br"></div>
                <div class="blob blob-mr"></div>
            </div>

            <div class="container">
                <div ref={title} class={classes!("section-title", "reveal-target", title_revealed.then_some("animate-fade-in"))}>
                    <span class="badge">{"OUR SERVICES"}</span>
                    <h2>{"Comprehensive IT Solutions for Modern Businesses"}</h2>
                    <p class="muted">
                        {"Our range of services is designed to address all your IT needs with cutting-edge technology and expert support."}
                    </p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, entry)| {
                        let open = {
                            let overlay = overlay.dispatcher();
                            Callback::from(move |_: ()| overlay.dispatch(OverlayAction::Open(index)))
                        };
                        html! {
                            <ServiceCard
                                key={entry.title}
                                {entry}
                                delay={stagger_delay(index)}
                                on_learn_more={open}
                            />
                        }
                    }) }
                </div>
            </div>

            if let Some(entry) = overlay.entry() {
                <ServiceDetail {entry} on_close={on_close.clone()} />
            }
        </section>
    }
}
