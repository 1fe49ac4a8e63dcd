use chrono::Datelike;
use web_sys::Element;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::icons::IconView;
use crate::components::tilt_card::TiltCard;
use crate::content::{Icon, SocialLink, COMPANY, LOGO, QUICK_LINKS, SERVICES, SOCIAL_LINKS};
use crate::motion::{icon_glow, Point};

#[derive(Properties, PartialEq)]
struct SocialIconProps {
    link: &'static SocialLink,
}

/// Round social button whose glow follows the pointer.
#[function_component(SocialIcon)]
fn social_icon(props: &SocialIconProps) -> Html {
    let node = use_node_ref();
    let glow = use_state(String::new);

    let onmousemove = {
        let node = node.clone();
        let glow = glow.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(icon) = node.cast::<Element>() {
                let rect = icon.get_bounding_client_rect();
                let local = Point::new(
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                );
                glow.set(icon_glow(local));
            }
        })
    };

    let link = props.link;
    html! {
        <a
            ref={node}
            href={link.href}
            aria-label={link.label}
            class="social-icon-3d"
            style={(*glow).clone()}
            {onmousemove}
        >
            <span class="social-glyph"><IconView icon={link.icon} size={18} /></span>
            <span class={classes!("social-glow", link.gradient)}></span>
        </a>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        overflow: hidden;
                        color: #fff;
                        padding: 5rem 0 2rem;
                        background: linear-gradient(135deg, #1e3c72 0%, #2a5298 50%, #7303c0 100%);
                    }
                    .footer-glow { position: absolute; border-radius: 9999px; opacity: 0.15; animation: pulse 8s ease-in-out infinite; pointer-events: none; }
                    .glow-1 { top: 0; left: 25%; width: 50%; height: 50%; background: #60a5fa; filter: blur(100px); }
                    .glow-2 { bottom: 0; right: 25%; width: 33%; height: 33%; background: #c084fc; filter: blur(80px); animation-duration: 12s; animation-delay: 2s; }
                    .glow-3 { top: 33%; right: 25%; width: 25%; height: 25%; background: #f472b6; filter: blur(70px); animation-duration: 10s; animation-delay: 1s; }
                    .glow-4 { bottom: 25%; left: 33%; width: 25%; height: 25%; background: #4ade80; filter: blur(70px); animation-duration: 9s; animation-delay: 0.5s; }
                    .footer-grid { position: relative; z-index: 10; display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 2.5rem; margin-bottom: 4rem; }
                    .footer-card {
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .footer-card h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 1.5rem; }
                    .footer-card ul { list-style: none; padding: 0; margin: 0; display: grid; gap: 1rem; }
                    .footer-card li a { display: flex; align-items: center; gap: 0.5rem; color: rgba(255, 255, 255, 0.7); transition: color 0.3s; }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
                    .footer-brand img { height: 3rem; width: auto; filter: brightness(0) invert(1); }
                    .footer-brand h2 { font-size: 1.5rem; font-weight: 700; background: linear-gradient(90deg, #60a5fa, #d8b4fe, #f472b6); -webkit-background-clip: text; background-clip: text; color: transparent; }
                    .footer-about { color: rgba(255, 255, 255, 0.7); margin-bottom: 1.5rem; }
                    .socials { display: flex; gap: 1rem; }
                    .social-icon-3d {
                        position: relative;
                        overflow: hidden;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                        transition: background 0.3s;
                    }
                    .social-icon-3d::before {
                        content: '';
                        position: absolute;
                        left: var(--icon-mouse-x, 50%);
                        top: var(--icon-mouse-y, 50%);
                        width: 2.5rem;
                        height: 2.5rem;
                        transform: translate(-50%, -50%);
                        background: radial-gradient(circle, rgba(255, 255, 255, 0.5), transparent 70%);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .social-icon-3d:hover::before { opacity: 1; }
                    .social-glyph { position: relative; z-index: 10; display: flex; }
                    .social-glow { position: absolute; inset: 0; opacity: 0; transition: opacity 0.3s; }
                    .social-icon-3d:hover .social-glow { opacity: 1; }
                    .glow-blue { background: linear-gradient(135deg, #60a5fa, #2563eb); }
                    .glow-sky { background: linear-gradient(135deg, #38bdf8, #0284c7); }
                    .glow-indigo { background: linear-gradient(135deg, #818cf8, #4f46e5); }
                    .glow-pink { background: linear-gradient(135deg, #f472b6, #9333ea); }
                    .quick-links h3 { color: #93c5fd; }
                    .quick-links li a:hover { color: #93c5fd; }
                    .quick-links .dot { background: #60a5fa; }
                    .service-links h3 { color: #86efac; }
                    .service-links li a:hover { color: #86efac; }
                    .service-links .dot { background: #4ade80; }
                    .contact-info h3 { color: #d8b4fe; }
                    .contact-info li { display: flex; align-items: flex-start; gap: 0.75rem; color: rgba(255, 255, 255, 0.7); }
                    .contact-info svg { flex-shrink: 0; color: #c084fc; }
                    .dot { width: 0.375rem; height: 0.375rem; border-radius: 9999px; }
                    .footer-bottom { position: relative; padding-top: 2rem; border-top: 1px solid rgba(255, 255, 255, 0.1); text-align: center; }
                    .footer-rule { position: absolute; left: 50%; top: -1rem; width: 6rem; height: 2px; transform: translateX(-50%); background: linear-gradient(90deg, transparent, #60a5fa, transparent); }
                    .footer-bottom p { font-size: 0.875rem; color: rgba(255, 255, 255, 0.5); }
                    .footer-bottom strong { color: #93c5fd; font-weight: 500; }
                "#}
            </style>

            <div class="footer-glow glow-1"></div>
            <div class="footer-glow glow-2"></div>
            <div class="footer-glow glow-3"></div>
            <div class="footer-glow glow-4"></div>

            <div class="container">
                <div class="footer-grid">
                    <TiltCard class="footer-card">
                        <div class="footer-brand">
                            <img src={LOGO} alt="NepTech Logo" />
                            <h2>{COMPANY}</h2>
                        </div>
                        <p class="footer-about">
                            {"Empowering businesses with next-generation IT solutions and services. Your trusted partner for all your technology needs."}
                        </p>
                        <div class="socials">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <SocialIcon key={link.label} {link} />
                            }) }
                        </div>
                    </TiltCard>

                    <TiltCard class={classes!("footer-card", "quick-links")}>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            { for QUICK_LINKS.iter().map(|link| html! {
                                <li key={link.anchor}>
                                    <AnchorLink href={link.anchor}>
                                        <span class="dot"></span>
                                        {link.name}
                                    </AnchorLink>
                                </li>
                            }) }
                        </ul>
                    </TiltCard>

                    <TiltCard class={classes!("footer-card", "service-links")}>
                        <h3>{"Services"}</h3>
                        <ul>
                            { for SERVICES.iter().map(|service| html! {
                                <li key={service.title}>
                                    <AnchorLink href="#services">
                                        <span class="dot"></span>
                                        {service.title}
                                    </AnchorLink>
                                </li>
                            }) }
                        </ul>
                    </TiltCard>

                    <TiltCard class={classes!("footer-card", "contact-info")}>
                        <h3>{"Contact Info"}</h3>
                        <ul>
                            <li>
                                <IconView icon={Icon::MapPin} size={18} />
                                <span>{"Jadibuti, Kathmandu"}<br />{"Nepal, 44600"}</span>
                            </li>
                            <li>
                                <IconView icon={Icon::Phone} size={18} />
                                <span>{"+977-9844418804"}</span>
                            </li>
                            <li>
                                <IconView icon={Icon::Mail} size={18} />
                                <span>{"info@neptech.com"}</span>
                            </li>
                        </ul>
                    </TiltCard>
                </div>

                <div class="footer-bottom">
                    <div class="footer-rule"></div>
                    <p>
                        {format!("© {} ", year)}
                        <strong>{COMPANY}</strong>
                        {". All rights reserved. Designed with ❤️"}
                    </p>
                </div>
            </div>
        </footer>
    }
}
