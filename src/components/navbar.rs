use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::icons::IconView;
use crate::content::{Icon, COMPANY, LOGO, NAV_LINKS};
use crate::navigation::HeaderStyle;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let header_style = HeaderStyle::for_scroll(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let mobile_class = if *menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    html! {
        <header class={header_style.class()}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s var(--ease-elastic);
                    }
                    .site-header.compact {
                        padding: 0.75rem 0;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .header-inner {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: var(--neptech-blue);
                        font-weight: 700;
                        font-size: 1.5rem;
                        transition: all 0.3s var(--ease-elastic);
                    }
                    .brand img {
                        height: 3rem;
                        transition: height 0.3s var(--ease-elastic);
                    }
                    .compact .brand { font-size: 1.25rem; }
                    .compact .brand img { height: 2.5rem; }
                    .desktop-nav {
                        display: flex;
                        gap: 2.5rem;
                    }
                    .menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--neptech-dark);
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        padding-top: 6rem;
                        background: #fff;
                        transform: translateX(100%);
                        transition: transform 0.5s var(--ease-elastic);
                    }
                    .mobile-menu.open { transform: translateX(0); }
                    .mobile-menu nav {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .mobile-link {
                        font-size: 1.5rem;
                        font-weight: 500;
                        color: var(--neptech-dark);
                    }
                    .mobile-link:hover { color: var(--neptech-blue); }
                    @media (max-width: 768px) {
                        .desktop-nav, .header-cta { display: none; }
                        .menu-toggle { display: block; z-index: 60; }
                    }
                "#}
            </style>
            <div class="container header-inner">
                <AnchorLink href="#home" class="brand">
                    <img src={LOGO} alt="NepTech Logo" />
                    <span>{COMPANY}</span>
                </AnchorLink>

                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <AnchorLink key={link.name} href={link.anchor} class="nav-link">
                            {link.name}
                        </AnchorLink>
                    }) }
                </nav>

                <div class="header-cta">
                    <AnchorLink href="#contact" class="button-primary">
                        {"Get Started"}
                    </AnchorLink>
                </div>

                <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            <div class={mobile_class}>
                <nav class="container">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <AnchorLink
                            key={link.name}
                            href={link.anchor}
                            class="mobile-link"
                            on_navigate={close_menu.clone()}
                        >
                            {link.name}
                        </AnchorLink>
                    }) }
                    <AnchorLink href="#contact" class="button-primary full-width" on_navigate={close_menu.clone()}>
                        {"Get Started"}
                    </AnchorLink>
                </nav>
            </div>
        </header>
    }
}
