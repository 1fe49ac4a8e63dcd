use web_sys::Element;
use yew::prelude::*;

use crate::motion::{card_tilt, Point, Size, Tilt};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Extra inline style for the outer card, e.g. an animation delay.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub on_hover: Option<Callback<bool>>,
    #[prop_or_default]
    pub children: Children,
}

/// Card that leans toward the pointer and lifts its content while hovered.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let tilt = use_state(Tilt::default);
    let node = props.node_ref.clone();

    let onmousemove = {
        let tilt = tilt.clone();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = node.cast::<Element>() {
                let rect = card.get_bounding_client_rect();
                let local = Point::new(
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                );
                tilt.set(card_tilt(local, Size::new(rect.width(), rect.height())));
            }
        })
    };

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(on_hover) = &on_hover {
                on_hover.emit(true);
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            tilt.set(Tilt::REST);
            if let Some(on_hover) = &on_hover {
                on_hover.emit(false);
            }
        })
    };

    let style = match &props.style {
        Some(extra) => format!("{} {}", tilt.card_style(), extra),
        None => tilt.card_style(),
    };

    html! {
        <div
            ref={node}
            class={classes!("card-3d", props.class.clone())}
            {style}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="card-3d-content" style={tilt.content_style()}>
                { for props.children.iter() }
            </div>
            <div class="card-shine"></div>
        </div>
    }
}
