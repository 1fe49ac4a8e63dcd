use yew::prelude::*;

use crate::document::DocumentHandle;
use crate::navigation::scroll_to_anchor;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// In-page target such as `#contact`.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after the scroll was started, e.g. to close a menu.
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Link to a page section that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let doc = use_context::<DocumentHandle>().unwrap_or_default();

    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&*doc, &href);
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
