use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons::IconView;
use crate::config;
use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
    /// Changes whenever a new notice is raised, restarting the dismiss timer.
    pub serial: u32,
    pub on_dismiss: Callback<()>,
}

/// Success notice pinned to the corner of the viewport. Dismisses itself.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::NOTICE_DURATION_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.serial,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast animate-fade-in" role="status" {onclick}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 60;
                        max-width: 24rem;
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        border-radius: 0.75rem;
                        background: #fff;
                        border: 1px solid rgba(16, 185, 129, 0.3);
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.15);
                        cursor: pointer;
                    }
                    .toast svg { flex-shrink: 0; color: var(--neptech-green); }
                "#}
            </style>
            <IconView icon={Icon::CheckCircle} size={20} />
            <span>{props.message.clone()}</span>
        </div>
    }
}
