use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        text-align: center;
                        padding: 2rem;
                        background: var(--neptech-gray);
                    }
                    .not-found h1 { font-size: 4rem; font-weight: 700; }
                "#}
            </style>
            <h1 class="gradient-text">{"404"}</h1>
            <p class="muted">{"Oops! The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="button-primary">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}
