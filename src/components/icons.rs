use yew::prelude::*;

use crate::content::Icon;

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect(f32, f32, f32, f32, f32),
    Ellipse(f32, f32, f32, f32),
}

use Shape::*;

fn shapes(icon: Icon) -> &'static [Shape] {
    match icon {
        Icon::Headset => &[Path("M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3")],
        Icon::Cloud => &[Path("M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z")],
        Icon::Server => &[
            Rect(2.0, 2.0, 20.0, 8.0, 2.0),
            Rect(2.0, 14.0, 20.0, 8.0, 2.0),
            Path("M6 6h.01M6 18h.01"),
        ],
        Icon::Cpu => &[
            Rect(4.0, 4.0, 16.0, 16.0, 2.0),
            Rect(9.0, 9.0, 6.0, 6.0, 0.0),
            Path("M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"),
        ],
        Icon::Database => &[
            Ellipse(12.0, 5.0, 9.0, 3.0),
            Path("M3 5V19A9 3 0 0 0 21 19V5"),
            Path("M3 12A9 3 0 0 0 21 12"),
        ],
        Icon::BarChart => &[Path("M12 20V10M18 20V4M6 20v-4")],
        Icon::Globe => &[
            Circle(12.0, 12.0, 10.0),
            Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20M2 12h20"),
        ],
        Icon::Shield => &[Path("M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z")],
        Icon::Zap => &[Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
        Icon::Code => &[Path("m16 18 6-6-6-6M8 6l-6 6 6 6")],
        Icon::LineChart => &[Path("M3 3v18h18"), Path("m19 9-5 5-4-4-3 3")],
        Icon::Award => &[
            Circle(12.0, 8.0, 6.0),
            Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
        ],
        Icon::MapPin => &[
            Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
            Circle(12.0, 10.0, 3.0),
        ],
        Icon::Mail => &[
            Rect(2.0, 4.0, 20.0, 16.0, 2.0),
            Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
        ],
        Icon::Phone => &[Path("M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z")],
        Icon::Linkedin => &[
            Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
            Rect(2.0, 9.0, 4.0, 12.0, 0.0),
            Circle(4.0, 4.0, 2.0),
        ],
        Icon::Twitter => &[Path("M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z")],
        Icon::Facebook => &[Path("M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z")],
        Icon::Instagram => &[
            Rect(2.0, 2.0, 20.0, 20.0, 5.0),
            Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
            Path("M17.5 6.5h.01"),
        ],
        Icon::ArrowRight => &[Path("M5 12h14m-7-7 7 7-7 7")],
        Icon::CheckCircle => &[Circle(12.0, 12.0, 10.0), Path("m9 12 2 2 4-4")],
        Icon::Menu => &[Path("M4 12h16M4 6h16M4 18h16")],
        Icon::Close => &[Path("M18 6 6 18M6 6l12 12")],
        Icon::Send => &[Path("m22 2-7 20-4-9-9-4Z"), Path("M22 2 11 13")],
    }
}

fn render_shape(shape: &Shape) -> Html {
    match *shape {
        Path(d) => html! { <path {d} /> },
        Circle(cx, cy, r) => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Rect(x, y, width, height, rx) => html! {
            <rect
                x={x.to_string()}
                y={y.to_string()}
                width={width.to_string()}
                height={height.to_string()}
                rx={rx.to_string()}
            />
        },
        Ellipse(cx, cy, rx, ry) => html! {
            <ellipse cx={cx.to_string()} cy={cy.to_string()} rx={rx.to_string()} ry={ry.to_string()} />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(24)]
    pub size: u32,
}

/// Stroke icon drawn inline so it inherits `currentColor`.
#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for shapes(props.icon).iter().map(render_shape) }
        </svg>
    }
}
