use yew::prelude::*;

use crate::components::icons::IconView;
use crate::content::{stagger_delay, Icon, TeamMember, TEAM};
use crate::reveal::use_reveal;

const MEMBER_LINKS: [(Icon, &str); 3] = [
    (Icon::Linkedin, "LinkedIn"),
    (Icon::Twitter, "Twitter"),
    (Icon::Mail, "Email"),
];

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    member: &'static TeamMember,
    delay: u32,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.delay);
    let member = props.member;

    html! {
        <div ref={node} class={classes!("team-card", "reveal-target", revealed.then_some("animate-scale-in"))}>
            <div class="team-photo">
                <img src={member.image} alt={member.name} />
                <div class="team-shade"></div>
                <div class="team-links">
                    { for MEMBER_LINKS.iter().map(|(icon, label)| html! {
                        <a key={*label} href="#" aria-label={*label}>
                            <IconView icon={*icon} size={18} />
                        </a>
                    }) }
                </div>
            </div>
            <div class="team-info">
                <h3>{member.name}</h3>
                <p class="muted">{member.role}</p>
            </div>
        </div>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let title = use_node_ref();
    let title_revealed = use_reveal(title.clone(), 0);

    html! {
        <section id="team" class="section-padding team">
            <style>
                {r#"
                    .team { position: relative; overflow: hidden; background: #fff; }
                    .team-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); gap: 2rem; }
                    .team-card {
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #fff;
                        box-shadow: 0 4px 20px rgba(15, 23, 42, 0.06);
                        transition: box-shadow 0.3s;
                    }
                    .team-card:hover { box-shadow: 0 10px 30px rgba(15, 23, 42, 0.12); }
                    .team-photo { position: relative; overflow: hidden; }
                    .team-photo img { display: block; width: 100%; height: 300px; object-fit: cover; transition: transform 0.7s; }
                    .team-card:hover .team-photo img { transform: scale(1.05); }
                    .team-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(15, 23, 42, 0.6), transparent);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .team-card:hover .team-shade { opacity: 1; }
                    .team-links {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.25rem;
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        transform: translateY(100%);
                        transition: transform 0.5s;
                    }
                    .team-card:hover .team-links { transform: translateY(0); }
                    .team-links a {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                        transition: all 0.3s;
                    }
                    .team-links a:hover { background: #fff; color: var(--neptech-blue); }
                    .team-info { padding: 1.5rem; }
                    .team-info h3 { font-size: 1.25rem; font-weight: 600; }
                "#}
            </style>

            <div class="container">
                <div ref={title} class={classes!("section-title", "reveal-target", title_revealed.then_some("animate-fade-in"))}>
                    <span class="badge">{"OUR TEAM"}</span>
                    <h2>
                        {"Meet the Experts Behind "}
                        <span class="gradient-text">{"NepTech"}</span>
                    </h2>
                    <p class="muted">
                        {"Our team of certified IT professionals brings decades of combined experience to deliver customized solutions for your business."}
                    </p>
                </div>

                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(index, member)| html! {
                        <TeamCard key={member.name} {member} delay={stagger_delay(index)} />
                    }) }
                </div>
            </div>
        </section>
    }
}
