use yew::prelude::*;

use crate::components::{
    about::AboutSection, contact::ContactSection, footer::Footer, hero::HeroSection,
    navbar::Navbar, services::ServicesSection, team::TeamSection,
};

/// The whole site: one scrolling page of anchored sections.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <Navbar />
            <main>
                <HeroSection />
                <ServicesSection />
                <AboutSection />
                <TeamSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
