//! Acquirer-fit report: a single scrolling page rendered with Yew.

pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod observer;
pub mod ring;
pub mod sections;
pub mod styles;

use log::info;
use yew::prelude::*;

use components::{AnimateIn, Footer, Header, Hero, NavBar, VerdictStrip};
use sections::{
    AlignmentSection, AquaticsSection, CompetitorSection, DiligenceSection, EsgSection,
    FinancialSection, GapSection, PathwaysSection, RiskSection, TimelineSection,
};

#[function_component(App)]
pub fn app() -> Html {
    info!("Rendering report");

    html! {
        <>
            <style>{ styles::GLOBAL }</style>
            <Header />
            <NavBar />
            <main class="main">
                <AnimateIn>
                    <Hero />
                </AnimateIn>
                <VerdictStrip />
                <FinancialSection />
                <AquaticsSection />
                <GapSection />
                <EsgSection />
                <AlignmentSection />
                <RiskSection />
                <CompetitorSection />
                <DiligenceSection />
                <PathwaysSection />
                <TimelineSection />
            </main>
            <Footer />
        </>
    }
}
