use super::effects::{ParticleCanvas, PointerGlow, Reveal, TiltCard};
use super::hooks::{use_narrow, use_viewport_class, use_window_scroll};
use super::nav::NavBar;
use super::panels::{HeatmapPanel, HoldingsPanel, ProjectCards, SocialLinks, WritingsList};
use super::{scroll_to_section, section_top, viewport_size};
use crate::config::site_config;
use crate::content::{
    about_card_delay, about_card_direction, ABOUT_CARDS, FOOTER, HERO_EYEBROW, HERO_STAGGER_SECS,
    HERO_TAGLINE, OWNER, PANEL_REVEAL_DELAY_SECS,
};
use crate::sections::{resolve_active_section, Section};
use crate::viewport::ViewportClass;
use chrono::NaiveDate;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    label: AttrValue,
    lead: AttrValue,
    highlight: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <Reveal class="section-header">
            <span class="section-label">{props.label.clone()}</span>
            <h2>
                {props.lead.clone()}
                <span class="gradient-text">{props.highlight.clone()}</span>
            </h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="section-subtitle">{subtitle}</p>
            }
        </Reveal>
    }
}

fn jump_to(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(section))
}

#[function_component(Hero)]
fn hero() -> Html {
    let narrow = use_narrow();

    html! {
        <section id={Section::Home.id()} class="hero">
            if !narrow {
                <>
                    <div class="orb orb-indigo" aria-hidden="true" />
                    <div class="orb orb-violet" aria-hidden="true" />
                </>
            }
            <div class="hero-content">
                <Reveal delay={HERO_STAGGER_SECS[0]}>
                    <p class="eyebrow">{HERO_EYEBROW}</p>
                </Reveal>
                <Reveal delay={HERO_STAGGER_SECS[1]}>
                    <h1>
                        {"I'm "}
                        <span class="gradient-text">{OWNER}</span>
                    </h1>
                </Reveal>
                <Reveal delay={HERO_STAGGER_SECS[2]}>
                    <p class="tagline">{HERO_TAGLINE}</p>
                </Reveal>
                <Reveal delay={HERO_STAGGER_SECS[3]}>
                    <div class="hero-actions">
                        <button type="button" class="button primary" onclick={jump_to(Section::About)}>
                            {format!("Who is {OWNER}?")}
                        </button>
                        <button type="button" class="button ghost" onclick={jump_to(Section::Projects)}>
                            {"See My Work"}
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let narrow = use_narrow();

    html! {
        <section id={Section::About.id()} class="section">
            <SectionHeader
                label={format!("Who is {OWNER}")}
                lead="The full "
                highlight="character sheet."
                subtitle="Part mage, part investor, part gamer, part builder. Dedicated to the stoic path of lifelong learning \u{2014} always growing, never finished."
            />
            <div class="card-grid">
                { for ABOUT_CARDS.iter().enumerate().map(|(index, card)| html! {
                    <Reveal
                        key={card.title}
                        direction={about_card_direction(index, narrow)}
                        delay={about_card_delay(index)}
                    >
                        <TiltCard class="about-card">
                            <div class="about-icon" aria-hidden="true">{card.icon}</div>
                            <h3>{card.title}</h3>
                            <p class="muted">{card.description}</p>
                        </TiltCard>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(ActivitySection)]
fn activity_section() -> Html {
    let config = site_config();
    let narrow = use_narrow();
    let month = NaiveDate::from_ymd_opt(config.heatmap_year, config.heatmap_month, 1)
        .map(|first| first.format("%B %Y").to_string())
        .unwrap_or_default();
    let mut subtitle = format!("My GitHub contributions for {month}.");
    if !narrow {
        subtitle.push_str(" Hover over the squares to see daily activity.");
    }

    html! {
        <section id={Section::Activity.id()} class="section">
            <SectionHeader label="GitHub Activity" lead="Proof of " highlight="work." subtitle={subtitle} />
            <Reveal delay={PANEL_REVEAL_DELAY_SECS}>
                <div class="panel">
                    <HeatmapPanel />
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(PortfolioSection)]
fn portfolio_section() -> Html {
    let narrow = use_narrow();
    let mut subtitle = String::from("YTD performance across stocks, ETFs, and crypto. Fundamental analysis first");
    subtitle.push_str(if narrow {
        "."
    } else {
        " \u{2014} long on energy, defense tech, and decentralized infrastructure."
    });

    html! {
        <section id={Section::Portfolio.id()} class="section">
            <SectionHeader label="Investment Portfolio" lead="Where my money " highlight="works." subtitle={subtitle} />
            <Reveal delay={PANEL_REVEAL_DELAY_SECS}>
                <div class="panel">
                    <HoldingsPanel />
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = site_config();
    let viewport = use_viewport_class(config.breakpoint_px);
    let active = use_state_eq(Section::default);

    {
        let active = active.clone();
        use_window_scroll(Callback::from(move |_| {
            active.set(resolve_active_section(viewport_size().1, section_top));
        }));
    }

    use_effect_with(*active, |active| {
        log::debug!("active section is now #{}", active.id());
        || ()
    });

    use_effect_with((), |_| {
        log::info!("portfolio mounted");
        || ()
    });

    html! {
        <ContextProvider<ViewportClass> context={viewport}>
            <div class="page-root">
                <a class="skip-link" href={format!("#{}", Section::About.id())}>{"Skip to content"}</a>
                <PointerGlow />
                <ParticleCanvas />
                <NavBar active={*active} />
                <main>
                    <Hero />
                    <AboutSection />
                    <ActivitySection />
                    <PortfolioSection />
                    <section id={Section::Writings.id()} class="section">
                        <SectionHeader
                            label="Writings"
                            lead="Thoughts & "
                            highlight="lessons."
                            subtitle="Blog posts and articles about what I'm learning."
                        />
                        <WritingsList />
                    </section>
                    <section id={Section::Projects.id()} class="section">
                        <SectionHeader label="Projects" lead="Things I've " highlight="built." />
                        <ProjectCards />
                    </section>
                    <section id={Section::Contact.id()} class="section">
                        <SectionHeader
                            label="Connect"
                            lead="Find me in "
                            highlight="the wild."
                            subtitle="Always open to connecting with fellow learners, builders, and adventurers."
                        />
                        <Reveal delay={0.1}>
                            <SocialLinks />
                        </Reveal>
                    </section>
                </main>
                <footer class="site-footer">
                    <p>{FOOTER}</p>
                </footer>
            </div>
        </ContextProvider<ViewportClass>>
    }
}
