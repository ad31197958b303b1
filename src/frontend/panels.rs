use super::effects::{Reveal, TiltCard};
use super::hooks::use_narrow;
use super::random_seed;
use crate::config::site_config;
use crate::content::{article_number, SocialLink, SocialNetwork, ARTICLES, PROJECTS, SOCIAL_LINKS};
use crate::heatmap::{
    generate_month, intensity_level, weeks, ContributionDay, ContributionStats, DAY_LABELS_FULL,
    DAY_LABELS_SHORT, LEGEND_COUNTS,
};
use crate::holdings::{format_price, format_signed_pct, HoldingsSummary, HoldingsTab, DATA_AS_OF};
use chrono::NaiveDate;
use rand::{rngs::SmallRng, SeedableRng};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct StatTileProps {
    #[prop_or_default]
    icon: Option<AttrValue>,
    value: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    tone: Option<&'static str>,
}

#[function_component(StatTile)]
fn stat_tile(props: &StatTileProps) -> Html {
    html! {
        <div class={classes!("stat-tile", props.tone)}>
            if let Some(icon) = props.icon.clone() {
                <div class="stat-icon" aria-hidden="true">{icon}</div>
            }
            <div class="stat-value">{props.value.clone()}</div>
            <div class="stat-label">{props.label.clone()}</div>
        </div>
    }
}

#[function_component(HeatmapPanel)]
pub fn heatmap_panel() -> Html {
    let config = site_config();
    let narrow = use_narrow();
    let days = use_memo((config.heatmap_year, config.heatmap_month), |(year, month)| {
        generate_month(&mut SmallRng::seed_from_u64(random_seed()), *year, *month)
    });
    let hovered = use_state_eq(|| None::<NaiveDate>);

    let stats = ContributionStats::from_days(&days);
    let labels = if narrow { DAY_LABELS_SHORT } else { DAY_LABELS_FULL };

    let cell = |day: Option<&ContributionDay>| {
        let Some(day) = day else {
            return html! { <div class="heat-cell is-blank" /> };
        };

        let date = day.date;
        let is_hovered = *hovered == Some(date);
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(date)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let onclick = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| {
                hovered.set(if is_hovered { None } else { Some(date) });
            })
        };

        html! {
            <div
                class={classes!(
                    "heat-cell",
                    format!("level-{}", day.level()),
                    is_hovered.then_some("is-hovered"),
                    (is_hovered && day.count > 0).then_some("is-glowing")
                )}
                title={day.describe()}
                onmouseenter={(!narrow).then_some(onmouseenter)}
                onmouseleave={(!narrow).then_some(onmouseleave)}
                onclick={narrow.then_some(onclick)}
            />
        }
    };

    let hovered_day = (*hovered).and_then(|date| days.iter().find(|day| day.date == date));

    html! {
        <div class="heatmap">
            <div class="stat-row">
                <StatTile icon="\u{1F525}" value={stats.total.to_string()} label="Contributions" />
                <StatTile
                    icon="\u{1F4C5}"
                    value={format!("{}/{}", stats.active_days, stats.days)}
                    label="Active Days"
                />
                <StatTile icon="\u{26A1}" value={format!("{}d", stats.longest_streak)} label="Best Streak" />
            </div>
            <div class="heatmap-board">
                <div class="heatmap-grid">
                    <div class="heatmap-labels">
                        { for labels.iter().map(|label| html! { <div class="heatmap-label">{*label}</div> }) }
                    </div>
                    <div class="heatmap-weeks">
                        { for weeks(&days).into_iter().map(|week| html! {
                            <div class="heatmap-week">
                                { for week.into_iter().map(&cell) }
                            </div>
                        }) }
                    </div>
                </div>
                if let Some(day) = hovered_day {
                    <div class="heatmap-detail">{day.describe()}</div>
                }
                <div class="heatmap-legend">
                    <span>{"Less"}</span>
                    { for LEGEND_COUNTS.iter().map(|count| html! {
                        <div class={classes!("heat-swatch", format!("level-{}", intensity_level(*count)))} />
                    }) }
                    <span>{"More"}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(HoldingsPanel)]
pub fn holdings_panel() -> Html {
    let narrow = use_narrow();
    let tab = use_state_eq(HoldingsTab::default);

    let holdings = tab.holdings();
    let summary = HoldingsSummary::for_tab(*tab);
    let average_tone = if summary.average_ytd_pct >= 0.0 { "is-gain" } else { "is-loss" };

    let tabs = HoldingsTab::ALL.iter().map(|candidate| {
        let candidate = *candidate;
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(candidate))
        };

        html! {
            <button
                type="button"
                class={classes!("holdings-tab", (*tab == candidate).then_some("is-active"))}
                aria-pressed={(*tab == candidate).to_string()}
                onclick={onclick}
            >
                {format!("{} ({})", candidate.label(), candidate.count())}
            </button>
        }
    });

    let rows = holdings.iter().enumerate().map(|(index, holding)| {
        let tone = if holding.is_gain() { "is-gain" } else { "is-loss" };

        html! {
            <Reveal key={holding.ticker} delay={index as f64 * 0.05}>
                <div class={classes!("holding-row", tone)}>
                    <div class="holding-identity">
                        <div class="holding-arrow" aria-hidden="true">
                            {if holding.is_gain() { "\u{2191}" } else { "\u{2193}" }}
                        </div>
                        <div>
                            <div class="holding-ticker">{holding.ticker}</div>
                            <div class="holding-name">{if narrow { holding.sector } else { holding.name }}</div>
                        </div>
                    </div>
                    <div class="holding-figures">
                        if !narrow {
                            <div class="holding-price">
                                <div>{format_price(holding.price)}</div>
                                <div class="holding-sector">{holding.sector}</div>
                            </div>
                        }
                        <div class="holding-ytd">{format_signed_pct(holding.ytd_pct)}</div>
                        if !narrow {
                            <div class="holding-bar-track">
                                <div class="holding-bar" style={format!("width: {:.1}%;", holding.bar_width_pct())} />
                            </div>
                        }
                    </div>
                </div>
            </Reveal>
        }
    });

    html! {
        <div class="holdings">
            <div class="stat-row">
                <StatTile value={format_signed_pct(summary.average_ytd_pct)} label="Avg YTD" tone={average_tone} />
                <StatTile value={summary.winners.to_string()} label="Winners" tone="is-gain" />
                <StatTile value={summary.losers.to_string()} label="Losers" tone="is-loss" />
            </div>
            <div class="holdings-tabs" role="group" aria-label="Holding categories">
                { for tabs }
            </div>
            <div class="holdings-list">
                { for rows }
            </div>
            <p class="footnote">{format!("Data as of {DATA_AS_OF} \u{00B7} Not financial advice")}</p>
        </div>
    }
}

#[function_component(WritingsList)]
pub fn writings_list() -> Html {
    let narrow = use_narrow();

    html! {
        <div class="writings">
            { for ARTICLES.iter().enumerate().map(|(index, article)| html! {
                <Reveal key={article.title} delay={index as f64 * 0.1}>
                    <article class="article-card">
                        <div class="article-number" aria-hidden="true">{article_number(index)}</div>
                        <div class="article-body">
                            <span class="badge">{"Coming Soon"}</span>
                            <h3>{article.title}</h3>
                            if !narrow {
                                <p class="muted">{article.description}</p>
                            }
                            <div class="tag-row">
                                { for article.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                            </div>
                        </div>
                    </article>
                </Reveal>
            }) }
        </div>
    }
}

#[function_component(ProjectCards)]
pub fn project_cards() -> Html {
    let narrow = use_narrow();

    html! {
        <div class="projects">
            { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                <Reveal key={project.title} delay={0.1 * (index + 1) as f64}>
                    <TiltCard class="project-card">
                        <div class="project-header">
                            <div class={classes!("project-icon", project.accent)} aria-hidden="true">{project.icon}</div>
                            <div>
                                <h3>{project.title}</h3>
                                <span class="project-label">{project.label}</span>
                            </div>
                        </div>
                        if !narrow {
                            <p class="muted">{project.description}</p>
                        }
                        <div class="tag-row">
                            { for project.tags.iter().map(|tag| html! { <span class="tag pill">{*tag}</span> }) }
                        </div>
                    </TiltCard>
                </Reveal>
            }) }
            <Reveal delay={0.3}>
                <TiltCard class="project-card is-placeholder">
                    <div class="placeholder-icon" aria-hidden="true">{"\u{1F52E}"}</div>
                    <h3>{"More Coming Soon"}</h3>
                    <p class="muted">{"New projects will appear here as I build them."}</p>
                </TiltCard>
            </Reveal>
        </div>
    }
}

fn social_icon(network: SocialNetwork) -> Html {
    match network {
        SocialNetwork::X => html! {
            <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z" />
            </svg>
        },
        SocialNetwork::Instagram => html! {
            <svg
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="1.8"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                <circle cx="12" cy="12" r="5" />
                <circle cx="17.5" cy="6.5" r="1.2" fill="currentColor" stroke="none" />
            </svg>
        },
        SocialNetwork::GitHub => html! {
            <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M12 0C5.37 0 0 5.37 0 12c0 5.31 3.435 9.795 8.205 11.385.6.105.825-.255.825-.57 0-.285-.015-1.23-.015-2.235-3.015.555-3.795-.735-4.035-1.41-.135-.345-.72-1.41-1.23-1.695-.42-.225-1.02-.78-.015-.795.945-.015 1.62.87 1.845 1.23 1.08 1.815 2.805 1.305 3.495.99.105-.78.42-1.305.765-1.605-2.67-.3-5.46-1.335-5.46-5.925 0-1.305.465-2.385 1.23-3.225-.12-.3-.54-1.53.12-3.18 0 0 1.005-.315 3.3 1.23.96-.27 1.98-.405 3-.405s2.04.135 3 .405c2.295-1.56 3.3-1.23 3.3-1.23.66 1.65.24 2.88.12 3.18.765.84 1.23 1.905 1.23 3.225 0 4.605-2.805 5.625-5.475 5.925.435.375.81 1.095.81 2.22 0 1.605-.015 2.895-.015 3.3 0 .315.225.69.825.57A12.02 12.02 0 0024 12c0-6.63-5.37-12-12-12z" />
            </svg>
        },
    }
}

#[function_component(SocialLinks)]
pub fn social_links() -> Html {
    html! {
        <div class="social-links">
            { for SOCIAL_LINKS.iter().map(|link: &SocialLink| html! {
                <a
                    class="social-link"
                    href={link.url}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={link.label}
                >
                    {social_icon(link.network)}
                </a>
            }) }
        </div>
    }
}
