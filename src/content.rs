use crate::reveal::RevealDirection;

pub const OWNER: &str = "Iso";
pub const HERO_EYEBROW: &str = "Enter the realm";
pub const HERO_TAGLINE: &str =
    "No spellbook. No rules. Just a wild mage loose on the internet \u{2014} explore at your own risk.";
pub const FOOTER: &str = "Built with curiosity & Claude \u{2014} Iso \u{00A9} 2025";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AboutCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        icon: "\u{1F9D9}\u{200D}\u{2642}\u{FE0F}",
        title: "The Wild Mage",
        description: "No spellbook, no class restrictions. I learn what interests me, build what excites me, and share what I discover. AI, code, markets, games \u{2014} it all feeds the same fire.",
    },
    AboutCard {
        icon: "\u{1F4DA}",
        title: "The Student",
        description: "Rooted in stoic philosophy and a deep commitment to lifelong learning. Every day is a chance to get 1% better. The obstacle is the way, and the journey never ends.",
    },
    AboutCard {
        icon: "\u{1F4C8}",
        title: "The Investor",
        description: "My investment philosophy is built on fundamental analysis \u{2014} understanding what a business actually does, what it's worth, and why. Balance sheets, not hype cycles.",
    },
    AboutCard {
        icon: "\u{1F3AE}",
        title: "The Gamer",
        description: "Gaming taught me how to think in systems, adapt, and never stop leveling up. RPGs, competitive shooters, indie gems \u{2014} strategy meets creativity.",
    },
    AboutCard {
        icon: "\u{1F6E0}\u{FE0F}",
        title: "The Builder",
        description: "Learning to code so I can bring ideas to life. HTML, CSS, JavaScript, Python, and AI tools \u{2014} assembling the toolkit piece by piece.",
    },
    AboutCard {
        icon: "\u{1F30D}",
        title: "The Explorer",
        description: "Curiosity is the compass. From DeFi to subsea robotics to the next great indie game \u{2014} if it's interesting, I'm going down the rabbit hole.",
    },
];

/// About cards alternate sides on wide layouts and all rise on narrow ones.
pub fn about_card_direction(index: usize, narrow: bool) -> RevealDirection {
    if narrow {
        RevealDirection::Up
    } else if index % 2 == 0 {
        RevealDirection::Left
    } else {
        RevealDirection::Right
    }
}

/// Seconds; staggered so cards cascade in.
pub fn about_card_delay(index: usize) -> f64 {
    0.08 * (index + 1) as f64
}

/// Eyebrow, headline, tagline, then the call buttons.
pub const HERO_STAGGER_SECS: [f64; 4] = [0.0, 0.15, 0.3, 0.45];

/// Heatmap and holdings panels fade in just after their section header.
pub const PANEL_REVEAL_DELAY_SECS: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Article {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const ARTICLES: &[Article] = &[
    Article {
        title: "Getting Started with AI: My First Week",
        description: "A first-hand account of what it's like to start learning AI tools from scratch.",
        tags: &["AI", "Beginner", "Learning"],
    },
    Article {
        title: "Why I'm Documenting My Coding Journey",
        description: "The benefits of learning in public and tracking your progress as a beginner.",
        tags: &["Reflection", "GitHub", "Growth"],
    },
    Article {
        title: "Building My Portfolio Site with Claude",
        description: "How I used AI assistance to build a polished portfolio site as a coding beginner.",
        tags: &["Web Dev", "AI", "React"],
    },
];

pub fn article_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub icon: &'static str,
    pub title: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub accent: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        icon: "\u{1F4D3}",
        title: "My_AI_Journey",
        label: "GITHUB REPO",
        description: "A GitHub repository documenting my learning journey into AI tools and coding.",
        tags: &["Markdown", "GitHub", "Docs"],
        accent: "indigo",
    },
    Project {
        icon: "\u{1F310}",
        title: "This Portfolio Site",
        label: "WEB PROJECT",
        description: "A portfolio with scroll animations, mouse-reactive glow, stock tracker, and GitHub activity heatmap.",
        tags: &["Rust", "Yew", "CSS"],
        accent: "violet",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    X,
    Instagram,
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        network: SocialNetwork::X,
        label: "X",
        url: "https://x.com",
    },
    SocialLink {
        network: SocialNetwork::Instagram,
        label: "Instagram",
        url: "https://instagram.com",
    },
    SocialLink {
        network: SocialNetwork::GitHub,
        label: "GitHub",
        url: "https://github.com/0xB3E",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_cards_alternate_on_wide_only() {
        let wide: Vec<RevealDirection> = (0..4).map(|index| about_card_direction(index, false)).collect();

        assert_eq!(
            wide,
            [
                RevealDirection::Left,
                RevealDirection::Right,
                RevealDirection::Left,
                RevealDirection::Right
            ]
        );
        assert!((0..6).all(|index| about_card_direction(index, true) == RevealDirection::Up));
    }

    #[test]
    fn about_card_delays_cascade() {
        assert!((about_card_delay(0) - 0.08).abs() < 1e-9);
        assert!((about_card_delay(5) - 0.48).abs() < 1e-9);
    }

    #[test]
    fn hero_blocks_enter_one_after_another() {
        assert_eq!(HERO_STAGGER_SECS[0], 0.0);
        assert!(HERO_STAGGER_SECS.windows(2).all(|pair| (pair[1] - pair[0] - 0.15).abs() < 1e-9));
        assert!(PANEL_REVEAL_DELAY_SECS > 0.0);
    }

    #[test]
    fn article_numbers_are_zero_padded() {
        assert_eq!(article_number(0), "01");
        assert_eq!(article_number(9), "10");
    }

    #[test]
    fn sample_collections_have_expected_sizes() {
        assert_eq!(ABOUT_CARDS.len(), 6);
        assert_eq!(ARTICLES.len(), 3);
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert!(SOCIAL_LINKS.iter().all(|link| link.url.starts_with("https://")));
    }
}
