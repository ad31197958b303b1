#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Activity,
    Portfolio,
    Writings,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Self::Home,
        Self::About,
        Self::Activity,
        Self::Portfolio,
        Self::Writings,
        Self::Projects,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Activity => "activity",
            Self::Portfolio => "portfolio",
            Self::Writings => "writings",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == value)
    }
}

/// Picks the deepest section whose top edge has scrolled above the
/// viewport midpoint. `top_of` returns the viewport-relative top of a
/// section's anchor, or `None` when the anchor is not in the document.
pub fn resolve_active_section<F>(viewport_height: f64, mut top_of: F) -> Section
where
    F: FnMut(Section) -> Option<f64>,
{
    let midpoint = viewport_height / 2.0;

    Section::ALL
        .into_iter()
        .rev()
        .find(|section| top_of(*section).is_some_and(|top| top < midpoint))
        .unwrap_or_default()
}
