use log::LevelFilter;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

const SITE_CONFIG_JSON: &str = include_str!("../config/site.json");

const DEFAULT_BREAKPOINT_PX: f64 = 768.0;
const DEFAULT_NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
const DEFAULT_REVEAL_OFFSET_PX: f64 = 40.0;
const DEFAULT_REVEAL_DURATION_MS: u32 = 700;
const DEFAULT_GLOW_RADIUS_PX: f64 = 200.0;
const DEFAULT_TILT_MAX_DEGREES: f64 = 6.0;
const DEFAULT_HOVER_SCALE: f64 = 1.02;
const DEFAULT_PARTICLES_WIDE: usize = 50;
const DEFAULT_PARTICLES_NARROW: usize = 20;
const DEFAULT_PARTICLE_FIELD_HEIGHT_FACTOR: f64 = 8.0;
const DEFAULT_PARTICLE_RGB: &str = "129,140,248";
const DEFAULT_HEATMAP_YEAR: i32 = 2026;
const DEFAULT_HEATMAP_MONTH: u32 = 2;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const BREAKPOINT_PX_BOUNDS: (f64, f64) = (320.0, 2_560.0);
const NAV_SCROLL_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 400.0);
const REVEAL_DURATION_MS_BOUNDS: (u32, u32) = (0, 5_000);
const GLOW_RADIUS_PX_BOUNDS: (f64, f64) = (10.0, 1_000.0);
const TILT_MAX_DEGREES_BOUNDS: (f64, f64) = (0.0, 45.0);
const HOVER_SCALE_BOUNDS: (f64, f64) = (1.0, 1.5);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 1_000);
const PARTICLE_FIELD_HEIGHT_FACTOR_BOUNDS: (f64, f64) = (1.0, 32.0);
const HEATMAP_YEAR_BOUNDS: (i32, i32) = (1970, 2100);
const HEATMAP_MONTH_BOUNDS: (u32, u32) = (1, 12);

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub breakpoint_px: f64,
    pub nav_scroll_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_offset_px: f64,
    pub reveal_duration_ms: u32,
    pub glow_radius_px: f64,
    pub tilt_max_degrees: f64,
    pub hover_scale: f64,
    pub particles_wide: usize,
    pub particles_narrow: usize,
    pub particle_field_height_factor: f64,
    pub particle_rgb: String,
    pub heatmap_year: i32,
    pub heatmap_month: u32,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            nav_scroll_threshold_px: DEFAULT_NAV_SCROLL_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_offset_px: DEFAULT_REVEAL_OFFSET_PX,
            reveal_duration_ms: DEFAULT_REVEAL_DURATION_MS,
            glow_radius_px: DEFAULT_GLOW_RADIUS_PX,
            tilt_max_degrees: DEFAULT_TILT_MAX_DEGREES,
            hover_scale: DEFAULT_HOVER_SCALE,
            particles_wide: DEFAULT_PARTICLES_WIDE,
            particles_narrow: DEFAULT_PARTICLES_NARROW,
            particle_field_height_factor: DEFAULT_PARTICLE_FIELD_HEIGHT_FACTOR,
            particle_rgb: DEFAULT_PARTICLE_RGB.to_string(),
            heatmap_year: DEFAULT_HEATMAP_YEAR,
            heatmap_month: DEFAULT_HEATMAP_MONTH,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawSiteConfig {
    breakpoint_px: Option<f64>,
    nav_scroll_threshold_px: Option<f64>,
    reveal_threshold: Option<f64>,
    reveal_offset_px: Option<f64>,
    reveal_duration_ms: Option<u32>,
    glow_radius_px: Option<f64>,
    tilt_max_degrees: Option<f64>,
    hover_scale: Option<f64>,
    particles_wide: Option<usize>,
    particles_narrow: Option<usize>,
    particle_field_height_factor: Option<f64>,
    particle_rgb: Option<String>,
    heatmap_year: Option<i32>,
    heatmap_month: Option<u32>,
    log_level: Option<String>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSiteConfig = serde_json::from_str(json)?;

        Ok(Self {
            breakpoint_px: bounded(
                "breakpointPx",
                raw.breakpoint_px,
                DEFAULT_BREAKPOINT_PX,
                BREAKPOINT_PX_BOUNDS,
            ),
            nav_scroll_threshold_px: bounded(
                "navScrollThresholdPx",
                raw.nav_scroll_threshold_px,
                DEFAULT_NAV_SCROLL_THRESHOLD_PX,
                NAV_SCROLL_THRESHOLD_PX_BOUNDS,
            ),
            reveal_threshold: bounded(
                "revealThreshold",
                raw.reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            reveal_offset_px: bounded(
                "revealOffsetPx",
                raw.reveal_offset_px,
                DEFAULT_REVEAL_OFFSET_PX,
                REVEAL_OFFSET_PX_BOUNDS,
            ),
            reveal_duration_ms: bounded(
                "revealDurationMs",
                raw.reveal_duration_ms,
                DEFAULT_REVEAL_DURATION_MS,
                REVEAL_DURATION_MS_BOUNDS,
            ),
            glow_radius_px: bounded(
                "glowRadiusPx",
                raw.glow_radius_px,
                DEFAULT_GLOW_RADIUS_PX,
                GLOW_RADIUS_PX_BOUNDS,
            ),
            tilt_max_degrees: bounded(
                "tiltMaxDegrees",
                raw.tilt_max_degrees,
                DEFAULT_TILT_MAX_DEGREES,
                TILT_MAX_DEGREES_BOUNDS,
            ),
            hover_scale: bounded(
                "hoverScale",
                raw.hover_scale,
                DEFAULT_HOVER_SCALE,
                HOVER_SCALE_BOUNDS,
            ),
            particles_wide: bounded(
                "particlesWide",
                raw.particles_wide,
                DEFAULT_PARTICLES_WIDE,
                PARTICLE_COUNT_BOUNDS,
            ),
            particles_narrow: bounded(
                "particlesNarrow",
                raw.particles_narrow,
                DEFAULT_PARTICLES_NARROW,
                PARTICLE_COUNT_BOUNDS,
            ),
            particle_field_height_factor: bounded(
                "particleFieldHeightFactor",
                raw.particle_field_height_factor,
                DEFAULT_PARTICLE_FIELD_HEIGHT_FACTOR,
                PARTICLE_FIELD_HEIGHT_FACTOR_BOUNDS,
            ),
            particle_rgb: parse_rgb_triplet(raw.particle_rgb.as_deref()),
            heatmap_year: bounded(
                "heatmapYear",
                raw.heatmap_year,
                DEFAULT_HEATMAP_YEAR,
                HEATMAP_YEAR_BOUNDS,
            ),
            heatmap_month: bounded(
                "heatmapMonth",
                raw.heatmap_month,
                DEFAULT_HEATMAP_MONTH,
                HEATMAP_MONTH_BOUNDS,
            ),
            log_level: parse_log_level(raw.log_level.as_deref(), DEFAULT_LOG_LEVEL),
        })
    }

    fn load() -> Self {
        match Self::from_json(SITE_CONFIG_JSON) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("{error}; falling back to built-in defaults");
                Self::default()
            }
        }
    }

    pub fn particle_count(&self, narrow: bool) -> usize {
        if narrow {
            self.particles_narrow
        } else {
            self.particles_wide
        }
    }

    /// Never taller than the page, so the canvas cannot add scroll space.
    /// A page height of zero means it has not been measured yet.
    pub fn particle_field_height(&self, viewport_height: f64, page_height: f64) -> f64 {
        let height = viewport_height * self.particle_field_height_factor;
        if page_height > 0.0 {
            height.min(page_height)
        } else {
            height
        }
    }

    pub fn particle_fill(&self, opacity: f64) -> String {
        format!("rgba({},{opacity:.3})", self.particle_rgb)
    }
}

pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(SiteConfig::load)
}

fn bounded<T>(name: &str, value: Option<T>, default: T, bounds: (T, T)) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    match value {
        Some(value) if bounds.0 <= value && value <= bounds.1 => value,
        Some(value) => {
            log::warn!(
                "config {name}={value} is outside {}..={}; using {default}",
                bounds.0,
                bounds.1
            );
            default
        }
        None => default,
    }
}

fn parse_rgb_triplet(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return DEFAULT_PARTICLE_RGB.to_string();
    };

    let channels: Vec<&str> = value.split(',').map(str::trim).collect();
    if channels.len() == 3 && channels.iter().all(|channel| channel.parse::<u8>().is_ok()) {
        channels.join(",")
    } else {
        log::warn!("config particleRgb={value:?} is not an r,g,b triplet; using {DEFAULT_PARTICLE_RGB}");
        DEFAULT_PARTICLE_RGB.to_string()
    }
}

fn parse_log_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default()
        .as_str()
    {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_to_defaults() {
        let config = SiteConfig::from_json(SITE_CONFIG_JSON).expect("embedded config is valid");

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::from_json("{}").expect("empty object is valid");

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "breakpointPx": 10, "revealThreshold": 1.5, "particlesWide": 5000, "heatmapMonth": 13 }"#,
        )
        .expect("valid JSON");

        assert_eq!(config.breakpoint_px, DEFAULT_BREAKPOINT_PX);
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.particles_wide, DEFAULT_PARTICLES_WIDE);
        assert_eq!(config.heatmap_month, DEFAULT_HEATMAP_MONTH);
    }

    #[test]
    fn in_bounds_values_are_kept() {
        let config = SiteConfig::from_json(
            r#"{ "breakpointPx": 640, "particlesNarrow": 0, "logLevel": "DEBUG", "particleRgb": " 1, 2 ,3 " }"#,
        )
        .expect("valid JSON");

        assert_eq!(config.breakpoint_px, 640.0);
        assert_eq!(config.particles_narrow, 0);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.particle_rgb, "1,2,3");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = SiteConfig::from_json("{ breakpointPx: }");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_rgb_and_log_level_fall_back() {
        let config = SiteConfig::from_json(r#"{ "particleRgb": "300,0,0", "logLevel": "loud" }"#)
            .expect("valid JSON");

        assert_eq!(config.particle_rgb, DEFAULT_PARTICLE_RGB);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn particle_count_shrinks_on_narrow_viewports() {
        let config = SiteConfig::default();

        assert_eq!(config.particle_count(false), 50);
        assert_eq!(config.particle_count(true), 20);
        assert_eq!(config.particle_fill(0.25), "rgba(129,140,248,0.250)");
    }

    #[test]
    fn particle_field_never_outgrows_the_page() {
        let config = SiteConfig::default();

        assert_eq!(config.particle_field_height(1_080.0, 6_000.0), 6_000.0);
        assert_eq!(config.particle_field_height(720.0, 6_000.0), 5_760.0);
        assert_eq!(config.particle_field_height(1_080.0, 0.0), 8_640.0);
    }
}
