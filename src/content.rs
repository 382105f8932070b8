//! Landing page view model.
//!
//! Mirrors the sections of the page (header, hero carousel, origin story,
//! global engine map, product showcase, AI lab, footer) with every string
//! resolved through a [`LanguageStore`].

use crate::i18n::{Language, LanguageStore};
use serde::Serialize;
use std::time::Duration;

/// How long each hero slide stays on screen.
pub const HERO_ROTATE_INTERVAL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Blue,
    Purple,
}

// ==================== Static Page Data ====================

struct HeroSlideData {
    id: &'static str,
    image: &'static str,
    alt: &'static str,
    theme: ColorTheme,
}

const HERO_SLIDES: &[HeroSlideData] = &[
    HeroSlideData {
        id: "white-bottle",
        image: "/assets/images/white-bottle-ipe-epa.jpg",
        alt: "MedNutro IPE EPA White Bottle",
        theme: ColorTheme::Blue,
    },
    HeroSlideData {
        id: "black-bottle",
        image: "/assets/images/black-bottle-women-40.jpg",
        alt: "MedNutro Women's 40+ Beauty Formula",
        theme: ColorTheme::Purple,
    },
];

struct HubData {
    id: &'static str,
    name_key: &'static str,
    desc_key: &'static str,
    /// Percentage position inside the map container
    x: f32,
    y: f32,
}

const HUBS: &[HubData] = &[
    HubData { id: "ca", name_key: "global.can_title", desc_key: "global.can_desc", x: 20.0, y: 30.0 },
    HubData { id: "us", name_key: "global.usa_title", desc_key: "global.usa_desc", x: 27.0, y: 38.0 },
    HubData { id: "ch", name_key: "global.swiss_title", desc_key: "global.swiss_desc", x: 50.5, y: 31.0 },
];

struct ProductData {
    id: &'static str,
    theme: ColorTheme,
    badge_key: &'static str,
    name_key: &'static str,
    tagline_key: &'static str,
    description_key: Option<&'static str>,
    feature_keys: &'static [&'static str],
    stats: &'static [(&'static str, &'static str)],
    bottle_name_key: &'static str,
    bottle_sub_key: &'static str,
    bottle_badge_key: &'static str,
    has_purity_chart: bool,
}

const PRODUCTS: &[ProductData] = &[
    ProductData {
        id: "white-bottle",
        theme: ColorTheme::Blue,
        badge_key: "prod.white.badge",
        name_key: "prod.white.title",
        tagline_key: "prod.white.subtitle",
        description_key: None,
        feature_keys: &["prod.white.feat1", "prod.white.feat2", "prod.white.feat3"],
        stats: &[],
        bottle_name_key: "prod.white.title",
        bottle_sub_key: "prod.white.bottle_sub",
        bottle_badge_key: "prod.white.bottle_badge",
        has_purity_chart: true,
    },
    ProductData {
        id: "black-bottle",
        theme: ColorTheme::Purple,
        badge_key: "prod.black.badge",
        name_key: "prod.black.title",
        tagline_key: "prod.black.subtitle",
        description_key: Some("prod.black.desc"),
        feature_keys: &[],
        stats: &[("pH", "prod.black.stat1"), ("40+", "prod.black.stat2")],
        bottle_name_key: "prod.black.bottle_name",
        bottle_sub_key: "prod.black.bottle_sub",
        bottle_badge_key: "prod.black.tech",
        has_purity_chart: false,
    },
];

/// Purity comparison bars: (label key, percent, bar color).
const PURITY_BARS: &[(&str, u8, &str)] = &[
    ("prod.chart.common", 30, "#94a3b8"),
    ("prod.chart.mednutro", 97, "#3b82f6"),
];

// ==================== View Model ====================

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub language: Language,
    pub html_lang: &'static str,
    pub nav: Nav,
    pub hero: Hero,
    pub origin: Origin,
    pub global: GlobalEngine,
    pub products: Vec<Product>,
    pub ai_lab: AiLabLabels,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Nav {
    pub brand_sub: String,
    pub items: Vec<NavItem>,
    pub join: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroSlide {
    pub id: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub theme: ColorTheme,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub eyebrow: String,
    pub title_1: String,
    pub title_highlight: String,
    pub title_2: String,
    pub tagline: String,
    pub cta: String,
    pub scroll: String,
    pub slides: Vec<HeroSlide>,
    pub rotate_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Origin {
    pub label: String,
    pub title: String,
    pub text: String,
    pub quote: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hub {
    pub id: &'static str,
    pub name: String,
    pub description: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GlobalEngine {
    pub title: String,
    pub description: String,
    pub hubs: Vec<Hub>,
    pub stat_hubs_label: String,
    pub stat_hubs_value: usize,
    pub stat_quality_label: String,
    pub stat_quality_value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductStat {
    pub value: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub name: String,
    pub purity: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PurityChart {
    pub title: String,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub theme: ColorTheme,
    pub badge: String,
    pub name: String,
    pub tagline: String,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub stats: Vec<ProductStat>,
    pub bottle_name: String,
    pub bottle_sub: String,
    pub bottle_badge: String,
    pub chart: Option<PurityChart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiLabLabels {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub tab_editor: String,
    pub tab_chat: String,
    pub upload: String,
    pub result_wait: String,
    pub vision_placeholder: String,
    pub generate: String,
    pub processing: String,
    pub chat_intro: String,
    pub chat_placeholder: String,
    pub ask: String,
    pub disclaimer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub text: String,
    pub placeholder: String,
    pub subscribe: String,
    pub columns: Vec<FooterColumn>,
    pub copyright: String,
}

impl LandingPage {
    /// Build the page for the store's active language.
    pub fn build(store: &LanguageStore) -> Self {
        let language = store.language();
        let t = |key: &str| store.translate(key).to_string();

        let nav = Nav {
            brand_sub: t("nav.brand_sub"),
            items: vec![
                NavItem { label: t("nav.origin"), href: "#origin" },
                NavItem { label: t("nav.global"), href: "#global" },
                NavItem { label: t("nav.solutions"), href: "#solutions" },
            ],
            join: t("nav.join"),
        };

        let hero = Hero {
            eyebrow: t("hero.eyebrow"),
            title_1: t("hero.title_1"),
            title_highlight: t("hero.title_highlight"),
            title_2: t("hero.title_2"),
            tagline: t("hero.tagline"),
            cta: t("hero.cta"),
            scroll: t("hero.scroll"),
            slides: HERO_SLIDES
                .iter()
                .map(|slide| HeroSlide {
                    id: slide.id,
                    image: slide.image,
                    alt: slide.alt,
                    theme: slide.theme,
                })
                .collect(),
            rotate_interval_ms: HERO_ROTATE_INTERVAL.as_millis() as u64,
        };

        let origin = Origin {
            label: t("origin.label"),
            title: t("origin.title"),
            text: t("origin.text"),
            quote: t("origin.quote"),
        };

        let global = GlobalEngine {
            title: t("global.title"),
            description: t("global.desc"),
            hubs: HUBS
                .iter()
                .map(|hub| Hub {
                    id: hub.id,
                    name: t(hub.name_key),
                    description: t(hub.desc_key),
                    x: hub.x,
                    y: hub.y,
                })
                .collect(),
            stat_hubs_label: t("global.stat_hubs"),
            stat_hubs_value: HUBS.len(),
            stat_quality_label: t("global.stat_quality"),
            stat_quality_value: t("global.val_quality"),
        };

        let products = PRODUCTS
            .iter()
            .map(|product| Product {
                id: product.id,
                theme: product.theme,
                badge: t(product.badge_key),
                name: t(product.name_key),
                tagline: t(product.tagline_key),
                description: product.description_key.map(t),
                features: product.feature_keys.iter().map(|key| t(key)).collect(),
                stats: product
                    .stats
                    .iter()
                    .map(|&(value, label_key)| ProductStat {
                        value,
                        label: t(label_key),
                    })
                    .collect(),
                bottle_name: t(product.bottle_name_key),
                bottle_sub: t(product.bottle_sub_key),
                bottle_badge: t(product.bottle_badge_key),
                chart: product.has_purity_chart.then(|| PurityChart {
                    title: t("prod.chart.title"),
                    bars: PURITY_BARS
                        .iter()
                        .map(|&(key, purity, color)| ChartBar {
                            name: t(key),
                            purity,
                            color,
                        })
                        .collect(),
                }),
            })
            .collect();

        let ai_lab = AiLabLabels {
            badge: t("ai.badge"),
            title: t("ai.title"),
            subtitle: t("ai.subtitle"),
            tab_editor: t("ai.tab.editor"),
            tab_chat: t("ai.tab.chat"),
            upload: t("ai.upload"),
            result_wait: t("ai.result_wait"),
            vision_placeholder: t("ai.vision_placeholder"),
            generate: t("ai.generate"),
            processing: t("ai.processing"),
            chat_intro: t("ai.chat_intro"),
            chat_placeholder: t("ai.chat_placeholder"),
            ask: t("ai.ask"),
            disclaimer: t("ai.disclaimer"),
        };

        let footer = Footer {
            text: t("footer.text"),
            placeholder: t("footer.placeholder"),
            subscribe: t("footer.subscribe"),
            columns: vec![
                FooterColumn {
                    title: t("footer.col_prod"),
                    links: ["footer.col_prod_1", "footer.col_prod_2", "footer.col_prod_3"]
                        .into_iter()
                        .map(t)
                        .collect(),
                },
                FooterColumn {
                    title: t("footer.col_co"),
                    links: [
                        "footer.col_co_1",
                        "footer.col_co_2",
                        "footer.col_co_3",
                        "footer.col_co_4",
                    ]
                    .into_iter()
                    .map(t)
                    .collect(),
                },
            ],
            copyright: t("footer.copy"),
        };

        LandingPage {
            language,
            html_lang: language.html_lang(),
            nav,
            hero,
            origin,
            global,
            products,
            ai_lab,
            footer,
        }
    }
}

/// Index of the hero slide shown after `current`, wrapping around.
pub fn next_hero_slide(current: usize) -> usize {
    (current + 1) % HERO_SLIDES.len()
}
