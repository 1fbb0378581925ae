// storefront/api/site.rs - Process-wide document settings
//
// The storefront renders right-to-left under a fixed title. These
// settings are installed once at startup and read everywhere else.

use std::sync::OnceLock;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_TITLE: &str = "Neo Design Group | نئو دیزان گروپ";
pub const DEFAULT_LOCALE: &str = "fa-IR";

static SITE: OnceLock<SiteSettings> = OnceLock::new();

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    #[default]
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub title: String,
    pub direction: TextDirection,
    pub locale: String,
    pub brand_name: String,
    pub brand_name_local: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.to_string(),
            direction: TextDirection::Rtl,
            locale: DEFAULT_LOCALE.to_string(),
            brand_name: "Neo Design Group".to_string(),
            brand_name_local: "نئو دیزان گروپ".to_string(),
        }
    }
}

impl SiteSettings {
    /// Footer notice for the given year
    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {} {} — تمام حقوق محفوظ است.", year, self.brand_name)
    }

    pub fn current_copyright_line(&self) -> String {
        self.copyright_line(chrono::Local::now().year())
    }
}

/// Install the global site settings. Only the first call takes effect.
pub fn init_site(settings: SiteSettings) {
    tracing::info!(
        "Initializing site settings: title='{}', dir={}",
        settings.title,
        settings.direction.as_str()
    );
    if SITE.set(settings).is_err() {
        tracing::warn!("Site settings already initialized");
    }
}

/// The installed site settings, or the defaults if none were installed
pub fn site() -> &'static SiteSettings {
    SITE.get_or_init(SiteSettings::default)
}
