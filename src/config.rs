//! Page configuration.
//! Read once at startup from `<script id="site-config" type="application/json">`.

use serde::{Deserialize, Serialize};

use crate::model::ImageRef;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    /// Amount added or removed by one button press or wheel notch.
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 5.0,
            step: 0.2,
        }
    }
}

impl ZoomLimits {
    /// Falls back to the defaults when any bound is non-positive, non-finite,
    /// or excludes the fitted scale of 1 that every opened image starts at.
    pub fn sanitized(self) -> Self {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.min)
            && valid(self.max)
            && valid(self.step)
            && self.min <= 1.0
            && 1.0 <= self.max
        {
            self
        } else {
            log::warn!("invalid zoom limits {:?}, using defaults", self);
            Self::default()
        }
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub slides: Vec<ImageRef>,
    pub photos: Vec<ImageRef>,
    pub slide_interval_ms: u32,
    pub zoom: ZoomLimits,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Gallery".to_string(),
            nav: vec![NavLink {
                label: "Home".to_string(),
                href: "index.html".to_string(),
            }],
            slides: Vec::new(),
            photos: Vec::new(),
            slide_interval_ms: 3000,
            zoom: ZoomLimits::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.zoom = cfg.zoom.sanitized();
        if cfg.slide_interval_ms == 0 {
            cfg.slide_interval_ms = SiteConfig::default().slide_interval_ms;
        }
        Ok(cfg)
    }

    /// Reads the embedded config element. Missing or malformed config yields defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            log::debug!("no #{} element, using default config", CONFIG_ELEMENT_ID);
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("malformed site config: {}", err);
                Self::default()
            }
        }
    }
}
