//! The content store: every record the page is rendered from.
//!
//! Content lives in a directory of JSON files (by default `content/` at the project root), one file per kind of record.
//! It is loaded once at build time and never mutated afterwards.
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::errors::ContentError;

pub const SITE_CONFIG_FILE: &str = "site-config.json";
pub const NAV_ITEMS_FILE: &str = "nav-items.json";
pub const EVENTS_FILE: &str = "events.json";
pub const PANEL_SECTIONS_FILE: &str = "panel-sections.json";
pub const STORY_PARAGRAPHS_FILE: &str = "story-paragraphs.json";
pub const PERFORMANCE_HIGHLIGHTS_FILE: &str = "performance-highlights.json";
pub const CONTACT_LINKS_FILE: &str = "contact-links.json";

/// Number of video players shown in the media section.
pub const YOUTUBE_EMBED_COUNT: usize = 4;

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Characters left alone in a URI component, as browsers' `encodeURIComponent` does.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Global constants of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub band_name: String,
    /// Visually hidden `h1` of the page.
    pub page_heading: String,
    pub hero_image: String,
    pub hero_alt: String,
    pub youtube_embed_url: String,
    pub youtube_uploads_playlist_id: Option<String>,
    pub bandcamp_embed_url: String,
    pub bandcamp_title: String,
    pub bandcamp_base_width: u32,
    pub bandcamp_base_height: u32,
    /// Canonical URL of the site, without a trailing slash.
    pub site_url: String,
    pub seo_description: String,
    pub photo_credit: Option<PhotoCredit>,
}

impl SiteConfig {
    /// The canonical URL of the home page, e.g. `https://example.com/`.
    pub fn home_url(&self) -> String {
        format!("{}/", self.site_url.trim_end_matches('/'))
    }

    /// Embed URLs for the video grid.
    ///
    /// With an uploads playlist configured, each player shows a different entry of the playlist. Otherwise every player
    /// shows the single configured embed.
    pub fn youtube_embeds(&self) -> Vec<String> {
        match self
            .youtube_uploads_playlist_id
            .as_deref()
            .filter(|id| !id.is_empty())
        {
            Some(playlist_id) => {
                let playlist_id = utf8_percent_encode(playlist_id, URI_COMPONENT).to_string();

                (0..YOUTUBE_EMBED_COUNT)
                    .map(|index| {
                        format!(
                            "{}?listType=playlist&list={}&index={}&rel=0",
                            YOUTUBE_EMBED_BASE, playlist_id, index
                        )
                    })
                    .collect()
            }
            None => vec![self.youtube_embed_url.clone(); YOUTUBE_EMBED_COUNT],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoCredit {
    pub label: String,
    pub link_text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// A band member panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSection {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceHighlight {
    pub year: String,
    pub label: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactIcon {
    Youtube,
    Instagram,
    Facebook,
    Email,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub icon: ContactIcon,
}

impl ContactLink {
    /// Whether the link leaves the site, and should open in a new tab.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

/// An upcoming event.
///
/// `date`, `time` and `location` are free-form display strings. The machine-readable fields are only used for
/// structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub url: String,
    pub image: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    /// Offset appended to timestamps, e.g. `-05:00`.
    pub utc_offset: String,
    pub address_locality: String,
    pub address_region: String,
    pub address_country: String,
}

impl Event {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// End of the event. An end time that isn't after the start time belongs to the following day.
    pub fn ends_at(&self) -> NaiveDateTime {
        let end_date = if self.end_time > self.start_time {
            Some(self.start_date)
        } else {
            self.start_date.checked_add_days(Days::new(1))
        };

        end_date
            .unwrap_or(self.start_date)
            .and_time(self.end_time)
    }

    /// ISO 8601 start timestamp, e.g. `2026-03-14T19:00:00-04:00`.
    pub fn start_timestamp(&self) -> String {
        self.timestamp(self.starts_at())
    }

    pub fn end_timestamp(&self) -> String {
        self.timestamp(self.ends_at())
    }

    fn timestamp(&self, at: NaiveDateTime) -> String {
        format!("{}{}", at.format("%Y-%m-%dT%H:%M:00"), self.utc_offset)
    }

    /// One-line summary used in the event's structured data.
    pub fn summary(&self) -> String {
        format!("{} in {}. {}.", self.name, self.location, self.time)
    }
}

/// `HH:MM` times, as written in `events.json`.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

/// All the content of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStore {
    pub site: SiteConfig,
    pub nav_items: Vec<NavItem>,
    pub events: Vec<Event>,
    pub panel_sections: Vec<PanelSection>,
    pub story_paragraphs: Vec<String>,
    pub performance_highlights: Vec<PerformanceHighlight>,
    pub contact_links: Vec<ContactLink>,
}

impl ContentStore {
    /// Loads every content file from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ContentError> {
        let dir = dir.as_ref();

        let store = Self {
            site: read_json(dir, SITE_CONFIG_FILE)?,
            nav_items: read_json(dir, NAV_ITEMS_FILE)?,
            events: read_json(dir, EVENTS_FILE)?,
            panel_sections: read_json(dir, PANEL_SECTIONS_FILE)?,
            story_paragraphs: read_json(dir, STORY_PARAGRAPHS_FILE)?,
            performance_highlights: read_json(dir, PERFORMANCE_HIGHLIGHTS_FILE)?,
            contact_links: read_json(dir, CONTACT_LINKS_FILE)?,
        };

        debug!(
            target: "content",
            "loaded {} events, {} members and {} nav items from {}",
            store.events.len(),
            store.panel_sections.len(),
            store.nav_items.len(),
            dir.display()
        );

        Ok(store)
    }
}

fn read_json<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T, ContentError> {
    let path: PathBuf = dir.join(file_name);

    let raw = fs::read_to_string(&path).map_err(|source| ContentError::ReadFailed {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ContentError::ParseFailed { path, source })
}
