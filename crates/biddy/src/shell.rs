//! The HTML document the application is mounted into.
use maud::{DOCTYPE, Markup, html};

use crate::GENERATOR;
use crate::assets::{CLIENT_SCRIPT_URL, STYLESHEET_URL};
use crate::content::SiteConfig;

/// Empty root element of the shell. Prerendering replaces it with the rendered page.
pub const ROOT_PLACEHOLDER: &str = r#"<div id="root"></div>"#;

pub struct SeoMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub canonical_url: String,
}

impl<'a> SeoMeta<'a> {
    pub fn from_site(site: &'a SiteConfig) -> Self {
        Self {
            title: &site.band_name,
            description: &site.seo_description,
            canonical_url: site.home_url(),
        }
    }

    pub fn render(&self, social_image_url: &str) -> Markup {
        html! {
            title { (self.title) }
            meta name="description" content=(self.description);
            link rel="canonical" href=(self.canonical_url);

            // Open Graph meta tags
            meta property="og:title" content=(self.title);
            meta property="og:description" content=(self.description);
            meta property="og:type" content="website";
            meta property="og:url" content=(self.canonical_url);
            meta property="og:image" content=(social_image_url);

            // Twitter Card meta tags
            meta name="twitter:card" content="summary_large_image";
            meta name="twitter:title" content=(self.title);
            meta name="twitter:description" content=(self.description);
            meta name="twitter:image" content=(social_image_url);
        }
    }
}

pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}

/// Absolute URL of a site-relative path such as the hero image.
fn absolute_url(site: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    format!(
        "{}/{}",
        site.site_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The page shell, with an empty root element.
pub fn page_shell(site: &SiteConfig) -> Markup {
    let seo = SeoMeta::from_site(site);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                link rel="icon" type="image/svg+xml" href="/favicon.svg";
                (seo.render(&absolute_url(site, &site.hero_image)))
                link rel="stylesheet" type="text/css" href=(STYLESHEET_URL);
                script src=(CLIENT_SCRIPT_URL) type="module" {}
            }
            body {
                div #root {}
            }
        }
    }
}
