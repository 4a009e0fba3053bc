//! `robots.txt` and `sitemap.xml` generation.
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, Utc};
use log::info;

pub const ROBOTS_FILE: &str = "robots.txt";
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Options for [`generate_seo_files()`].
#[derive(Debug, Clone)]
pub struct SeoOptions {
    /// Canonical URL of the site, without a trailing slash. Default: `"https://biddyonthebench.com"`
    pub site_url: String,
    /// Whether search engines may index the site. Default: `true`
    pub indexable: bool,
    /// Directory the files are written to. Default: `public`
    ///
    /// The build copies this directory into the output directory, so the files end up at the root of the site.
    pub output_dir: PathBuf,
}

impl SeoOptions {
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let defaults = Self::default();
        Self {
            output_dir: root.as_ref().join(&defaults.output_dir),
            ..defaults
        }
    }
}

impl Default for SeoOptions {
    fn default() -> Self {
        Self {
            site_url: "https://biddyonthebench.com".to_string(),
            indexable: true,
            output_dir: "public".into(),
        }
    }
}

/// Change frequency values for sitemap entries.
///
/// See: https://www.sitemaps.org/protocol.html#changefreqdef for more details.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    fn as_str(&self) -> &str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// A single URL entry in the sitemap.
#[derive(Debug)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl SitemapEntry {
    fn to_xml(&self) -> String {
        format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&self.loc),
            self.lastmod.format("%Y-%m-%d"),
            self.changefreq.as_str(),
            self.priority
        )
    }
}

/// Escapes XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn trim_site_url(site_url: &str) -> &str {
    site_url.trim_end_matches('/')
}

pub fn robots_txt(site_url: &str, indexable: bool) -> String {
    if indexable {
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}/{}\n",
            trim_site_url(site_url),
            SITEMAP_FILE
        )
    } else {
        "User-agent: *\nDisallow: /\n".to_string()
    }
}

/// Sitemap of the site: a single entry for the home page, last modified on `today`.
pub fn sitemap_xml(site_url: &str, today: NaiveDate) -> String {
    let home = SitemapEntry {
        loc: format!("{}/", trim_site_url(site_url)),
        lastmod: today,
        changefreq: ChangeFreq::Weekly,
        priority: 1.0,
    };

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    xml.push_str(&home.to_xml());
    xml.push_str("</urlset>\n");
    xml
}

/// Writes `robots.txt` and `sitemap.xml` into the output directory, overwriting existing files.
pub fn generate_seo_files(options: &SeoOptions) -> std::io::Result<Vec<PathBuf>> {
    write_seo_files(options, Utc::now().date_naive())
}

fn write_seo_files(options: &SeoOptions, today: NaiveDate) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(&options.output_dir)?;

    let robots_path = options.output_dir.join(ROBOTS_FILE);
    fs::write(&robots_path, robots_txt(&options.site_url, options.indexable))?;

    let sitemap_path = options.output_dir.join(SITEMAP_FILE);
    fs::write(&sitemap_path, sitemap_xml(&options.site_url, today))?;

    info!(
        target: "seo",
        "Generated {} and {} ({})",
        robots_path.display(),
        sitemap_path.display(),
        if options.indexable { "indexable" } else { "not indexable" }
    );

    Ok(vec![robots_path, sitemap_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(
            escape_xml("it's \"quoted\""),
            "it&apos;s &quot;quoted&quot;"
        );
    }

    #[test]
    fn test_robots_indexable() {
        assert_eq!(
            robots_txt("https://biddyonthebench.com", true),
            "User-agent: *\nAllow: /\n\nSitemap: https://biddyonthebench.com/sitemap.xml\n"
        );
    }

    #[test]
    fn test_robots_not_indexable() {
        assert_eq!(
            robots_txt("https://biddyonthebench.com", false),
            "User-agent: *\nDisallow: /\n"
        );
    }

    #[test]
    fn test_robots_trailing_slash() {
        assert!(robots_txt("https://example.com/", true).contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_sitemap_exact_format() {
        assert_eq!(
            sitemap_xml("https://biddyonthebench.com", date(2026, 3, 14)),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
             \x20\x20<url>\n\
             \x20\x20\x20\x20<loc>https://biddyonthebench.com/</loc>\n\
             \x20\x20\x20\x20<lastmod>2026-03-14</lastmod>\n\
             \x20\x20\x20\x20<changefreq>weekly</changefreq>\n\
             \x20\x20\x20\x20<priority>1.0</priority>\n\
             \x20\x20</url>\n\
             </urlset>\n"
        );
    }

    #[test]
    fn test_sitemap_escapes_loc() {
        let xml = sitemap_xml("https://example.com/?a=1&b=2", date(2026, 1, 1));
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2/</loc>"));
    }

    #[test]
    fn test_write_seo_files() {
        let dir = tempdir().unwrap();
        let options = SeoOptions {
            indexable: false,
            ..SeoOptions::rooted(dir.path())
        };

        let written = write_seo_files(&options, date(2026, 10, 16)).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("public/robots.txt")).unwrap(),
            "User-agent: *\nDisallow: /\n"
        );
        let sitemap = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 1);
        assert!(sitemap.contains("<lastmod>2026-10-16</lastmod>"));
    }

    #[test]
    fn test_generate_overwrites_with_today() {
        let dir = tempdir().unwrap();
        let options = SeoOptions::rooted(dir.path());
        fs::create_dir_all(&options.output_dir).unwrap();
        fs::write(options.output_dir.join(SITEMAP_FILE), "stale").unwrap();

        generate_seo_files(&options).unwrap();

        let sitemap = fs::read_to_string(options.output_dir.join(SITEMAP_FILE)).unwrap();
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        // Tolerate the test running across midnight UTC.
        let yesterday_or_today = sitemap.contains(&today)
            || sitemap.contains(
                &(Utc::now().date_naive() - chrono::Days::new(1))
                    .format("%Y-%m-%d")
                    .to_string(),
            );
        assert!(yesterday_or_today);
        assert_eq!(sitemap.matches("<url>").count(), 1);
        assert!(fs::read_to_string(options.output_dir.join(ROBOTS_FILE))
            .unwrap()
            .contains("Allow: /"));
    }
}
