//! [schema.org](https://schema.org) structured data describing the band's events for search engines.
use maud::{Markup, PreEscaped, Render, html};
use serde_json::{Value, json};

use crate::content::{ContentStore, Event, SiteConfig};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// JSON-LD document with one `MusicEvent` per configured event.
pub fn music_event_schema(store: &ContentStore) -> Value {
    let graph: Vec<Value> = store
        .events
        .iter()
        .map(|event| music_event(event, &store.site))
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": graph,
    })
}

fn music_event(event: &Event, site: &SiteConfig) -> Value {
    let home_url = site.home_url();

    json!({
        "@type": "MusicEvent",
        "name": event.name,
        "url": event.url,
        "image": event.image,
        "startDate": event.start_timestamp(),
        "endDate": event.end_timestamp(),
        "eventStatus": "https://schema.org/EventScheduled",
        "eventAttendanceMode": "https://schema.org/OfflineEventAttendanceMode",
        "description": event.summary(),
        "location": {
            "@type": "Place",
            "name": event.name,
            "address": {
                "@type": "PostalAddress",
                "addressLocality": event.address_locality,
                "addressRegion": event.address_region,
                "addressCountry": event.address_country,
            },
        },
        "performer": {
            "@type": "MusicGroup",
            "name": site.band_name,
            "url": home_url,
            "description": site.seo_description,
        },
        "organizer": {
            "@type": "Organization",
            "name": site.band_name,
            "url": home_url,
        },
        "offers": {
            "@type": "Offer",
            "url": event.url,
            "availability": "https://schema.org/InStock",
        },
    })
}

/// The `<script type="application/ld+json">` element embedding the event schema in the page.
pub struct EventSchemaScript<'a>(pub &'a ContentStore);

impl Render for EventSchemaScript<'_> {
    fn render(&self) -> Markup {
        // `</` would let a string value close the script element early.
        let json = music_event_schema(self.0).to_string().replace("</", "<\\/");

        html! {
            script type="application/ld+json" { (PreEscaped(json)) }
        }
    }
}
