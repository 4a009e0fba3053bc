use maud::{Markup, Render, html};

use super::icons;
use crate::content::Event;

impl Render for Event {
    fn render(&self) -> Markup {
        html! {
            a.event-card href=(self.url) target="_blank" rel="noreferrer" {
                div.event-card__image style=(format!("background-image: url({})", self.image)) aria-hidden="true" {}
                div.event-card__shade aria-hidden="true" {}
                div.event-card__header {
                    h3.event-card__title.font-display { (self.name) }
                }
                div.event-card__details {
                    p { (icons::CALENDAR) (self.date) }
                    p { (icons::CLOCK) (self.time) }
                    p { (icons::MAP_PIN) (self.location) }
                }
            }
        }
    }
}

pub fn events(events: &[Event]) -> Markup {
    html! {
        section #events.bordered {
            div.container.section {
                h2.section-title.font-display { "Upcoming Events" }

                @if events.is_empty() {
                    p.events__empty { "No upcoming events right now. Check back soon!" }
                } @else {
                    div.event-grid {
                        @for event in events {
                            (event)
                        }
                    }
                }
            }
        }
    }
}
