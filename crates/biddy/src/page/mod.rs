//! The page itself: one `maud` component per section, composed by [`App`].
use maud::{Markup, Render, html};

use crate::content::{ContentStore, SiteConfig};
use crate::structured_data::EventSchemaScript;
use crate::view::ViewState;

mod contact;
mod events;
mod header;
mod icons;
mod media;
mod members;
mod story;

/// The whole application, rendered for a given content store and view state.
pub struct App<'a> {
    pub content: &'a ContentStore,
    pub view: ViewState,
}

impl<'a> App<'a> {
    pub fn new(content: &'a ContentStore, view: ViewState) -> Self {
        Self { content, view }
    }
}

impl Render for App<'_> {
    fn render(&self) -> Markup {
        let content = self.content;
        let site = &content.site;

        html! {
            div.app {
                (header::header(site, &content.nav_items, self.view.menu))

                main #home {
                    (EventSchemaScript(content))
                    h1.sr-only { (site.page_heading) }

                    (hero(site))
                    (story::story(content))
                    (members::members(&content.panel_sections))
                    (events::events(&content.events))
                    (media::media(site, self.view.bandcamp_scale))
                    (contact::contact(&content.contact_links))
                }
            }
        }
    }
}

fn hero(site: &SiteConfig) -> Markup {
    html! {
        section.hero {
            div.hero-parallax
                style=(format!("background-image: url({})", site.hero_image))
                role="img"
                aria-label=(site.hero_alt) {}
            div.hero__shade aria-hidden="true" {}
        }
    }
}

/// Renders the application markup that goes inside the root element.
pub fn render_app(content: &ContentStore, view: ViewState) -> String {
    App::new(content, view).render().into_string()
}
