use maud::{Markup, Render, html};

use super::icons;
use crate::content::{ContactIcon, ContactLink};

fn button_class(icon: ContactIcon) -> &'static str {
    match icon {
        ContactIcon::Youtube => "contact-button--youtube",
        ContactIcon::Instagram => "contact-button--instagram",
        ContactIcon::Facebook => "contact-button--facebook",
        ContactIcon::Email => "contact-button--email",
    }
}

impl Render for ContactLink {
    fn render(&self) -> Markup {
        let external = self.is_external();

        html! {
            a.contact-button.(button_class(self.icon))
                href=(self.href)
                target=[external.then_some("_blank")]
                rel=[external.then_some("noreferrer")]
            {
                (self.label)
                (icons::contact_icon(self.icon))
            }
        }
    }
}

pub fn contact(links: &[ContactLink]) -> Markup {
    html! {
        section #contact.bordered-y {
            div.container.section {
                h2.section-title.font-display { "Contact" }
                div.contact-links {
                    @for link in links {
                        (link)
                    }
                }
            }
        }
    }
}
