use maud::{Markup, Render, html};

use crate::content::PanelSection;

impl Render for PanelSection {
    fn render(&self) -> Markup {
        let background = format!(
            "background-image: linear-gradient(to bottom, rgba(0, 0, 0, 0.08), rgba(0, 0, 0, 0.34)), url({})",
            self.image
        );

        html! {
            article.member id=(self.id) {
                div.member-parallax style=(background) role="img" aria-label=(format!("{} portrait", self.name)) {}
                div.container.member__body {
                    p.member__role { (self.role) }
                    h3.section-title.font-display { (self.name) }
                    p.member__bio { (self.bio) }
                }
            }
        }
    }
}

pub fn members(panel_sections: &[PanelSection]) -> Markup {
    html! {
        section #members {
            @for member in panel_sections {
                (member)
            }
        }
    }
}
