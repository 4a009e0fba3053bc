use maud::{Markup, Render, html};

use crate::content::{ContentStore, PerformanceHighlight};

impl Render for PerformanceHighlight {
    fn render(&self) -> Markup {
        html! {
            li.highlight {
                (self.year) " - "
                @if let Some(url) = &self.url {
                    a.link href=(url) target="_blank" rel="noreferrer" { (self.label) }
                } @else {
                    span { (self.label) }
                }
            }
        }
    }
}

pub fn story(content: &ContentStore) -> Markup {
    html! {
        section #story {
            div.container.section {
                h2.section-title.font-display { "The Story" }

                div.story {
                    @for paragraph in &content.story_paragraphs {
                        p { (paragraph) }
                    }
                }

                @if !content.performance_highlights.is_empty() {
                    p.story { "Performance highlights:" }
                    ul.highlights {
                        @for highlight in &content.performance_highlights {
                            (highlight)
                        }
                    }
                }

                @if let Some(credit) = &content.site.photo_credit {
                    p.photo-credit {
                        (credit.label) " "
                        a.link href=(credit.url) target="_blank" rel="noreferrer" { (credit.link_text) }
                    }
                }
            }
        }
    }
}
