use maud::{Markup, html};

use crate::content::SiteConfig;
use crate::view::EmbedScale;

const YOUTUBE_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Video grid and the Bandcamp player.
///
/// The Bandcamp player only renders well at its base size, so it is kept at that size and scaled down with a CSS
/// transform. `data-base-width`/`data-base-height` let the client script recompute the scale when the card resizes.
pub fn media(site: &SiteConfig, bandcamp_scale: EmbedScale) -> Markup {
    let base_width = site.bandcamp_base_width;
    let base_height = site.bandcamp_base_height;

    let wrapper_style = format!("height: {}px", bandcamp_scale.scaled_height(base_height));
    let player_style = format!(
        "border: 0; height: {}px; width: {}px; transform: scale({}); transform-origin: top left",
        base_height,
        base_width,
        bandcamp_scale.ratio()
    );

    html! {
        section #media.bordered {
            div.container.section {
                h2.section-title.font-display { "Latest Videos & Music" }

                div.media {
                    div.card {
                        div.card__header {
                            h3.card__title.font-display { "YouTube" }
                        }
                        div.card__content {
                            div.video-grid {
                                @for (index, embed_url) in site.youtube_embeds().iter().enumerate() {
                                    div.video-frame {
                                        iframe
                                            src=(embed_url)
                                            title=(format!("{} YouTube video {}", site.band_name, index + 1))
                                            allow=(YOUTUBE_ALLOW)
                                            allowfullscreen
                                            loading="lazy"
                                            style="border: 0"
                                            tabindex="-1" {}
                                    }
                                }
                            }
                        }
                    }

                    div.card {
                        div.card__header {
                            h3.card__title.font-display { "Bandcamp" }
                        }
                        div.card__content {
                            div.bandcamp-frame
                                data-bandcamp-wrapper
                                data-base-width=(base_width)
                                data-base-height=(base_height)
                                style=(wrapper_style)
                            {
                                iframe.bandcamp-frame__player
                                    src=(site.bandcamp_embed_url)
                                    title=(site.bandcamp_title)
                                    loading="lazy"
                                    style=(player_style) {}
                            }
                        }
                    }
                }
            }
        }
    }
}
