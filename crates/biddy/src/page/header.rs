use maud::{Markup, Render, html};

use super::icons;
use crate::content::{NavItem, SiteConfig};
use crate::view::MenuState;

impl Render for NavItem {
    fn render(&self) -> Markup {
        html! {
            a.site-nav__link href=(self.href) { (self.label) }
        }
    }
}

/// Sticky header with the logo, the desktop navigation and the mobile menu.
///
/// The mobile navigation is always present so the toggle button can point at it, it is only hidden while the menu is
/// closed.
pub fn header(site: &SiteConfig, nav_items: &[NavItem], menu: MenuState) -> Markup {
    let open = menu.is_open();

    html! {
        header.site-header {
            div.container.site-header__bar {
                a.site-header__logo.font-display href="#home" data-scroll-top data-close-menu {
                    (site.band_name)
                }

                nav.site-nav aria-label="Primary" {
                    @for item in nav_items {
                        (item)
                    }
                }

                button.menu-toggle
                    type="button"
                    aria-label="Toggle menu"
                    aria-expanded=(if open { "true" } else { "false" })
                    aria-controls="mobile-nav"
                    data-menu-toggle
                {
                    span data-menu-icon="open" hidden[open] { (icons::MENU) }
                    span data-menu-icon="close" hidden[!open] { (icons::CLOSE) }
                }
            }

            nav #mobile-nav.mobile-nav aria-label="Mobile" hidden[!open] {
                div.container.mobile-nav__links {
                    @for item in nav_items {
                        a.mobile-nav__link href=(item.href) data-close-menu { (item.label) }
                    }
                }
            }
        }
    }
}
