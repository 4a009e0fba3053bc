use maud::PreEscaped;

use crate::content::ContactIcon;

type Icon = PreEscaped<&'static str>;

pub const MENU: Icon = PreEscaped(include_str!("../../assets/icons/menu.svg"));
pub const CLOSE: Icon = PreEscaped(include_str!("../../assets/icons/close.svg"));
pub const CALENDAR: Icon = PreEscaped(include_str!("../../assets/icons/calendar.svg"));
pub const CLOCK: Icon = PreEscaped(include_str!("../../assets/icons/clock.svg"));
pub const MAP_PIN: Icon = PreEscaped(include_str!("../../assets/icons/map-pin.svg"));

pub fn contact_icon(icon: ContactIcon) -> Icon {
    match icon {
        ContactIcon::Youtube => PreEscaped(include_str!("../../assets/icons/youtube.svg")),
        ContactIcon::Instagram => PreEscaped(include_str!("../../assets/icons/instagram.svg")),
        ContactIcon::Facebook => PreEscaped(include_str!("../../assets/icons/facebook.svg")),
        ContactIcon::Email => PreEscaped(include_str!("../../assets/icons/mail.svg")),
    }
}
