use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Development builds log listener and lock traffic
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Warn  // Production only reports DOM failures
}

/// Fraction of the hero height the page must scroll past before the nav
/// switches to its scrolled treatment.
pub const NAV_TRIGGER_RATIO: f64 = 0.9;

/// Widths at or below this get the hamburger and the overlay menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const REVEAL_ROOT_MARGIN: &str = "-100px";
pub const REVEAL_OFFSET_PX: u32 = 20;
pub const BLOCK_REVEAL_SECS: f64 = 0.5;
pub const HERO_REVEAL_SECS: f64 = 0.8;

pub const DEMO_URL: &str = "https://cal.com/pompadourventures/proflrdemo";
pub const VENTURE_URL: &str = "https://www.pompadour.ventures/ventures/proflr";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/pompadour-ventures";

const CONTACT_ADDRESS: &str = "madame@pompadour.ventures";
const CONTACT_SUBJECT: &str = "I have a question/idea";

pub fn contact_mailto() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_ADDRESS,
        urlencoding::encode(CONTACT_SUBJECT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        assert_eq!(
            contact_mailto(),
            "mailto:madame@pompadour.ventures?subject=I%20have%20a%20question%2Fidea"
        );
    }

    #[test]
    fn trigger_ratio_is_inside_hero() {
        assert!(NAV_TRIGGER_RATIO > 0.0 && NAV_TRIGGER_RATIO < 1.0);
    }
}
