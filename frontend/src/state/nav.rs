use crate::config::NAV_TRIGGER_RATIO;

pub fn trigger_position(hero_height: f64) -> f64 {
    hero_height * NAV_TRIGGER_RATIO
}

/// Whether the nav should carry its scrolled treatment.
///
/// Returns `None` while the hero has no measured height yet; callers keep
/// the previous value and the next scroll event fixes it up.
pub fn is_scrolled(scroll_y: f64, hero_height: Option<f64>) -> Option<bool> {
    hero_height.map(|height| scroll_y > trigger_position(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: f64 = 1000.0;

    #[test]
    fn boundary_around_trigger() {
        let trigger = trigger_position(HERO);
        assert_eq!(trigger, 900.0);
        assert_eq!(is_scrolled(trigger - 1.0, Some(HERO)), Some(false));
        assert_eq!(is_scrolled(trigger, Some(HERO)), Some(false));
        assert_eq!(is_scrolled(trigger + 1.0, Some(HERO)), Some(true));
    }

    #[test]
    fn unmeasured_hero_skips_tick() {
        assert_eq!(is_scrolled(5000.0, None), None);
    }

    #[test]
    fn top_of_page_is_never_scrolled() {
        assert_eq!(is_scrolled(0.0, Some(HERO)), Some(false));
        assert_eq!(is_scrolled(0.0, Some(0.0)), Some(false));
    }

    #[test]
    fn scrolling_one_hero_height_sets_flag() {
        // Viewport shorter than hero * 1.11 means the page opens at the top.
        let hero = 720.0;
        assert_eq!(is_scrolled(0.0, Some(hero)), Some(false));
        assert_eq!(is_scrolled(hero, Some(hero)), Some(true));
    }

    #[test]
    fn flag_tracks_scroll_back_up() {
        assert_eq!(is_scrolled(950.0, Some(HERO)), Some(true));
        assert_eq!(is_scrolled(100.0, Some(HERO)), Some(false));
    }
}
