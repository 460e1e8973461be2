//! One-shot entrance animation state.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

impl Reveal {
    /// Feeds a visibility change. Once revealed, nothing moves it back.
    pub fn observe(self, visible: bool) -> Self {
        match self {
            Reveal::Pending if visible => Reveal::Revealed,
            other => other,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Reveal::Revealed
    }
}

/// How a block travels from hidden to shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransition {
    pub duration_secs: f64,
    pub offset_px: u32,
}

impl RevealTransition {
    pub fn style(&self, reveal: Reveal) -> String {
        let (opacity, offset) = match reveal {
            Reveal::Pending => (0, self.offset_px),
            Reveal::Revealed => (1, 0),
        };
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {}s ease, transform {}s ease;",
            opacity, offset, self.duration_secs, self.duration_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_visibility() {
        let r = Reveal::default();
        assert_eq!(r, Reveal::Pending);
        assert_eq!(r.observe(false), Reveal::Pending);
        assert_eq!(r.observe(true), Reveal::Revealed);
    }

    #[test]
    fn fires_once_per_view() {
        // in, out, back in
        let mut r = Reveal::Pending;
        let mut transitions = 0;
        for visible in [true, false, true, false, true] {
            let next = r.observe(visible);
            if next != r {
                transitions += 1;
            }
            r = next;
        }
        assert_eq!(transitions, 1);
        assert!(r.is_revealed());
    }

    #[test]
    fn style_follows_state() {
        let t = RevealTransition { duration_secs: 0.5, offset_px: 20 };
        let hidden = t.style(Reveal::Pending);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(20px)"));
        let shown = t.style(Reveal::Revealed);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translateY(0px)"));
        assert!(shown.contains("0.5s"));
    }
}
