//! The three feature tabs of the onboarding section.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Feature {
    #[default]
    ConnectedOnboarding,
    SmartMatching,
    TeamIntelligence,
}

/// Image shown in the visual panel for a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureVisual {
    pub src: &'static str,
    pub alt: &'static str,
    pub style: &'static str,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::ConnectedOnboarding,
        Feature::SmartMatching,
        Feature::TeamIntelligence,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Feature::ConnectedOnboarding => "connected-onboarding",
            Feature::SmartMatching => "smart-matching",
            Feature::TeamIntelligence => "team-intelligence",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Feature::ConnectedOnboarding => "Connected onboarding",
            Feature::SmartMatching => "Smart project matching",
            Feature::TeamIntelligence => "Team intelligence",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Feature::ConnectedOnboarding => "Start strong from day one. Proflr connects new team members to the right colleagues based on shared skills and interests, creating a smooth landing and faster integration into the organisation.",
            Feature::SmartMatching => "Use natural language to describe a project and instantly see the best available consultants. Proflr ensures every role is filled with the right expertise at the right time.",
            Feature::TeamIntelligence => "Build teams that work. Proflr looks beyond individual matches to shape balanced, high-performing teams, combining skills, experience, and availability for the best project outcomes.",
        }
    }

    pub fn visual(self) -> FeatureVisual {
        match self {
            Feature::ConnectedOnboarding => FeatureVisual {
                src: "/assets/connected-onboarding.svg",
                alt: "Connected onboarding visual",
                style: "width: 329px; height: 458px;",
            },
            Feature::SmartMatching => FeatureVisual {
                src: "/profilr smart project.svg",
                alt: "Proflr Smart Project Interface",
                style: "width: 100%; height: auto; max-height: 500px;",
            },
            Feature::TeamIntelligence => FeatureVisual {
                src: "/assets/team-intelligence.svg",
                alt: "Team intelligence visual",
                style: "width: 331px; height: 458px;",
            },
        }
    }
}

/// Returns the feature that should be active after clicking `clicked`, or
/// `None` when nothing changes.
pub fn select(active: Feature, clicked: Feature) -> Option<Feature> {
    (active != clicked).then_some(clicked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn defaults_to_connected_onboarding() {
        assert_eq!(Feature::default(), Feature::ConnectedOnboarding);
        assert_eq!(Feature::ALL[0], Feature::default());
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = Feature::ALL.iter().map(|f| f.slug()).collect();
        assert_eq!(slugs.len(), 3);
        assert!(slugs.contains("smart-matching"));
    }

    #[test]
    fn reselecting_active_is_noop() {
        assert_eq!(select(Feature::SmartMatching, Feature::SmartMatching), None);
        assert_eq!(
            select(Feature::ConnectedOnboarding, Feature::SmartMatching),
            Some(Feature::SmartMatching)
        );
    }

    #[test]
    fn each_feature_has_its_own_visual() {
        let srcs: HashSet<_> = Feature::ALL.iter().map(|f| f.visual().src).collect();
        assert_eq!(srcs.len(), 3);
    }
}
