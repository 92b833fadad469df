//! Feature Catalogue
//!
//! The six infrastructure highlights shown under "Infrastructure that
//! scales with you". Each card pairs a headline stat with its label.

use serde::Serialize;

/// One feature card
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Card heading
    pub title: &'static str,
    /// One or two sentences of detail
    pub description: &'static str,
    /// Headline figure, e.g. `7 GB/s`
    pub stat: &'static str,
    /// What the figure measures
    pub stat_label: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "NVMe SSD Storage",
        description: "Up to 7GB/s read speeds with enterprise-grade NVMe SSDs. \
                      Your data, served at the speed of light.",
        stat: "7 GB/s",
        stat_label: "Read Speed",
    },
    Feature {
        title: "10Gbps Network",
        description: "Unmetered bandwidth on a 10Gbps dedicated port. \
                      Zero throttling, zero compromises.",
        stat: "10 Gbps",
        stat_label: "Bandwidth",
    },
    Feature {
        title: "DDoS Protection",
        description: "Enterprise-grade L3/L4/L7 DDoS mitigation with always-on \
                      filtering up to 5Tbps.",
        stat: "5 Tbps",
        stat_label: "Mitigation",
    },
    Feature {
        title: "Global Edge Network",
        description: "Deploy across 30+ data centers worldwide. \
                      Sub-millisecond latency to your users.",
        stat: "30+",
        stat_label: "Regions",
    },
    Feature {
        title: "Instant Provisioning",
        description: "Spin up a fully configured server in under 30 seconds. \
                      API-first infrastructure as code.",
        stat: "<30s",
        stat_label: "Deploy Time",
    },
    Feature {
        title: "Auto Scaling",
        description: "Automatically scale resources based on demand. \
                      Pay only for what you use.",
        stat: "∞",
        stat_label: "Scalability",
    },
];

/// All feature cards in display order
#[must_use]
pub fn catalogue() -> &'static [Feature] {
    FEATURES
}
