//! Testimonial Catalogue
//!
//! Customer quotes listed under the "Loved by ..." heading.

use serde::Serialize;

/// One customer quote
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Customer name
    pub name: &'static str,
    /// Title and company
    pub role: &'static str,
    /// The quote, without surrounding quotation marks
    pub quote: &'static str,
}

impl Testimonial {
    /// Avatar letter: the first character of the name
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex Chen",
        role: "CTO, StreamFlow",
        quote: "NovaCloud's NVMe performance is unreal. Our API response times dropped \
                by 60% after migrating.",
    },
    Testimonial {
        name: "Sarah Johnson",
        role: "DevOps Lead, Pixelware",
        quote: "The auto-scaling saved us during a viral launch. Zero downtime with 100x \
                traffic spike.",
    },
    Testimonial {
        name: "Marcus Webb",
        role: "Founder, DataForge",
        quote: "Best DDoS protection in the market. We've been attack-free since switching \
                to NovaCloud.",
    },
    Testimonial {
        name: "Emily Park",
        role: "Lead SRE, NexaTech",
        quote: "Provisioned 50 servers across 12 regions in under a minute. Infrastructure \
                as code done right.",
    },
    Testimonial {
        name: "David Kim",
        role: "VP Engineering, CloudBase",
        quote: "The 24/7 support team is phenomenal. They resolved a critical issue in \
                under 10 minutes.",
    },
    Testimonial {
        name: "Lisa Nguyen",
        role: "CEO, ScaleUp.io",
        quote: "We cut our infrastructure costs by 45% while getting better performance. \
                No-brainer decision.",
    },
    Testimonial {
        name: "James Miller",
        role: "Architect, Quantum Labs",
        quote: "The private networking and custom SLAs made enterprise compliance a breeze \
                for us.",
    },
    Testimonial {
        name: "Priya Patel",
        role: "CTO, FinSecure",
        quote: "Five nines uptime and they actually deliver on it. Our clients trust us \
                because we trust NovaCloud.",
    },
];

/// All testimonials in display order
#[must_use]
pub fn catalogue() -> &'static [Testimonial] {
    TESTIMONIALS
}
