//! Pricing Catalogue
//!
//! The three hosting plans and the monthly/yearly billing toggle. Prices are
//! whole USD per month; yearly billing shows the discounted monthly rate.

use serde::Serialize;

/// How the customer is billed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    /// Billed every month
    #[default]
    Monthly,
    /// Billed once a year at a discount
    Yearly,
}

impl BillingCycle {
    /// The other cycle
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    /// Label for the toggle
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

/// One hosting plan
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Plan name
    pub name: &'static str,
    /// One-line pitch
    pub description: &'static str,
    /// Monthly price when billed monthly
    pub monthly_price: u32,
    /// Monthly price when billed yearly
    pub yearly_price: u32,
    /// Included resources and services
    pub features: &'static [&'static str],
    /// Rendered as the recommended plan
    pub highlighted: bool,
    /// Call-to-action label
    pub cta: &'static str,
}

impl Plan {
    /// Monthly price under `cycle`
    #[must_use]
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    /// Yearly discount, rounded to the nearest percent
    #[must_use]
    pub fn yearly_savings_percent(&self) -> u32 {
        if self.monthly_price == 0 || self.yearly_price >= self.monthly_price {
            return 0;
        }
        let saved = self.monthly_price - self.yearly_price;
        (saved * 100 + self.monthly_price / 2) / self.monthly_price
    }
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        description: "Perfect for personal projects and small apps.",
        monthly_price: 9,
        yearly_price: 7,
        features: &[
            "1 vCPU Core",
            "2 GB RAM",
            "50 GB NVMe SSD",
            "2 TB Bandwidth",
            "1 IPv4 Address",
            "Basic DDoS Protection",
            "Community Support",
        ],
        highlighted: false,
        cta: "Start Free Trial",
    },
    Plan {
        name: "Professional",
        description: "Ideal for growing businesses and production workloads.",
        monthly_price: 29,
        yearly_price: 24,
        features: &[
            "4 vCPU Cores",
            "8 GB RAM",
            "200 GB NVMe SSD",
            "Unmetered Bandwidth",
            "2 IPv4 Addresses",
            "Advanced DDoS Protection",
            "Priority Support",
            "Daily Backups",
            "Free SSL Certificates",
        ],
        highlighted: true,
        cta: "Start Free Trial",
    },
    Plan {
        name: "Enterprise",
        description: "For mission-critical applications and large teams.",
        monthly_price: 99,
        yearly_price: 79,
        features: &[
            "16 vCPU Cores",
            "64 GB RAM",
            "1 TB NVMe SSD",
            "Unmetered Bandwidth",
            "5 IPv4 Addresses",
            "Enterprise DDoS (5Tbps)",
            "24/7 Dedicated Support",
            "Hourly Backups",
            "Free SSL Certificates",
            "Private Networking",
            "Custom SLA",
        ],
        highlighted: false,
        cta: "Contact Sales",
    },
];

/// All plans in display order
#[must_use]
pub fn catalogue() -> &'static [Plan] {
    PLANS
}
