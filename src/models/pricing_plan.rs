use crate::utils::format_inr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// Anything other than `yearly` falls back to monthly.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()) {
            Some(ref s) if s == "yearly" => BillingCycle::Yearly,
            _ => BillingCycle::Monthly,
        }
    }

    pub fn is_yearly(&self) -> bool {
        *self == BillingCycle::Yearly
    }

    pub fn period(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Yearly => "year",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub monthly_price: u64,
    pub yearly_price: u64,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl PricingPlan {
    pub fn price_for(&self, cycle: BillingCycle) -> u64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    pub fn yearly_savings(&self) -> u64 {
        (self.monthly_price * 12).saturating_sub(self.yearly_price)
    }
}

/// Plan card as rendered for one billing cycle.
#[derive(Clone, Debug)]
pub struct PlanView {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub price: String,
    pub period: &'static str,
    pub savings: Option<String>,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl PlanView {
    pub fn new(plan: &PricingPlan, cycle: BillingCycle) -> Self {
        Self {
            name: plan.name,
            icon: plan.icon,
            description: plan.description,
            price: format_inr(plan.price_for(cycle)),
            period: cycle.period(),
            savings: cycle.is_yearly().then(|| format_inr(plan.yearly_savings())),
            features: plan.features,
            popular: plan.popular,
        }
    }
}
