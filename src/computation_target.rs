/// Quantity a computation solves for, holding the others fixed
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ComputationTarget {
    #[default]
    SampleSize,
    Alpha,
    Power,
    EffectSize,
}

impl std::fmt::Display for ComputationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComputationTarget::SampleSize => write!(f, "sample size"),
            ComputationTarget::Alpha => write!(f, "significance level"),
            ComputationTarget::Power => write!(f, "power"),
            ComputationTarget::EffectSize => write!(f, "minimum detectable effect"),
        }
    }
}
