/// Direction(s) of the alternative hypothesis in a two-proportion test
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum Sidedness {
    OneSided,
    #[default]
    TwoSided,
}

impl Sidedness {
    /// Probability whose normal quantile gives the critical value z_alpha
    pub fn critical_probability(&self, alpha: f64) -> f64 {
        match self {
            Sidedness::OneSided => 1. - alpha,
            Sidedness::TwoSided => 1. - alpha / 2.,
        }
    }

    /// Significance level implied by an upper-tail probability beyond the critical value
    pub fn alpha_from_tail(&self, upper_tail: f64) -> f64 {
        match self {
            Sidedness::OneSided => upper_tail,
            Sidedness::TwoSided => (2. * upper_tail).min(1.),
        }
    }
}

impl From<bool> for Sidedness {
    fn from(two_sided: bool) -> Self {
        if two_sided {
            Sidedness::TwoSided
        } else {
            Sidedness::OneSided
        }
    }
}
