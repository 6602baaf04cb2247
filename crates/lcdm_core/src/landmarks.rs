//! Familiar reference points for lookback times and comoving distances.

/// Epoch in Earth's or the universe's history comparable to a lookback time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookbackEpoch {
    Recent,
    ModernHumans,
    Dinosaurs,
    MulticellularLife,
    SolarSystemFormation,
    EarlyUniverse,
}

impl LookbackEpoch {
    /// Classify a lookback time in gigayears.
    pub fn classify(lookback_gyr: f64) -> Self {
        if lookback_gyr < 0.001 {
            Self::Recent
        } else if lookback_gyr < 0.05 {
            Self::ModernHumans
        } else if lookback_gyr < 0.3 {
            Self::Dinosaurs
        } else if lookback_gyr < 1.0 {
            Self::MulticellularLife
        } else if lookback_gyr < 5.0 {
            Self::SolarSystemFormation
        } else {
            Self::EarlyUniverse
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Recent => "Recent",
            Self::ModernHumans => "Modern humans",
            Self::Dinosaurs => "Dinosaurs",
            Self::MulticellularLife => "Multicellular life",
            Self::SolarSystemFormation => "Solar System formation",
            Self::EarlyUniverse => "Early universe",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Recent => "Recently (cosmologically speaking).",
            Self::ModernHumans => "Evolution of modern humans.",
            Self::Dinosaurs => "Age of the dinosaurs.",
            Self::MulticellularLife => "Emergence of complex multicellular life.",
            Self::SolarSystemFormation => "Formation of the Earth and Solar System.",
            Self::EarlyUniverse => "Early universe, formation of first stars/galaxies.",
        }
    }
}

/// Structure at a scale comparable to a comoving distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComovingScale {
    LocalGroup,
    VirgoCluster,
    ComaCluster,
    Superclusters,
    DistantQuasars,
    CosmicMicrowaveBackground,
}

impl ComovingScale {
    /// Classify a comoving distance in megaparsecs.
    pub fn classify(comoving_mpc: f64) -> Self {
        if comoving_mpc < 5.0 {
            Self::LocalGroup
        } else if comoving_mpc < 50.0 {
            Self::VirgoCluster
        } else if comoving_mpc < 200.0 {
            Self::ComaCluster
        } else if comoving_mpc < 1000.0 {
            Self::Superclusters
        } else if comoving_mpc < 8000.0 {
            Self::DistantQuasars
        } else {
            Self::CosmicMicrowaveBackground
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::LocalGroup => "Local Group",
            Self::VirgoCluster => "Virgo Cluster",
            Self::ComaCluster => "Coma Cluster",
            Self::Superclusters => "Superclusters",
            Self::DistantQuasars => "Distant quasars",
            Self::CosmicMicrowaveBackground => "CMB",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::LocalGroup => "Within our Local Group of galaxies.",
            Self::VirgoCluster => "Distance to the Virgo Cluster.",
            Self::ComaCluster => "Distance to the Coma Cluster.",
            Self::Superclusters => "Scale of superclusters and filaments.",
            Self::DistantQuasars => "Distance to distant quasars.",
            Self::CosmicMicrowaveBackground => {
                "Distance to the 'edge' of the observable universe (CMB)."
            }
        }
    }
}
