//! Environmental metrics, all of them optional.

factor! {
    /// Collateral Damage Potential (CDP)
    pub enum CollateralDamagePotential("Collateral Damage Potential", Environmental) {
        None = "N", "None", 0.00;
        Low = "L", "Low", 0.10;
        LowMedium = "LM", "Low-Medium", 0.30;
        MediumHigh = "MH", "Medium-High", 0.40;
        High = "H", "High", 0.50;
    }
    // no collateral damage unless stated otherwise
    not_defined NotDefined = 0.00;
}

factor! {
    /// Target Distribution (TD)
    pub enum TargetDistribution("Target Distribution", Environmental) {
        None = "N", "None", 0.00;
        Low = "L", "Low", 0.25;
        Medium = "M", "Medium", 0.75;
        High = "H", "High", 1.00;
    }
    not_defined NotDefined = 1.00;
}

factor! {
    /// Security Requirement, used for Confidentiality (CR), Integrity (IR)
    /// and Availability (AR)
    pub enum Requirement("Requirement", Environmental) {
        Low = "L", "Low", 0.50;
        Medium = "M", "Medium", 1.00;
        High = "H", "High", 1.51;
    }
    not_defined NotDefined = 1.00;
}
