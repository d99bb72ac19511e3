//! Base metrics. These are always required and have no "not defined" state.

factor! {
    /// Access Vector (AV)
    pub enum AccessVector("Access Vector", Base) {
        Local = "L", "Local", 0.395;
        AdjacentNetwork = "A", "Adjacent Network", 0.646;
        Network = "N", "Network", 1.0;
    }
}

factor! {
    /// Access Complexity (AC)
    pub enum AccessComplexity("Access Complexity", Base) {
        High = "H", "High", 0.35;
        Medium = "M", "Medium", 0.61;
        Low = "L", "Low", 0.71;
    }
}

factor! {
    /// Authentication (Au)
    pub enum Authentication("Authentication", Base) {
        Multiple = "M", "Multiple", 0.45;
        Single = "S", "Single", 0.56;
        None = "N", "None", 0.704;
    }
}

factor! {
    /// Impact, used for Confidentiality (C), Integrity (I) and Availability (A)
    pub enum Impact("Impact", Base) {
        Complete = "C", "Complete", 0.660;
        Partial = "P", "Partial", 0.275;
        None = "N", "None", 0.0;
    }
}
