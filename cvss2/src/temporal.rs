//! Temporal metrics.
//!
//! All of them are optional. "Not defined" does not lower the score, the
//! weight is the same as for the most severe value.

factor! {
    /// Exploitability (E)
    pub enum Exploitability("Exploitability", Temporal) {
        Unproven = "U", "Unproven", 0.85;
        ProofOfConcept = "POC", "Proof-of-concept", 0.90;
        Functional = "F", "Functional", 0.95;
        High = "H", "High", 1.00;
    }
    not_defined NotDefined = 1.00;
}

factor! {
    /// Remediation Level (RL)
    pub enum RemediationLevel("Remediation Level", Temporal) {
        OfficialFix = "OF", "Official-fix", 0.87;
        TemporaryFix = "T", "Temporary-fix", 0.90;
        Workaround = "W", "Workaround", 0.95;
        Unavailable = "U", "Unavailable", 1.00;
    }
    not_defined NotDefined = 1.00;
}

factor! {
    /// Report Confidence (RC)
    pub enum ReportConfidence("Report Confidence", Temporal) {
        Unconfirmed = "UC", "Unconfirmed", 0.90;
        Uncorroborated = "UR", "Uncorroborated", 0.95;
        Confirmed = "C", "Confirmed", 1.00;
    }
    not_defined NotDefined = 1.00;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{Expected, assert_factor, assert_invalid};
    use rstest::rstest;

    #[rstest]
    #[case("U", Expected::defined(0.85, "Unproven", "U"))]
    #[case("POC", Expected::defined(0.90, "Proof-of-concept", "POC"))]
    #[case("F", Expected::defined(0.95, "Functional", "F"))]
    #[case("H", Expected::defined(1.00, "High", "H"))]
    #[case("ND", Expected::not_defined(1.00))]
    #[case("", Expected::not_defined(1.00))]
    #[test_log::test]
    fn exploitability(#[case] code: &str, #[case] expected: Expected) {
        assert_factor::<Exploitability>(code, expected);
    }

    #[rstest]
    #[case("OF", Expected::defined(0.87, "Official-fix", "OF"))]
    #[case("T", Expected::defined(0.90, "Temporary-fix", "T"))]
    #[case("W", Expected::defined(0.95, "Workaround", "W"))]
    #[case("U", Expected::defined(1.00, "Unavailable", "U"))]
    #[case("ND", Expected::not_defined(1.00))]
    #[case("", Expected::not_defined(1.00))]
    #[test_log::test]
    fn remediation_level(#[case] code: &str, #[case] expected: Expected) {
        assert_factor::<RemediationLevel>(code, expected);
    }

    #[rstest]
    #[case("UC", Expected::defined(0.90, "Unconfirmed", "UC"))]
    #[case("UR", Expected::defined(0.95, "Uncorroborated", "UR"))]
    #[case("C", Expected::defined(1.00, "Confirmed", "C"))]
    #[case("ND", Expected::not_defined(1.00))]
    #[case("", Expected::not_defined(1.00))]
    #[test_log::test]
    fn report_confidence(#[case] code: &str, #[case] expected: Expected) {
        assert_factor::<ReportConfidence>(code, expected);
    }

    #[rstest]
    #[case("test")]
    #[case("nd")]
    #[case(" ")]
    #[test_log::test]
    fn invalid(#[case] code: &str) {
        assert_invalid::<Exploitability>(code);
        assert_invalid::<RemediationLevel>(code);
        assert_invalid::<ReportConfidence>(code);
    }

    #[test_log::test]
    fn empty_is_not_defined() {
        assert_eq!(
            "".parse::<Exploitability>(),
            Ok(Exploitability::NotDefined)
        );
        assert_eq!(
            "ND".parse::<RemediationLevel>(),
            Ok(RemediationLevel::NotDefined)
        );
    }
}
