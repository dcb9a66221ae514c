use crate::types::scoring::Dimension;
use crate::types::scoring::Dimension::{Defects, Experience, Performance, Security};

pub(super) struct CriterionSpec {
    pub dimension: Dimension,
    pub key: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub low: f64,
    pub mid: f64,
    pub inverted: bool,
}

const fn criterion(
    dimension: Dimension,
    key: &'static str,
    label: &'static str,
    weight: f64,
    low: f64,
    mid: f64,
    inverted: bool,
) -> CriterionSpec {
    CriterionSpec {
        dimension,
        key,
        label,
        weight,
        low,
        mid,
        inverted,
    }
}

pub(super) const DIMENSION_WEIGHTS: [(Dimension, f64); 4] = [
    (Dimension::Defects, 0.25),
    (Dimension::Performance, 0.25),
    (Dimension::Security, 0.30),
    (Dimension::Experience, 0.20),
];

pub(super) const CRITERIA: [CriterionSpec; 23] = [
    // defects per KLOC
    criterion(Defects, "defect_density", "Defect density", 0.25, 2.0, 5.0, false),
    // percent
    criterion(Defects, "test_coverage", "Test coverage", 0.20, 90.0, 70.0, true),
    criterion(Defects, "critical_bugs", "Open critical bugs", 0.30, 0.0, 2.0, false),
    // percent
    criterion(Defects, "regression_rate", "Regression rate", 0.15, 1.0, 3.0, false),
    // hours
    criterion(Defects, "mtbf", "MTBF", 0.10, 720.0, 168.0, true),
    // milliseconds
    criterion(Performance, "response_time", "Response time", 0.25, 300.0, 800.0, false),
    criterion(Performance, "p95_latency", "P95 response time", 0.25, 800.0, 2000.0, false),
    // percent
    criterion(Performance, "resource_utilization", "Resource utilization", 0.15, 60.0, 85.0, false),
    criterion(Performance, "scalability", "Scalability", 0.15, 10.0, 30.0, false),
    // seconds
    criterion(Performance, "startup_time", "Startup time", 0.05, 5.0, 15.0, false),
    // requests per second
    criterion(Performance, "throughput", "Throughput", 0.15, 100.0, 50.0, true),
    criterion(Security, "critical_vulnerabilities", "Critical vulnerabilities", 0.30, 0.0, 1.0, false),
    criterion(Security, "total_vulnerabilities", "Total vulnerabilities", 0.20, 5.0, 15.0, false),
    // percent of OWASP Top 10 covered
    criterion(Security, "owasp_top10", "OWASP Top 10", 0.20, 100.0, 90.0, true),
    criterion(Security, "data_security", "Data security", 0.15, 100.0, 95.0, true),
    // 2 = complete, 1 = partial, 0 = minimal. Both ordinal scales below are
    // higher-is-better and must stay inverted, otherwise 0 would score tier 1.
    criterion(Security, "authentication", "Authentication/Authorization", 0.10, 2.0, 1.0, true),
    // 2 = no critical findings, 1 = medium risk findings, 0 = high risk findings
    criterion(Security, "pentest", "Pentest", 0.05, 2.0, 1.0, true),
    // percent satisfied
    criterion(Experience, "user_satisfaction", "User satisfaction", 0.25, 70.0, 40.0, true),
    // percent
    criterion(Experience, "user_error_rate", "User error rate", 0.20, 2.0, 5.0, false),
    // minutes
    criterion(Experience, "task_completion_time", "Task completion time", 0.15, 10.0, 30.0, false),
    // percent of WCAG checks passing
    criterion(Experience, "accessibility", "Accessibility", 0.10, 95.0, 80.0, true),
    // percent
    criterion(Experience, "abandonment_rate", "Abandonment rate", 0.15, 5.0, 15.0, false),
    // percent
    criterion(Experience, "feature_adoption", "Feature adoption", 0.15, 60.0, 30.0, true),
];
