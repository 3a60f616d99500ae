//! Integration tests for the evaluation pipeline.
//!
//! These tests drive the public API end to end:
//! 1. A request file is loaded from disk
//! 2. AHP weights are derived from pairwise judgments
//! 3. The ideal profile is derived from criterion types
//! 4. Alternatives are ranked with the selected scoring strategy

use std::fs;

use tempfile::TempDir;

use decision_ranker::adapters::FileRequestLoader;
use decision_ranker::application::{EvaluationRequest, EvaluationService};
use decision_ranker::config::AnalysisConfig;
use decision_ranker::domain::analysis::{
    AhpCalculator, AnalysisError, DecisionMatrix, IdealProfile, PairwiseMatrix, ProfileMatching,
    ScoringInput, ScoringMethod, ScoringOutcome,
};
use decision_ranker::domain::foundation::{CriterionType, DomainError, ErrorCode};

// =============================================================================
// Test Infrastructure
// =============================================================================

const RACKET_REQUEST: &str = r#"
criteria:
  - id: power
    name: Power
    type: benefit
  - id: control
    name: Control
    type: benefit
  - id: weight
    name: Weight
    type: cost
    unit: g
alternatives:
  - id: pure-drive
    name: Pure Drive
    brand: Babolat
    sport: tennis
    source: { title: Catalogue, url: "https://example.com/pure-drive" }
  - id: blade
    name: Blade 98
    brand: Wilson
    sport: tennis
  - id: speed
    name: Speed MP
    brand: Head
    sport: tennis
values:
  - { alternative_id: pure-drive, criterion_id: power, value: 9 }
  - { alternative_id: pure-drive, criterion_id: control, value: 6 }
  - { alternative_id: pure-drive, criterion_id: weight, value: 300 }
  - { alternative_id: blade, criterion_id: power, value: 6 }
  - { alternative_id: blade, criterion_id: control, value: 9 }
  - { alternative_id: blade, criterion_id: weight, value: 305 }
  - { alternative_id: speed, criterion_id: power, value: 8 }
  - { alternative_id: speed, criterion_id: control, value: 9 }
  - { alternative_id: speed, criterion_id: weight, value: 300 }
comparisons:
  - { criterion_i: power, criterion_j: control, value: 3 }
  - { criterion_i: power, criterion_j: weight, value: 5 }
  - { criterion_i: control, criterion_j: weight, value: 3 }
"#;

fn load(contents: &str) -> Result<EvaluationRequest, DomainError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("request.yaml");
    fs::write(&path, contents).unwrap();
    FileRequestLoader::new(&path).load()
}

fn service() -> EvaluationService {
    EvaluationService::new(AnalysisConfig::default())
}

// =============================================================================
// Engine Scenarios
// =============================================================================

#[test]
fn profile_matching_worked_example() {
    let decision = DecisionMatrix::from_rows(vec![vec![80.0, 70.0], vec![60.0, 90.0]]).unwrap();
    let ideal = IdealProfile::from_values(vec![80.0, 90.0]).unwrap();
    let names = vec!["First".to_string(), "Second".to_string()];

    let result = ProfileMatching::calculate(&decision, &[0.6, 0.4], &names, &ideal).unwrap();

    assert_eq!(result.gaps, vec![vec![0.0, 20.0], vec![20.0, 0.0]]);
    assert!((result.total_gaps[0] - 8.0).abs() < 1e-9);
    assert!((result.total_gaps[1] - 12.0).abs() < 1e-9);
    assert!((result.similarity_scores[0] - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(result.similarity_scores[1], 0.0);
    assert_eq!(result.best.name, "First");
    assert_eq!(result.worst.name, "Second");
}

#[test]
fn ahp_reference_matrix_is_consistent() {
    let matrix = PairwiseMatrix::builder(3)
        .compare(0, 1, 3.0)
        .compare(0, 2, 5.0)
        .compare(1, 2, 3.0)
        .build()
        .unwrap();

    let result = AhpCalculator::calculate_weights(&matrix).unwrap();

    let expected = [0.633, 0.260, 0.106];
    for (actual, expected) in result.weights.iter().zip(expected) {
        assert!((actual - expected).abs() < 0.001);
    }
    assert!(result.is_consistent());
}

#[test]
fn ahp_rejects_non_square_matrix() {
    let result = AhpCalculator::calculate_from_rows(vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.0, 2.0]]);
    assert!(matches!(result, Err(AnalysisError::InvalidMatrixShape { .. })));
}

#[test]
fn strategies_share_one_input() {
    let decision =
        DecisionMatrix::from_rows(vec![vec![4.0, 120.0], vec![5.0, 150.0], vec![3.0, 100.0]])
            .unwrap();
    let ideal = IdealProfile::derive(&decision, &[CriterionType::Benefit, CriterionType::Cost])
        .unwrap();
    let names: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let input = ScoringInput::new(&decision, &[0.5, 0.5], &names, &ideal).unwrap();

    assert_eq!(ideal.values(), &[5.0, 100.0]);
    for method in [ScoringMethod::GapSimilarity, ScoringMethod::InverseGap] {
        let outcome = method.strategy().score(&input).unwrap();
        assert_eq!(outcome.method(), method);
        assert_eq!(outcome.ranking().len(), 3);
    }
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn request_file_evaluates_to_ranked_report() {
    let request = load(RACKET_REQUEST).unwrap();
    let report = service().evaluate(request).unwrap();

    assert!(report.consistent);
    assert_eq!(report.ideal_profile, vec![9.0, 9.0, 300.0]);
    assert_eq!(report.ranking[0].name, "Speed MP");
    assert_eq!(report.ranking[0].rank, 1);
    assert_eq!(report.ranking[2].name, "Blade 98");

    let pure_drive = report
        .ranking
        .iter()
        .find(|entry| entry.alternative_id.as_str() == "pure-drive")
        .unwrap();
    assert_eq!(
        pure_drive.source_url.as_deref(),
        Some("https://example.com/pure-drive")
    );
}

#[test]
fn inverse_gap_request_reports_its_shape() {
    let mut request = load(RACKET_REQUEST).unwrap();
    request.method = Some(ScoringMethod::InverseGap);

    let report = service().evaluate(request).unwrap();
    match &report.details {
        ScoringOutcome::InverseGap(result) => {
            assert_eq!(result.cell_scores.len(), 3);
            assert!(result.final_scores.iter().all(|s| *s > 0.0 && *s <= 1.0));
        }
        other => panic!("unexpected outcome: {:?}", other.method()),
    }
}

#[test]
fn report_json_is_presentation_ready() {
    let report = service().evaluate(load(RACKET_REQUEST).unwrap()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["weights"][0]["criterion_id"], "power");
    assert_eq!(json["ranking"][0]["sport"], "tennis");
    assert!(json["consistency_ratio"].as_f64().unwrap() < 0.10);
    assert!(json["details"]["result"]["calculation_steps"].is_object());
}

#[test]
fn missing_value_is_reported_with_details() {
    let trimmed = RACKET_REQUEST.replace(
        "  - { alternative_id: blade, criterion_id: control, value: 9 }\n",
        "",
    );
    let err = service().evaluate(load(&trimmed).unwrap()).unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingValue);
    assert_eq!(err.details.get("alternative_id").map(String::as_str), Some("blade"));
}

#[test]
fn unreadable_request_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let err = FileRequestLoader::new(dir.path().join("nope.yaml"))
        .load()
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InputUnreadable);
}
