//! Tests for structured output types

use ecotrack::adapters::memory::{default_leaderboard, default_tasks};
use ecotrack::core::models::{Metrics, Theme};
use ecotrack::core::services::LedgerSummary;
use ecotrack::output::{
    LeaderboardResult, OperationResult, OutputMode, StatusResult, SubmissionReport, SubmitResult,
    TaskListResult,
};

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_task_list_json_shape() {
    let result = TaskListResult {
        tasks: default_tasks(),
        summary: LedgerSummary {
            total: 5,
            completed: 0,
        },
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["summary"]["total"], 5);
    assert_eq!(json["tasks"][0]["name"], "Zero Waste Day");
    assert_eq!(json["tasks"][0]["icon"], "trash");
    assert_eq!(json["tasks"][0]["state"], "pending");
    assert_eq!(json["tasks"][0]["metrics"]["water_saved"], 50);
}

#[test]
fn test_submit_result_counts_failures() {
    let result = SubmitResult {
        user: "sarah@".to_string(),
        submissions: vec![SubmissionReport {
            task_id: "9".to_string(),
            file: "x.jpg".to_string(),
            outcome: None,
            error: Some("task not found: 9".to_string()),
        }],
        metrics: Metrics::default(),
        theme: Theme::Spring,
    };

    assert_eq!(result.failures(), 1);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["theme"], "spring");
    assert!(json["submissions"][0].get("outcome").is_none());
    assert_eq!(json["submissions"][0]["error"], "task not found: 9");
}

#[test]
fn test_status_json_shape() {
    let metrics = Metrics::default();
    let result = StatusResult {
        user: None,
        metrics,
        top_user: metrics.is_top_user(),
        theme: metrics.theme(),
        tasks: LedgerSummary {
            total: 5,
            completed: 2,
        },
        vision_enabled: false,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["metrics"]["rank"], 1);
    assert_eq!(json["top_user"], true);
    assert_eq!(json["tasks"]["completed"], 2);
}

#[test]
fn test_leaderboard_json_marks_current_user() {
    let result = LeaderboardResult {
        entries: default_leaderboard().entries().to_vec(),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["entries"][0]["is_current_user"], true);
    assert_eq!(json["entries"][6]["name"], "saleem");
}

#[test]
fn test_operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Joined Eco Streak Master!".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Joined Eco Streak Master!"));
}
