//! Full runs over several sites with a scripted session, checked through the
//! rendered report.

mod common;

use serde_json::json;

use common::{calendar_site, list_site, Call, ScriptedSession};
use hikescout_core::{default_sites, render_report, HikeRecord, TargetDateWindow};
use hikescout_scraper::{run_sites, PageSettings};

#[tokio::test]
async fn three_empty_list_sites_report_zero_hikes() {
    let session = ScriptedSession::new()
        .extraction(json!({ "hikes": [] }))
        .extraction(json!({ "hikes": [] }))
        .extraction(json!({ "hikes": [] }));
    let sites = vec![
        list_site("Alpha Trails", "https://alpha.example.com/hikes"),
        list_site("Beta Treks", "https://beta.example.com/hikes"),
        list_site("Gamma Walks", "https://gamma.example.com/hikes"),
    ];
    let window = TargetDateWindow::default();

    let results = run_sites(&session, &sites, &window, &PageSettings::immediate()).await;
    let report = render_report(&results, &window);

    assert_eq!(results.len(), 3);
    assert_eq!(
        report
            .matches("No hikes found for this weekend (other dates not included)")
            .count(),
        3
    );
    assert!(report.contains("TOTAL: Found 0 hike(s) across 3 websites"));
}

#[tokio::test]
async fn calendar_detail_fields_reach_the_report() {
    let session = ScriptedSession::new()
        .extraction(json!({ "events": [{ "name": "Ngong Hills Hike", "date": "Saturday" }] }))
        .extraction(json!({ "name": "Ngong Hills Hike", "location": "Ngong", "cost": "KES 1500" }));
    let sites = vec![calendar_site(
        "Avi Expeditions",
        "https://aviexpeditions.com/events/month",
    )];
    let window = TargetDateWindow::new("Saturday 18th October");

    let results = run_sites(&session, &sites, &window, &PageSettings::immediate()).await;

    assert_eq!(
        results[0].hikes,
        vec![HikeRecord {
            name: "Ngong Hills Hike".to_string(),
            location: Some("Ngong".to_string()),
            cost: Some("KES 1500".to_string()),
            ..HikeRecord::default()
        }]
    );

    let report = render_report(&results, &window);
    assert!(report.contains("   * Ngong Hills Hike"));
    assert!(report.contains("      Location: Ngong"));
    assert!(report.contains("      Cost: KES 1500"));
    assert!(!report.contains("Time:"));
    assert!(!report.contains("Meeting Point:"));
    assert!(!report.contains("Contact:"));
    assert!(report.contains("TOTAL: Found 1 hike(s) across 1 websites"));
}

#[tokio::test]
async fn failed_detail_extraction_keeps_stub_and_run_continues() {
    let session = ScriptedSession::new()
        .extraction(json!({
            "events": [
                { "name": "Ngong Hills Hike", "date": "Saturday" },
                { "name": "Karura Forest Walk", "date": "Sunday" }
            ]
        }))
        .extraction_error("detail extraction failed")
        .extraction(json!({ "name": "Karura Forest Walk", "time": "8:00 AM" }))
        .extraction(json!({ "hikes": [{ "name": "Oloolua Trail" }] }));
    let sites = vec![
        calendar_site("Avi Expeditions", "https://aviexpeditions.com/events/month"),
        list_site("Mona Trails Kenya", "https://mona.example.com/upcoming"),
    ];
    let window = TargetDateWindow::default();

    let results = run_sites(&session, &sites, &window, &PageSettings::immediate()).await;

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].hikes[0],
        HikeRecord {
            name: "Ngong Hills Hike".to_string(),
            date: Some("Saturday".to_string()),
            ..HikeRecord::default()
        }
    );
    assert_eq!(results[0].hikes[1].time.as_deref(), Some("8:00 AM"));
    assert_eq!(results[1].hikes, vec![HikeRecord::new("Oloolua Trail")]);

    let report = render_report(&results, &window);
    assert!(report.contains("      Date: Saturday"));
    assert!(report.contains("TOTAL: Found 3 hike(s) across 2 websites"));
}

#[tokio::test]
async fn results_follow_configuration_order_even_when_a_site_fails() {
    let sites = default_sites();
    let session = ScriptedSession::new()
        .fail_navigation_to(&sites[1].url)
        .extraction(json!({ "hikes": [{ "name": "Elephant Hill" }] }))
        .extraction(json!({ "events": [] }));
    let window = TargetDateWindow::default();

    let results = run_sites(&session, &sites, &window, &PageSettings::immediate()).await;

    let companies: Vec<&str> = results.iter().map(|r| r.company.as_str()).collect();
    let expected: Vec<&str> = sites.iter().map(|s| s.company.as_str()).collect();
    assert_eq!(companies, expected);
    assert_eq!(results[0].hikes.len(), 1);
    assert!(results[1].hikes.is_empty());
    assert!(results[2].hikes.is_empty());

    let navigations: Vec<Call> = session
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Navigate(_)))
        .collect();
    let expected_navigations: Vec<Call> =
        sites.iter().map(|s| Call::Navigate(s.url.clone())).collect();
    assert_eq!(navigations, expected_navigations);
}

#[tokio::test]
async fn empty_site_list_reports_zero_websites() {
    let session = ScriptedSession::new();
    let window = TargetDateWindow::default();

    let results = run_sites(&session, &[], &window, &PageSettings::immediate()).await;

    assert!(results.is_empty());
    assert!(render_report(&results, &window).contains("TOTAL: Found 0 hike(s) across 0 websites"));
    assert!(session.calls().is_empty());
}
