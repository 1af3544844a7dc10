//! Console summary of a scrape run.
//!
//! Rendering is pure: the same results and window always produce the same
//! text, and nothing is filtered or reordered.

use crate::date_window::TargetDateWindow;
use crate::hikes::{HikeRecord, ScrapedResult};

const RULE_WIDTH: usize = 70;

/// Aggregate counts shown at the foot of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTotals {
    pub hikes: usize,
    pub sites: usize,
}

impl ReportTotals {
    #[must_use]
    pub fn from_results(results: &[ScrapedResult]) -> Self {
        Self {
            hikes: results.iter().map(|r| r.hikes.len()).sum(),
            sites: results.len(),
        }
    }
}

/// Render the full report as a single string ending in a newline.
#[must_use]
pub fn render_report(results: &[ScrapedResult], window: &TargetDateWindow) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(heavy.clone());
    lines.push("HIKE SCRAPE RESULTS".to_string());
    lines.push(format!("Target dates: {window}"));
    lines.push(heavy.clone());

    for result in results {
        lines.push(String::new());
        lines.push(light.clone());
        lines.push(format!("Company: {}", result.company));
        lines.push(format!("URL: {}", result.url));
        lines.push(light.clone());

        if result.hikes.is_empty() {
            lines.push(format!(
                "   No hikes found for {window} (other dates not included)"
            ));
            continue;
        }

        for hike in &result.hikes {
            lines.push(String::new());
            push_hike(&mut lines, hike);
        }
    }

    let totals = ReportTotals::from_results(results);
    lines.push(String::new());
    lines.push(heavy.clone());
    lines.push(format!(
        "TOTAL: Found {} hike(s) across {} websites",
        totals.hikes, totals.sites
    ));
    lines.push(heavy);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_hike(lines: &mut Vec<String>, hike: &HikeRecord) {
    lines.push(format!("   * {}", hike.name));

    let fields = [
        ("Location", &hike.location),
        ("Date", &hike.date),
        ("Time", &hike.time),
        ("Meeting Point", &hike.meeting_point),
        ("Cost", &hike.cost),
        ("Contact", &hike.contact),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            lines.push(format!("      {label}: {value}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(company: &str, hikes: Vec<HikeRecord>) -> ScrapedResult {
        ScrapedResult {
            company: company.to_string(),
            url: format!("https://{}.example.com", company.to_lowercase()),
            hikes,
        }
    }

    #[test]
    fn empty_site_renders_no_hikes_marker() {
        let window = TargetDateWindow::new("this weekend");
        let text = render_report(&[result("Trailco", vec![])], &window);
        assert!(text.contains("Company: Trailco"));
        assert!(text.contains("No hikes found for this weekend"));
        assert!(text.contains("TOTAL: Found 0 hike(s) across 1 websites"));
    }

    #[test]
    fn optional_fields_only_rendered_when_present() {
        let mut hike = HikeRecord::new("Ngong Hills Hike");
        hike.location = Some("Ngong".to_string());
        hike.cost = Some("KES 1500".to_string());
        let text = render_report(
            &[result("Avi", vec![hike])],
            &TargetDateWindow::new("Saturday"),
        );

        assert!(text.contains("   * Ngong Hills Hike"));
        assert!(text.contains("      Location: Ngong"));
        assert!(text.contains("      Cost: KES 1500"));
        assert!(!text.contains("Date:"));
        assert!(!text.contains("Time:"));
        assert!(!text.contains("Meeting Point:"));
        assert!(!text.contains("Contact:"));
        assert!(!text.contains("No hikes found"));
    }

    #[test]
    fn totals_sum_across_sites() {
        let results = vec![
            result("A", vec![HikeRecord::new("one"), HikeRecord::new("two")]),
            result("B", vec![]),
            result("C", vec![HikeRecord::new("three")]),
        ];
        assert_eq!(
            ReportTotals::from_results(&results),
            ReportTotals { hikes: 3, sites: 3 }
        );
        let text = render_report(&results, &TargetDateWindow::default());
        assert!(text.contains("TOTAL: Found 3 hike(s) across 3 websites"));
    }

    #[test]
    fn sites_render_in_input_order() {
        let results = vec![result("Zeta", vec![]), result("Alpha", vec![])];
        let text = render_report(&results, &TargetDateWindow::default());
        let zeta = text.find("Company: Zeta").unwrap();
        let alpha = text.find("Company: Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn duplicate_hikes_are_rendered_as_given() {
        let results = vec![result(
            "Dup",
            vec![HikeRecord::new("Kinangop"), HikeRecord::new("Kinangop")],
        )];
        let text = render_report(&results, &TargetDateWindow::default());
        assert_eq!(text.matches("* Kinangop").count(), 2);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mut hike = HikeRecord::new("Elephant Hill");
        hike.time = Some("6:00 AM".to_string());
        let results = vec![result("A", vec![hike]), result("B", vec![])];
        let window = TargetDateWindow::new("18th-19th October");
        assert_eq!(
            render_report(&results, &window),
            render_report(&results, &window)
        );
    }
}
