//! Mapping of campaigns, locations, ad groups, keywords and ads to sheet rows.

use super::columns::{column_index, COLUMNS};
use crate::models::{or_default, Ad, AdGroup, AdText, AdsDocument, Campaign, Keyword, Text};

const MAX_HEADLINES: usize = 15;
const MAX_DESCRIPTIONS: usize = 4;
const UNPINNED: &str = " -";

/// One line of the sheet, one cell per entry of [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            cells: vec![String::new(); COLUMNS.len()],
        }
    }
}

impl Row {
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        match column_index(column) {
            Some(i) => self.cells[i] = value.into(),
            None => debug_assert!(false, "unknown column {column:?}"),
        }
    }

    /// Cell value for `column`; empty for unknown columns.
    pub fn get(&self, column: &str) -> &str {
        column_index(column).map_or("", |i| self.cells[i].as_str())
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Every row of the document in sheet order: each campaign, its locations, then
/// per ad group the group row, keywords, negative keywords and ads.
pub fn build_rows(document: &AdsDocument) -> Vec<Row> {
    let mut rows = Vec::new();

    for campaign in &document.campaigns {
        rows.push(campaign_row(campaign));

        for location in &campaign.locations {
            rows.push(location_row(campaign, location));
        }

        for ad_group in &campaign.ad_groups {
            rows.push(ad_group_row(campaign, ad_group));
            for keyword in &ad_group.keywords {
                rows.push(keyword_row(campaign, ad_group, keyword));
            }
            for keyword in &ad_group.negative_keywords {
                rows.push(keyword_row(campaign, ad_group, keyword));
            }
            for ad in &ad_group.ads {
                rows.push(ad_row(campaign, ad_group, ad));
            }
        }
    }

    rows
}

fn campaign_status(campaign: &Campaign) -> String {
    or_default(&campaign.status, "Enabled")
}

fn ad_group_status(ad_group: &AdGroup) -> String {
    or_default(&ad_group.status, "Enabled")
}

pub fn campaign_row(campaign: &Campaign) -> Row {
    let mut row = Row::default();
    row.set("Campaign", campaign.name.as_str());
    row.set("Campaign Type", or_default(&campaign.campaign_type, "Search"));
    row.set("Networks", or_default(&campaign.networks, "Google search"));
    row.set("Budget", or_default(&campaign.budget, ""));
    row.set("Budget type", or_default(&campaign.budget_type, "Daily"));
    row.set("Languages", or_default(&campaign.languages, "en"));

    let bid_strategy = or_default(&campaign.bid_strategy, "");
    match bid_strategy.as_str() {
        "Target impression share" => {
            row.set("Target impression share", or_default(&campaign.target_impression_share, ""));
            row.set("Maximum CPC bid limit", or_default(&campaign.max_cpc_limit, ""));
            row.set("Ad location", "Top of results page");
        }
        "Manual CPC" => row.set("Enhanced CPC", "Disabled"),
        _ => {}
    }
    row.set("Bid Strategy Type", bid_strategy);

    row.set("Start Date", or_default(&campaign.start_date, ""));
    row.set("Ad rotation", "Rotate indefinitely");
    row.set("Targeting method", "Location of presence");
    row.set("Exclusion method", "Location of presence");
    row.set("Audience targeting", "Audience segments");
    row.set("Flexible Reach", "Audience segments");
    for column in [
        "Text asset automation",
        "Final URL expansion",
        "Image enhancement",
        "Image generation",
        "Image extraction",
        "Video enhancement",
        "Brand guidelines",
    ] {
        row.set(column, "Disabled");
    }
    row.set("Campaign Status", campaign_status(campaign));
    row.set("Comment", or_default(&campaign.comment, ""));
    row
}

pub fn location_row(campaign: &Campaign, location: &Text) -> Row {
    let mut row = Row::default();
    row.set("Campaign", campaign.name.as_str());
    row.set("Location", location.as_str());
    row.set("Campaign Status", campaign_status(campaign));
    row.set("Status", "Enabled");
    row
}

pub fn ad_group_row(campaign: &Campaign, ad_group: &AdGroup) -> Row {
    let mut row = Row::default();
    row.set("Campaign", campaign.name.as_str());
    row.set("Languages", "All");
    row.set("Ad Group", ad_group.name.as_str());
    row.set("Max CPC", or_default(&ad_group.max_cpc, "0.01"));
    row.set("Max CPM", "0.01");
    row.set("Target CPV", "0.01");
    row.set("Target CPM", "0.01");
    row.set("Optimized targeting", "Disabled");
    row.set("Strict age and gender targeting", "Disabled");
    row.set("Ad Group Type", "Standard");
    row.set("Audience targeting", "Audience segments");
    row.set(
        "Flexible Reach",
        "Audience segments;Genders;Ages;Parental status;Household incomes",
    );
    row.set("Display Network Custom Bid Type", "None");
    row.set("Ad rotation", "Optimize");
    row.set("Campaign Status", campaign_status(campaign));
    row.set("Ad Group Status", ad_group_status(ad_group));
    row
}

/// Keyword row. Negative keywords carry their `Negative ...` match type as the criterion.
pub fn keyword_row(campaign: &Campaign, ad_group: &AdGroup, keyword: &Keyword) -> Row {
    let mut row = Row::default();
    row.set("Campaign", campaign.name.as_str());
    row.set("Ad Group", ad_group.name.as_str());
    row.set("Criterion Type", or_default(&keyword.match_type, "Phrase"));
    row.set("Keyword", or_default(&keyword.keyword, ""));
    row.set("First page bid", "0.00");
    row.set("Top of page bid", "0.00");
    row.set("First position bid", "0.00");
    row.set("Campaign Status", campaign_status(campaign));
    row.set("Ad Group Status", ad_group_status(ad_group));
    row.set("Status", or_default(&keyword.status, "Enabled"));
    row
}

/// Responsive search ad row: up to 15 headlines and 4 descriptions.
pub fn ad_row(campaign: &Campaign, ad_group: &AdGroup, ad: &Ad) -> Row {
    let mut row = Row::default();
    row.set("Campaign", campaign.name.as_str());
    row.set("Ad Group", ad_group.name.as_str());

    set_assets(&mut row, "Headline", &ad.headlines, MAX_HEADLINES);
    set_assets(&mut row, "Description", &ad.descriptions, MAX_DESCRIPTIONS);

    row.set("Final URL", or_default(&ad.final_url, ""));
    row.set("Path 1", or_default(&ad.path1, ""));
    row.set("Path 2", or_default(&ad.path2, ""));
    row.set("Ad type", "Responsive search ad");
    row.set("Campaign Status", campaign_status(campaign));
    row.set("Ad Group Status", ad_group_status(ad_group));
    row.set("Status", or_default(&ad.status, "Enabled"));
    row
}

fn set_assets(row: &mut Row, label: &str, assets: &[AdText], max: usize) {
    for (i, asset) in assets.iter().take(max).enumerate() {
        let n = i + 1;
        row.set(&format!("{label} {n}"), asset.text());
        row.set(
            &format!("{label} {n} position"),
            asset.position().unwrap_or(UNPINNED),
        );
    }
}
