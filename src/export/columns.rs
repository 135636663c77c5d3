//! Column header of the Google Ads Editor import/export sheet.

pub const COLUMNS: [&str; 163] = [
    "Campaign",
    "Labels",
    "Campaign Type",
    "Networks",
    "Budget",
    "Budget type",
    "Standard conversion goals",
    "Customer acquisition",
    "Languages",
    "Bid Strategy Type",
    "Bid Strategy Name",
    "Enhanced CPC",
    "Target CPA",
    "Ad location",
    "Target impression share",
    "Maximum CPC bid limit",
    "Start Date",
    "End Date",
    "Broad match keywords",
    "Ad Schedule",
    "Ad rotation",
    "Content exclusions",
    "Targeting method",
    "Exclusion method",
    "Audience targeting",
    "Flexible Reach",
    "Text asset automation",
    "Final URL expansion",
    "Image enhancement",
    "Image generation",
    "Image extraction",
    "Video enhancement",
    "Brand guidelines",
    "Brand business name",
    "Ad Group",
    "Max CPC",
    "Max CPM",
    "Max CPV",
    "Target CPV",
    "Percent CPC",
    "Target CPM",
    "Target ROAS",
    "Desktop Bid Modifier",
    "Mobile Bid Modifier",
    "Tablet Bid Modifier",
    "TV Screen Bid Modifier",
    "Display Network Custom Bid Type",
    "Optimized targeting",
    "Strict age and gender targeting",
    "Ad Group Type",
    "Audience name",
    "Age demographic",
    "Gender demographic",
    "Income demographic",
    "Parental status demographic",
    "Remarketing audience segments",
    "Interest categories",
    "Life events",
    "Custom audience segments",
    "Detailed demographics",
    "Remarketing audience exclusions",
    "Tracking template",
    "Final URL suffix",
    "Custom parameters",
    "Asset Group",
    "Headline 1",
    "Headline 2",
    "Headline 3",
    "Headline 4",
    "Headline 5",
    "Headline 6",
    "Headline 7",
    "Headline 8",
    "Headline 9",
    "Headline 10",
    "Headline 11",
    "Headline 12",
    "Headline 13",
    "Headline 14",
    "Headline 15",
    "Long headline 1",
    "Long headline 2",
    "Long headline 3",
    "Long headline 4",
    "Long headline 5",
    "Description 1",
    "Description 2",
    "Description 3",
    "Description 4",
    "Description 5",
    "Call to action",
    "Business name",
    "Video ID 1",
    "Video ID 2",
    "Video ID 3",
    "Video ID 4",
    "Video ID 5",
    "Path 1",
    "Path 2",
    "Final URL",
    "Final mobile URL",
    "Audience signal",
    "ID",
    "Audience segment",
    "Bid Modifier",
    "Age",
    "Criterion Type",
    "Household income",
    "Location",
    "Reach",
    "Location groups",
    "Radius",
    "Unit",
    "Account keyword type",
    "Keyword",
    "First page bid",
    "Top of page bid",
    "First position bid",
    "Quality score",
    "Landing page experience",
    "Expected CTR",
    "Ad relevance",
    "Image Size",
    "Upgraded extension",
    "Link source",
    "Search theme",
    "Ad type",
    "Headline 1 position",
    "Headline 2 position",
    "Headline 3 position",
    "Headline 4 position",
    "Headline 5 position",
    "Headline 6 position",
    "Headline 7 position",
    "Headline 8 position",
    "Headline 9 position",
    "Headline 10 position",
    "Headline 11 position",
    "Headline 12 position",
    "Headline 13 position",
    "Headline 14 position",
    "Headline 15 position",
    "Description 1 position",
    "Description 2 position",
    "Description 3 position",
    "Description 4 position",
    "Shared set name",
    "Shared set type",
    "Keyword count",
    "Link Text",
    "Description Line 1",
    "Description Line 2",
    "Source",
    "Phone Number",
    "Country of Phone",
    "Conversion Action",
    "Campaign Status",
    "Ad Group Status",
    "Asset Group Status",
    "Status",
    "Approval Status",
    "Ad strength",
    "Comment",
];

/// Index of `name` in [`COLUMNS`].
pub fn column_index(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|c| *c == name)
}
