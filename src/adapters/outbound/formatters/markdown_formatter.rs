use crate::application::read_models::{
    CloseApproachView, DateGroupView, FeedReadModel, FilterView, NeoDetailReadModel, OrbitalView,
};
use crate::ports::outbound::NeoFormatter;
use crate::shared::Result;

/// Markdown table header for one date group
const TABLE_HEADER: &str =
    "| ID | Name | Hazardous | Avg. Diameter (km) | Miss Distance (km) | Velocity (km/s) |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|----|------|-----------|--------------------|--------------------|-----------------|\n";

/// MarkdownFormatter adapter for human-readable reports
///
/// Feed reports get one table per close-approach date; detail reports
/// are rendered as a sectioned page.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag {
            "⚠️ Yes"
        } else {
            "No"
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Feed sections
impl MarkdownFormatter {
    fn render_filters(&self, output: &mut String, filters: &FilterView) {
        output.push_str("## Filters\n\n");
        output.push_str(&format!(
            "- Hazardous only: {}\n",
            if filters.hazardous_only { "yes" } else { "no" }
        ));
        output.push_str(&format!(
            "- Sort: {} ({})\n",
            filters.sort_by, filters.sort_order
        ));
        match (&filters.start_date, &filters.end_date) {
            (Some(start), Some(end)) => {
                output.push_str(&format!("- Dates: {} to {}\n", start, end))
            }
            (Some(start), None) => output.push_str(&format!("- Date: {}\n", start)),
            (None, Some(end)) => output.push_str(&format!("- Dates: up to {}\n", end)),
            (None, None) => {}
        }
        output.push('\n');
    }

    fn render_group(&self, output: &mut String, group: &DateGroupView) {
        output.push_str(&format!(
            "## {} ({} object{})\n\n",
            group.date,
            group.neos.len(),
            if group.neos.len() == 1 { "" } else { "s" }
        ));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for neo in &group.neos {
            let velocity = neo
                .velocity_km_per_s
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "N/A".to_string());
            output.push_str(&format!(
                "| [{}]({}) | {} | {} | {:.3} | {:.0} | {} |\n",
                Self::escape_markdown_table_cell(&neo.id),
                neo.jpl_url,
                Self::escape_markdown_table_cell(&neo.name),
                Self::yes_no(neo.hazardous),
                neo.average_diameter_km,
                neo.miss_distance_km,
                velocity
            ));
        }
        output.push('\n');
    }

    fn render_feed_summary(&self, output: &mut String, model: &FeedReadModel) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "Showing {} of {} loaded object(s).\n",
            model.visible_count, model.total_loaded
        ));
        if model.has_more {
            output.push_str("More pages are available; use `--pages` to load them.\n");
        }
        if let Some(error) = &model.error {
            output.push_str(&format!(
                "\n> **Warning:** the last page failed to load: {}\n",
                error.replace('\n', " ")
            ));
        }
    }
}

/// Detail sections
impl MarkdownFormatter {
    fn render_close_approach(&self, output: &mut String, approach: &CloseApproachView) {
        output.push_str("## Close Approach\n\n");
        output.push_str(&format!("- Date: {}\n", approach.date));
        output.push_str(&format!("- Orbiting body: {}\n", approach.orbiting_body));
        output.push_str(&format!(
            "- Velocity: {} km/s ({} km/h)\n",
            approach.velocity_km_per_s, approach.velocity_km_per_h
        ));
        output.push_str(&format!(
            "- Miss distance: {} km, {} lunar, {} au, {} miles\n\n",
            approach.miss_distance_km,
            approach.miss_distance_lunar,
            approach.miss_distance_au,
            approach.miss_distance_miles
        ));
    }

    fn render_orbital(&self, output: &mut String, orbital: &OrbitalView) {
        output.push_str("## Orbit\n\n");
        output.push_str(&format!("- Orbit ID: {}\n", orbital.orbit_id));
        match &orbital.orbit_class_description {
            Some(description) => output.push_str(&format!(
                "- Class: {} ({})\n",
                orbital.orbit_class, description
            )),
            None => output.push_str(&format!("- Class: {}\n", orbital.orbit_class)),
        }
        let observations = [
            ("First observed", &orbital.first_observation_date),
            ("Last observed", &orbital.last_observation_date),
            ("Determined", &orbital.orbit_determination_date),
        ];
        for (label, value) in observations {
            if let Some(value) = value {
                output.push_str(&format!("- {}: {}\n", label, value));
            }
        }
        output.push('\n');
    }
}

impl NeoFormatter for MarkdownFormatter {
    fn format_feed(&self, model: &FeedReadModel) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Near-Earth Object Close Approaches\n\n");
        output.push_str(&format!(
            "_Generated {} by {} {}_\n\n",
            model.metadata.timestamp, model.metadata.tool_name, model.metadata.tool_version
        ));

        self.render_filters(&mut output, &model.filters);

        if model.groups.is_empty() {
            output.push_str("No close approaches match the current filters.\n\n");
        }
        for group in &model.groups {
            self.render_group(&mut output, group);
        }

        self.render_feed_summary(&mut output, model);

        Ok(output)
    }

    fn format_detail(&self, model: &NeoDetailReadModel) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", model.name));
        output.push_str(&format!("- ID: {} (reference {})\n", model.id, model.neo_reference_id));
        output.push_str(&format!("- Potentially hazardous: {}\n", Self::yes_no(model.hazardous)));
        output.push_str(&format!("- Sentry object: {}\n", Self::yes_no(model.sentry)));
        output.push_str(&format!("- Absolute magnitude (H): {}\n", model.absolute_magnitude_h));
        output.push_str(&format!(
            "- Estimated diameter: {:.3} to {:.3} km (avg. {:.3} km)\n",
            model.diameter.min_km, model.diameter.max_km, model.diameter.average_km
        ));
        output.push_str(&format!("- JPL: <{}>\n\n", model.jpl_url));

        match &model.close_approach {
            Some(approach) => self.render_close_approach(&mut output, approach),
            None => output.push_str("No close approach data recorded.\n\n"),
        }

        match &model.orbital {
            Some(orbital) => self.render_orbital(&mut output, orbital),
            None => output.push_str("_Orbital data unavailable._\n\n"),
        }

        Ok(output)
    }
}
