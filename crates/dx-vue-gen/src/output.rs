//! Run summary output.

/// Summary of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Widgets mapped and emitted.
    pub widget_count: usize,
    /// Files written, including the index and common re-export modules.
    pub file_count: usize,
    /// Common re-export modules written.
    pub common_module_count: usize,
}

impl GenerationSummary {
    /// Formats the summary line printed at the end of a run.
    pub fn format(&self) -> String {
        let mut line = format!(
            "Generated {} component{} ({} file{} written)",
            self.widget_count,
            plural(self.widget_count),
            self.file_count,
            plural(self.file_count),
        );
        if self.common_module_count > 0 {
            line.push_str(&format!(
                ", {} common re-export module{}",
                self.common_module_count,
                plural(self.common_module_count)
            ));
        }
        line
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
