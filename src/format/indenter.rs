/// `SectionIndenter` - Rule-table line reindentation
///
/// Each line of the section is classified by its content with leading
/// whitespace removed. The first matching rule decides the new indentation;
/// lines that match nothing are kept exactly as they were.
use tracing::debug;

/// Token whose presence marks the tab definition line
const TAB_LABEL_TOKEN: &str = "<Tab label=";
/// Opening tag of the tab's vertical spacing container
const SPACING_CONTAINER_OPEN: &str = r#"<div className="space-y-6">"#;
/// Class name looked up in the second produced line for the `</div>` rule
const SPACING_CONTAINER_CLASS: &str = "space-y-6";
const COMMENT_OPEN: &str = "{/*";
const SECTION_OPEN: &str = "<Section";
const GRID_OPEN: &str = r#"<div className="grid"#;
const METRIC_CARD_OPEN: &str = "<MetricCard";
const TAB_CLOSE: &str = "</Tab>";
const DIV_CLOSE: &str = "</div>";

/// Classification of a single section line, in rule order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Contains `<Tab label=`
    TabLabel,
    /// Starts with the `space-y-6` container `<div>`
    SpacingContainer,
    /// Starts with a JSX block comment `{/*`
    Comment,
    /// Starts with `<Section` or a grid `<div>`
    Block,
    /// Starts with `<MetricCard`
    MetricCard,
    /// Exactly `</Tab>`
    TabClose,
    /// Exactly `</div>`, while the second produced line mentions `space-y-6`
    SpacingClose,
    /// No rule matched; original line kept verbatim
    Verbatim,
}

impl LineKind {
    /// Absolute indentation (in spaces) imposed by this rule, `None` for verbatim lines
    #[must_use]
    pub fn indent(self) -> Option<usize> {
        match self {
            LineKind::TabLabel | LineKind::TabClose => Some(10),
            LineKind::SpacingContainer | LineKind::SpacingClose => Some(12),
            LineKind::Comment | LineKind::Block => Some(14),
            LineKind::MetricCard => Some(16),
            LineKind::Verbatim => None,
        }
    }
}

/// `SectionIndenter` accumulates reindented lines for one section
///
/// The accumulated output is part of the classification state: the
/// `</div>` rule looks at the second line already produced.
#[derive(Debug, Default)]
pub struct SectionIndenter {
    /// Output lines produced so far
    fixed_lines: Vec<String>,
}

impl SectionIndenter {
    /// Create an empty `SectionIndenter`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a line that has already had its leading whitespace removed
    #[must_use]
    pub fn classify(&self, stripped: &str) -> LineKind {
        if stripped.contains(TAB_LABEL_TOKEN) {
            LineKind::TabLabel
        } else if stripped.starts_with(SPACING_CONTAINER_OPEN) {
            LineKind::SpacingContainer
        } else if stripped.starts_with(COMMENT_OPEN) {
            LineKind::Comment
        } else if stripped.starts_with(SECTION_OPEN) || stripped.starts_with(GRID_OPEN) {
            LineKind::Block
        } else if stripped.starts_with(METRIC_CARD_OPEN) {
            LineKind::MetricCard
        } else if stripped == TAB_CLOSE {
            LineKind::TabClose
        } else if stripped == DIV_CLOSE && self.second_line_has_spacing_container() {
            LineKind::SpacingClose
        } else {
            LineKind::Verbatim
        }
    }

    /// Whether the second produced line contains the `space-y-6` class
    ///
    /// With fewer than two produced lines the rule does not apply.
    fn second_line_has_spacing_container(&self) -> bool {
        self.fixed_lines
            .get(1)
            .is_some_and(|line| line.contains(SPACING_CONTAINER_CLASS))
    }

    /// Reindent one input line and append it to the output
    pub fn push_line(&mut self, line: &str) -> LineKind {
        let stripped = line.trim_start();
        let kind = self.classify(stripped);
        let fixed = match kind.indent() {
            Some(width) => format!("{:width$}{stripped}", ""),
            None => line.to_string(),
        };
        debug!(
            line = self.fixed_lines.len(),
            kind = ?kind,
            "classified section line"
        );
        self.fixed_lines.push(fixed);
        kind
    }

    /// Join the produced lines with `\n`
    #[must_use]
    pub fn finish(self) -> String {
        self.fixed_lines.join("\n")
    }
}

/// Reindent every `\n`-separated line of a section
#[must_use]
pub fn reindent_section(section: &str) -> String {
    let mut indenter = SectionIndenter::new();
    for line in section.split('\n') {
        indenter.push_line(line);
    }
    indenter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indent_of(line: &str) -> usize {
        line.len() - line.trim_start().len()
    }

    #[test]
    fn test_tab_label_line() {
        let mut indenter = SectionIndenter::new();
        let kind = indenter.push_line(r#"  <Tab label="📈 Classic Cohorts">"#);
        assert_eq!(kind, LineKind::TabLabel);
        assert_eq!(
            indenter.fixed_lines[0],
            r#"          <Tab label="📈 Classic Cohorts">"#
        );
    }

    #[test]
    fn test_rule_indents() {
        let cases = [
            (r#"<div className="space-y-6">"#, LineKind::SpacingContainer, 12),
            ("{/* Summary Cards */}", LineKind::Comment, 14),
            (r#"<Section title="Cohorts">"#, LineKind::Block, 14),
            (r#"<div className="grid grid-cols-2 gap-4">"#, LineKind::Block, 14),
            ("<MetricCard ", LineKind::MetricCard, 16),
            ("</Tab>", LineKind::TabClose, 10),
        ];

        for (content, expected_kind, expected_indent) in cases {
            let mut indenter = SectionIndenter::new();
            let kind = indenter.push_line(&format!("\t   {content}"));
            assert_eq!(kind, expected_kind, "kind for {content:?}");
            assert_eq!(indent_of(&indenter.fixed_lines[0]), expected_indent);
            assert_eq!(indenter.fixed_lines[0].trim_start(), content);
        }
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let indenter = SectionIndenter::new();
        // A comment that mentions a tab label is still a tab label line
        assert_eq!(
            indenter.classify(r#"{/* <Tab label="old"> */}"#),
            LineKind::TabLabel
        );
        // The spacing container is checked before generic blocks
        assert_eq!(
            indenter.classify(r#"<div className="space-y-6"> extra"#),
            LineKind::SpacingContainer
        );
        // `<MetricCards` still starts with `<MetricCard`
        assert_eq!(indenter.classify("<MetricCards />"), LineKind::MetricCard);
        // `<SectionHeader` starts with `<Section`
        assert_eq!(indenter.classify("<SectionHeader />"), LineKind::Block);
    }

    #[test]
    fn test_closing_tags_require_exact_match() {
        let indenter = SectionIndenter::new();
        assert_eq!(indenter.classify("</Tab> "), LineKind::Verbatim);
        assert_eq!(indenter.classify("</Tab>)}"), LineKind::Verbatim);
        assert_eq!(indenter.classify("</div>"), LineKind::Verbatim);
    }

    #[test]
    fn test_unmatched_line_is_verbatim() {
        let mut indenter = SectionIndenter::new();
        let line = "\t      <td className=\"p-2\">{row[key]}</td>  ";
        assert_eq!(indenter.push_line(line), LineKind::Verbatim);
        assert_eq!(indenter.fixed_lines[0], line);
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_verbatim() {
        let mut indenter = SectionIndenter::new();
        assert_eq!(indenter.push_line(""), LineKind::Verbatim);
        assert_eq!(indenter.push_line("    "), LineKind::Verbatim);
        assert_eq!(indenter.fixed_lines, ["", "    "]);
    }

    #[test]
    fn test_div_close_follows_second_produced_line() {
        // Second produced line is the spacing container: `</div>` moves to 12
        let section = "{/* Tab 6: Classic Cohort View */}\n<div className=\"space-y-6\">\n</div>";
        let fixed = reindent_section(section);
        let lines: Vec<&str> = fixed.lines().collect();
        assert_eq!(lines[2], "            </div>");
    }

    #[test]
    fn test_div_close_ignored_in_usual_layout() {
        // The section normally starts with an empty line, so the second
        // produced line is the marker comment and `</div>` stays untouched.
        let section = "\n    {/* Tab 6: Classic Cohort View */}\n<Tab label=\"x\">\n<div className=\"space-y-6\">\n   </div>\n</Tab>";
        let fixed = reindent_section(section);
        let lines: Vec<&str> = fixed.split('\n').collect();
        assert_eq!(lines[4], "   </div>");
        assert_eq!(lines[5], "          </Tab>");
    }

    #[test]
    fn test_div_close_with_too_few_lines() {
        let mut indenter = SectionIndenter::new();
        assert_eq!(indenter.push_line("</div>"), LineKind::Verbatim);
        assert_eq!(indenter.push_line("  </div>"), LineKind::Verbatim);
        assert_eq!(indenter.fixed_lines, ["</div>", "  </div>"]);
    }

    #[test]
    fn test_line_count_preserved() {
        let section = "\n\n  {/* x */}\n\n  </Tab>\n";
        let fixed = reindent_section(section);
        assert_eq!(
            fixed.split('\n').count(),
            section.split('\n').count()
        );
    }

    #[test]
    fn test_rule_indent_table() {
        assert_eq!(LineKind::TabLabel.indent(), Some(10));
        assert_eq!(LineKind::TabClose.indent(), Some(10));
        assert_eq!(LineKind::SpacingContainer.indent(), Some(12));
        assert_eq!(LineKind::SpacingClose.indent(), Some(12));
        assert_eq!(LineKind::Comment.indent(), Some(14));
        assert_eq!(LineKind::Block.indent(), Some(14));
        assert_eq!(LineKind::MetricCard.indent(), Some(16));
        assert_eq!(LineKind::Verbatim.indent(), None);
    }
}
