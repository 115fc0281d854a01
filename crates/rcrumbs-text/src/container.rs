#![forbid(unsafe_code)]

//! A crumb list rendered as a single line of terminal text.
//!
//! [`TextContainer`] implements [`CrumbHost`]: crumbs are measured in cells,
//! and every crumb except the last carries the separator in its measured
//! width. The fitter pushes a [`Projection`] per crumb; [`TextContainer::render_line`]
//! turns the stored projections into the visible line.
//!
//! ```
//! use rcrumbs_core::{Trail, TrailConfig};
//! use rcrumbs_text::TextContainer;
//!
//! let host = TextContainer::from_labels(20, ["Home", "Library", "Data", "Report"]);
//! let trail = Trail::attach(host, TrailConfig::default());
//! assert_eq!(trail.host().render_line(), "Home › Data › Report");
//! ```

use rcrumbs_core::{CrumbHost, Projection};

use crate::width::{ELLIPSIS, display_width, truncate_to_width, truncate_with_ellipsis};

/// Default separator drawn after every crumb but the last.
pub const DEFAULT_SEPARATOR: &str = " › ";

/// One node of the crumb list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListNode {
    /// A crumb label.
    Crumb(String),
    /// Loose text between crumbs; never fitted.
    Text(String),
}

impl ListNode {
    fn is_blank_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

/// Terminal text container for a trail.
#[derive(Debug, Clone)]
pub struct TextContainer {
    width: u16,
    separator: String,
    nodes: Vec<ListNode>,
    /// Node position of each crumb, in trail order.
    crumb_nodes: Vec<usize>,
    projections: Vec<Projection>,
}

impl TextContainer {
    /// An empty container `width` cells wide.
    #[must_use]
    pub fn new(width: u16) -> Self {
        Self {
            width,
            separator: DEFAULT_SEPARATOR.to_string(),
            nodes: Vec::new(),
            crumb_nodes: Vec::new(),
            projections: Vec::new(),
        }
    }

    /// A container holding one crumb per label.
    #[must_use]
    pub fn from_labels<I, S>(width: u16, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels
            .into_iter()
            .fold(Self::new(width), |container, label| container.push_crumb(label))
    }

    /// Set the separator (builder).
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Append a crumb (builder).
    #[must_use]
    pub fn push_crumb(mut self, label: impl Into<String>) -> Self {
        self.crumb_nodes.push(self.nodes.len());
        self.nodes.push(ListNode::Crumb(label.into()));
        self.projections.push(Projection::Natural);
        self
    }

    /// Append loose text (builder).
    #[must_use]
    pub fn push_text(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(ListNode::Text(text.into()));
        self
    }

    /// Container width in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Change the container width. Call [`rcrumbs_core::Trail::on_resize`] afterwards.
    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// The list nodes, in order.
    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }

    /// Last projection applied to each crumb.
    pub fn projections(&self) -> &[Projection] {
        &self.projections
    }

    /// Crumb `index` as drawn at natural width, separator included.
    fn crumb_text(&self, index: usize) -> String {
        let label = match self.nodes.get(self.crumb_nodes[index]) {
            Some(ListNode::Crumb(label)) => label.as_str(),
            _ => "",
        };
        if index + 1 < self.crumb_nodes.len() {
            format!("{label}{}", self.separator)
        } else {
            label.to_string()
        }
    }

    /// Render the visible line.
    ///
    /// The line is not clipped to the container: a forced first crumb (ellipsis
    /// disabled) can overflow it.
    #[must_use]
    pub fn render_line(&self) -> String {
        let mut line = String::new();
        let mut crumb = 0;
        for node in &self.nodes {
            match node {
                ListNode::Text(text) => line.push_str(text),
                ListNode::Crumb(_) => {
                    let text = self.crumb_text(crumb);
                    match self.projections[crumb] {
                        Projection::Natural => line.push_str(&text),
                        Projection::Hidden => {}
                        Projection::Clipped { width } => {
                            line.push_str(&truncate_to_width(&text, usize::from(width)));
                        }
                        Projection::Ellipsized { width } => {
                            line.push_str(&truncate_with_ellipsis(
                                &text,
                                usize::from(width),
                                ELLIPSIS,
                            ));
                        }
                    }
                    crumb += 1;
                }
            }
        }
        line
    }
}

impl CrumbHost for TextContainer {
    fn container_width(&self) -> u16 {
        self.width
    }

    fn crumb_count(&self) -> usize {
        self.crumb_nodes.len()
    }

    fn strip_whitespace(&mut self) {
        self.nodes.retain(|node| !node.is_blank_text());
        self.crumb_nodes = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, ListNode::Crumb(_)))
            .map(|(position, _)| position)
            .collect();
    }

    fn measure_detached(&mut self, index: usize) -> u16 {
        // Text measures from content alone; nothing on screen is touched.
        u16::try_from(display_width(&self.crumb_text(index))).unwrap_or(u16::MAX)
    }

    fn apply(&mut self, index: usize, projection: Projection) {
        if let Some(slot) = self.projections.get_mut(index) {
            *slot = projection;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_counts_except_last() {
        let mut host = TextContainer::from_labels(80, ["Home", "Docs"]);
        assert_eq!(host.measure_detached(0), 7);
        assert_eq!(host.measure_detached(1), 4);
    }

    #[test]
    fn custom_separator() {
        let mut host = TextContainer::from_labels(80, ["a", "b"]).with_separator("/");
        assert_eq!(host.measure_detached(0), 2);
        assert_eq!(host.render_line(), "a/b");
    }

    #[test]
    fn strip_removes_blank_text_only() {
        let mut host = TextContainer::new(80)
            .push_crumb("Home")
            .push_text("  \n\t")
            .push_crumb("Docs")
            .push_text(" | ")
            .push_crumb("Api");
        host.strip_whitespace();
        assert_eq!(host.nodes().len(), 4);
        assert_eq!(host.crumb_count(), 3);
        assert_eq!(host.nodes()[2], ListNode::Text(" | ".to_string()));
        assert_eq!(host.render_line(), "Home › Docs ›  | Api");
    }

    #[test]
    fn empty_container_has_no_crumbs() {
        let host = TextContainer::new(10);
        assert_eq!(host.crumb_count(), 0);
        assert_eq!(host.render_line(), "");
    }

    #[test]
    fn projections_render() {
        let mut host = TextContainer::from_labels(80, ["Home", "Library", "Report"]);
        host.apply(0, Projection::Ellipsized { width: 3 });
        host.apply(1, Projection::Hidden);
        assert_eq!(host.render_line(), "Ho…Report");

        host.apply(1, Projection::Clipped { width: 4 });
        assert_eq!(host.render_line(), "Ho…LibrReport");
    }

    #[test]
    fn apply_out_of_range_is_ignored() {
        let mut host = TextContainer::from_labels(80, ["Home"]);
        host.apply(3, Projection::Hidden);
        assert_eq!(host.projections(), &[Projection::Natural]);
    }

    #[test]
    fn set_width_updates_container_width() {
        let mut host = TextContainer::new(10);
        host.set_width(42);
        assert_eq!(host.container_width(), 42);
        assert_eq!(host.width(), 42);
    }
}
