//! Description lists to attachment fields.

use slackdown_core::Field;

use crate::node::Element;
use crate::service::SlackdownService;

impl SlackdownService {
    /// Convert the first `<dl>` under `element` to attachment fields.
    ///
    /// The n-th `<dt>` is the title and the n-th `<dd>` the value, both
    /// rendered as mrkdwn. A `<dd class="short">` marks the field short.
    /// Unpaired trailing terms or descriptions are skipped. Returns `None`
    /// when there is no `<dl>` or it has no `<dt>`.
    pub fn extract_fields(&self, element: &Element) -> Option<Vec<Field>> {
        let list = element.find("dl")?;

        let titles = list.find_all("dt");
        if titles.is_empty() {
            return None;
        }
        let values = list.find_all("dd");

        let fields = titles
            .into_iter()
            .zip(values)
            .map(|(title, value)| Field {
                title: self.render_element(title),
                value: self.render_element(value),
                short: value.has_class("short"),
            })
            .collect();

        Some(fields)
    }
}

#[cfg(all(test, feature = "html"))]
mod tests {
    use super::*;
    use crate::html::parse_fragment;
    use crate::node::Node;

    fn fields(html: &str) -> Option<Vec<Field>> {
        let root = parse_fragment(html);
        SlackdownService::new().extract_fields(root.as_element().unwrap())
    }

    fn field(title: &str, value: &str, short: bool) -> Field {
        Field {
            title: title.to_string(),
            value: value.to_string(),
            short,
        }
    }

    #[test]
    fn test_no_description_list() {
        assert_eq!(fields("<p>Some text but no list</p>"), None);
    }

    #[test]
    fn test_empty_description_list() {
        assert_eq!(fields("<dl></dl>"), None);
    }

    #[test]
    fn test_description_list_to_fields() {
        let output = fields(
            r#"
            <dl>
              <dt>Title 1</dt>
              <dd>Some list element</dd>
              <dt>Different title</dt>
              <dd>Another list element</dd>
            </dl>"#,
        );
        assert_eq!(
            output,
            Some(vec![
                field("Title 1", "Some list element", false),
                field("Different title", "Another list element", false),
            ])
        );
    }

    #[test]
    fn test_markup_in_titles_and_values() {
        let output = fields("<dl><dt>Title <b>1</b></dt><dd>Some <i>list</i> element</dd></dl>");
        assert_eq!(output, Some(vec![field("Title *1*", "Some _list_ element", false)]));
    }

    #[test]
    fn test_short_fields() {
        let output = fields(r#"<dl><dt>Title 1</dt><dd class="short">Some list element</dd></dl>"#);
        assert_eq!(output, Some(vec![field("Title 1", "Some list element", true)]));
    }

    #[test]
    fn test_only_first_list_is_used() {
        let output = fields(
            r#"
            <dl><dt>Title 1</dt><dd class="short">Some list element</dd></dl>
            <dl><dt>Title 2</dt><dd class="short">Another element</dd></dl>"#,
        )
        .unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].title, "Title 1");
    }

    #[test]
    fn test_unpaired_entries_are_skipped() {
        let output = fields("<dl><dt>A</dt><dd>1</dd><dt>B</dt></dl>").unwrap();
        assert_eq!(output, vec![field("A", "1", false)]);

        let output = fields("<dl><dt>A</dt><dd>1</dd><dd>2</dd></dl>").unwrap();
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn test_hand_built_tree() {
        let dl = Node::element("dl")
            .with_child(Node::element("dt").with_child(Node::text("x & y")))
            .with_child(Node::element("dd").with_child(Node::text("z")));
        let section = Node::element("section").with_child(dl);
        let output = SlackdownService::new().extract_fields(section.as_element().unwrap());
        assert_eq!(output, Some(vec![field("x &amp; y", "z", false)]));
    }
}
